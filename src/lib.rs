pub mod client;
pub mod config;
pub mod database;
pub mod error;
pub mod fairings;
pub mod models;
pub mod presentation;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;

use rocket::Config;
use rocket_cors::{AllowedOrigins, CorsOptions};
use std::error::Error;
use std::net::IpAddr;
use std::sync::Arc;

pub use client::{ClientError, RegistryClient};
pub use config::AppConfig;
pub use database::{DatabaseService, MetadataStore};
pub use fairings::RequestLogger;
pub use state::AppState;

pub fn create_rocket() -> Result<rocket::Rocket<rocket::Build>, Box<dyn Error>> {
    // Load configuration from environment
    let config = AppConfig::from_env();

    let database = Arc::new(DatabaseService::new(&config.database_url)?);

    build_rocket(config, database)
}

/// Assembles the server around an already opened metadata store
pub fn build_rocket(
    config: AppConfig,
    database: Arc<dyn MetadataStore>,
) -> Result<rocket::Rocket<rocket::Build>, Box<dyn Error>> {
    // The dashboard may be served from a dev server on another origin
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .to_cors()?;

    let rocket_config = Config {
        port: config.port,
        address: config.host.parse::<IpAddr>()?,
        ..Config::default()
    };

    let state = AppState { config, database };

    Ok(rocket::custom(&rocket_config)
        .manage(state)
        .attach(cors)
        .attach(RequestLogger)
        .mount("/", routes::get_routes())
        .register("/api", routes::get_api_catchers()))
}
