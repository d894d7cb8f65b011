pub mod api;
pub mod static_files;

use rocket::{Catcher, catchers, routes};

pub fn get_routes() -> Vec<rocket::Route> {
    let mut all_routes = routes![
        api::status,
        api::stats,
        api::list_packages,
        api::get_package,
    ];

    // Static assets and the SPA fallback (lowest priority)
    all_routes.extend(static_files::get_static_routes());
    all_routes
}

/// JSON error bodies for everything under `/api`
pub fn get_api_catchers() -> Vec<Catcher> {
    catchers![api::not_found, api::internal_error]
}
