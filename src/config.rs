use log::info;
use std::env;

pub const DEFAULT_REGISTRY_URL: &str = "https://datakitnpmregistry.datakit.workers.dev";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub host: String,
    pub data_dir: String,
    pub database_url: String,
    /// Base URL of the worker that serves tarballs; never has a trailing `/`.
    pub registry_url: String,
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            data_dir: "./data".to_string(),
            database_url: "./data/npmdeck.db".to_string(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            static_dir: "./web/dist".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("NPMDECK_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .unwrap_or(8000);

        let host = env::var("NPMDECK_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let data_dir = env::var("NPMDECK_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let database_url =
            env::var("NPMDECK_DATABASE_URL").unwrap_or_else(|_| format!("{data_dir}/npmdeck.db"));

        let registry_url = normalize_base_url(
            &env::var("NPMDECK_REGISTRY_URL").unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string()),
        );

        let static_dir = env::var("NPMDECK_STATIC_DIR").unwrap_or_else(|_| "./web/dist".to_string());

        info!("Configuration loaded:");
        info!("  Host: {host}");
        info!("  Port: {port}");
        info!("  Data Directory: {data_dir}");
        info!("  Database URL: {database_url}");
        info!("  Tarball Registry: {registry_url}");
        info!("  Static Assets: {static_dir}");

        Self {
            port,
            host,
            data_dir,
            database_url,
            registry_url,
            static_dir,
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.database_url, "./data/npmdeck.db");
        assert_eq!(config.registry_url, DEFAULT_REGISTRY_URL);
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://registry.example.com/ "),
            "https://registry.example.com"
        );
        assert_eq!(
            normalize_base_url("https://registry.example.com//"),
            "https://registry.example.com"
        );
    }
}
