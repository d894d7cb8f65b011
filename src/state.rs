use crate::config::AppConfig;
use crate::database::MetadataStore;
use std::sync::Arc;

pub struct AppState {
    pub config: AppConfig,
    pub database: Arc<dyn MetadataStore>,
}

impl AppState {
    /// The read side every route goes through
    pub fn store(&self) -> &dyn MetadataStore {
        self.database.as_ref()
    }
}
