/// Shared application state
use crate::config::ServerConfig;
use chainstream_core::StorageContext;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StorageContext>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn StorageContext>, config: Arc<ServerConfig>) -> Self {
        Self { store, config }
    }
}
