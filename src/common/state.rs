use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;

/// Shared by every handler. The connection pool is the only cross-request resource.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
