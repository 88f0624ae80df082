use std::sync::Arc;

use infra::Db;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(db: Db, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
