use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::{JsonFileStore, MemoryStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = Arc::new(JsonFileStore::new(config.users_file.clone())) as Arc<dyn UserStore>;
        Ok(Self { config, store })
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn UserStore>) -> Self {
        Self { config, store }
    }

    /// State backed by an in-memory store, for tests.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            users_file: "users.json".into(),
            mongo_uri: None,
        });
        Self::from_parts(config, Arc::new(MemoryStore::default()))
    }
}
