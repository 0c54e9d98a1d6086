use crate::config::ServerConfig;
use connect4_core::engine::config::EngineConfig;
use std::sync::Arc;
use tokio::sync::Semaphore;

pub struct AppState {
    pub engine_config: Arc<EngineConfig>,
    /// Caps CPU-bound searches running on the blocking pool.
    pub search_slots: Arc<Semaphore>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            engine_config: Arc::new(config.engine.clone()),
            search_slots: Arc::new(Semaphore::new(config.max_concurrent_searches)),
        }
    }
}
