use anyhow::Context;
use connect4_core::engine::config::EngineConfig;
use connect4_core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Path of an optional JSON config file.
pub const CONFIG_ENV: &str = "CONNECT4_CONFIG";
/// Overrides `bind_addr`, e.g. `127.0.0.1:8080`.
pub const BIND_ENV: &str = "CONNECT4_BIND";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Built single-page client, served with `index.html` fallback.
    pub static_dir: Option<PathBuf>,
    pub max_concurrent_searches: usize,
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: None,
            max_concurrent_searches: std::thread::available_parallelism()
                .map_or(1, NonZeroUsize::get),
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_searches == 0 {
            return Err(ConfigError::Validation(
                "max_concurrent_searches must be > 0".into(),
            ));
        }
        self.engine.validate()
    }

    /// Reads `CONNECT4_CONFIG` if set, then applies `CONNECT4_BIND`.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.to_string_lossy()))?;
                Self::load_from_json(&text)
                    .with_context(|| format!("invalid config in {}", path.to_string_lossy()))?
            }
            None => Self::default(),
        };

        if let Ok(bind) = std::env::var(BIND_ENV) {
            config.bind_addr = bind
                .parse()
                .with_context(|| format!("{BIND_ENV}={bind} is not a socket address"))?;
        }
        Ok(config)
    }
}
