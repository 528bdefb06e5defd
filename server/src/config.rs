//! Server configuration from environment variables.

use despensa_core::StoreConfig;
use std::env;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `DESPENSA_BIND_ADDR`: Listen address (default: "0.0.0.0:3000")
    /// - `DESPENSA_DATA_DIR`: Document directory (see [`StoreConfig::from_env`])
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("DESPENSA_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self {
            bind_addr,
            store: StoreConfig::from_env(),
        }
    }
}
