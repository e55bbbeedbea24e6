//! Network listener configuration.

use serde::Deserialize;

/// Address used when the config file does not name one.
pub const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1:1201";

/// Network listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Address to bind to (e.g., "127.0.0.1:1201" or "localhost:1201").
    ///
    /// Resolved at startup; only IPv4 results are used.
    #[serde(default = "default_address")]
    pub address: String,
}

fn default_address() -> String {
    DEFAULT_LISTEN_ADDRESS.to_string()
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}
