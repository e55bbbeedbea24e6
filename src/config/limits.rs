//! Connection limits configuration.

use serde::Deserialize;

/// Limits applied by the listener.
///
/// Everything is unbounded unless configured.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of simultaneously served connections.
    /// Connections accepted above the cap are closed immediately.
    #[serde(default)]
    pub max_connections: Option<usize>,
}
