//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ServerConfig, LogConfig)
//! - [`listen`]: Network listener configuration (ListenConfig)
//! - [`limits`]: Connection limits (LimitsConfig)

mod limits;
mod listen;
mod types;

pub use limits::LimitsConfig;
pub use listen::ListenConfig;
pub use types::{Config, ConfigError, LogConfig, LogFormat, ServerConfig};
