//! The command server: version identity, response dialect and the handler
//! registry, shared read-only by every connection once serving starts.

use crate::config::{Config, LimitsConfig};
use crate::handlers::{Handler, Registry};
use crate::network::Gateway;
use cmdsrv_proto::Dialect;
use std::fmt;
use std::sync::Arc;
use tracing::error;

/// Server version reported by the `version` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    /// Major version number.
    pub major: u32,
    /// Minor version number.
    pub minor: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A command server.
///
/// Commands are registered with [`Server::handle`] while the server is still
/// exclusively owned. [`Server::listen_and_serve`] and [`Gateway::bind`] take
/// ownership and share it behind an `Arc`, which freezes the registry.
pub struct Server {
    version: Version,
    dialect: Dialect,
    limits: LimitsConfig,
    registry: Registry,
}

impl Server {
    /// Create a plain-dialect server with the built-in commands registered.
    pub fn new(major: u32, minor: u32) -> Self {
        Self::with_dialect(major, minor, Dialect::Plain)
    }

    /// Create a server speaking `dialect`, with its built-in commands registered.
    pub fn with_dialect(major: u32, minor: u32, dialect: Dialect) -> Self {
        Self {
            version: Version { major, minor },
            dialect,
            limits: LimitsConfig::default(),
            registry: Registry::with_builtins(dialect),
        }
    }

    /// Create a server from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut server = Self::with_dialect(
            config.server.version_major,
            config.server.version_minor,
            config.server.dialect,
        );
        server.limits = config.limits;
        server
    }

    /// Register `handler` for the command `name`, replacing any existing one.
    pub fn handle<H: Handler + 'static>(&mut self, name: impl Into<String>, handler: H) -> &mut Self {
        self.registry.register(name, handler);
        self
    }

    /// Replace the connection limits.
    pub fn set_limits(&mut self, limits: LimitsConfig) -> &mut Self {
        self.limits = limits;
        self
    }

    /// Version reported to clients.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Response dialect.
    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Connection limits applied by the listener.
    #[inline]
    pub fn limits(&self) -> LimitsConfig {
        self.limits
    }

    /// The command registry.
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Bind `address` and serve connections until the process exits.
    ///
    /// Failing to resolve or bind the address is fatal: the error is printed
    /// to stderr and the process exits with status 1.
    pub async fn listen_and_serve(self, address: &str) {
        let gateway = match Gateway::bind(address, Arc::new(self)).await {
            Ok(gateway) => gateway,
            Err(e) => {
                error!(%address, error = %e, "Failed to start listener");
                eprintln!("Fatal error: {e}");
                std::process::exit(1);
            }
        };
        gateway.run().await
    }
}
