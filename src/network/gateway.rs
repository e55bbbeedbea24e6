//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds to an IPv4 socket and spawns one Connection task per
//! accepted client. Tasks share nothing but the frozen `Server`.

use crate::error::ListenError;
use crate::network::Connection;
use crate::network::limit::ConnectionLimiter;
use crate::server::Server;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, lookup_host};
use tracing::{error, info, instrument, warn};

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    server: Arc<Server>,
    limiter: Option<ConnectionLimiter>,
}

impl Gateway {
    /// Resolve `address` and bind the listener to its first IPv4 address.
    pub async fn bind(address: &str, server: Arc<Server>) -> Result<Self, ListenError> {
        let addr = resolve_ipv4(address).await?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ListenError::Bind { addr, source })?;

        let limiter = server.limits().max_connections.map(ConnectionLimiter::new);
        info!(
            %addr,
            dialect = %server.dialect(),
            version = %server.version(),
            commands = server.registry().len(),
            max_connections = ?limiter.as_ref().map(ConnectionLimiter::capacity),
            "Listener bound"
        );

        Ok(Self {
            listener,
            server,
            limiter,
        })
    }

    /// Address the listener is actually bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Run the gateway, accepting connections forever.
    ///
    /// Accept errors are logged and the loop carries on.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let permit = match &self.limiter {
                        Some(limiter) => match limiter.try_acquire() {
                            Some(permit) => Some(permit),
                            None => {
                                warn!(
                                    %addr,
                                    limit = limiter.capacity(),
                                    "Connection limit reached - rejecting"
                                );
                                drop(stream);
                                continue;
                            }
                        },
                        None => None,
                    };

                    info!(%addr, "Connection accepted");

                    let server = Arc::clone(&self.server);
                    tokio::spawn(async move {
                        let _permit = permit;
                        Connection::new(stream, addr, server).run().await;
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}

/// Resolve `address` ("host:port") to its first IPv4 socket address.
async fn resolve_ipv4(address: &str) -> Result<SocketAddr, ListenError> {
    let mut addrs = lookup_host(address)
        .await
        .map_err(|source| ListenError::Resolve {
            address: address.to_string(),
            source,
        })?;
    addrs
        .find(SocketAddr::is_ipv4)
        .ok_or_else(|| ListenError::NoIpv4Address(address.to_string()))
}
