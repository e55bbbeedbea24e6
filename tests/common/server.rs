//! Test server management.
//!
//! `TestServer` runs a gateway in-process on an ephemeral port;
//! `ProcessServer` spawns the `cmdsrv` binary with a generated config file.

use cmdsrv::handlers::{AddHandler, EchoHandler};
use cmdsrv::{Gateway, Server};
use cmdsrv_proto::Dialect;
use std::net::SocketAddr;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use super::client::TestClient;

/// An in-process test server instance.
pub struct TestServer {
    addr: SocketAddr,
    dialect: Dialect,
    task: JoinHandle<()>,
}

impl TestServer {
    /// Spawn a server speaking `dialect`, with `echo` and `add` registered.
    pub async fn spawn(dialect: Dialect) -> anyhow::Result<Self> {
        let mut server = Server::with_dialect(1, 0, dialect);
        server.handle("echo", EchoHandler).handle("add", AddHandler);
        Self::spawn_with(server).await
    }

    /// Spawn a pre-built server.
    pub async fn spawn_with(server: Server) -> anyhow::Result<Self> {
        let dialect = server.dialect();
        let gateway = Gateway::bind("127.0.0.1:0", Arc::new(server)).await?;
        let addr = gateway.local_addr()?;
        let task = tokio::spawn(gateway.run());
        Ok(Self {
            addr,
            dialect,
            task,
        })
    }

    /// Get the server address.
    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    /// Create a new test client connected to this server.
    pub async fn connect(&self) -> anyhow::Result<TestClient> {
        TestClient::connect(&self.address(), self.dialect).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A `cmdsrv` binary running as a child process.
pub struct ProcessServer {
    child: Child,
    port: u16,
}

impl ProcessServer {
    /// Start the binary with `config_path` and wait until it accepts connections.
    pub async fn spawn(config_path: &Path, port: u16) -> anyhow::Result<Self> {
        let child = Command::new(env!("CARGO_BIN_EXE_cmdsrv"))
            .arg(config_path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let server = Self { child, port };
        server.wait_until_ready().await?;
        Ok(server)
    }

    /// Wait until the server is accepting connections.
    async fn wait_until_ready(&self) -> anyhow::Result<()> {
        for _ in 0..50 {
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                return Ok(());
            }
            sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("Server failed to start within 5 seconds")
    }

    /// Get the server address.
    pub fn address(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

impl Drop for ProcessServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Reserve a free local port by binding and releasing it.
pub fn free_port() -> anyhow::Result<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}
