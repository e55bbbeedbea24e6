//! Test client.
//!
//! Sends raw command lines and decodes replies with the dialect's codec.

use cmdsrv_proto::{Dialect, Reply, ReplyCodec};
use futures_util::StreamExt;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;
use tokio_util::codec::FramedRead;

/// A test client.
pub struct TestClient {
    reader: FramedRead<OwnedReadHalf, ReplyCodec>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    /// Connect to a test server speaking `dialect`.
    pub async fn connect(address: &str, dialect: Dialect) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;
        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            reader: FramedRead::new(read_half, ReplyCodec::new(dialect)),
            writer: write_half,
        })
    }

    /// Send raw bytes exactly as given.
    pub async fn send_raw(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Send a command line, newline-terminated.
    pub async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        let mut data = line.as_bytes().to_vec();
        if !line.ends_with('\n') {
            data.push(b'\n');
        }
        self.send_raw(&data).await
    }

    /// Receive a single reply.
    pub async fn recv(&mut self) -> anyhow::Result<Reply> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive a reply with a timeout.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<Reply> {
        match timeout(dur, self.reader.next()).await? {
            Some(reply) => Ok(reply?),
            None => anyhow::bail!("connection closed"),
        }
    }

    /// Receive `n` plain-dialect lines.
    pub async fn recv_lines(&mut self, n: usize) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::with_capacity(n);
        for _ in 0..n {
            match self.recv().await? {
                Reply::Line(line) => lines.push(line),
                other => anyhow::bail!("expected a line, got {other:?}"),
            }
        }
        Ok(lines)
    }

    /// Send a command and receive one reply.
    pub async fn request(&mut self, line: &str) -> anyhow::Result<Reply> {
        self.send(line).await?;
        self.recv().await
    }

    /// Assert that the server closes the connection without sending anything.
    pub async fn expect_closed(&mut self) -> anyhow::Result<()> {
        match timeout(Duration::from_secs(5), self.reader.next()).await? {
            None => Ok(()),
            // A reset is also a close.
            Some(Err(cmdsrv_proto::ProtocolError::Io(_))) => Ok(()),
            Some(other) => anyhow::bail!("expected end of stream, got {other:?}"),
        }
    }

    /// Assert that nothing arrives within `dur`.
    pub async fn expect_silence(&mut self, dur: Duration) -> anyhow::Result<()> {
        match timeout(dur, self.reader.next()).await {
            Err(_elapsed) => Ok(()),
            Ok(other) => anyhow::bail!("expected silence, got {other:?}"),
        }
    }
}
