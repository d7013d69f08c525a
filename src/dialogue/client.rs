//! Dialogue client — send a message, wait (bounded) for the reply.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use super::error::DialogueError;
use super::MAX_MESSAGE;

/// How long to wait for a reply before treating the peer as unresponsive.
pub const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

/// One side of a dialogue over a connected socket.
pub struct DialogueClient {
    stream: TcpStream,
    reply_timeout: Duration,
}

impl DialogueClient {
    /// Connect to a dialogue server (e.g. `"127.0.0.1:9000"`).
    pub async fn connect(addr: &str) -> Result<Self, DialogueError> {
        let stream = TcpStream::connect(addr).await?;
        tracing::info!(%addr, "connected");
        Ok(Self {
            stream,
            reply_timeout: REPLY_TIMEOUT,
        })
    }

    /// Replace the default reply timeout.
    pub fn with_reply_timeout(mut self, reply_timeout: Duration) -> Self {
        self.reply_timeout = reply_timeout;
        self
    }

    /// Send one message and wait for the reply.
    ///
    /// Each send is one logical message; each receive is one `read` call of
    /// up to [`MAX_MESSAGE`] bytes. Keep messages under the ceiling; longer
    /// ones arrive truncated on the other side.
    pub async fn exchange(&mut self, message: &str) -> Result<String, DialogueError> {
        self.stream.write_all(message.as_bytes()).await?;
        tracing::debug!(%message, "sent");

        let mut buf = [0u8; MAX_MESSAGE];
        let n = match timeout(self.reply_timeout, self.stream.read(&mut buf)).await {
            Ok(read) => read?,
            Err(_) => return Err(DialogueError::Timeout),
        };
        if n == 0 {
            return Err(DialogueError::ConnectionClosed);
        }

        let reply = String::from_utf8_lossy(&buf[..n]).into_owned();
        tracing::debug!(%reply, "received");
        Ok(reply)
    }
}
