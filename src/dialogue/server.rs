//! Dialogue server — serves exactly one connection, then returns.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::error::DialogueError;
use super::rules::ReplyRules;
use super::MAX_MESSAGE;

/// What happened over the one connection the server accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueSummary {
    /// Messages received and answered before the peer closed.
    pub messages: u64,
}

/// A bound dialogue endpoint.
///
/// One `read` call is one message, up to [`MAX_MESSAGE`] bytes; longer
/// messages are truncated, not reassembled. A zero-length read means the
/// peer closed and ends the dialogue.
pub struct DialogueServer {
    listener: TcpListener,
    rules: ReplyRules,
}

impl DialogueServer {
    /// Bind the given address (e.g. `"127.0.0.1:9000"`).
    pub async fn bind(addr: &str) -> Result<Self, DialogueError> {
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "dialogue server listening");
        Ok(Self {
            listener,
            rules: ReplyRules::default(),
        })
    }

    /// Replace the default reply rules.
    pub fn with_rules(mut self, rules: ReplyRules) -> Self {
        self.rules = rules;
        self
    }

    /// The actual bound address (useful when binding port 0).
    pub fn local_addr(&self) -> Result<SocketAddr, DialogueError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept one connection, answer messages until the peer closes, and
    /// return a summary. Consumes the server: the demo serves one peer.
    pub async fn serve_one(self) -> Result<DialogueSummary, DialogueError> {
        let (mut stream, peer) = self.listener.accept().await?;
        tracing::info!(%peer, "client connected");

        let mut buf = [0u8; MAX_MESSAGE];
        let mut messages: u64 = 0;

        loop {
            let n = stream.read(&mut buf).await?;
            if n == 0 {
                tracing::info!(%peer, messages, "client closed the connection");
                return Ok(DialogueSummary { messages });
            }

            messages += 1;
            let message = String::from_utf8_lossy(&buf[..n]);
            tracing::debug!(%peer, number = messages, %message, "received");

            let reply = self.rules.reply(&message, messages);
            stream.write_all(reply.as_bytes()).await?;
            tracing::debug!(%peer, number = messages, %reply, "replied");
        }
    }
}
