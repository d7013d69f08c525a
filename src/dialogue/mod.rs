//! Connection-oriented dialogue — a short text exchange over one TCP socket.
//!
//! The server accepts exactly one connection and answers each message from a
//! small rule table (exact phrases, then keyword substrings, then a generic
//! echo carrying the message count). The client sends messages and waits a
//! bounded time for each reply. No framing: one send is one message, one
//! read takes up to [`MAX_MESSAGE`] bytes.
//!
//! ## Example
//!
//! ```ignore
//! use commstyles::dialogue::{DialogueClient, DialogueServer};
//!
//! // Server (accepts one peer, then returns)
//! let server = DialogueServer::bind("127.0.0.1:9000").await?;
//! let summary = server.serve_one().await?;
//!
//! // Client
//! let mut client = DialogueClient::connect("127.0.0.1:9000").await?;
//! let reply = client.exchange("I am Client").await?; // "I am Server"
//! ```

mod client;
mod error;
mod rules;
mod server;

pub use client::{DialogueClient, REPLY_TIMEOUT};
pub use error::DialogueError;
pub use rules::ReplyRules;
pub use server::{DialogueServer, DialogueSummary};

/// Byte ceiling for a single message. One `read` call reads at most this
/// much; anything longer is truncated by the transport, never reassembled.
pub const MAX_MESSAGE: usize = 1024;
