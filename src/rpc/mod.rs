//! Remote method dispatch — named functions callable over one HTTP endpoint.
//!
//! The server side is a [`MethodRegistry`] behind `POST /rpc`; the client
//! side is an explicit [`RpcClient`] stub. Requests and replies travel in a
//! small JSON envelope ([`CallRequest`] / [`CallReply`]), and remote-side
//! failures come back as structured [`Fault`]s, a different class from
//! transport errors.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use commstyles::rpc;
//!
//! // Server
//! let registry = Arc::new(rpc::demo_registry("127.0.0.1:9001"));
//! rpc::serve(registry, "127.0.0.1:9001").await?;
//!
//! // Client
//! let client = rpc::RpcClient::new("http://127.0.0.1:9001");
//! let greeting = client.greet("Ali").await?;
//! ```

mod client;
mod envelope;
mod error;
mod registry;
mod server;

pub use client::RpcClient;
pub use envelope::{CallReply, CallRequest, Fault, FaultCode};
pub use error::{CallError, MethodError};
pub use registry::{demo_registry, MethodRegistry};
pub use server::{router, serve};
