//! Error types for the dispatch server and the client stub.

use std::fmt;

use super::envelope::Fault;

/// Error returned by a registered method's handler.
///
/// Converted to a [`Fault`] before it reaches the wire, so a failing method
/// never takes the server down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodError {
    /// The positional arguments did not match the method's signature.
    BadParams(String),
    /// The method ran and failed.
    Execution(String),
}

impl MethodError {
    pub fn into_fault(self) -> Fault {
        match self {
            MethodError::BadParams(message) => Fault::bad_params(message),
            MethodError::Execution(message) => Fault::execution(message),
        }
    }
}

impl fmt::Display for MethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodError::BadParams(message) => write!(f, "bad params: {}", message),
            MethodError::Execution(message) => write!(f, "execution failed: {}", message),
        }
    }
}

impl std::error::Error for MethodError {}

/// Error surfaced by [`RpcClient`](super::RpcClient) calls.
///
/// Keeps the failure classes apart: a `Fault` decoded from the reply
/// is a remote execution failure; everything else means the exchange itself
/// broke down.
#[derive(Debug)]
pub enum CallError {
    /// The request never completed (refused, reset, timed out).
    Transport(reqwest::Error),
    /// The server answered with a non-success HTTP status.
    Status(u16),
    /// The remote side returned a structured fault.
    Fault(Fault),
    /// The reply parsed but did not carry a usable result.
    Decode(String),
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::Transport(err) => write!(f, "transport error: {}", err),
            CallError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            CallError::Fault(fault) => write!(f, "remote fault: {}", fault),
            CallError::Decode(message) => write!(f, "could not decode reply: {}", message),
        }
    }
}

impl std::error::Error for CallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CallError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CallError {
    fn from(err: reqwest::Error) -> Self {
        CallError::Transport(err)
    }
}
