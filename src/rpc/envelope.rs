//! Wire envelope for remote calls.
//!
//! A request names a method and carries positional JSON arguments; the reply
//! carries either a result value or a structured fault. Faults are part of
//! the envelope: they travel over a successful HTTP exchange and are a
//! different failure class from transport errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An inbound remote call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRequest {
    /// Method name, matched exactly against the registry.
    pub method: String,
    /// Positional arguments.
    #[serde(default)]
    pub params: Vec<Value>,
}

impl CallRequest {
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// Reply to a remote call: exactly one of `result` or `fault`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<Fault>,
}

impl CallReply {
    pub fn ok(result: Value) -> Self {
        Self {
            result: Some(result),
            fault: None,
        }
    }

    pub fn fault(fault: Fault) -> Self {
        Self {
            result: None,
            fault: Some(fault),
        }
    }
}

/// A structured error from the remote side, distinct from transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    pub code: FaultCode,
    pub message: String,
}

impl Fault {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: FaultCode::MethodNotFound,
            message: format!("no method named {}", method),
        }
    }

    pub fn bad_params(message: impl Into<String>) -> Self {
        Self {
            code: FaultCode::BadParams,
            message: message.into(),
        }
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self {
            code: FaultCode::Execution,
            message: message.into(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Fault classification carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultCode {
    /// Dispatch found no handler with this name.
    MethodNotFound,
    /// Arguments did not match what the method expects.
    BadParams,
    /// The method ran and failed.
    Execution,
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultCode::MethodNotFound => write!(f, "method_not_found"),
            FaultCode::BadParams => write!(f, "bad_params"),
            FaultCode::Execution => write!(f, "execution"),
        }
    }
}
