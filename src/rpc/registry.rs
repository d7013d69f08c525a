//! Method registry — the name-indexed dispatch table.
//!
//! A handler takes the positional params and returns a JSON value or a
//! [`MethodError`]. Dispatch is by exact name; an unregistered name becomes
//! a `method_not_found` fault rather than an error on the server side.
//!
//! ## Example
//!
//! ```ignore
//! use commstyles::rpc::MethodRegistry;
//! use serde_json::json;
//!
//! let registry = MethodRegistry::new()
//!     .method("ping", |_params| Ok(json!("pong")));
//!
//! let reply = registry.dispatch(&CallRequest::new("ping", vec![]));
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};

use super::envelope::{CallReply, CallRequest, Fault};
use super::error::MethodError;

/// Name of the built-in introspection method.
const INTROSPECT: &str = "list_methods";

type Handler = Box<dyn Fn(&[Value]) -> Result<Value, MethodError> + Send + Sync>;

/// A set of named, remotely callable functions.
pub struct MethodRegistry {
    methods: HashMap<String, Handler>,
    calls: Arc<AtomicU64>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register a method handler. Builder-style, returns `self` for chaining.
    pub fn method<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, MethodError> + Send + Sync + 'static,
    {
        self.methods.insert(name.to_string(), Box::new(handler));
        self
    }

    /// The process-lifetime call counter, shared so handlers (`server_info`)
    /// can report it.
    pub fn call_counter(&self) -> Arc<AtomicU64> {
        self.calls.clone()
    }

    /// Calls dispatched to a registered method so far.
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Sorted method names, including the introspection built-in.
    pub fn method_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.methods.keys().cloned().collect();
        if !self.methods.contains_key(INTROSPECT) {
            names.push(INTROSPECT.to_string());
        }
        names.sort();
        names
    }

    /// Dispatch one call. Never panics: unknown names and handler failures
    /// both come back as faults in the reply.
    ///
    /// `list_methods` is a server built-in (it answers the registered names)
    /// unless a handler with that name was explicitly registered.
    pub fn dispatch(&self, request: &CallRequest) -> CallReply {
        if let Some(handler) = self.methods.get(&request.method) {
            self.calls.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(method = %request.method, params = request.params.len(), "dispatching call");
            match handler(&request.params) {
                Ok(value) => CallReply::ok(value),
                Err(err) => {
                    tracing::warn!(method = %request.method, %err, "method faulted");
                    CallReply::fault(err.into_fault())
                }
            }
        } else if request.method == INTROSPECT {
            self.calls.fetch_add(1, Ordering::Relaxed);
            CallReply::ok(json!(self.method_names()))
        } else {
            tracing::warn!(method = %request.method, "unknown method");
            CallReply::fault(Fault::method_not_found(&request.method))
        }
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The demo method set: a greeting, two arithmetic functions, an echo, and
/// server introspection.
pub fn demo_registry(addr: &str) -> MethodRegistry {
    let registry = MethodRegistry::new();
    let calls = registry.call_counter();
    let addr = addr.to_string();

    registry
        .method("greet", |params| {
            let name = str_param(params, 0, "name")?;
            Ok(json!(format!("Hello {}, this is the server!", name)))
        })
        .method("add", |params| {
            let a = num_param(params, 0, "a")?;
            let b = num_param(params, 1, "b")?;
            Ok(json!(a + b))
        })
        .method("multiply", |params| {
            let a = num_param(params, 0, "a")?;
            let b = num_param(params, 1, "b")?;
            Ok(json!(a * b))
        })
        .method("echo", |params| {
            let message = str_param(params, 0, "message")?;
            Ok(json!(format!("Server echoes: {}", message)))
        })
        .method("server_info", move |_params| {
            Ok(json!({
                "server_type": "commstyles-rpc",
                "addr": addr,
                "total_requests": calls.load(Ordering::Relaxed),
            }))
        })
}

fn str_param<'a>(params: &'a [Value], index: usize, name: &str) -> Result<&'a str, MethodError> {
    params
        .get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| MethodError::BadParams(format!("param {} ({}) must be a string", index, name)))
}

fn num_param(params: &[Value], index: usize, name: &str) -> Result<f64, MethodError> {
    params
        .get(index)
        .and_then(Value::as_f64)
        .ok_or_else(|| MethodError::BadParams(format!("param {} ({}) must be a number", index, name)))
}
