//! Client-side stub for the dispatch endpoint.
//!
//! Every method on [`RpcClient`] crosses the network: it serializes the call,
//! POSTs it, and deserializes the reply or surfaces the fault. Nothing here
//! pretends to be a local call; [`CallError`] is the documented contract,
//! with transport failures, bad statuses, and remote faults kept apart.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::envelope::{CallReply, CallRequest};
use super::error::CallError;

/// Stub for a remote [`MethodRegistry`](super::MethodRegistry).
pub struct RpcClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RpcClient {
    /// Point the stub at a server base URL (e.g. `"http://127.0.0.1:9001"`).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/rpc", base_url.trim_end_matches('/')),
        }
    }

    /// Invoke a method by name with positional params.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, CallError> {
        let request = CallRequest::new(method, params);
        tracing::debug!(method, "remote call");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CallError::Status(status.as_u16()));
        }

        let reply: CallReply = response
            .json()
            .await
            .map_err(|err| CallError::Decode(err.to_string()))?;

        if let Some(fault) = reply.fault {
            return Err(CallError::Fault(fault));
        }
        reply
            .result
            .ok_or_else(|| CallError::Decode("reply carried neither result nor fault".to_string()))
    }

    /// Invoke a method and decode the result into a concrete type.
    async fn call_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, CallError> {
        let value = self.call(method, params).await?;
        serde_json::from_value(value).map_err(|err| CallError::Decode(err.to_string()))
    }

    /// `greet(name)` — a personalized greeting from the server.
    pub async fn greet(&self, name: &str) -> Result<String, CallError> {
        self.call_as("greet", vec![Value::from(name)]).await
    }

    /// `add(a, b)`.
    pub async fn add(&self, a: f64, b: f64) -> Result<f64, CallError> {
        self.call_as("add", vec![Value::from(a), Value::from(b)]).await
    }

    /// `multiply(a, b)`.
    pub async fn multiply(&self, a: f64, b: f64) -> Result<f64, CallError> {
        self.call_as("multiply", vec![Value::from(a), Value::from(b)])
            .await
    }

    /// `echo(message)` — the message back, with the server's prefix.
    pub async fn echo(&self, message: &str) -> Result<String, CallError> {
        self.call_as("echo", vec![Value::from(message)]).await
    }

    /// `server_info()` — a mapping describing the server.
    pub async fn server_info(&self) -> Result<Value, CallError> {
        self.call("server_info", vec![]).await
    }

    /// `list_methods()` — sorted names of everything callable.
    pub async fn list_methods(&self) -> Result<Vec<String>, CallError> {
        self.call_as("list_methods", vec![]).await
    }
}
