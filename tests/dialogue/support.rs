//! Shared harness: a dialogue server on an ephemeral port.

use commstyles::dialogue::{DialogueServer, DialogueSummary};
use tokio::task::JoinHandle;

/// Bind to port 0, start serving one connection, and return the address
/// plus the handle resolving to the dialogue summary.
pub async fn start_server() -> (String, JoinHandle<DialogueSummary>) {
    let server = DialogueServer::bind("127.0.0.1:0").await.unwrap();
    let addr = server.local_addr().unwrap().to_string();
    let handle = tokio::spawn(async move { server.serve_one().await.unwrap() });
    (addr, handle)
}
