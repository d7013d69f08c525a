//! Book Store Service — REST-style HTTP CRUD over the in-memory collection.
//!
//! ## Routes
//!
//! - `GET /books` — all records as `{ "<id>": {title, author, price}, ... }`
//! - `GET /books/:id` — one record, 404 if unknown
//! - `POST /books` — create; 201 with `{"message": "Book added", "id": N}`,
//!   400 on a missing field or unusable body
//! - `PUT /books/:id` — partial update; 404 before body validation, 400 on
//!   an empty body
//! - `DELETE /books/:id` — remove; 200 with a confirmation, 404 if unknown
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use commstyles::{rest, BookStore};
//!
//! let store = Arc::new(BookStore::seeded());
//! rest::serve(store, "127.0.0.1:5000").await?;
//! ```

mod error;
mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::store::BookStore;

/// Build the book service router over the given store.
pub fn router(store: Arc<BookStore>) -> Router {
    Router::new()
        .route(
            "/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/books/:id",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .with_state(store)
}

/// Serve the book service at the given address (e.g. `"127.0.0.1:5000"`).
pub async fn serve(store: Arc<BookStore>, addr: &str) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "book service listening");
    axum::serve(listener, app).await
}
