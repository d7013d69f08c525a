//! Request handlers for the five book operations.
//!
//! Bodies are taken as raw bytes and parsed explicitly, so an absent, empty,
//! or unparseable body lands in the documented "bad request" class instead
//! of whatever the framework's extractor would answer.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Map, Value};

use super::error::ApiError;
use crate::store::{Book, BookDraft, BookPatch, BookStore};

/// `GET /books` — every record, keyed by stringified id.
pub async fn list_books(
    State(store): State<Arc<BookStore>>,
) -> Result<Json<Value>, ApiError> {
    let mut body = Map::new();
    for (id, book) in store.list()? {
        body.insert(id.to_string(), book_json(&book));
    }
    Ok(Json(Value::Object(body)))
}

/// `GET /books/:id` — a one-entry mapping, or 404.
pub async fn get_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    let book = store.get(id)?.ok_or(ApiError::NotFound)?;
    let mut body = Map::new();
    body.insert(id.to_string(), book_json(&book));
    Ok(Json(Value::Object(body)))
}

/// `POST /books` — create a record, answer 201 with the new id.
pub async fn create_book(
    State(store): State<Arc<BookStore>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let value = parse_body(&body)?;
    let draft = BookDraft::from_value(&value)?;
    let id = store.add(draft)?;

    tracing::info!(id, "book added");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Book added", "id": id })),
    ))
}

/// `PUT /books/:id` — partial update. The id check comes before body
/// validation, so an unknown id answers 404 even with a malformed body.
pub async fn update_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<u64>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    if !store.contains(id)? {
        return Err(ApiError::NotFound);
    }

    let value = parse_body(&body)?;
    let patch = BookPatch::from_value(&value)?;
    store.update(id, &patch)?;

    tracing::info!(id, "book updated");
    Ok(Json(json!({ "message": "Book updated", "id": id })))
}

/// `DELETE /books/:id` — remove unconditionally, or 404.
pub async fn delete_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    store.remove(id)?;

    tracing::info!(id, "book deleted");
    Ok(Json(json!({ "message": "Book deleted", "id": id })))
}

fn parse_body(body: &Bytes) -> Result<Value, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest);
    }
    serde_json::from_slice(body).map_err(|_| ApiError::BadRequest)
}

/// Render a record the way the wire format wants it: fields only, the id
/// stays in the enclosing key.
fn book_json(book: &Book) -> Value {
    json!({
        "title": book.title,
        "author": book.author,
        "price": book.price,
    })
}
