//! Error taxonomy for the book service HTTP layer.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::{BodyError, StoreError};

/// Failure classes surfaced to HTTP callers.
///
/// All failure responses are empty-bodied; the status code is the contract.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown id.
    NotFound,
    /// Missing required field, or an absent/empty/unparseable body.
    BadRequest,
    /// A field that was present but unusable (non-numeric price).
    Unprocessable,
    /// Store failure that is no fault of the caller.
    Internal(String),
}

impl ApiError {
    /// Map this error to its HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "not found"),
            ApiError::BadRequest => write!(f, "bad request"),
            ApiError::Unprocessable => write!(f, "unprocessable input"),
            ApiError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::LockPoisoned(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<BodyError> for ApiError {
    fn from(err: BodyError) -> Self {
        match err {
            BodyError::InvalidPrice => ApiError::Unprocessable,
            _ => ApiError::BadRequest,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(msg) = &self {
            tracing::error!("book service internal error: {}", msg);
        }
        self.status_code().into_response()
    }
}
