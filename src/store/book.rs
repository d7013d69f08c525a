//! Book record plus the validated create/update inputs.
//!
//! Request bodies arrive as raw JSON and are decoded here before the store
//! is touched. `BookDraft` requires all three fields; `BookPatch` takes any
//! subset. The record's id is the collection key, so no body field can ever
//! change it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored book record. The id lives outside the record, as the map key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// Validated input for creating a book. All fields required.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// Partial update — only supplied fields are overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<f64>,
}

/// Why a request body failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyError {
    /// Body was absent, unparseable, or not a JSON object.
    NotAnObject,
    /// Body parsed but the object was empty.
    Empty,
    /// A required field is missing from the object.
    MissingField(&'static str),
    /// A field is present but not a string.
    InvalidField(&'static str),
    /// `price` is present but not coercible to a non-negative number.
    InvalidPrice,
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::NotAnObject => write!(f, "body is not a JSON object"),
            BodyError::Empty => write!(f, "body is empty"),
            BodyError::MissingField(name) => write!(f, "missing required field: {}", name),
            BodyError::InvalidField(name) => write!(f, "field {} must be a string", name),
            BodyError::InvalidPrice => write!(f, "price must be a non-negative number"),
        }
    }
}

impl std::error::Error for BodyError {}

impl BookDraft {
    /// Decode a create body. Field presence is checked before types, so a
    /// missing field always reports as missing even if others are malformed.
    pub fn from_value(value: &Value) -> Result<Self, BodyError> {
        let object = value.as_object().ok_or(BodyError::NotAnObject)?;

        for field in ["title", "author", "price"] {
            if !object.contains_key(field) {
                return Err(BodyError::MissingField(field));
            }
        }

        let title = string_field(&object["title"], "title")?;
        let author = string_field(&object["author"], "author")?;
        let price = coerce_price(&object["price"])?;

        Ok(Self { title, author, price })
    }
}

impl From<BookDraft> for Book {
    fn from(draft: BookDraft) -> Self {
        Book {
            title: draft.title,
            author: draft.author,
            price: draft.price,
        }
    }
}

impl BookPatch {
    /// Decode an update body. An empty object is rejected; an object naming
    /// none of the known fields decodes to an all-`None` patch (a no-op).
    pub fn from_value(value: &Value) -> Result<Self, BodyError> {
        let object = value.as_object().ok_or(BodyError::NotAnObject)?;
        if object.is_empty() {
            return Err(BodyError::Empty);
        }

        let mut patch = BookPatch::default();
        if let Some(title) = object.get("title") {
            patch.title = Some(string_field(title, "title")?);
        }
        if let Some(author) = object.get("author") {
            patch.author = Some(string_field(author, "author")?);
        }
        if let Some(price) = object.get("price") {
            patch.price = Some(coerce_price(price)?);
        }
        Ok(patch)
    }

    /// Overwrite only the supplied fields.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(price) = self.price {
            book.price = price;
        }
    }
}

fn string_field(value: &Value, name: &'static str) -> Result<String, BodyError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or(BodyError::InvalidField(name))
}

/// Coerce a JSON value to a price. Accepts numbers and numeric strings
/// (the shape clients actually send); anything else, and negative or
/// non-finite values, is rejected rather than stored.
fn coerce_price(value: &Value) -> Result<f64, BodyError> {
    let price = match value {
        Value::Number(n) => n.as_f64().ok_or(BodyError::InvalidPrice)?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| BodyError::InvalidPrice)?,
        _ => return Err(BodyError::InvalidPrice),
    };

    if !price.is_finite() || price < 0.0 {
        return Err(BodyError::InvalidPrice);
    }
    Ok(price)
}
