//! commstyles — three service communication styles in miniature.
//!
//! - [`rest`]: a REST-style HTTP CRUD service over an in-memory book
//!   collection (the core demo)
//! - [`rpc`]: a remote-method-dispatch server and client stub sharing a
//!   JSON call envelope over one HTTP endpoint
//! - [`dialogue`]: a raw TCP exchange where the server answers from a small
//!   rule table until the peer hangs up
//!
//! Each demo is independent and feature-gated (`rest`, `rpc`, `dialogue`,
//! all on by default). The shared book collection lives in [`BookStore`].

mod store;

pub use store::{Book, BookDraft, BookPatch, BodyError, BookStore, StoreError};

#[cfg(feature = "dialogue")]
pub mod dialogue;
#[cfg(feature = "rest")]
pub mod rest;
#[cfg(feature = "rpc")]
pub mod rpc;
