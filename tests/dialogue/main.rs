//! Dialogue integration tests.

mod support;
