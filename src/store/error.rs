use std::fmt;

/// Error type for book store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this id in the collection.
    NotFound(u64),
    /// A lock guarding the collection was poisoned by a panicking writer.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "book {} not found", id),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
