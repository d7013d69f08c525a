use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use super::book::{Book, BookDraft, BookPatch};
use super::error::StoreError;

/// The shared book collection.
///
/// Reads take the read lock; create/update/delete take the write lock, since
/// the HTTP layer dispatches handlers on multiple worker tasks. The id
/// allocator is monotonic for the life of the process and never hands out a
/// value twice, even after a delete.
pub struct BookStore {
    books: RwLock<HashMap<u64, Book>>,
    next_id: AtomicU64,
}

impl BookStore {
    /// Create an empty store. The first allocated id is 1.
    pub fn new() -> Self {
        BookStore {
            books: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a store with the two fixture records the demo starts with.
    pub fn seeded() -> Self {
        let mut books = HashMap::new();
        books.insert(
            1,
            Book {
                title: "Distributed Systems".to_string(),
                author: "Tanenbaum".to_string(),
                price: 50.0,
            },
        );
        books.insert(
            2,
            Book {
                title: "Clean Code".to_string(),
                author: "Robert C. Martin".to_string(),
                price: 45.0,
            },
        );

        BookStore {
            books: RwLock::new(books),
            next_id: AtomicU64::new(3),
        }
    }

    /// All records, as (id, record) pairs. Order is not significant.
    pub fn list(&self) -> Result<Vec<(u64, Book)>, StoreError> {
        let books = self
            .books
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(books.iter().map(|(id, book)| (*id, book.clone())).collect())
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Result<Option<Book>, StoreError> {
        let books = self
            .books
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(books.get(&id).cloned())
    }

    /// Whether a record with this id exists.
    pub fn contains(&self, id: u64) -> Result<bool, StoreError> {
        let books = self
            .books
            .read()
            .map_err(|_| StoreError::LockPoisoned("contains"))?;
        Ok(books.contains_key(&id))
    }

    /// Insert a new record and return its freshly allocated id.
    pub fn add(&self, draft: BookDraft) -> Result<u64, StoreError> {
        let mut books = self
            .books
            .write()
            .map_err(|_| StoreError::LockPoisoned("add"))?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        books.insert(id, draft.into());
        Ok(id)
    }

    /// Overwrite the supplied fields of an existing record.
    pub fn update(&self, id: u64, patch: &BookPatch) -> Result<(), StoreError> {
        let mut books = self
            .books
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;
        let book = books.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply_to(book);
        Ok(())
    }

    /// Remove a record. The id is never reissued.
    pub fn remove(&self, id: u64) -> Result<(), StoreError> {
        let mut books = self
            .books
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;
        books.remove(&id).ok_or(StoreError::NotFound(id))?;
        Ok(())
    }

    /// Number of records in the collection.
    pub fn len(&self) -> Result<usize, StoreError> {
        let books = self
            .books
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(books.len())
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
