//! In-memory book storage.
//!
//! The store is the only stateful piece of the system. It is cheaply
//! cloneable and safe to share across request handlers; every clone sees
//! the same records. Nothing is persisted: the catalog lives and dies with
//! the process.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use bookshelf_types::Book;

struct Inner {
    books: BTreeMap<u64, Book>,
    next_id: u64,
}

/// Shared in-memory map from id to [`Book`] plus the id sequence.
///
/// Identifiers ascend from 1 and are never reused within a process
/// lifetime, so a deleted id stays dead.
#[derive(Clone)]
pub struct BookStore {
    inner: Arc<Mutex<Inner>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                books: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Insert a record under the next id in the sequence.
    pub fn insert(&self, title: String, author: String) -> Book {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let book = Book {
            id: id.to_string(),
            title,
            author,
        };
        inner.books.insert(id, book.clone());
        book
    }

    /// All records in ascending id order.
    pub fn all(&self) -> Vec<Book> {
        self.lock().books.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<Book> {
        self.lock().books.get(&id).cloned()
    }

    /// Overwrite the record's title and author, returning the updated
    /// record, or `None` when the id is absent.
    pub fn replace(&self, id: u64, title: String, author: String) -> Option<Book> {
        let mut inner = self.lock();
        let book = inner.books.get_mut(&id)?;
        book.title = title;
        book.author = author;
        Some(book.clone())
    }

    /// Remove the record. `false` when the id is absent.
    pub fn remove(&self, id: u64) -> bool {
        self.lock().books.remove(&id).is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // No mutation leaves a record half-written, poisoned or not.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
