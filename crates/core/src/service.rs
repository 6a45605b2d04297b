//! Book catalog operations.
//!
//! `BookService` is the single entry point for catalog mutations and
//! lookups. It owns identifier parsing: ids arrive as strings from routes
//! and wire payloads, and every operation resolves them against the store.
//!
//! ## Pure Data Operations
//!
//! This module contains **only** data operations. HTTP status mapping,
//! response bodies, and serialization belong in `api-rest`.

use bookshelf_types::{Book, BookPatch, NewBook};

use crate::error::{BookError, BookResult};
use crate::store::BookStore;

/// Service for managing the book catalog.
///
/// Cloning is cheap and every clone operates on the same shared store.
#[derive(Clone, Default)]
pub struct BookService {
    store: BookStore,
}

impl BookService {
    /// Creates a service over a fresh, empty store.
    pub fn new() -> Self {
        Self {
            store: BookStore::new(),
        }
    }

    /// Creates a record with the next id in the sequence.
    pub fn save(&self, book: NewBook) -> Book {
        let saved = self.store.insert(book.title, book.author);
        tracing::debug!(id = %saved.id, "saved book");
        saved
    }

    /// All records in ascending id order.
    pub fn find_all(&self) -> Vec<Book> {
        self.store.all()
    }

    /// Looks up one record by its string id.
    ///
    /// # Errors
    /// * `BookError::InvalidId` - the id is not a decimal number
    /// * `BookError::NotFound` - no record exists under the id
    pub fn find_by_id(&self, id: &str) -> BookResult<Book> {
        let key = parse_id(id)?;
        self.store
            .get(key)
            .ok_or_else(|| BookError::NotFound(id.to_owned()))
    }

    /// Overwrites the record's title and author, returning the updated
    /// record.
    ///
    /// # Errors
    /// * `BookError::InvalidId` - the id is not a decimal number
    /// * `BookError::NotFound` - no record exists under the id
    pub fn update(&self, id: &str, patch: BookPatch) -> BookResult<Book> {
        let key = parse_id(id)?;
        let updated = self
            .store
            .replace(key, patch.title, patch.author)
            .ok_or_else(|| BookError::NotFound(id.to_owned()))?;
        tracing::debug!(id = %updated.id, "updated book");
        Ok(updated)
    }

    /// Removes the record.
    ///
    /// # Errors
    /// * `BookError::InvalidId` - the id is not a decimal number
    /// * `BookError::NotFound` - no record exists under the id
    pub fn delete(&self, id: &str) -> BookResult<()> {
        let key = parse_id(id)?;
        if !self.store.remove(key) {
            return Err(BookError::NotFound(id.to_owned()));
        }
        tracing::debug!(id, "deleted book");
        Ok(())
    }
}

fn parse_id(id: &str) -> BookResult<u64> {
    id.parse()
        .map_err(|_| BookError::InvalidId(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_service() -> BookService {
        let service = BookService::new();
        service.save(NewBook {
            title: "Spring in Action".into(),
            author: "cms".into(),
        });
        service.save(NewBook {
            title: "React in Action".into(),
            author: "cms".into(),
        });
        service
    }

    #[test]
    fn save_assigns_ascending_string_ids() {
        let service = BookService::new();
        let first = service.save(NewBook {
            title: "A".into(),
            author: "X".into(),
        });
        let second = service.save(NewBook {
            title: "B".into(),
            author: "Y".into(),
        });

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
    }

    #[test]
    fn find_all_lists_records_in_id_order() {
        let service = seeded_service();
        let books = service.find_all();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, "1");
        assert_eq!(books[0].title, "Spring in Action");
        assert_eq!(books[1].id, "2");
    }

    #[test]
    fn find_by_id_returns_the_record() {
        let service = seeded_service();
        let book = service.find_by_id("2").expect("book 2 should exist");
        assert_eq!(book.title, "React in Action");
        assert_eq!(book.author, "cms");
    }

    #[test]
    fn find_by_id_rejects_unknown_and_malformed_ids() {
        let service = seeded_service();

        let err = service.find_by_id("99").expect_err("expected missing id");
        assert!(matches!(err, BookError::NotFound(_)));

        let err = service.find_by_id("abc").expect_err("expected bad id");
        assert!(matches!(err, BookError::InvalidId(_)));
    }

    #[test]
    fn update_overwrites_title_and_author() {
        let service = seeded_service();
        let updated = service
            .update(
                "1",
                BookPatch {
                    title: "JUnit in Action".into(),
                    author: "kent".into(),
                },
            )
            .expect("update of book 1 should succeed");

        assert_eq!(updated.id, "1");
        assert_eq!(updated.title, "JUnit in Action");
        assert_eq!(updated.author, "kent");
        assert_eq!(
            service.find_by_id("1").expect("book 1 should exist").title,
            "JUnit in Action"
        );
    }

    #[test]
    fn update_of_unknown_id_is_not_found() {
        let service = seeded_service();
        let err = service
            .update(
                "99",
                BookPatch {
                    title: "T".into(),
                    author: "A".into(),
                },
            )
            .expect_err("expected missing id");
        assert!(matches!(err, BookError::NotFound(_)));
    }

    #[test]
    fn delete_removes_the_record() {
        let service = seeded_service();
        service.delete("1").expect("delete of book 1 should succeed");

        assert!(matches!(
            service.find_by_id("1"),
            Err(BookError::NotFound(_))
        ));
        assert_eq!(service.find_all().len(), 1);
    }

    #[test]
    fn delete_of_unknown_id_is_not_found() {
        let service = seeded_service();
        let err = service.delete("99").expect_err("expected missing id");
        assert!(matches!(err, BookError::NotFound(_)));
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let service = seeded_service();
        service.delete("2").expect("delete of book 2 should succeed");

        let next = service.save(NewBook {
            title: "C".into(),
            author: "Z".into(),
        });
        assert_eq!(next.id, "3");
    }
}
