//! Shared domain types for the Bookshelf system.
//!
//! These are the wire types exchanged between the core service, the REST
//! API, and the client views. Identifiers are decimal strings assigned by
//! the service; the string form is part of the client contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The sole domain entity: a catalogued book.
///
/// Identifiers are owned by the book service. Clients never construct ids;
/// they receive them from list or detail responses, or from a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
}

impl Book {
    /// The unloaded detail-view state: all fields empty until the fetch
    /// for the record resolves.
    pub fn placeholder() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            author: String::new(),
        }
    }
}

/// Create request payload. The service assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}

/// Update request payload. Both fields are applied wholesale to the
/// existing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookPatch {
    pub title: String,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_empty() {
        let book = Book::placeholder();
        assert!(book.id.is_empty());
        assert!(book.title.is_empty());
        assert!(book.author.is_empty());
    }

    #[test]
    fn book_uses_the_wire_field_names() {
        let book: Book = serde_json::from_str(r#"{"id":"1","title":"A","author":"X"}"#)
            .expect("book should deserialize from the wire shape");
        assert_eq!(book.id, "1");
        assert_eq!(book.title, "A");
        assert_eq!(book.author, "X");
    }
}
