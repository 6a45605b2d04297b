//! # Bookshelf Core
//!
//! Core business logic for the Bookshelf book catalog.
//!
//! This crate contains pure data operations over the in-memory store:
//! - Book creation, listing, lookup, update, and deletion
//! - Identifier assignment (a decimal sequence, serialized as strings)
//!
//! **No API concerns**: HTTP servers, serialization formats, or service
//! interfaces belong in `api-rest` and `bookshelf-client`.

mod error;
mod service;
mod store;

pub use error::{BookError, BookResult};
pub use service::BookService;
pub use store::BookStore;
