//! # Bookshelf Client
//!
//! The page-level views of the book catalog, written against the Bookshelf
//! REST API:
//!
//! - [`ListView`]: fetches the collection on mount and renders one summary
//!   row per record.
//! - [`DetailView`]: fetches a single record on mount; offers an update
//!   action (pure navigation to the update form) and a delete action
//!   (issues the DELETE, navigates home on the `"ok"` body, alerts
//!   otherwise).
//!
//! Routing and the alert surface are external collaborators, modelled as
//! the [`Navigator`] and [`AlertSink`] traits. The shell embedding these
//! views (CLI, tests) decides what navigation and alerts mean.

#![warn(rust_2018_idioms)]

pub mod api;
pub mod config;
mod error;
pub mod route;
pub mod views;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use route::{AlertSink, Navigator, Route};
pub use views::{BookItem, DetailView, ListView, DELETE_FAILED_ALERT};
