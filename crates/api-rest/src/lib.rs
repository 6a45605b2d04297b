//! # API REST
//!
//! REST API implementation for Bookshelf.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status mapping)
//!
//! The router is exposed as a function so the workspace run binary and the
//! integration tests construct exactly the server that ships.

#![warn(rust_2018_idioms)]

pub mod config;
mod routes;

pub use config::HttpServerConfig;
pub use routes::{router, AppState, DELETE_OK_BODY};
