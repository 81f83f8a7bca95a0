//! Image host backend service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Object storage operations
pub mod media_storage;

/// Route handlers
pub mod routes;

/// HTTP server setup
pub mod server;

/// Application state
pub mod state;

/// Configuration and error handling
pub mod types;
