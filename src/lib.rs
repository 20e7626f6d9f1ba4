//! Books API Library
//!
//! Two small read-only HTTP services over in-memory collections: a book
//! catalog with filtering and search, and a user directory.
//! The binaries are in `src/main.rs` (catalog) and `src/bin/directory.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
/// Read-only collections and the queries over them
pub mod state;
