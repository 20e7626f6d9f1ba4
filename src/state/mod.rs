// State module
// Read-only collections shared by the HTTP handlers

pub mod catalog;
pub mod directory;
pub mod matching;

pub use catalog::{Book, BookFilter, BookId, Catalog, CatalogError};
pub use directory::{Directory, User, UserId};
