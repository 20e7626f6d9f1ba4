//! API module
//!
//! Contains HTTP request handlers for the catalog and directory services

pub mod books;
pub mod catalog;
pub mod fallback;
pub mod users;

pub use books::SharedCatalog;
pub use users::SharedDirectory;
