//! Book API handlers
//!
//! Contains HTTP request handlers for listing, looking up and searching
//! books. List-shaped responses are wrapped in an envelope with a `total`
//! count; single-book responses are returned bare.

use crate::error::AppError;
use crate::state::{Book, BookFilter, Catalog};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared, read-only catalog handed to every handler
pub type SharedCatalog = Arc<Catalog>;

/// Query string accepted by `GET /api/books`
#[derive(Debug, Default, Deserialize)]
pub struct BookQuery {
    /// Genre fragment to match
    pub genre: Option<String>,
    /// Author fragment to match
    pub author: Option<String>,
    /// Publication year, coerced to an integer
    pub year: Option<String>,
}

impl From<BookQuery> for BookFilter {
    fn from(query: BookQuery) -> Self {
        Self {
            genre: query.genre,
            author: query.author,
            year: query.year,
        }
    }
}

/// Books list response
#[derive(Debug, Serialize)]
pub struct BooksResponse {
    /// Matching books in catalog order
    pub books: Vec<Book>,
    /// Number of matching books
    pub total: usize,
}

/// Books of one genre
#[derive(Debug, Serialize)]
pub struct GenreBooksResponse {
    /// Genre as requested
    pub genre: String,
    /// Matching books in catalog order
    pub books: Vec<Book>,
    /// Number of matching books
    pub total: usize,
}

/// Books by one author
#[derive(Debug, Serialize)]
pub struct AuthorBooksResponse {
    /// Author fragment as requested
    pub author: String,
    /// Matching books in catalog order
    pub books: Vec<Book>,
    /// Number of matching books
    pub total: usize,
}

/// Title search results
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Title fragment as requested
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    /// Matching books in catalog order
    pub books: Vec<Book>,
    /// Number of matching books
    pub total: usize,
}

fn owned(books: Vec<&Book>) -> Vec<Book> {
    books.into_iter().cloned().collect()
}

/// Decoded path segment; one that is not UTF-8 after decoding is a
/// processing failure, reported like any other internal error
fn path_param(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    path.map(|Path(value)| value)
        .map_err(|e| AppError::Internal(e.into()))
}

/// GET /api/books - List books, optionally filtered by genre, author and year
pub async fn list_books(
    State(catalog): State<SharedCatalog>,
    query: Result<Query<BookQuery>, QueryRejection>,
) -> Result<Json<BooksResponse>, AppError> {
    // Repeated or malformed keys are a processing failure, not a miss
    let Query(query) = query.map_err(|e| AppError::Internal(e.into()))?;
    let filter = BookFilter::from(query);
    let books = owned(catalog.filter(&filter));

    tracing::debug!(filter = ?filter, total = books.len(), "Listed books");

    Ok(Json(BooksResponse {
        total: books.len(),
        books,
    }))
}

/// GET /api/books/:id - Get a specific book
pub async fn get_book(
    State(catalog): State<SharedCatalog>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Book>, AppError> {
    let id = path_param(id)?;
    let book = catalog
        .find_by_id(&id)
        .ok_or_else(|| AppError::BookNotFound(id.clone()))?;

    Ok(Json(book.clone()))
}

/// GET /api/books/genre/:genre - Books whose genre is exactly `genre`
pub async fn books_by_genre(
    State(catalog): State<SharedCatalog>,
    genre: Result<Path<String>, PathRejection>,
) -> Result<Json<GenreBooksResponse>, AppError> {
    let genre = path_param(genre)?;
    let books = owned(catalog.by_genre(&genre));
    if books.is_empty() {
        return Err(AppError::GenreNotFound(genre));
    }

    Ok(Json(GenreBooksResponse {
        genre,
        total: books.len(),
        books,
    }))
}

/// GET /api/books/author/:author - Books whose author contains `author`
pub async fn books_by_author(
    State(catalog): State<SharedCatalog>,
    author: Result<Path<String>, PathRejection>,
) -> Result<Json<AuthorBooksResponse>, AppError> {
    let author = path_param(author)?;
    let books = owned(catalog.by_author(&author));
    if books.is_empty() {
        return Err(AppError::AuthorNotFound(author));
    }

    Ok(Json(AuthorBooksResponse {
        author,
        total: books.len(),
        books,
    }))
}

/// GET /api/books/random - One book picked at random
pub async fn random_book(State(catalog): State<SharedCatalog>) -> Result<Json<Book>, AppError> {
    let book = catalog
        .random()
        .ok_or_else(|| AppError::BookNotFound("random".to_string()))?;

    Ok(Json(book.clone()))
}

/// GET /api/books/search/:title - Books whose title contains `title`
pub async fn search_books(
    State(catalog): State<SharedCatalog>,
    title: Result<Path<String>, PathRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let title = path_param(title)?;
    let books = owned(catalog.search_title(&title));
    if books.is_empty() {
        return Err(AppError::TitleNotFound(title));
    }

    Ok(Json(SearchResponse {
        search_term: title,
        total: books.len(),
        books,
    }))
}
