// Book catalog
// Immutable book collection plus every read query the catalog API exposes

use crate::state::matching::{coerce_int, contains_ignore_case, eq_ignore_case};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Unique identifier for a book
pub type BookId = i64;

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier for the book
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author name as printed on the cover
    pub author: String,
    /// Free-text genre
    pub genre: String,
    /// Publication year
    pub year: i64,
    /// ISBN, stored as given
    pub isbn: String,
    /// Page count
    pub pages: u32,
    /// Short description
    pub description: String,
}

/// Errors raised while building a catalog
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records share the same id
    #[error("Duplicate book id: {0}")]
    DuplicateId(BookId),
}

/// Criteria for listing books
///
/// Every supplied criterion must hold (AND). Empty strings count as not
/// supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring of the genre
    pub genre: Option<String>,
    /// Case-insensitive substring of the author
    pub author: Option<String>,
    /// Raw year input, coerced to an integer before comparing
    pub year: Option<String>,
}

impl BookFilter {
    fn supplied(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Whether `book` satisfies every supplied criterion
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(genre) = Self::supplied(&self.genre) {
            if !contains_ignore_case(&book.genre, genre) {
                return false;
            }
        }
        if let Some(author) = Self::supplied(&self.author) {
            if !contains_ignore_case(&book.author, author) {
                return false;
            }
        }
        if let Some(year) = Self::supplied(&self.year) {
            if coerce_int(year) != Some(book.year) {
                return false;
            }
        }
        true
    }
}

/// Read-only book collection
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so no lock is needed.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(books: Vec<Book>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id) {
                return Err(CatalogError::DuplicateId(book.id));
            }
        }
        Ok(Self { books })
    }

    /// Catalog holding the built-in seed list, validated like any other
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed_books())
    }

    /// All books in collection order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog has no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books satisfying `filter`, in collection order
    pub fn filter(&self, filter: &BookFilter) -> Vec<&Book> {
        self.books.iter().filter(|b| filter.matches(b)).collect()
    }

    /// Book whose id equals the coerced `raw_id`
    pub fn find_by_id(&self, raw_id: &str) -> Option<&Book> {
        let id = coerce_int(raw_id)?;
        self.books.iter().find(|b| b.id == id)
    }

    /// Books whose genre equals `genre`, ignoring case
    pub fn by_genre(&self, genre: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| eq_ignore_case(&b.genre, genre))
            .collect()
    }

    /// Books whose author contains `author`, ignoring case
    pub fn by_author(&self, author: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| contains_ignore_case(&b.author, author))
            .collect()
    }

    /// Books whose title contains `title`, ignoring case
    pub fn search_title(&self, title: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| contains_ignore_case(&b.title, title))
            .collect()
    }

    /// One book chosen uniformly at random, `None` if the catalog is empty
    pub fn random(&self) -> Option<&Book> {
        self.books.choose(&mut rand::thread_rng())
    }

    /// Distinct genres in first-occurrence order
    pub fn genres(&self) -> Vec<&str> {
        distinct(self.books.iter().map(|b| b.genre.as_str()))
    }

    /// Distinct authors in first-occurrence order
    pub fn authors(&self) -> Vec<&str> {
        distinct(self.books.iter().map(|b| b.author.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

#[allow(clippy::too_many_arguments)] // one argument per column of the seed table
fn book(
    id: BookId,
    title: &str,
    author: &str,
    genre: &str,
    year: i64,
    isbn: &str,
    pages: u32,
    description: &str,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        year,
        isbn: isbn.to_string(),
        pages,
        description: description.to_string(),
    }
}

/// The fixed book list the catalog service starts with
pub fn seed_books() -> Vec<Book> {
    vec![
        book(
            1,
            "To Kill a Mockingbird",
            "Harper Lee",
            "Fiction",
            1960,
            "978-0-06-112008-4",
            281,
            "A classic novel about racial injustice in the American South",
        ),
        book(
            2,
            "1984",
            "George Orwell",
            "Dystopian Fiction",
            1949,
            "978-0-452-28423-4",
            328,
            "A dystopian social science fiction novel and cautionary tale",
        ),
        book(
            3,
            "Pride and Prejudice",
            "Jane Austen",
            "Romance",
            1813,
            "978-0-14-143951-8",
            432,
            "A romantic novel following Elizabeth Bennet and Mr. Darcy",
        ),
        book(
            4,
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "Fiction",
            1925,
            "978-0-7432-7356-5",
            180,
            "A tale of the Jazz Age and the American Dream",
        ),
        book(
            5,
            "The Catcher in the Rye",
            "J.D. Salinger",
            "Fiction",
            1951,
            "978-0-316-76948-0",
            277,
            "A coming-of-age story about teenage rebellion",
        ),
        book(
            6,
            "Dune",
            "Frank Herbert",
            "Science Fiction",
            1965,
            "978-0-441-17271-9",
            688,
            "Epic science fiction novel set on the desert planet Arrakis",
        ),
        book(
            7,
            "The Hobbit",
            "J.R.R. Tolkien",
            "Fantasy",
            1937,
            "978-0-547-92822-7",
            366,
            "A fantasy adventure following Bilbo Baggins",
        ),
        book(
            8,
            "Harry Potter and the Philosopher's Stone",
            "J.K. Rowling",
            "Fantasy",
            1997,
            "978-0-7475-3269-9",
            223,
            "The first book in the Harry Potter series",
        ),
    ]
}
