//! Catalog-wide API handlers
//!
//! Aggregate views over the whole collection and the health check.

use crate::api::books::SharedCatalog;
use axum::{extract::State, response::Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Distinct genres
#[derive(Debug, Serialize)]
pub struct GenresResponse {
    /// Genres in first-occurrence order
    pub genres: Vec<String>,
    /// Number of distinct genres
    pub total: usize,
}

/// Distinct authors
#[derive(Debug, Serialize)]
pub struct AuthorsResponse {
    /// Authors in first-occurrence order
    pub authors: Vec<String>,
    /// Number of distinct authors
    pub total: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `OK`
    pub status: &'static str,
    /// Time the check ran, RFC 3339 UTC with milliseconds
    pub timestamp: String,
    /// Number of books served
    #[serde(rename = "totalBooks")]
    pub total_books: usize,
}

/// GET /api/genres - Distinct genres across the catalog
pub async fn list_genres(State(catalog): State<SharedCatalog>) -> Json<GenresResponse> {
    let genres: Vec<String> = catalog.genres().into_iter().map(String::from).collect();
    Json(GenresResponse {
        total: genres.len(),
        genres,
    })
}

/// GET /api/authors - Distinct authors across the catalog
pub async fn list_authors(State(catalog): State<SharedCatalog>) -> Json<AuthorsResponse> {
    let authors: Vec<String> = catalog.authors().into_iter().map(String::from).collect();
    Json(AuthorsResponse {
        total: authors.len(),
        authors,
    })
}

/// GET /api/health - Liveness plus the size of the catalog
pub async fn health_check(State(catalog): State<SharedCatalog>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        total_books: catalog.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Catalog;
    use chrono::DateTime;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_genres() {
        let catalog = Arc::new(Catalog::seeded().unwrap());
        let first = list_genres(State(catalog.clone())).await;
        assert_eq!(first.total, first.genres.len());
        assert_eq!(first.genres[0], "Fiction");

        let second = list_genres(State(catalog)).await;
        assert_eq!(first.genres, second.genres);
    }

    #[tokio::test]
    async fn test_list_authors() {
        let catalog = Arc::new(Catalog::seeded().unwrap());
        let response = list_authors(State(catalog)).await;
        assert_eq!(response.total, 8);
        assert_eq!(response.authors.last().unwrap(), "J.K. Rowling");
    }

    #[tokio::test]
    async fn test_health_check() {
        let catalog = Arc::new(Catalog::seeded().unwrap());
        let response = health_check(State(catalog)).await;
        assert_eq!(response.status, "OK");
        assert_eq!(response.total_books, 8);
        assert!(response.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }
}
