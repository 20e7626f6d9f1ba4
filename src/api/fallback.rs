//! Fallback handlers shared by both services

use crate::error::AppError;
use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use std::any::Any;

/// Any request no route accepts, including known paths with another method
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound(format!("{} {}", method, uri))
}

/// Turn a panic caught by `CatchPanicLayer` into the generic 500 response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_route_not_found() {
        let err = route_not_found(Method::GET, Uri::from_static("/api/nonexistent")).await;
        assert!(matches!(&err, AppError::RouteNotFound(term) if term == "GET /api/nonexistent"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_handle_panic() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
