use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wayfinder_core::{NavigationError, RoutingError};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl From<RoutingError> for ApiError {
    fn from(error: RoutingError) -> Self {
        match error {
            RoutingError::UnknownLocation(_) => ApiError::BadRequest(error.to_string()),
            RoutingError::NoPathFound { .. } => ApiError::NotFound(error.to_string()),
        }
    }
}

impl From<NavigationError> for ApiError {
    fn from(error: NavigationError) -> Self {
        match error {
            NavigationError::SessionNotFound => ApiError::NotFound(error.to_string()),
            NavigationError::EmptyRoute | NavigationError::InvalidSessionState(_) => {
                ApiError::BadRequest(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
