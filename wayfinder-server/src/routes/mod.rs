pub mod locations;
pub mod navigation;
pub mod route;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/location-navigation",
            get(locations::location_navigation_handler),
        )
        .route("/api/locations/{id}", get(locations::location_handler))
        .route("/api/route", get(route::route_handler))
        .route("/api/navigation/start", post(navigation::start_handler))
        .route("/api/navigation/advance", post(navigation::advance_handler))
        .route("/api/navigation/restore", post(navigation::restore_handler))
        .with_state(state)
}
