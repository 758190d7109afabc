use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::info;
use wayfinder_core::{Advance, GuidedNavigation, NavigationError, NavigationSession};

use super::route::RouteResponse;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StartRequest {
    pub start: String,
    pub goal: String,
}

/// A persisted session sent back by the client
#[derive(Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub session: Option<NavigationSession>,
    #[serde(default)]
    pub current_location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NavigationView {
    pub session: Option<NavigationSession>,
    pub current_location: Option<String>,
    pub next_location: Option<String>,
    pub arrived: bool,
    pub complete: bool,
}

impl NavigationView {
    fn new(nav: &GuidedNavigation) -> Self {
        NavigationView {
            session: nav.session().cloned(),
            current_location: nav.current_location().ok().map(str::to_string),
            next_location: nav.next_location().ok().flatten().map(str::to_string),
            arrived: nav.has_arrived().unwrap_or(false),
            complete: nav.is_complete().unwrap_or(false),
        }
    }
}

#[derive(Serialize)]
pub struct StartResponse {
    pub route: RouteResponse,
    pub navigation: NavigationView,
}

#[derive(Serialize)]
pub struct AdvanceResponse {
    pub step: Advance,
    pub navigation: NavigationView,
}

fn resume(state: &AppState, request: SessionRequest) -> Result<GuidedNavigation, ApiError> {
    let session = request.session.ok_or(NavigationError::SessionNotFound)?;
    let nav =
        GuidedNavigation::restore_in(&state.graph, session, request.current_location.as_deref())?;
    Ok(nav)
}

pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StartRequest>,
) -> Result<Json<StartResponse>, ApiError> {
    let plan = wayfinder_core::try_compute_route(&state.graph, &body.start, &body.goal)?;

    let mut nav = GuidedNavigation::new();
    let session = nav.start_route(&state.graph, &plan)?;
    info!(
        "Navigation started {} -> {} ({} steps)",
        body.start,
        session.destination_label(),
        plan.len().saturating_sub(1)
    );

    Ok(Json(StartResponse {
        route: RouteResponse::new(&state.graph, &plan),
        navigation: NavigationView::new(&nav),
    }))
}

pub async fn advance_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SessionRequest>,
) -> Result<Json<AdvanceResponse>, ApiError> {
    let mut nav = resume(&state, body)?;
    let step = nav.advance()?;

    Ok(Json(AdvanceResponse {
        step,
        navigation: NavigationView::new(&nav),
    }))
}

pub async fn restore_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SessionRequest>,
) -> Result<Json<NavigationView>, ApiError> {
    let nav = resume(&state, body)?;
    Ok(Json(NavigationView::new(&nav)))
}
