use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wayfinder_core::{LocationGraph, RouteLeg, RoutePlan, RoutingError, try_compute_route};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RouteQuery {
    pub start: String,
    pub goal: String,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub found: bool,
    pub nodes: Vec<String>,
    pub total_distance: f64,
    pub legs: Vec<RouteLeg>,
}

impl RouteResponse {
    pub fn new(graph: &LocationGraph, plan: &RoutePlan) -> Self {
        RouteResponse {
            found: !plan.is_empty(),
            nodes: plan.nodes().to_vec(),
            total_distance: plan.total_distance(),
            legs: plan.legs(graph),
        }
    }
}

pub async fn route_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, ApiError> {
    let plan = match try_compute_route(&state.graph, &query.start, &query.goal) {
        Ok(plan) => plan,
        // Disconnected locations are an answer, not a failure
        Err(error @ RoutingError::NoPathFound { .. }) => {
            debug!("{error}");
            RoutePlan::default()
        }
        Err(error) => return Err(error.into()),
    };

    Ok(Json(RouteResponse::new(&state.graph, &plan)))
}
