use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use wayfinder_core::LocationNode;
use wayfinder_core::loading::LocationRecord;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ConnectionView {
    target: String,
    distance_meters: f64,
    position_percent: f64,
}

#[derive(Serialize)]
pub struct LocationView {
    #[serde(flatten)]
    node: LocationNode,
    label: String,
    connections: Vec<ConnectionView>,
}

pub async fn location_navigation_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<LocationRecord>> {
    Json(state.records.clone())
}

pub async fn location_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LocationView>, ApiError> {
    let node = state
        .graph
        .node(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Location {id} not found")))?;

    let connections = state
        .graph
        .connections(&id)
        .into_iter()
        .map(|(target, edge)| ConnectionView {
            target: target.id.clone(),
            distance_meters: edge.distance_meters,
            position_percent: edge.position_percent,
        })
        .collect();

    Ok(Json(LocationView {
        node: node.clone(),
        label: node.label(),
        connections,
    }))
}
