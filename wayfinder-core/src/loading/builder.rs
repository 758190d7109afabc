use hashbrown::HashMap;
use log::{debug, info, warn};

use super::raw_types::{LocationRecord, RawConnection};
use crate::model::{LocationEdge, LocationGraph, LocationNode};

/// Builds the location graph from navigation records.
///
/// Bad data never aborts the build:
/// - a duplicated id keeps the position of its first occurrence but the
///   contents of its last one (last write wins)
/// - connections with a negative or non-finite distance are dropped
/// - connections to an unknown location are dropped
/// - records without an id are dropped
///
/// Every dropped item is reported with a warning.
pub fn build_location_graph(records: &[LocationRecord]) -> LocationGraph {
    let records = deduplicate_records(records);
    let edge_estimate = records.iter().map(|r| r.connections.len()).sum();
    let mut graph = LocationGraph::with_capacity(records.len(), edge_estimate);

    let indices: Vec<_> = records
        .iter()
        .map(|record| graph.add_node(create_node(record)))
        .collect();

    let mut skipped = 0usize;
    for (record, &source) in records.iter().zip(&indices) {
        for connection in &record.connections {
            if !is_valid_distance(connection) {
                warn!(
                    "Skipping connection {} -> {}: invalid distance {}",
                    record.id, connection.target_location, connection.distance_meters
                );
                skipped += 1;
                continue;
            }

            let Some(target) = graph.node_index(&connection.target_location) else {
                warn!(
                    "Skipping connection {} -> {}: target location does not exist",
                    record.id, connection.target_location
                );
                skipped += 1;
                continue;
            };

            if target == source {
                debug!("Ignoring self-loop on {}", record.id);
                continue;
            }

            graph.add_edge(
                source,
                target,
                LocationEdge {
                    distance_meters: connection.distance_meters,
                    position_percent: connection.position_percent,
                },
            );
        }
    }

    info!(
        "Built location graph with {} locations and {} connections ({} skipped)",
        graph.node_count(),
        graph.edge_count(),
        skipped
    );
    graph
}

fn deduplicate_records(records: &[LocationRecord]) -> Vec<&LocationRecord> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    let mut unique: Vec<&LocationRecord> = Vec::with_capacity(records.len());

    for record in records {
        if record.id.trim().is_empty() {
            warn!("Skipping location record without an id");
            continue;
        }
        match positions.get(record.id.as_str()) {
            Some(&pos) => {
                warn!(
                    "Duplicate location id {}: later record replaces the earlier one",
                    record.id
                );
                unique[pos] = record;
            }
            None => {
                positions.insert(record.id.as_str(), unique.len());
                unique.push(record);
            }
        }
    }
    unique
}

fn create_node(record: &LocationRecord) -> LocationNode {
    LocationNode {
        id: record.id.clone(),
        display_name: record.display_name.clone(),
        floor: record.floor,
        building: record.building.clone(),
        room_number: record.room_number,
    }
}

fn is_valid_distance(connection: &RawConnection) -> bool {
    connection.distance_meters.is_finite() && connection.distance_meters >= 0.0
}
