use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use log::debug;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use super::state::State;
use crate::model::{LocationGraph, RoutePlan};
use crate::{LocationId, Meters, RoutingError};

/// Distances and predecessors settled by one search
struct SearchTree {
    distances: Vec<Meters>,
    predecessors: Vec<Option<NodeIndex>>,
}

/// Dijkstra's algorithm over the location graph.
///
/// Stops as soon as `target` is settled. Equal tentative distances are
/// settled in ascending id order, and a predecessor is only replaced by a
/// strictly shorter path, so the result is deterministic for a given graph.
fn search(graph: &LocationGraph, start: NodeIndex, target: Option<NodeIndex>) -> SearchTree {
    let node_count = graph.node_count();
    let mut distances = vec![Meters::INFINITY; node_count];
    let mut predecessors = vec![None; node_count];
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(node_count / 4 + 1);

    distances[start.index()] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: start,
        id: &graph.graph[start].id,
    });

    while let Some(State { cost, node, .. }) = heap.pop() {
        // Stale entry, a shorter one was already settled
        if settled.put(node.index()) {
            continue;
        }

        if Some(node) == target {
            break;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            if settled.contains(next.index()) {
                continue;
            }

            let next_cost = cost + edge.weight().distance_meters;
            if next_cost < distances[next.index()] {
                distances[next.index()] = next_cost;
                predecessors[next.index()] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                    id: &graph.graph[next].id,
                });
            }
        }
    }

    SearchTree {
        distances,
        predecessors,
    }
}

/// Computes the shortest walking route between two locations
///
/// # Errors
///
/// - [`RoutingError::UnknownLocation`] if start or goal is not in the graph
/// - [`RoutingError::NoPathFound`] if the goal cannot be reached from the start
pub fn try_compute_route(
    graph: &LocationGraph,
    start_id: &str,
    goal_id: &str,
) -> Result<RoutePlan, RoutingError> {
    if start_id == goal_id {
        return Ok(RoutePlan::trivial(start_id));
    }

    let start = graph
        .node_index(start_id)
        .ok_or_else(|| RoutingError::UnknownLocation(start_id.to_string()))?;
    let goal = graph
        .node_index(goal_id)
        .ok_or_else(|| RoutingError::UnknownLocation(goal_id.to_string()))?;

    let tree = search(graph, start, Some(goal));
    let total_distance = tree.distances[goal.index()];
    if total_distance.is_infinite() {
        return Err(RoutingError::NoPathFound {
            start: start_id.to_string(),
            goal: goal_id.to_string(),
        });
    }

    // Follow predecessors backward from goal to start
    let mut nodes = vec![goal_id.to_string()];
    let mut current = goal;
    while let Some(prev) = tree.predecessors[current.index()] {
        nodes.push(graph.graph[prev].id.clone());
        current = prev;
    }
    nodes.reverse();

    debug!(
        "Route {start_id} -> {goal_id}: {} locations, {total_distance:.1} m",
        nodes.len()
    );
    Ok(RoutePlan::new(nodes, total_distance))
}

/// Computes the shortest walking route between two locations.
///
/// Returns an empty plan when either location is unknown or no route exists.
pub fn compute_route(graph: &LocationGraph, start_id: &str, goal_id: &str) -> RoutePlan {
    try_compute_route(graph, start_id, goal_id).unwrap_or_else(|e| {
        debug!("{e}");
        RoutePlan::default()
    })
}

/// Shortest walking distance from `start_id` to every reachable location
pub fn shortest_distances(graph: &LocationGraph, start_id: &str) -> HashMap<LocationId, Meters> {
    let Some(start) = graph.node_index(start_id) else {
        return HashMap::new();
    };

    let tree = search(graph, start, None);
    tree.distances
        .iter()
        .enumerate()
        .filter(|(_, distance)| distance.is_finite())
        .filter_map(|(idx, &distance)| {
            graph
                .node_weight(NodeIndex::new(idx))
                .map(|node| (node.id.clone(), distance))
        })
        .collect()
}
