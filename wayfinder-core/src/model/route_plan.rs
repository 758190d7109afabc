use serde::Serialize;

use super::graph::LocationGraph;
use crate::{LocationId, Meters};

/// Ordered walking route from a start location to a goal location.
///
/// An empty plan means no route was found.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutePlan {
    nodes: Vec<LocationId>,
    total_distance: Meters,
}

/// A single hop of a [`RoutePlan`], resolved against the graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: LocationId,
    pub to: LocationId,
    pub distance_meters: Meters,
    pub position_percent: f64,
}

impl RoutePlan {
    pub(crate) fn new(nodes: Vec<LocationId>, total_distance: Meters) -> Self {
        RoutePlan {
            nodes,
            total_distance,
        }
    }

    /// Plan for a start location that is also the goal
    pub(crate) fn trivial(id: &str) -> Self {
        RoutePlan::new(vec![id.to_string()], 0.0)
    }

    pub fn nodes(&self) -> &[LocationId] {
        &self.nodes
    }

    pub fn total_distance(&self) -> Meters {
        self.total_distance
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn goal(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Hops of the plan with the connection data needed to place step markers.
    ///
    /// Hops whose connection is no longer present in `graph` are left out.
    pub fn legs(&self, graph: &LocationGraph) -> Vec<RouteLeg> {
        self.nodes
            .windows(2)
            .filter_map(|pair| {
                let edge = graph.edge_between(&pair[0], &pair[1])?;
                Some(RouteLeg {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    distance_meters: edge.distance_meters,
                    position_percent: edge.position_percent,
                })
            })
            .collect()
    }
}
