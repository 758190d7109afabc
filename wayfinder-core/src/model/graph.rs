use hashbrown::HashMap;
use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;

use super::location::{LocationEdge, LocationNode};
use crate::LocationId;

/// Directed, distance-weighted graph of campus locations.
///
/// Nodes are keyed by their location id. The graph is built once by the
/// loader and only read afterwards, so it can be shared freely between
/// concurrent route computations.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    pub(crate) graph: DiGraph<LocationNode, LocationEdge>,
    index: HashMap<LocationId, NodeIndex>,
}

impl LocationGraph {
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        LocationGraph {
            graph: DiGraph::with_capacity(nodes, edges),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Inserts a node, returning the index of an already present node with the same id instead
    pub(crate) fn add_node(&mut self, node: LocationNode) -> NodeIndex {
        if let Some(&existing) = self.index.get(&node.id) {
            return existing;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        idx
    }

    pub(crate) fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, edge: LocationEdge) {
        self.graph.add_edge(source, target, edge);
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&LocationNode> {
        self.node_index(id).map(|idx| &self.graph[idx])
    }

    pub fn node_weight(&self, idx: NodeIndex) -> Option<&LocationNode> {
        self.graph.node_weight(idx)
    }

    /// Outgoing edges of a node
    pub fn edges(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeReference<'_, LocationEdge>> {
        self.graph.edges_directed(idx, Direction::Outgoing)
    }

    /// Outgoing connections of a location as `(target, edge)` pairs
    pub fn connections(&self, id: &str) -> Vec<(&LocationNode, &LocationEdge)> {
        let Some(idx) = self.node_index(id) else {
            return Vec::new();
        };
        self.edges(idx)
            .map(|edge| (&self.graph[edge.target()], edge.weight()))
            .collect()
    }

    /// Shortest direct connection from `source` to `target`, if any
    pub fn edge_between(&self, source: &str, target: &str) -> Option<&LocationEdge> {
        let source = self.node_index(source)?;
        let target = self.node_index(target)?;
        self.graph
            .edges_connecting(source, target)
            .map(|edge| edge.weight())
            .min_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &LocationNode> {
        self.graph.node_weights()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
