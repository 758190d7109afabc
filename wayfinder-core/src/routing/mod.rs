//! Shortest walking routes over the location graph

pub mod dijkstra;

pub use dijkstra::{compute_route, shortest_distances, try_compute_route};
