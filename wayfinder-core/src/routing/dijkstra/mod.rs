mod shortest_path;
mod state;

pub use shortest_path::{compute_route, shortest_distances, try_compute_route};
