//! Data model for indoor routing
//!
//! Contains the location graph and the route plans computed over it.

pub mod graph;
pub mod location;
pub mod route_plan;

pub use graph::LocationGraph;
pub use location::{LocationEdge, LocationNode};
pub use route_plan::{RouteLeg, RoutePlan};
