//! Indoor routing for the campus classroom finder.
//!
//! The crate turns a flat list of location-navigation records into a
//! directed, distance-weighted [`LocationGraph`], computes shortest walking
//! routes over it and tracks a user's progress along a computed route.

pub mod error;
pub mod loading;
pub mod model;
pub mod navigation;
pub mod prelude;
pub mod routing;

pub use error::{Error, NavigationError, RoutingError};
pub use loading::{LocationGraphConfig, build_location_graph, load_location_graph};
pub use model::{LocationEdge, LocationGraph, LocationNode, RouteLeg, RoutePlan};
pub use navigation::{Advance, GuidedNavigation, NavigationSession};
pub use routing::{compute_route, try_compute_route};

/// Unique identifier of a navigable location
pub type LocationId = String;

/// Physical walking distance in meters
pub type Meters = f64;
