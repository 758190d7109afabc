pub use crate::{Error, NavigationError, RoutingError};

// Graph construction
pub use crate::loading::{
    LocationGraphConfig, LocationRecord, build_location_graph, load_location_graph,
};
pub use crate::model::{LocationEdge, LocationGraph, LocationNode};

// Routing
pub use crate::model::{RouteLeg, RoutePlan};
pub use crate::routing::{compute_route, try_compute_route};

// Guided navigation
pub use crate::navigation::{Advance, GuidedNavigation, NavigationSession};

pub use crate::LocationId;
pub use crate::Meters;
