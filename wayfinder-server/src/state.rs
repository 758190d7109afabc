use wayfinder_core::LocationGraph;
use wayfinder_core::loading::LocationRecord;

/// Read-only data shared by all requests
pub struct AppState {
    pub graph: LocationGraph,
    pub records: Vec<LocationRecord>,
}

impl AppState {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        let graph = wayfinder_core::build_location_graph(&records);
        AppState { graph, records }
    }
}
