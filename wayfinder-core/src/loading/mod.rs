//! This module is responsible for reading location-navigation data
//! and building the location graph used for routing.

mod builder;
mod config;
mod dataset;
mod raw_types;

pub use builder::build_location_graph;
pub use config::LocationGraphConfig;
pub use dataset::{load_location_graph, read_location_records};
pub use raw_types::{LocationRecord, RawConnection};
