use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use super::builder::build_location_graph;
use super::config::LocationGraphConfig;
use super::raw_types::LocationRecord;
use crate::{Error, LocationGraph};

/// Reads the location-navigation dataset and builds the location graph
///
/// # Errors
///
/// Returns an error if the dataset file cannot be read or is not valid JSON
pub fn load_location_graph(config: &LocationGraphConfig) -> Result<LocationGraph, Error> {
    info!(
        "Loading location-navigation data: {}",
        config.dataset_path.display()
    );
    let records = read_location_records(&config.dataset_path)?;
    Ok(build_location_graph(&records))
}

/// Reads raw location-navigation records from a JSON array file.
///
/// Elements that do not parse as a record are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a JSON array
pub fn read_location_records(path: &Path) -> Result<Vec<LocationRecord>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open dataset '{}': {}", path.display(), e),
        )
    })?;
    let elements: Vec<Value> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        Error::InvalidData(format!(
            "Failed to parse dataset '{}': {}",
            path.display(),
            e
        ))
    })?;

    let total = elements.len();
    let records: Vec<LocationRecord> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(position, element)| {
            serde_json::from_value(element)
                .inspect_err(|e| warn!("Skipping location record #{position}: {e}"))
                .ok()
        })
        .collect();

    if records.len() < total {
        warn!(
            "{} of {total} location records in '{}' could not be parsed",
            total - records.len(),
            path.display()
        );
    }
    Ok(records)
}
