use std::path::PathBuf;

/// Where the location-navigation dataset is read from
#[derive(Debug, Clone)]
pub struct LocationGraphConfig {
    pub dataset_path: PathBuf,
}

impl LocationGraphConfig {
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        LocationGraphConfig {
            dataset_path: dataset_path.into(),
        }
    }
}
