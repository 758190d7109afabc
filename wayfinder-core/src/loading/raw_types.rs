use serde::{Deserialize, Serialize};

/// One entry of the location-navigation dataset
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocationRecord {
    #[serde(alias = "location")]
    pub id: String,
    #[serde(alias = "room_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(alias = "floor_number", skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(alias = "building_name", skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<i32>,
    pub connections: Vec<RawConnection>,
}

/// Outgoing connection as stored in the dataset
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawConnection {
    pub target_location: String,
    pub distance_meters: f64,
    #[serde(default)]
    pub position_percent: f64,
}

impl LocationRecord {
    pub fn new(id: impl Into<String>) -> Self {
        LocationRecord {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Appends a connection, builder style
    #[must_use]
    pub fn connect(mut self, target: impl Into<String>, distance_meters: f64) -> Self {
        self.connections.push(RawConnection {
            target_location: target.into(),
            distance_meters,
            position_percent: 50.0,
        });
        self
    }
}
