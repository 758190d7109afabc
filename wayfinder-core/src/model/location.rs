//! Location graph components - navigable points and the connections between them

use serde::Serialize;

use crate::{LocationId, Meters};

/// Location graph node (classroom, corridor junction, stairwell, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationNode {
    /// Unique location identifier
    pub id: LocationId,
    /// Human-readable label, if the dataset provides one
    pub display_name: Option<String>,
    pub floor: Option<i32>,
    pub building: Option<String>,
    pub room_number: Option<i32>,
}

impl LocationNode {
    pub fn new(id: impl Into<LocationId>) -> Self {
        LocationNode {
            id: id.into(),
            display_name: None,
            floor: None,
            building: None,
            room_number: None,
        }
    }

    /// Label shown to users, generated from floor and id when the dataset has none
    pub fn label(&self) -> String {
        match (&self.display_name, self.floor) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, Some(floor)) => format!("{floor}F {}", self.id),
            _ => self.id.clone(),
        }
    }
}

/// Directed connection between two locations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationEdge {
    /// Walking distance in meters, always finite and non-negative
    pub distance_meters: Meters,
    /// Horizontal marker position on the source panorama, in percent
    pub position_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_display_name() {
        let mut node = LocationNode::new("B-204");
        node.floor = Some(2);
        node.display_name = Some("Seminar Room 4".to_string());
        assert_eq!(node.label(), "Seminar Room 4");
    }

    #[test]
    fn label_falls_back_to_floor_and_id() {
        let mut node = LocationNode::new("B-204");
        node.floor = Some(2);
        assert_eq!(node.label(), "2F B-204");

        node.display_name = Some("   ".to_string());
        assert_eq!(node.label(), "2F B-204");
    }

    #[test]
    fn label_without_metadata_is_id() {
        assert_eq!(LocationNode::new("junction-7").label(), "junction-7");
    }
}
