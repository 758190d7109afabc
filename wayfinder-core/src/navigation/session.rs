use serde::{Deserialize, Serialize};

use crate::{LocationId, NavigationError};

/// Progress of one user along a computed route.
///
/// This is the value the presentation layer persists between requests.
/// A deserialized session is only trusted after it went through
/// [`GuidedNavigation::restore`](super::GuidedNavigation::restore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSession {
    route: Vec<LocationId>,
    current_index: usize,
    destination_label: String,
    /// Set once the user acknowledged arrival at the final location
    #[serde(default)]
    completed: bool,
}

impl NavigationSession {
    /// Builds a session snapshot without validating it
    pub fn from_parts(
        route: Vec<LocationId>,
        current_index: usize,
        destination_label: impl Into<String>,
    ) -> Self {
        NavigationSession {
            route,
            current_index,
            destination_label: destination_label.into(),
            completed: false,
        }
    }

    pub fn route(&self) -> &[LocationId] {
        &self.route
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn destination_label(&self) -> &str {
        &self.destination_label
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(super) fn last_index(&self) -> usize {
        self.route.len().saturating_sub(1)
    }

    /// Location at the current index, or an error for an index outside the route
    pub(super) fn current(&self) -> Result<&str, NavigationError> {
        self.route
            .get(self.current_index)
            .map(String::as_str)
            .ok_or_else(|| {
                NavigationError::InvalidSessionState(format!(
                    "index {} is outside a route of {} locations",
                    self.current_index,
                    self.route.len()
                ))
            })
    }

    pub(super) fn next(&self) -> Option<&str> {
        self.current_index
            .checked_add(1)
            .and_then(|idx| self.route.get(idx))
            .map(String::as_str)
    }

    pub(super) fn at_last_index(&self) -> bool {
        self.current_index == self.last_index()
    }

    pub(super) fn step_forward(&mut self) {
        self.current_index += 1;
    }

    pub(super) fn mark_completed(&mut self) {
        self.completed = true;
    }
}
