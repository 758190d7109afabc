use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Reasons a route between two locations could not be produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
    #[error("No route available from {start} to {goal}")]
    NoPathFound { start: String, goal: String },
}

/// Failures of guided-navigation session operations.
///
/// All of these are recoverable; the caller decides how to present them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Cannot start navigation on an empty route")]
    EmptyRoute,
    #[error("No active navigation session")]
    SessionNotFound,
    #[error("Invalid navigation session state: {0}")]
    InvalidSessionState(String),
}
