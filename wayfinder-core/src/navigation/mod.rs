//! Step-by-step guidance along a computed route

mod session;
mod tracker;

pub use session::NavigationSession;
pub use tracker::{Advance, GuidedNavigation};
