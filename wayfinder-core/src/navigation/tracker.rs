use log::debug;
use serde::Serialize;

use super::session::NavigationSession;
use crate::model::{LocationGraph, RoutePlan};
use crate::{LocationId, NavigationError};

/// Outcome of advancing one step along the route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "location", rename_all = "snake_case")]
pub enum Advance {
    /// Moved to the given location
    Moved(LocationId),
    /// Already at the final location; the session is now complete
    AlreadyAtDestination,
}

/// Guided navigation through a route, one confirmed step at a time.
///
/// Holds at most one [`NavigationSession`]. The value is owned by the
/// caller, who persists the session between requests and rebuilds the
/// tracker with [`restore`](Self::restore); nothing here is global.
///
/// ```text
/// NoSession -> Active(0) -> Active(k) -> Complete
/// ```
///
/// `cancel` returns to `NoSession` from any state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GuidedNavigation {
    session: Option<NavigationSession>,
}

impl GuidedNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts navigating `route`, replacing any previous session
    ///
    /// # Errors
    ///
    /// [`NavigationError::EmptyRoute`] if `route` is empty
    pub fn start_session(
        &mut self,
        route: Vec<LocationId>,
        destination_label: impl Into<String>,
    ) -> Result<&NavigationSession, NavigationError> {
        if route.is_empty() {
            return Err(NavigationError::EmptyRoute);
        }
        let session = NavigationSession::from_parts(route, 0, destination_label);
        Ok(&*self.session.insert(session))
    }

    /// Starts navigating a computed plan, labelling it with the goal's display name
    ///
    /// # Errors
    ///
    /// [`NavigationError::EmptyRoute`] if no route was found
    pub fn start_route(
        &mut self,
        graph: &LocationGraph,
        plan: &RoutePlan,
    ) -> Result<&NavigationSession, NavigationError> {
        let label = plan
            .goal()
            .map(|goal| graph.node(goal).map_or_else(|| goal.to_string(), |n| n.label()))
            .unwrap_or_default();
        self.start_session(plan.nodes().to_vec(), label)
    }

    /// Resumes a persisted session.
    ///
    /// When `known_location` is given, the session's current location must
    /// match it.
    ///
    /// # Errors
    ///
    /// [`NavigationError::InvalidSessionState`] if the snapshot is inconsistent
    pub fn restore(
        snapshot: NavigationSession,
        known_location: Option<&str>,
    ) -> Result<Self, NavigationError> {
        validate_snapshot(&snapshot, known_location)?;
        Ok(GuidedNavigation {
            session: Some(snapshot),
        })
    }

    /// Like [`restore`](Self::restore), but also rejects routes through
    /// locations that no longer exist in `graph`
    ///
    /// # Errors
    ///
    /// [`NavigationError::InvalidSessionState`] if the snapshot is inconsistent
    pub fn restore_in(
        graph: &LocationGraph,
        snapshot: NavigationSession,
        known_location: Option<&str>,
    ) -> Result<Self, NavigationError> {
        if let Some(missing) = snapshot.route().iter().find(|id| !graph.contains(id)) {
            return Err(NavigationError::InvalidSessionState(format!(
                "route references unknown location {missing}"
            )));
        }
        Self::restore(snapshot, known_location)
    }

    pub fn session(&self) -> Option<&NavigationSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    fn active(&self) -> Result<&NavigationSession, NavigationError> {
        self.session.as_ref().ok_or(NavigationError::SessionNotFound)
    }

    fn active_mut(&mut self) -> Result<&mut NavigationSession, NavigationError> {
        self.session.as_mut().ok_or(NavigationError::SessionNotFound)
    }

    /// # Errors
    ///
    /// - [`NavigationError::SessionNotFound`] without an active session
    /// - [`NavigationError::InvalidSessionState`] if the index is outside the route
    pub fn current_location(&self) -> Result<&str, NavigationError> {
        self.active()?.current()
    }

    /// The upcoming location, without advancing
    ///
    /// # Errors
    ///
    /// - [`NavigationError::SessionNotFound`] without an active session
    /// - [`NavigationError::InvalidSessionState`] if the index is outside the route
    pub fn next_location(&self) -> Result<Option<&str>, NavigationError> {
        let session = self.active()?;
        session.current()?;
        Ok(session.next())
    }

    /// Confirms arrival at the next location.
    ///
    /// At the final location this acknowledges the arrival instead and
    /// completes the session.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::SessionNotFound`] without an active session
    /// - [`NavigationError::InvalidSessionState`] if the index is outside the route
    pub fn advance(&mut self) -> Result<Advance, NavigationError> {
        let session = self.active_mut()?;
        session.current()?;
        if session.at_last_index() {
            session.mark_completed();
            debug!("Navigation to {} complete", session.destination_label());
            return Ok(Advance::AlreadyAtDestination);
        }
        session.step_forward();
        Ok(Advance::Moved(session.current()?.to_string()))
    }

    /// Whether the user reached the final location, acknowledged or not
    ///
    /// # Errors
    ///
    /// [`NavigationError::SessionNotFound`] without an active session
    pub fn has_arrived(&self) -> Result<bool, NavigationError> {
        self.active().map(NavigationSession::at_last_index)
    }

    /// Whether the user reached the final location and acknowledged it
    ///
    /// # Errors
    ///
    /// [`NavigationError::SessionNotFound`] without an active session
    pub fn is_complete(&self) -> Result<bool, NavigationError> {
        self.active()
            .map(|session| session.at_last_index() && session.is_completed())
    }

    /// Discards the session, returning it if there was one
    pub fn cancel(&mut self) -> Option<NavigationSession> {
        self.session.take()
    }
}

fn validate_snapshot(
    snapshot: &NavigationSession,
    known_location: Option<&str>,
) -> Result<(), NavigationError> {
    if snapshot.route().is_empty() {
        return Err(NavigationError::InvalidSessionState(
            "route is empty".to_string(),
        ));
    }
    if snapshot.is_completed() && !snapshot.at_last_index() {
        return Err(NavigationError::InvalidSessionState(
            "completed session is not at its destination".to_string(),
        ));
    }
    let current = snapshot.current()?;
    if let Some(expected) = known_location {
        if current != expected {
            return Err(NavigationError::InvalidSessionState(format!(
                "session is at {current} but the user is at {expected}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{LocationRecord, build_location_graph};
    use crate::routing::compute_route;

    fn route(ids: &[&str]) -> Vec<LocationId> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    fn started(ids: &[&str]) -> GuidedNavigation {
        let mut nav = GuidedNavigation::new();
        nav.start_session(route(ids), "Room C").unwrap();
        nav
    }

    #[test]
    fn walks_route_to_completion() {
        let mut nav = started(&["A", "B", "C"]);
        assert_eq!(nav.current_location(), Ok("A"));
        assert_eq!(nav.next_location(), Ok(Some("B")));

        assert_eq!(nav.advance(), Ok(Advance::Moved("B".to_string())));
        assert_eq!(nav.advance(), Ok(Advance::Moved("C".to_string())));
        assert_eq!(nav.current_location(), Ok("C"));
        assert_eq!(nav.next_location(), Ok(None));
        assert_eq!(nav.has_arrived(), Ok(true));
        assert_eq!(nav.is_complete(), Ok(false));

        assert_eq!(nav.advance(), Ok(Advance::AlreadyAtDestination));
        assert_eq!(nav.is_complete(), Ok(true));
        assert_eq!(nav.current_location(), Ok("C"));

        // completion is sticky
        assert_eq!(nav.advance(), Ok(Advance::AlreadyAtDestination));
    }

    #[test]
    fn route_of_n_takes_n_minus_one_moves() {
        for n in 1..6 {
            let ids: Vec<String> = (0..n).map(|i| format!("L{i}")).collect();
            let mut nav = GuidedNavigation::new();
            nav.start_session(ids, "end").unwrap();

            for _ in 0..n - 1 {
                assert!(matches!(nav.advance(), Ok(Advance::Moved(_))));
            }
            assert_eq!(nav.session().map(NavigationSession::current_index), Some(n - 1));
            assert_eq!(nav.advance(), Ok(Advance::AlreadyAtDestination));
        }
    }

    #[test]
    fn empty_route_is_rejected() {
        let mut nav = GuidedNavigation::new();
        assert_eq!(
            nav.start_session(Vec::new(), "nowhere").err(),
            Some(NavigationError::EmptyRoute)
        );
        assert!(!nav.is_active());
    }

    #[test]
    fn cancelled_session_is_gone() {
        let mut nav = started(&["A", "B"]);
        assert!(nav.cancel().is_some());
        assert_eq!(nav.current_location(), Err(NavigationError::SessionNotFound));
        assert_eq!(nav.next_location(), Err(NavigationError::SessionNotFound));
        assert_eq!(nav.advance(), Err(NavigationError::SessionNotFound));
        assert_eq!(nav.is_complete(), Err(NavigationError::SessionNotFound));
        assert!(nav.cancel().is_none());
    }

    #[test]
    fn new_search_supersedes_session() {
        let mut nav = started(&["A", "B", "C"]);
        nav.advance().unwrap();
        nav.start_session(route(&["X", "Y"]), "Y").unwrap();
        assert_eq!(nav.current_location(), Ok("X"));
        assert_eq!(nav.session().map(NavigationSession::destination_label), Some("Y"));
    }

    #[test]
    fn restore_accepts_consistent_snapshot() {
        let snapshot = NavigationSession::from_parts(route(&["A", "B", "C"]), 1, "Room C");
        let mut nav = GuidedNavigation::restore(snapshot, Some("B")).unwrap();
        assert_eq!(nav.advance(), Ok(Advance::Moved("C".to_string())));
    }

    #[test]
    fn restore_rejects_out_of_range_index() {
        let snapshot = NavigationSession::from_parts(route(&["A", "B"]), 2, "B");
        assert!(matches!(
            GuidedNavigation::restore(snapshot, None),
            Err(NavigationError::InvalidSessionState(_))
        ));

        let empty = NavigationSession::from_parts(Vec::new(), 0, "B");
        assert!(matches!(
            GuidedNavigation::restore(empty, None),
            Err(NavigationError::InvalidSessionState(_))
        ));
    }

    #[test]
    fn restore_rejects_location_mismatch() {
        let snapshot = NavigationSession::from_parts(route(&["A", "B", "C"]), 1, "Room C");
        assert!(matches!(
            GuidedNavigation::restore(snapshot, Some("A")),
            Err(NavigationError::InvalidSessionState(_))
        ));
    }

    #[test]
    fn restore_in_rejects_unknown_locations() {
        let graph = build_location_graph(&[
            LocationRecord::new("A").connect("B", 3.0),
            LocationRecord::new("B"),
        ]);
        let stale = NavigationSession::from_parts(route(&["A", "gone"]), 0, "gone");
        assert!(matches!(
            GuidedNavigation::restore_in(&graph, stale, None),
            Err(NavigationError::InvalidSessionState(_))
        ));

        let fresh = NavigationSession::from_parts(route(&["A", "B"]), 0, "B");
        assert!(GuidedNavigation::restore_in(&graph, fresh, Some("A")).is_ok());
    }

    #[test]
    fn start_route_uses_goal_label() {
        let mut goal = LocationRecord::new("C");
        goal.display_name = Some("Lecture Hall".to_string());
        let graph = build_location_graph(&[
            LocationRecord::new("A").connect("C", 4.0),
            goal,
        ]);
        let plan = compute_route(&graph, "A", "C");

        let mut nav = GuidedNavigation::new();
        let session = nav.start_route(&graph, &plan).unwrap();
        assert_eq!(session.destination_label(), "Lecture Hall");
        assert_eq!(session.route(), ["A", "C"]);

        let no_route = compute_route(&graph, "C", "A");
        assert_eq!(
            nav.start_route(&graph, &no_route).err(),
            Some(NavigationError::EmptyRoute)
        );
    }

    #[test]
    fn session_value_round_trips_through_json() {
        let mut nav = started(&["A", "B"]);
        nav.advance().unwrap();
        let json = serde_json::to_string(&nav).unwrap();
        let snapshot: NavigationSession = serde_json::from_str(&json).unwrap();
        let restored = GuidedNavigation::restore(snapshot, Some("B")).unwrap();
        assert_eq!(restored, nav);

        // missing completion flag defaults to an unacknowledged session
        let legacy: NavigationSession = serde_json::from_str(
            r#"{"route":["A","B"],"current_index":0,"destination_label":"B"}"#,
        )
        .unwrap();
        assert!(!legacy.is_completed());
    }

    #[test]
    fn persisted_out_of_range_snapshot_is_rejected() {
        let snapshot: NavigationSession = serde_json::from_str(
            r#"{"route":["A","B"],"current_index":7,"destination_label":"B"}"#,
        )
        .unwrap();
        assert!(matches!(
            GuidedNavigation::restore(snapshot, None),
            Err(NavigationError::InvalidSessionState(_))
        ));
    }

    #[test]
    fn unvalidated_session_reports_invalid_state() {
        let mut nav = GuidedNavigation {
            session: Some(NavigationSession::from_parts(route(&["A", "B"]), 7, "B")),
        };
        assert!(matches!(
            nav.current_location(),
            Err(NavigationError::InvalidSessionState(_))
        ));
        assert!(matches!(
            nav.next_location(),
            Err(NavigationError::InvalidSessionState(_))
        ));
        assert!(matches!(
            nav.advance(),
            Err(NavigationError::InvalidSessionState(_))
        ));
        assert_eq!(nav.has_arrived(), Ok(false));

        let mut empty = GuidedNavigation {
            session: Some(NavigationSession::from_parts(Vec::new(), 0, "nowhere")),
        };
        assert!(matches!(
            empty.advance(),
            Err(NavigationError::InvalidSessionState(_))
        ));
        assert_eq!(empty.is_complete(), Ok(false));
    }
}
