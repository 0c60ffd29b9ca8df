//! Navigation guarding against the session's authorization state.
//!
//! The guard is a pure function evaluated once per navigation attempt. It
//! never performs I/O and has no failure mode; a misconfigured route
//! table is the collaborator's bug, not a runtime error here.

use crate::auth::Session;
use crate::routing::table::{Route, RouteName};

/// Decision for a single navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed to its target.
    Allow,
    /// Redirect to the named view instead.
    Redirect(RouteName),
}

/// Evaluates a navigation attempt against the current session.
///
/// Rules, in order:
///
/// 1. The target requires authorization and the session has no access
///    token: redirect to [`RouteName::Authorization`].
/// 2. The target is the authorization view and the session already has a
///    token: redirect to [`RouteName::Controls`], so an authorized user
///    cannot re-enter the OAuth flow.
/// 3. Otherwise, allow.
///
/// Only token presence is consulted; an expired token still counts as
/// authorized here and is dealt with by the refresh service at call time.
///
/// # Example
///
/// ```rust
/// use spotify_session::{check_navigation, GuardDecision, RouteName, RouteTable, Session};
///
/// let table = RouteTable::default();
/// let session = Session::new();
///
/// let decision = check_navigation(table.get(RouteName::Playlists).unwrap(), &session);
/// assert_eq!(decision, GuardDecision::Redirect(RouteName::Authorization));
/// ```
#[must_use]
pub fn check_navigation(target: &Route, session: &Session) -> GuardDecision {
    if target.requires_authorization && !session.is_authorized() {
        return GuardDecision::Redirect(RouteName::Authorization);
    }

    if target.name == RouteName::Authorization && session.is_authorized() {
        return GuardDecision::Redirect(RouteName::Controls);
    }

    GuardDecision::Allow
}

// Verify GuardDecision is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GuardDecision>();
};
