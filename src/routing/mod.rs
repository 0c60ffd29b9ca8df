//! Client-side route guarding.
//!
//! This module provides the navigation interceptor for an out-of-scope
//! view layer:
//!
//! - [`RouteTable`] / [`Route`] / [`RouteName`]: the destinations and
//!   their authorization requirements
//! - [`check_navigation`]: the per-navigation guard decision
//!
//! The guard consumes exactly two inputs: the target route's
//! `requires_authorization` flag and whether the session currently holds
//! an access token. Everything else about routing (history, rendering,
//! path matching) belongs to the host application's router.

mod guard;
mod table;

pub use guard::{check_navigation, GuardDecision};
pub use table::{Route, RouteName, RouteTable};
