//! Route table for the view layer.
//!
//! The crate does not render views; it only needs to know, per
//! destination, whether authorization is required. The table here mirrors
//! the original application's router so the guard has something concrete
//! to evaluate against, and so hosts can extend or replace it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical names of the application's views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteName {
    /// Landing page, always reachable.
    Home,
    /// OAuth authorization view; entry point for unauthorized users.
    Authorization,
    /// Playback controls; the post-authorization landing view.
    Controls,
    /// Playlist overview.
    Playlists,
    /// Single-playlist editor.
    Editor,
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Home => "Home",
            Self::Authorization => "Authorization",
            Self::Controls => "Controls",
            Self::Playlists => "Playlists",
            Self::Editor => "Editor",
        };
        f.write_str(name)
    }
}

/// A single routing destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// URL path pattern (e.g. `/playlists/:id`).
    pub path: String,
    /// Logical view name.
    pub name: RouteName,
    /// Whether navigating here requires an authorized session.
    pub requires_authorization: bool,
}

impl Route {
    /// Creates a route entry.
    #[must_use]
    pub fn new(path: impl Into<String>, name: RouteName, requires_authorization: bool) -> Self {
        Self {
            path: path.into(),
            name,
            requires_authorization,
        }
    }
}

/// The set of routes the guard evaluates against.
///
/// [`RouteTable::default`] reproduces the original application's five
/// routes; hosts with different views can build their own table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates a table from explicit entries.
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Returns all routes in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Looks up a route by its logical name.
    #[must_use]
    pub fn get(&self, name: RouteName) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(vec![
            Route::new("/", RouteName::Home, false),
            Route::new("/authorize", RouteName::Authorization, false),
            Route::new("/controls", RouteName::Controls, true),
            Route::new("/playlists", RouteName::Playlists, true),
            Route::new("/playlists/:id", RouteName::Editor, true),
        ])
    }
}
