//! Route table and the access guard over the protected subtree.
//!
//! The guard decides from the persisted token alone. The in-memory session
//! is deliberately not consulted: a navigation can be allowed before the
//! session is rehydrated, and denied when the persisted token was cleared
//! out-of-band while the session still claims logged-in. That asymmetry is
//! the access-control boundary.

use crate::storage::TokenStore;

/// Where unauthenticated navigations are sent.
pub const LOGIN_PATH: &str = "/login";

/// Component key rendered for paths nothing else matches.
pub const NOT_FOUND_KEY: &str = "NOT_FOUND";

/// One navigable route.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    /// Match the whole path instead of a prefix.
    pub exact: bool,
    /// Key of the component rendered for this route.
    pub key: &'static str,
    /// Entry point of the guarded subtree; the token is checked once here
    /// per navigation, not per leaf route.
    pub guarded: bool,
    /// Matching this route immediately navigates elsewhere.
    pub redirect_to: Option<&'static str>,
    pub children: Vec<Route>,
}

impl Route {
    pub fn new(path: &'static str, key: &'static str) -> Self {
        Self {
            path,
            exact: false,
            key,
            guarded: false,
            redirect_to: None,
            children: Vec::new(),
        }
    }

    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    pub fn guarded(mut self) -> Self {
        self.guarded = true;
        self
    }

    pub fn redirect(mut self, target: &'static str) -> Self {
        self.redirect_to = Some(target);
        self
    }

    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }
}

/// The application's route table, in match order.
pub fn route_table() -> Vec<Route> {
    vec![
        Route::new("/", "HOME").exact().redirect("/app"),
        Route::new("/login", "LOGIN").exact(),
        Route::new("/register", "REGISTER").exact(),
        Route::new("/app", "APP").guarded().with_children(vec![
            Route::new("/app", "APP_ROOT").exact(),
            Route::new("/app/notes", "NOTE_CONSOLE").exact(),
        ]),
        Route::new("*", NOT_FOUND_KEY).exact(),
    ]
}

/// Access decision for the guarded subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

/// Outcome of resolving a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Render the component registered under this key.
    Render(&'static str),
    /// Navigate again to the given path.
    Redirect(&'static str),
}

/// Decide access to the protected subtree from the persisted token alone.
///
/// The store is re-read on every call; nothing is cached across
/// navigations. An unreadable store counts as "no token".
pub fn guard(tokens: &dyn TokenStore) -> RouteDecision {
    match tokens.load() {
        Ok(Some(token)) if !token.is_empty() => RouteDecision::Allow,
        Ok(_) => RouteDecision::Redirect(LOGIN_PATH),
        Err(err) => {
            tracing::warn!(error = %err, "token store unreadable, redirecting to login");
            RouteDecision::Redirect(LOGIN_PATH)
        }
    }
}

fn matches(route: &Route, path: &str) -> bool {
    if route.path == "*" {
        return true;
    }
    if route.exact {
        return route.path == path;
    }
    path == route.path
        || path
            .strip_prefix(route.path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Resolve a navigation against the table.
///
/// Routes are tried in order. The guard runs once at the guarded subtree's
/// entry point; child routes are then matched without re-checking the
/// token.
pub fn resolve(table: &[Route], path: &str, tokens: &dyn TokenStore) -> Navigation {
    for route in table {
        if !matches(route, path) {
            continue;
        }
        if let Some(target) = route.redirect_to {
            return Navigation::Redirect(target);
        }
        if route.guarded {
            if let RouteDecision::Redirect(target) = guard(tokens) {
                return Navigation::Redirect(target);
            }
        }
        if route.children.is_empty() {
            return Navigation::Render(route.key);
        }
        for child in &route.children {
            if matches(child, path) {
                return Navigation::Render(child.key);
            }
        }
        // Inside the subtree but no leaf matched: render the subtree entry.
        return Navigation::Render(route.key);
    }
    Navigation::Render(NOT_FOUND_KEY)
}
