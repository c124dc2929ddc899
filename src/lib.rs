//! campaign-console: action-driven application state core for a
//! campaign/location management tool.
//!
//! All state lives in one tree, mutated only through dispatched actions
//! folded by pure reducers; persistence and navigation read the results.
//!
//! # Core concepts
//!
//! - **Actions** ([`AppAction`]): the closed vocabulary of state
//!   transitions, including network completions.
//! - **Reducers** ([`reducer`] and the three entity reducers): pure
//!   transitions; unknown actions are no-ops.
//! - **App store** ([`AppStore`]): the single dispatch entry point. Owns
//!   the state tree and the persisted token store, and applies the
//!   session-persistence effects after each reducer pass, within the same
//!   dispatch turn.
//! - **Route guard** ([`guard`], [`resolve`]): gates the protected subtree
//!   on the persisted token alone, re-read on every navigation.
//!
//! # Example
//!
//! ```ignore
//! use campaign_console::{resolve, route_table, AppAction, AppStore, FileTokenStore};
//!
//! let tokens = FileTokenStore::at_default_location()?;
//! let mut app = AppStore::new(tokens);
//!
//! // A resolved network call produced a completion action:
//! app.dispatch(AppAction::CampaignSelect("c1".into()));
//!
//! // Navigation consults the persisted token, not the in-memory session:
//! let nav = resolve(&route_table(), "/app/notes", app.tokens());
//! ```
//!
//! Async work follows a two-phase pattern: the caller spawns an [`api`]
//! function with an action sender, and the eventual completion is
//! dispatched like any other action. Dispatches are synchronous and never
//! interleave; completions apply in arrival order.

pub mod action;
pub mod api;
pub mod app;
pub mod effect;
pub mod reducer;
pub mod routes;
pub mod state;
pub mod storage;
pub mod store;

pub use action::{AppAction, FetchPayload, LoginPayload, UserInfo};
pub use app::AppStore;
pub use effect::{DispatchResult, Effect};
pub use reducer::{campaign_reducer, location_reducer, reducer, session_reducer};
pub use routes::{
    guard, resolve, route_table, Navigation, Route, RouteDecision, LOGIN_PATH, NOT_FOUND_KEY,
};
pub use state::{
    filter_by_campaign, AppState, Campaign, CampaignState, Location, LocationState, Session,
};
pub use storage::{FileTokenStore, MemoryTokenStore, StorageError, TokenStore};
pub use store::{Action, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store};
