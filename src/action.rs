//! Actions: the closed vocabulary of state transitions.
//!
//! One variant per wire kind. Completion actions carry the `Did` infix;
//! they are produced by resolved network calls and dispatched in arrival
//! order, so a later-completing fetch supersedes an earlier one.

use serde::Deserialize;

use crate::state::{Campaign, Location};
use crate::store::Action;

/// Identity carried by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
}

/// Payload of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    pub user: UserInfo,
}

/// Payload of a completed list fetch.
///
/// A single completion kind covers both entity lists; each reducer reads
/// only its own key and ignores a payload missing it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchPayload {
    pub campaigns: Option<Vec<Campaign>>,
    pub locations: Option<Vec<Location>>,
}

impl FetchPayload {
    /// A campaigns-only fetch result.
    pub fn campaigns(data: Vec<Campaign>) -> Self {
        Self {
            campaigns: Some(data),
            ..Default::default()
        }
    }

    /// A locations-only fetch result.
    pub fn locations(data: Vec<Location>) -> Self {
        Self {
            locations: Some(data),
            ..Default::default()
        }
    }
}

/// Application actions.
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    /// Authentication succeeded; sets the session and persists the token.
    LoginDidSucceed(LoginPayload),
    /// A network request failed; resets the session to logged-out. The
    /// message is surfaced to the UI layer, not stored in the session.
    RequestDidError(String),
    /// The user logged out; resets the session and clears the persisted
    /// token.
    Logout,
    /// A list fetch completed; replaces the corresponding raw list.
    FetchDidLoad(FetchPayload),
    /// A campaign was selected; recomputes the filtered location view.
    CampaignSelect(String),
}

impl Action for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::LoginDidSucceed(_) => "LoginDidSucceed",
            AppAction::RequestDidError(_) => "RequestDidError",
            AppAction::Logout => "Logout",
            AppAction::FetchDidLoad(_) => "FetchDidLoad",
            AppAction::CampaignSelect(_) => "CampaignSelect",
        }
    }
}
