//! Reducers: pure transitions folding an action into the next state.
//!
//! Each entity reducer recognizes a fixed subset of actions and leaves its
//! substate untouched for everything else, reporting no change. The root
//! reducer is the combinator: it routes every action to all three entity
//! reducers and merges their results.

use crate::action::AppAction;
use crate::effect::{DispatchResult, Effect};
use crate::state::{filter_by_campaign, AppState, CampaignState, LocationState, Session};

/// Root reducer over the composed state tree.
pub fn reducer(state: &mut AppState, action: AppAction) -> DispatchResult<Effect> {
    session_reducer(&mut state.session, &action)
        .merge(campaign_reducer(&mut state.campaigns, &action))
        .merge(location_reducer(&mut state.locations, &action))
}

/// Session transitions.
///
/// The machine is re-enterable: logout → login → logout is valid forever.
pub fn session_reducer(session: &mut Session, action: &AppAction) -> DispatchResult<Effect> {
    match action {
        AppAction::LoginDidSucceed(payload) => {
            *session = Session {
                token: payload.token.clone(),
                username: payload.user.username.clone(),
                user_id: payload.user.id.clone(),
                is_logged_in: true,
            };
            DispatchResult::changed_with(Effect::PersistToken(payload.token.clone()))
        }
        AppAction::RequestDidError(_) => {
            // Any auth-adjacent failure means "not authenticated". The
            // persisted token is left alone; only logout clears it.
            if *session == Session::default() {
                DispatchResult::unchanged()
            } else {
                *session = Session::default();
                DispatchResult::changed()
            }
        }
        AppAction::Logout => {
            // The clear effect is issued even for an already-empty session;
            // removing an absent token is a no-op in the store.
            if *session == Session::default() {
                DispatchResult::effect(Effect::ClearToken)
            } else {
                *session = Session::default();
                DispatchResult::changed_with(Effect::ClearToken)
            }
        }
        _ => DispatchResult::unchanged(),
    }
}

/// Campaign list transitions.
pub fn campaign_reducer(state: &mut CampaignState, action: &AppAction) -> DispatchResult<Effect> {
    match action {
        AppAction::FetchDidLoad(payload) => match &payload.campaigns {
            // A later fetch fully supersedes the previous list, including
            // dropping entries absent from it.
            Some(data) => {
                state.raw_list = data.clone();
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },
        _ => DispatchResult::unchanged(),
    }
}

/// Location list transitions.
pub fn location_reducer(state: &mut LocationState, action: &AppAction) -> DispatchResult<Effect> {
    match action {
        AppAction::FetchDidLoad(payload) => match &payload.locations {
            // Replaces the raw list only. An active filter view goes stale
            // until the next CampaignSelect; callers re-issue it.
            Some(data) => {
                state.raw_list = data.clone();
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },
        AppAction::CampaignSelect(campaign_id) => {
            let filtered = filter_by_campaign(&state.raw_list, campaign_id);
            if filtered == state.campaign_list {
                DispatchResult::unchanged()
            } else {
                state.campaign_list = filtered;
                DispatchResult::changed()
            }
        }
        _ => DispatchResult::unchanged(),
    }
}
