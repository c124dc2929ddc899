//! HTTP client functions: async side effects isolated from the store.
//!
//! Each function runs one request and sends a completion action back over
//! the channel; callers spawn these as tasks and never await a value. A
//! completion arriving after its originating view has gone away is still a
//! safe dispatch, and completions land in arrival order: when two fetches
//! race, the later-completing one wins. In-flight requests are not
//! cancelable. Retry policy, if any, belongs to the caller.

use serde::Deserialize;
use serde_json::json;
use tokio::sync::mpsc;

use crate::action::{AppAction, FetchPayload, LoginPayload};
use crate::state::{Campaign, Location};

/// List endpoints wrap their items in a `data` array.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    data: Vec<T>,
}

/// Authenticate and report back with `LoginDidSucceed` or
/// `RequestDidError`.
pub async fn login(
    base_url: &str,
    username: &str,
    password: &str,
    tx: mpsc::UnboundedSender<AppAction>,
) {
    let url = format!("{base_url}/auth/login");
    let result = async {
        let response = reqwest::Client::new()
            .post(&url)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?
            .error_for_status()?;
        let payload: LoginPayload = response.json().await?;
        Ok::<_, reqwest::Error>(payload)
    }
    .await;

    let action = match result {
        Ok(payload) => AppAction::LoginDidSucceed(payload),
        Err(err) => AppAction::RequestDidError(err.to_string()),
    };

    // Receiver may already be gone; the completion is then dropped.
    let _ = tx.send(action);
}

/// Fetch the campaign list and report back with a campaigns-only
/// `FetchDidLoad`.
pub async fn fetch_campaigns(base_url: &str, token: &str, tx: mpsc::UnboundedSender<AppAction>) {
    let action = match fetch_list::<Campaign>(base_url, "campaigns", token).await {
        Ok(data) => AppAction::FetchDidLoad(FetchPayload::campaigns(data)),
        Err(err) => AppAction::RequestDidError(err.to_string()),
    };
    let _ = tx.send(action);
}

/// Fetch the location list and report back with a locations-only
/// `FetchDidLoad`.
pub async fn fetch_locations(base_url: &str, token: &str, tx: mpsc::UnboundedSender<AppAction>) {
    let action = match fetch_list::<Location>(base_url, "locations", token).await {
        Ok(data) => AppAction::FetchDidLoad(FetchPayload::locations(data)),
        Err(err) => AppAction::RequestDidError(err.to_string()),
    };
    let _ = tx.send(action);
}

async fn fetch_list<T: serde::de::DeserializeOwned>(
    base_url: &str,
    resource: &str,
    token: &str,
) -> Result<Vec<T>, reqwest::Error> {
    let url = format!("{base_url}/{resource}");
    let response = reqwest::Client::new()
        .get(&url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;
    let list: ListResponse<T> = response.json().await?;
    Ok(list.data)
}
