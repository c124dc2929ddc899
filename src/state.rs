//! Application state: the single source of truth.
//!
//! Only reducers mutate these types; everything else reads a snapshot.

use serde::{Deserialize, Serialize};

/// Authentication session for the current user.
///
/// `is_logged_in` is true iff `token` is non-empty and was set by a
/// successful login; the default value is the logged-out session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub user_id: String,
    pub is_logged_in: bool,
}

/// A campaign as returned by the server.
///
/// Fields beyond `id` are opaque to the state core and carried verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A location belonging to a campaign.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(rename = "campaignId")]
    pub campaign_id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Campaign list, in server-returned order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignState {
    pub raw_list: Vec<Campaign>,
}

/// Location lists: the full fetch result plus the filtered view.
///
/// `campaign_list` is always a subset of `raw_list` in `raw_list` order,
/// recomputed wholesale by the campaign-select action and never patched
/// incrementally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationState {
    pub raw_list: Vec<Location>,
    pub campaign_list: Vec<Location>,
}

/// The composed state tree, created once at process start.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: Session,
    pub campaigns: CampaignState,
    pub locations: LocationState,
}

/// All locations belonging to `campaign_id`, in `raw_list` order.
///
/// O(n) full recompute per call; list sizes are bounded by a single fetch
/// response. An empty result is valid.
pub fn filter_by_campaign(raw_list: &[Location], campaign_id: &str) -> Vec<Location> {
    raw_list
        .iter()
        .filter(|location| location.campaign_id == campaign_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, campaign_id: &str) -> Location {
        Location {
            id: id.into(),
            campaign_id: campaign_id.into(),
            extra: Default::default(),
        }
    }

    #[test]
    fn filter_keeps_only_matching_locations_in_order() {
        let raw = vec![
            location("a", "c1"),
            location("b", "c2"),
            location("c", "c1"),
        ];

        let filtered = filter_by_campaign(&raw, "c1");
        assert_eq!(filtered, vec![location("a", "c1"), location("c", "c1")]);
    }

    #[test]
    fn filter_with_no_matches_is_empty_not_an_error() {
        let raw = vec![location("a", "c1")];
        assert!(filter_by_campaign(&raw, "c9").is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let raw = vec![
            location("a", "c1"),
            location("b", "c2"),
            location("c", "c1"),
        ];

        let once = filter_by_campaign(&raw, "c1");
        let twice = filter_by_campaign(&once, "c1");
        assert_eq!(once, twice);
    }

    #[test]
    fn opaque_fields_survive_deserialization() {
        let raw = r#"{"id":"a","campaignId":"c1","name":"Harbor","notes":7}"#;
        let parsed: Location = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.id, "a");
        assert_eq!(parsed.campaign_id, "c1");
        assert_eq!(parsed.extra["name"], "Harbor");
        assert_eq!(parsed.extra["notes"], 7);
    }

    #[test]
    fn default_session_is_logged_out() {
        let session = Session::default();
        assert!(session.token.is_empty());
        assert!(!session.is_logged_in);
    }
}
