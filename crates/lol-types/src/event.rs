use serde::{Deserialize, Serialize};

use crate::ids::Position;

/// A match-level event: champion kills and anything else involving players
/// of both teams.
///
/// Events carry no identity key. Several events may share a timestamp, so
/// two sources reporting the same event cannot be told apart from two
/// distinct events.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    /// Seconds since the match start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// The acting player, referring to `Player::id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub victim_id: Option<u32>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assists_ids: Vec<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounty: Option<u32>,
}

impl Event {
    /// An event of the given kind at `timestamp` seconds.
    pub fn at(timestamp: f64, kind: impl Into<String>) -> Self {
        Self {
            timestamp: Some(timestamp),
            kind: Some(kind.into()),
            ..Default::default()
        }
    }
}
