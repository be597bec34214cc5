use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::ids::ChampionId;
use crate::side::{Side, Teams};

/// Identifiers of the game in the Riot API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiotGameSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
}

/// Identifiers of the game in each upstream data source.
///
/// Each source that contributed to a record sets its own sub-record, which
/// is what allows records from different sources to be merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSources {
    #[serde(skip_serializing_if = "crate::is_default")]
    pub riot_lol_api: RiotGameSource,
}

/// A single pick or ban during champion select.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickBan {
    pub champion_id: ChampionId,
    /// `true` for a ban, `false` for a pick.
    pub is_ban: bool,
    pub team: Side,
}

/// A single match.
///
/// Time-related fields are expressed in seconds, with fractional precision
/// where the source provides it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRecord {
    #[serde(skip_serializing_if = "crate::is_default")]
    pub sources: GameSources,

    /// Match duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Start of the match, RFC 3339 with seconds precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<FixedOffset>>,

    /// `XX.YY` patch, the recommended version field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,

    /// Full `XX.YY.ZZ.AA` game version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_version: Option<String>,

    /// The only place the result of the match appears.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Side>,

    #[serde(skip_serializing_if = "crate::is_default")]
    pub teams: Teams,

    /// Match-level events, ordered by timestamp. Timestamps are not unique.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament: Option<String>,

    /// Index of this game in its series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_in_series: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vod: Option<String>,

    /// Champion select, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub picks_bans: Vec<PickBan>,
}

impl MatchRecord {
    /// A record with no data at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total number of players across both teams.
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(|(_, team)| team.players.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Snapshot};
    use serde_json::json;

    #[test]
    fn empty_record_encodes_to_empty_object() {
        let json = serde_json::to_value(MatchRecord::empty()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn missing_fields_decode_as_absent() {
        let record: MatchRecord = serde_json::from_value(json!({"patch": "10.11"})).unwrap();
        assert_eq!(record.patch.as_deref(), Some("10.11"));
        assert_eq!(record.duration, None);
        assert!(record.teams.blue.players.is_empty());
        assert_ne!(record, MatchRecord::empty());
    }

    #[test]
    fn zero_is_kept_distinct_from_absent() {
        let mut player = Player::with_champion(1);
        player.end_of_game_stats.kills = Some(0);
        let mut record = MatchRecord::empty();
        record.teams.blue.players.push(player);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            json!({"teams": {"BLUE": {"players": [
                {"championId": 1, "endOfGameStats": {"kills": 0}}
            ]}}})
        );

        let parsed: MatchRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let mut record = MatchRecord::empty();
        record.game_version = Some("10.11.322.2991".into());
        record.game_in_series = Some(2);
        record.winner = Some(Side::Red);
        record.sources.riot_lol_api.game_id = Some(4_567_890);
        record.sources.riot_lol_api.platform_id = Some("EUW1".into());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            json!({
                "sources": {"riotLolApi": {"gameId": 4567890, "platformId": "EUW1"}},
                "gameVersion": "10.11.322.2991",
                "winner": "RED",
                "gameInSeries": 2
            })
        );
    }

    #[test]
    fn start_time_is_rfc3339() {
        let record: MatchRecord =
            serde_json::from_value(json!({"start": "2020-05-27T02:23:02+00:00"})).unwrap();
        let start = record.start.unwrap();
        assert_eq!(start.timestamp(), 1_590_546_182);
    }

    #[test]
    fn snapshot_requires_timestamp() {
        let parsed: Result<Snapshot, _> = serde_json::from_value(json!({"cs": 10}));
        assert!(parsed.is_err());

        let parsed: Snapshot = serde_json::from_value(json!({"timestamp": 60.0, "cs": 5})).unwrap();
        assert_eq!(parsed.timestamp, 60.0);
        assert_eq!(parsed.cs, Some(5));
    }

    #[test]
    fn player_count_spans_both_teams() {
        let mut record = MatchRecord::empty();
        record.teams.blue.players.push(Player::with_champion(1));
        record.teams.red.players.push(Player::with_champion(2));
        record.teams.red.players.push(Player::with_champion(3));
        assert_eq!(record.player_count(), 3);
    }
}
