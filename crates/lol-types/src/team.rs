use serde::{Deserialize, Serialize};

use crate::ids::{ChampionId, Position};
use crate::player::Player;
use crate::side::Side;

/// End of game statistics for a whole team.
///
/// Structure kills belong to the team because minions can land them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamEndOfGameStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turret_kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inhibitor_kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_turret: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_inhibitor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rift_herald_kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragon_kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baron_kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_rift_herald: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_dragon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_baron: Option<bool>,
}

/// An epic monster killed by a team.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EpicMonsterKill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Player landing the last hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub killer_id: Option<u32>,
    /// Assisting players as shown in client; may include opponents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assists_ids: Vec<u32>,
    /// `DRAGON`, `DRAGON_SOUL`, `BARON`, `RIFT_HERALD`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// `CLOUD`, `INFERNAL`, `MOUNTAIN`, `OCEAN`, `ELDER`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
}

/// A structure destroyed by a team.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingKill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// `TURRET`, `TURRET_PLATE`, `INHIBITOR`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// `TOP`, `MID`, `BOT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane: Option<String>,
    /// Side the structure belonged to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub killer_id: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assists_ids: Vec<u32>,
    /// `OUTER`, `INNER`, `INHIBITOR`, `NEXUS`; absent for inhibitors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turret_location: Option<String>,
}

/// One of the two teams of a match. Its side is the key it is stored under.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<Player>,

    /// Champions banned by this team.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bans: Vec<ChampionId>,

    #[serde(skip_serializing_if = "crate::is_default")]
    pub end_of_game_stats: TeamEndOfGameStats,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub epic_monsters_kills: Vec<EpicMonsterKill>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buildings_kills: Vec<BuildingKill>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_surrendered: Option<bool>,
}

impl Team {
    /// Find a player by champion.
    pub fn player_by_champion(&self, champion_id: ChampionId) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.champion_id == Some(champion_id))
    }

    /// Find a player by player id.
    pub fn player_by_id(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == Some(id))
    }
}
