use serde::{Deserialize, Serialize};

use crate::ids::{ChampionId, Position};
use crate::snapshot::Snapshot;

/// Identifiers of the player in the Riot API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiotPlayerSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summoner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
}

/// Identifiers of the player in each upstream data source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerSources {
    #[serde(skip_serializing_if = "crate::is_default")]
    pub riot_lol_api: RiotPlayerSource,
}

/// A rune chosen before the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rune {
    /// Primary tree, secondary tree, then stat perks.
    pub slot: u8,
    pub id: u32,
    /// Riot-provided end of game statistics for the rune.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<i64>,
}

/// A summoner spell chosen before the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerSpell {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casts: Option<u32>,
}

/// An item held at the end of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u32,
    /// Inventory slot, `0..=6`. Not an index: empty slots are skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<u8>,
}

/// End of game statistics for a player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerEndOfGameStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_blood: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_blood_assist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_turret: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_turret_assist: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaths: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wards_placed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wards_killed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision_wards_bought: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision_score: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub killing_sprees: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_killing_spree: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triple_kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quadra_kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penta_kills: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub turret_kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inhibitor_kills: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monster_kills: Option<u32>,

    /// Includes damage to minions and monsters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_dealt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_dealt_to_champions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_taken: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_dealt_to_objectives: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_heal: Option<u64>,

    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_time_spent_living: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_spent: Option<u32>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

/// Buying, selling, undoing or otherwise changing an item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    /// `PURCHASED`, `SOLD`, `UNDO`, `PICKED_UP`, `USED`, `DESTROYED`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// Resulting item of an `UNDO`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_undo_id: Option<u32>,
}

/// Placing or destroying a ward.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WardEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// `PLACED` or `KILLED`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward_type: Option<String>,
}

/// A skill or evolution point spent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillLevelUpEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    /// `NORMAL` or `EVOLVE`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Skill slot, `1..=4`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<u8>,
}

/// A large jungle monster killed by the player.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LargeMonsterKill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// First bloods, multi-kills and aces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecialKill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_kill_length: Option<u8>,
}

/// A player in a match.
///
/// Either `id` or `champion_id` identifies the player across sources; a
/// source is only guaranteed to provide one of them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    /// Usually the Riot participant id; referenced by event actor fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_game_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_icon_id: Option<u32>,

    /// `TOP`, `JGL`, `MID`, `BOT`, `SUP`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub champion_id: Option<ChampionId>,

    #[serde(skip_serializing_if = "crate::is_default")]
    pub sources: PlayerSources,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_rune_tree_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_rune_tree_id: Option<u32>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub runes: Vec<Rune>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub summoner_spells: Vec<SummonerSpell>,

    #[serde(skip_serializing_if = "crate::is_default")]
    pub end_of_game_stats: PlayerEndOfGameStats,

    /// State of the player over time, keyed by timestamp.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub snapshots: Vec<Snapshot>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items_events: Vec<ItemEvent>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wards_events: Vec<WardEvent>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills_level_up_events: Vec<SkillLevelUpEvent>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub large_monsters_kills: Vec<LargeMonsterKill>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub special_kills: Vec<SpecialKill>,
}

impl Player {
    /// A player known only by champion.
    pub fn with_champion(champion_id: u16) -> Self {
        Self {
            champion_id: Some(ChampionId(champion_id)),
            ..Default::default()
        }
    }

    /// A player known only by player id.
    pub fn with_id(id: u32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}
