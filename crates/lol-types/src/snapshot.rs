use serde::{Deserialize, Serialize};

use crate::ids::Position;

/// Champion stats at a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability_haste: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability_power: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_damage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_speed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_resist: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_speed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_max: Option<i32>,
}

/// Cumulative damage stats at a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DamageStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_damage_done: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_damage_done_to_champions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_damage_taken: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_damage_done: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_damage_done_to_champions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_damage_taken: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_damage_done: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_damage_done_to_champions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_damage_taken: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_done: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_done_to_champions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_taken: Option<u64>,
}

/// The state of a player at a point in time.
///
/// The Riot API provides one snapshot per minute. Snapshots of the same
/// player in two sources correspond when their timestamps are equal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Seconds since the match start.
    pub timestamp: f64,

    /// Absent for the final snapshot in the Riot API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_gold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    /// Minions and monsters killed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monsters_killed: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell1_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell2_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultimate_available: Option<bool>,

    #[serde(default, skip_serializing_if = "crate::is_default")]
    pub champion_stats: ChampionStats,
    #[serde(default, skip_serializing_if = "crate::is_default")]
    pub damage_stats: DamageStats,
}

impl Snapshot {
    /// An otherwise empty snapshot at `timestamp` seconds.
    pub fn at(timestamp: f64) -> Self {
        Self {
            timestamp,
            position: None,
            current_gold: None,
            total_gold: None,
            xp: None,
            level: None,
            cs: None,
            monsters_killed: None,
            is_alive: None,
            spell1_available: None,
            spell2_available: None,
            ultimate_available: None,
            champion_stats: ChampionStats::default(),
            damage_stats: DamageStats::default(),
        }
    }
}
