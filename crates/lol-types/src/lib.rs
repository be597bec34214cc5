//! Record model for a single League of Legends match.
//!
//! A [`MatchRecord`] is a hierarchical, partial view of one game as produced
//! by a single data source (live telemetry, post-game statistics, manual
//! annotation). Every scalar is an `Option` so that "absent" and "present
//! but zero" stay distinct; every sequence is a `Vec` where empty means the
//! source did not provide it.
//!
//! The wire format is JSON with camelCase field names and `BLUE`/`RED` team
//! keys. Absent scalars, empty sequences and all-absent nested records are
//! omitted on encode, and missing fields decode as absent.
//!
//! # Key Types
//!
//! - [`MatchRecord`] -- Root entity: metadata, two teams, match-level events
//! - [`Team`] / [`Teams`] / [`Side`] -- Exactly two sides, keyed by side
//! - [`Player`] -- Identity (player id, champion id), stats, snapshots
//! - [`Snapshot`] -- State of a player at a timestamp
//! - [`Event`] -- A timestamped match-level event
//! - [`NodeKind`] -- How a node of the record tree is classified for merging

pub mod event;
pub mod ids;
pub mod kind;
pub mod player;
pub mod record;
pub mod side;
pub mod snapshot;
pub mod team;

pub use event::Event;
pub use ids::{ChampionId, Position};
pub use kind::NodeKind;
pub use player::{
    Item, ItemEvent, LargeMonsterKill, Player, PlayerEndOfGameStats, PlayerSources, Rune,
    RiotPlayerSource, SkillLevelUpEvent, SpecialKill, SummonerSpell, WardEvent,
};
pub use record::{GameSources, MatchRecord, PickBan, RiotGameSource};
pub use side::{Side, Teams};
pub use snapshot::{ChampionStats, DamageStats, Snapshot};
pub use team::{BuildingKill, EpicMonsterKill, Team, TeamEndOfGameStats};

/// `skip_serializing_if` predicate for nested records: a record equal to its
/// default carries no information and is omitted from the wire format.
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
