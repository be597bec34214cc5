//! Per-field list policies.
//!
//! Every list element type declares exactly one [`ListPolicy`]. The table
//! below is the whole of it:
//!
//! | Element | Field(s) | Policy |
//! |---|---|---|
//! | [`Player`] | `teams.*.players` | keyed by `championId`, then `id` |
//! | [`Snapshot`] | `players[].snapshots` | keyed by `timestamp`, then sorted |
//! | [`Event`] | `events` | concatenated, then sorted by timestamp |
//! | everything else | bans, objective and structure kills, picks and bans, runes, spells, items, player events | equality only |

use std::fmt;

use lol_types::{
    BuildingKill, ChampionId, EpicMonsterKill, Event, Item, ItemEvent, LargeMonsterKill,
    NodeKind, PickBan, Player, Rune, SkillLevelUpEvent, Snapshot, SpecialKill, SummonerSpell,
    WardEvent,
};
use serde::Serialize;

use crate::context::MergeContext;
use crate::error::MergeResult;
use crate::order;
use crate::reconcile;

/// How two versions of a list-shaped field are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPolicy {
    /// Match elements on identity keys and deep-merge matched pairs.
    Keyed,
    /// Append both sides and stable-sort by timestamp.
    ConcatenateByTimestamp,
    /// Non-empty sides must be element-wise equal.
    EqualityOnly,
}

impl fmt::Display for ListPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyed => "keyed",
            Self::ConcatenateByTimestamp => "concatenate-by-timestamp",
            Self::EqualityOnly => "equality-only",
        };
        f.write_str(name)
    }
}

/// A type that can appear as the element of a list-shaped field.
pub trait ListMerge: Sized {
    const POLICY: ListPolicy;
    const KIND: NodeKind;

    fn merge_list(ctx: &mut MergeContext, base: &[Self], incoming: &[Self])
        -> MergeResult<Vec<Self>>;
}

/// Take the non-empty side, or require both sides to be equal.
pub fn equality_only<T>(ctx: &MergeContext, base: &[T], incoming: &[T]) -> MergeResult<Vec<T>>
where
    T: Clone + PartialEq + Serialize,
{
    if incoming.is_empty() || base == incoming {
        Ok(base.to_vec())
    } else if base.is_empty() {
        Ok(incoming.to_vec())
    } else {
        Err(ctx.conflict(base, incoming))
    }
}

impl ListMerge for Player {
    const POLICY: ListPolicy = ListPolicy::Keyed;
    const KIND: NodeKind = NodeKind::OrderedSequence;

    fn merge_list(
        ctx: &mut MergeContext,
        base: &[Self],
        incoming: &[Self],
    ) -> MergeResult<Vec<Self>> {
        reconcile::reconcile(ctx, base, incoming)
    }
}

impl ListMerge for Snapshot {
    const POLICY: ListPolicy = ListPolicy::Keyed;
    const KIND: NodeKind = NodeKind::OrderedSequence;

    fn merge_list(
        ctx: &mut MergeContext,
        base: &[Self],
        incoming: &[Self],
    ) -> MergeResult<Vec<Self>> {
        let mut merged = reconcile::reconcile(ctx, base, incoming)?;
        order::sort_by_timestamp(&mut merged);
        Ok(merged)
    }
}

impl ListMerge for Event {
    const POLICY: ListPolicy = ListPolicy::ConcatenateByTimestamp;
    const KIND: NodeKind = NodeKind::OrderedSequence;

    fn merge_list(
        ctx: &mut MergeContext,
        base: &[Self],
        incoming: &[Self],
    ) -> MergeResult<Vec<Self>> {
        let combined = order::concatenate_by_timestamp(base, incoming);
        ctx.summary_mut().events_combined += combined.len();
        Ok(combined)
    }
}

macro_rules! equality_only {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl ListMerge for $ty {
                const POLICY: ListPolicy = ListPolicy::EqualityOnly;
                const KIND: NodeKind = $kind;

                fn merge_list(
                    ctx: &mut MergeContext,
                    base: &[Self],
                    incoming: &[Self],
                ) -> MergeResult<Vec<Self>> {
                    equality_only(ctx, base, incoming)
                }
            }
        )+
    };
}

equality_only!(NodeKind::OrderedSequence => PickBan);

equality_only!(NodeKind::SetLike =>
    ChampionId,
    EpicMonsterKill,
    BuildingKill,
    Rune,
    SummonerSpell,
    Item,
    ItemEvent,
    WardEvent,
    SkillLevelUpEvent,
    LargeMonsterKill,
    SpecialKill,
);
