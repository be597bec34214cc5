//! Keyed list reconciliation.
//!
//! Elements of the two sides are matched on identity keys, matched pairs
//! are deep-merged, and elements found on one side only are carried over.
//! Output order is the base side's order (matched and base-only elements
//! interleaved as they appear there) with incoming-only elements appended
//! in their own order. Elements carried over from one side are normalized
//! the same way a merged element would be.
//!
//! An element exposes its keys in priority order. Two elements are
//! *comparable* when some key is present on both, and *correspond* when the
//! first such key has the same value. When both sides are non-empty every
//! pair of elements must be comparable: otherwise an element's absence from
//! the other side cannot be told apart from a failure to recognise it.

use std::fmt;

use lol_types::{Player, Snapshot};

use crate::context::MergeContext;
use crate::error::MergeResult;
use crate::merge::DeepMerge;
use crate::order;

/// The value of an identity key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyValue {
    Id(u64),
    /// Seconds; compared numerically.
    Timestamp(f64),
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Timestamp(t) => write!(f, "{t}"),
        }
    }
}

/// An element of a keyed list.
pub trait Keyed {
    /// Names of the identity keys, highest priority first.
    const KEYS: &'static [&'static str];

    /// Value of the key at `index` in [`Keyed::KEYS`], if present.
    fn key(&self, index: usize) -> Option<KeyValue>;

    /// Bring an element taken from one side only into merged form.
    fn normalize(&mut self) {}
}

impl Keyed for Player {
    const KEYS: &'static [&'static str] = &["championId", "id"];

    fn key(&self, index: usize) -> Option<KeyValue> {
        match index {
            0 => self.champion_id.map(|c| KeyValue::Id(u64::from(c.get()))),
            1 => self.id.map(|id| KeyValue::Id(u64::from(id))),
            _ => None,
        }
    }

    fn normalize(&mut self) {
        order::sort_by_timestamp(&mut self.snapshots);
    }
}

impl Keyed for Snapshot {
    const KEYS: &'static [&'static str] = &["timestamp"];

    fn key(&self, index: usize) -> Option<KeyValue> {
        match index {
            0 => Some(KeyValue::Timestamp(self.timestamp)),
            _ => None,
        }
    }
}

/// The first key present on both elements, with both values.
fn shared_key<T: Keyed>(a: &T, b: &T) -> Option<(usize, KeyValue, KeyValue)> {
    (0..T::KEYS.len()).find_map(|i| match (a.key(i), b.key(i)) {
        (Some(x), Some(y)) => Some((i, x, y)),
        _ => None,
    })
}

fn has_identity<T: Keyed>(element: &T) -> bool {
    (0..T::KEYS.len()).any(|i| element.key(i).is_some())
}

/// Human-readable identity, e.g. `championId=7, id=2`.
fn describe<T: Keyed>(element: &T) -> String {
    let keys: Vec<String> = T::KEYS
        .iter()
        .enumerate()
        .filter_map(|(i, name)| element.key(i).map(|v| format!("{name}={v}")))
        .collect();
    if keys.is_empty() {
        "<no identity>".to_string()
    } else {
        keys.join(", ")
    }
}

fn carry<T: Keyed + Clone>(element: &T) -> T {
    let mut carried = element.clone();
    carried.normalize();
    carried
}

/// A base element's counterpart: incoming index and the key that matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Match {
    incoming: usize,
    key: usize,
}

/// For each base element, its counterpart on the incoming side, if any.
fn correspond<T: Keyed>(
    ctx: &MergeContext,
    base: &[T],
    incoming: &[T],
) -> MergeResult<Vec<Option<Match>>> {
    for (side, elements) in [("base", base), ("incoming", incoming)] {
        if let Some(index) = elements.iter().position(|e| !has_identity(e)) {
            return Err(ctx.correspondence(format!(
                "{side} element {index} has none of the identity keys {}",
                T::KEYS.join(", ")
            )));
        }
    }

    let mut claimed: Vec<Option<usize>> = vec![None; incoming.len()];
    let mut matches = Vec::with_capacity(base.len());

    for (i, b) in base.iter().enumerate() {
        let mut found: Option<Match> = None;
        for (j, c) in incoming.iter().enumerate() {
            let Some((key, x, y)) = shared_key(b, c) else {
                return Err(ctx.correspondence(format!(
                    "base element ({}) and incoming element ({}) share no identity key",
                    describe(b),
                    describe(c)
                )));
            };
            if x != y {
                continue;
            }
            if let Some(previous) = found {
                return Err(ctx.correspondence(format!(
                    "base element ({}) matches incoming elements {} and {j}",
                    describe(b),
                    previous.incoming
                )));
            }
            if let Some(previous) = claimed[j] {
                return Err(ctx.correspondence(format!(
                    "incoming element ({}) matches base elements {previous} and {i}",
                    describe(c)
                )));
            }
            claimed[j] = Some(i);
            found = Some(Match { incoming: j, key });
        }
        matches.push(found);
    }

    Ok(matches)
}

/// Reconcile two keyed lists.
///
/// If either side is empty the other is taken unchanged.
pub fn reconcile<T>(ctx: &mut MergeContext, base: &[T], incoming: &[T]) -> MergeResult<Vec<T>>
where
    T: Keyed + DeepMerge + Clone,
{
    if base.is_empty() || incoming.is_empty() {
        let taken = if base.is_empty() { incoming } else { base };
        ctx.summary_mut().elements_carried += taken.len();
        return Ok(taken.iter().map(carry).collect());
    }

    let matches = correspond(ctx, base, incoming)?;
    let mut merged = Vec::with_capacity(base.len() + incoming.len());
    let mut used = vec![false; incoming.len()];

    for (element, counterpart) in base.iter().zip(&matches) {
        match counterpart {
            Some(m) => {
                let name = T::KEYS[m.key];
                let value = element
                    .key(m.key)
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                let combined = ctx.element(name, value, element, &incoming[m.incoming])?;
                used[m.incoming] = true;
                ctx.summary_mut().elements_matched += 1;
                merged.push(combined);
            }
            None => {
                ctx.summary_mut().elements_carried += 1;
                merged.push(carry(element));
            }
        }
    }

    for (element, _) in incoming.iter().zip(&used).filter(|(_, used)| !**used) {
        ctx.summary_mut().elements_carried += 1;
        merged.push(carry(element));
    }

    Ok(merged)
}
