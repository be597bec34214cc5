//! Ordering normalization for timestamp-ordered sequences.

use std::cmp::Ordering;

use lol_types::{Event, Snapshot};

/// An element whose position in its sequence is given by a timestamp.
pub trait Timestamped {
    /// Seconds since the match start, if known.
    fn timestamp(&self) -> Option<f64>;
}

impl Timestamped for Event {
    fn timestamp(&self) -> Option<f64> {
        self.timestamp
    }
}

impl Timestamped for Snapshot {
    fn timestamp(&self) -> Option<f64> {
        Some(self.timestamp)
    }
}

/// Ascending by timestamp; elements without one sort last.
fn compare(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort by timestamp: ties keep their current relative order.
pub fn sort_by_timestamp<T: Timestamped>(items: &mut [T]) {
    items.sort_by(|a, b| compare(a.timestamp(), b.timestamp()));
}

/// Combine two sequences without identity matching, then sort.
///
/// Base elements precede incoming ones among equal timestamps. Two
/// identical sequences are the same information and are kept once;
/// otherwise nothing is deduplicated.
pub fn concatenate_by_timestamp<T>(base: &[T], incoming: &[T]) -> Vec<T>
where
    T: Timestamped + Clone + PartialEq,
{
    let mut combined = if incoming.is_empty() || base == incoming {
        base.to_vec()
    } else if base.is_empty() {
        incoming.to_vec()
    } else {
        let mut all = Vec::with_capacity(base.len() + incoming.len());
        all.extend_from_slice(base);
        all.extend_from_slice(incoming);
        all
    };
    sort_by_timestamp(&mut combined);
    combined
}
