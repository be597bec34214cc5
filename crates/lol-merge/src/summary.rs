//! Counters describing what a merge did, summed across fold steps.

use std::ops::AddAssign;

use serde::Serialize;

/// Counters describing what a successful merge did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    /// Scalars present on exactly one side, taken as-is.
    pub scalars_one_sided: usize,
    /// Scalars present and equal on both sides.
    pub scalars_agreed: usize,
    /// Keyed list elements matched across the two sides and merged.
    pub elements_matched: usize,
    /// Keyed list elements present on one side only, carried over.
    pub elements_carried: usize,
    /// Match-level events in the combined sequence.
    pub events_combined: usize,
}

impl MergeSummary {
    /// Number of leaf values on which both sources agreed or one filled in
    /// for the other.
    pub fn scalars_total(&self) -> usize {
        self.scalars_one_sided + self.scalars_agreed
    }
}

impl AddAssign for MergeSummary {
    fn add_assign(&mut self, other: Self) {
        self.scalars_one_sided += other.scalars_one_sided;
        self.scalars_agreed += other.scalars_agreed;
        self.elements_matched += other.elements_matched;
        self.elements_carried += other.elements_carried;
        self.events_combined += other.events_combined;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_add_up() {
        let mut total = MergeSummary {
            scalars_one_sided: 2,
            elements_carried: 1,
            ..Default::default()
        };
        total += MergeSummary {
            scalars_one_sided: 1,
            scalars_agreed: 3,
            events_combined: 4,
            ..Default::default()
        };
        assert_eq!(total.scalars_total(), 6);
        assert_eq!(total.elements_carried, 1);
        assert_eq!(total.events_combined, 4);
    }
}
