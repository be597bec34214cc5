//! Deep merge: the entry points and the trait every record type implements.

use lol_types::MatchRecord;
use tracing::debug;

use crate::context::MergeContext;
use crate::error::MergeResult;
use crate::summary::MergeSummary;

/// A record node merged field by field.
///
/// Implementations build the merged value as a struct literal, one
/// [`MergeContext`] call per field in declaration order, so the traversal
/// order (and therefore the first conflict reported) is fixed at compile
/// time.
pub trait DeepMerge: Sized {
    fn deep_merge(&self, incoming: &Self, ctx: &mut MergeContext) -> MergeResult<Self>;
}

/// Merge two partial records of the same match.
///
/// Neither input is modified. Fails on the first conflict or ambiguous
/// correspondence found; no partial result is returned.
pub fn merge(base: &MatchRecord, incoming: &MatchRecord) -> MergeResult<MatchRecord> {
    merge_with_summary(base, incoming).map(|(merged, _)| merged)
}

/// [`merge`], also returning counters describing what the merge did.
pub fn merge_with_summary(
    base: &MatchRecord,
    incoming: &MatchRecord,
) -> MergeResult<(MatchRecord, MergeSummary)> {
    let mut ctx = MergeContext::new();
    let merged = base.deep_merge(incoming, &mut ctx)?;
    let summary = ctx.into_summary();
    debug!(
        agreed = summary.scalars_agreed,
        one_sided = summary.scalars_one_sided,
        matched = summary.elements_matched,
        carried = summary.elements_carried,
        events = summary.events_combined,
        "merged match records"
    );
    Ok((merged, summary))
}

/// Merge any number of partial records, left to right, summing the
/// counters of every step.
///
/// Returns `None` for an empty input. A single record is normalized by
/// merging it with an empty one.
pub fn merge_all<'a, I>(records: I) -> MergeResult<Option<(MatchRecord, MergeSummary)>>
where
    I: IntoIterator<Item = &'a MatchRecord>,
{
    let mut records = records.into_iter();
    let Some(first) = records.next() else {
        return Ok(None);
    };
    let (mut merged, mut summary) = merge_with_summary(first, &MatchRecord::empty())?;
    for (step, record) in records.enumerate() {
        let (next, counts) = merge_with_summary(&merged, record)?;
        debug!(step = step + 1, players = next.player_count(), "folded record");
        merged = next;
        summary += counts;
    }
    Ok(Some((merged, summary)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MergeError;
    use lol_types::{Event, Player, Side, Snapshot};
    use proptest::option;
    use proptest::prelude::*;
    use serde_json::json;

    fn blue(players: Vec<Player>) -> MatchRecord {
        let mut record = MatchRecord::default();
        record.teams.blue.players = players;
        record
    }

    fn killer(champion: u16, kills: u32) -> Player {
        let mut player = Player::with_champion(champion);
        player.end_of_game_stats.kills = Some(kills);
        player
    }

    fn by_champion(mut record: MatchRecord) -> MatchRecord {
        for side in Side::ALL {
            record.teams.get_mut(side).players.sort_by_key(|p| p.champion_id);
        }
        record
    }

    #[test]
    fn conflicting_kills_report_full_path() {
        let err = merge(&blue(vec![killer(1, 3)]), &blue(vec![killer(1, 4)])).unwrap_err();
        assert_eq!(
            err,
            MergeError::Conflict {
                path: "teams.BLUE.players[championId=1].endOfGameStats.kills".into(),
                left: json!(3),
                right: json!(4),
            }
        );
    }

    #[test]
    fn players_merge_by_champion() {
        let mut right = Player::with_champion(1);
        right.end_of_game_stats.gold = Some(500);
        let merged = merge(&blue(vec![killer(1, 3)]), &blue(vec![right])).unwrap();
        let players = &merged.teams.blue.players;
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].end_of_game_stats.kills, Some(3));
        assert_eq!(players[0].end_of_game_stats.gold, Some(500));
    }

    #[test]
    fn snapshots_come_out_sorted() {
        let mut left = Player::with_champion(1);
        left.snapshots.push(Snapshot::at(120.0));
        let mut right = Player::with_champion(1);
        right.snapshots.push(Snapshot::at(60.0));
        let merged = merge(&blue(vec![left]), &blue(vec![right])).unwrap();
        let times: Vec<f64> = merged.teams.blue.players[0]
            .snapshots
            .iter()
            .map(|s| s.timestamp)
            .collect();
        assert_eq!(times, vec![60.0, 120.0]);
    }

    #[test]
    fn snapshot_order_does_not_depend_on_the_other_side() {
        let mut player = Player::with_champion(1);
        player.snapshots = vec![Snapshot::at(120.0), Snapshot::at(60.0)];
        let a = blue(vec![player]);
        let times = |record: &MatchRecord| -> Vec<f64> {
            record.teams.blue.players[0]
                .snapshots
                .iter()
                .map(|s| s.timestamp)
                .collect()
        };

        let with_same = merge(&a, &blue(vec![Player::with_champion(1)])).unwrap();
        let with_other = merge(&a, &blue(vec![Player::with_champion(2)])).unwrap();
        let with_empty = merge(&a, &MatchRecord::empty()).unwrap();
        assert_eq!(times(&with_same), vec![60.0, 120.0]);
        assert_eq!(times(&with_other), vec![60.0, 120.0]);
        assert_eq!(times(&with_empty), vec![60.0, 120.0]);
    }

    #[test]
    fn events_interleave_by_time() {
        let a = MatchRecord {
            events: vec![Event::at(10.0, "CHAMPION_KILL"), Event::at(30.0, "CHAMPION_KILL")],
            ..Default::default()
        };
        let b = MatchRecord {
            events: vec![Event::at(20.0, "BUILDING_KILL")],
            ..Default::default()
        };
        let merged = merge(&a, &b).unwrap();
        let times: Vec<_> = merged.events.iter().map(|e| e.timestamp).collect();
        assert_eq!(times, vec![Some(10.0), Some(20.0), Some(30.0)]);
    }

    #[test]
    fn champion_and_player_id_cannot_be_compared() {
        let err = merge(&blue(vec![Player::with_champion(7)]), &blue(vec![Player::with_id(2)]))
            .unwrap_err();
        assert!(err.is_correspondence());
        assert_eq!(err.path(), "teams.BLUE.players");
    }

    #[test]
    fn inputs_are_left_untouched() {
        let a = blue(vec![killer(1, 3)]);
        let b = blue(vec![killer(2, 5)]);
        let (a0, b0) = (a.clone(), b.clone());
        let merged = merge(&a, &b).unwrap();
        assert_eq!(merged.teams.blue.players.len(), 2);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn summary_counts_work_done() {
        let a = MatchRecord {
            duration: Some(1800.0),
            patch: Some("10.11".into()),
            ..blue(vec![killer(1, 3)])
        };
        let b = MatchRecord {
            patch: Some("10.11".into()),
            ..blue(vec![killer(1, 3), killer(2, 0)])
        };
        let (_, summary) = merge_with_summary(&a, &b).unwrap();
        assert_eq!(summary.scalars_one_sided, 1);
        // patch, championId and kills of the matched player
        assert_eq!(summary.scalars_agreed, 3);
        assert_eq!(summary.elements_matched, 1);
        assert_eq!(summary.elements_carried, 1);
    }

    #[test]
    fn merge_all_folds_left_to_right() {
        let parts = [
            MatchRecord {
                duration: Some(1800.0),
                ..Default::default()
            },
            MatchRecord {
                winner: Some(Side::Blue),
                ..Default::default()
            },
            blue(vec![killer(4, 1)]),
        ];
        let (merged, summary) = merge_all(&parts).unwrap().unwrap();
        assert_eq!(merged.duration, Some(1800.0));
        assert_eq!(merged.winner, Some(Side::Blue));
        assert_eq!(merged.teams.blue.players.len(), 1);
        // Every step counts what it fills in from one side: duration once
        // against the empty record, then duration and winner twice each.
        assert_eq!(summary.scalars_one_sided, 5);
        assert_eq!(summary.elements_carried, 1);

        assert_eq!(merge_all(&[]).unwrap(), None);
    }

    #[test]
    fn merge_all_stops_at_first_conflict() {
        let parts = [
            MatchRecord {
                patch: Some("10.10".into()),
                ..Default::default()
            },
            MatchRecord::default(),
            MatchRecord {
                patch: Some("10.11".into()),
                ..Default::default()
            },
        ];
        assert_eq!(merge_all(&parts).unwrap_err().path(), "patch");
    }

    // Random complete records, already normalized: unique champion ids per
    // team, unique snapshot and event timestamps, both in ascending order.

    type RawPlayer = (Option<u32>, Option<u32>, Vec<(u16, Option<u32>)>);

    fn raw_player() -> impl Strategy<Value = RawPlayer> {
        (
            option::of(0u32..30),
            option::of(0u32..30_000),
            prop::collection::btree_map(0u16..3600, option::of(0u32..30_000), 0..4)
                .prop_map(|m| m.into_iter().collect::<Vec<_>>()),
        )
    }

    fn build_player(index: usize, (kills, gold, snapshots): RawPlayer) -> Player {
        let mut player = Player::with_champion(7 * (index as u16 + 1));
        player.end_of_game_stats.kills = kills;
        player.end_of_game_stats.gold = gold;
        player.snapshots = snapshots
            .into_iter()
            .map(|(t, total_gold)| Snapshot {
                total_gold,
                ..Snapshot::at(f64::from(t))
            })
            .collect();
        player
    }

    fn record() -> impl Strategy<Value = MatchRecord> {
        (
            option::of(0.0f64..4000.0),
            option::of(prop_oneof![Just("10.10".to_string()), Just("10.11".to_string())]),
            option::of(prop_oneof![Just(Side::Blue), Just(Side::Red)]),
            option::of(1u32..6),
            prop::collection::vec(raw_player(), 0..4),
            prop::collection::vec(raw_player(), 0..4),
            prop::collection::btree_set(0u16..3600, 0..5),
        )
            .prop_map(|(duration, patch, winner, game, blue, red, events)| {
                let mut record = MatchRecord {
                    duration,
                    patch,
                    winner,
                    game_in_series: game,
                    ..Default::default()
                };
                record.teams.blue.players =
                    blue.into_iter().enumerate().map(|(i, p)| build_player(i, p)).collect();
                record.teams.red.players =
                    red.into_iter().enumerate().map(|(i, p)| build_player(i, p)).collect();
                record.events = events
                    .into_iter()
                    .map(|t| Event::at(f64::from(t), "CHAMPION_KILL"))
                    .collect();
                record
            })
    }

    /// Deals each piece of a record to one side, the other, or both.
    struct Splitter<I> {
        masks: I,
    }

    impl<I: Iterator<Item = u8>> Splitter<I> {
        fn deal(&mut self) -> u8 {
            self.masks.next().unwrap_or(2) % 3
        }

        fn scalar<T: Clone>(&mut self, value: &Option<T>) -> (Option<T>, Option<T>) {
            match self.deal() {
                0 => (value.clone(), None),
                1 => (None, value.clone()),
                _ => (value.clone(), value.clone()),
            }
        }

        fn player(&mut self, player: &Player) -> (Player, Player) {
            let mut a = Player {
                champion_id: player.champion_id,
                ..Default::default()
            };
            let mut b = a.clone();
            let stats = &player.end_of_game_stats;
            (a.end_of_game_stats.kills, b.end_of_game_stats.kills) = self.scalar(&stats.kills);
            (a.end_of_game_stats.gold, b.end_of_game_stats.gold) = self.scalar(&stats.gold);
            for snapshot in &player.snapshots {
                match self.deal() {
                    0 => a.snapshots.push(snapshot.clone()),
                    1 => b.snapshots.push(snapshot.clone()),
                    _ => {
                        let mut sa = Snapshot::at(snapshot.timestamp);
                        let mut sb = Snapshot::at(snapshot.timestamp);
                        (sa.total_gold, sb.total_gold) = self.scalar(&snapshot.total_gold);
                        a.snapshots.push(sa);
                        b.snapshots.push(sb);
                    }
                }
            }
            (a, b)
        }

        fn record(&mut self, record: &MatchRecord) -> (MatchRecord, MatchRecord) {
            let mut a = MatchRecord::default();
            let mut b = MatchRecord::default();
            (a.duration, b.duration) = self.scalar(&record.duration);
            (a.patch, b.patch) = self.scalar(&record.patch);
            (a.winner, b.winner) = self.scalar(&record.winner);
            (a.game_in_series, b.game_in_series) = self.scalar(&record.game_in_series);
            match self.deal() {
                0 => a.events = record.events.clone(),
                1 => b.events = record.events.clone(),
                _ => {
                    a.events = record.events.clone();
                    b.events = record.events.clone();
                }
            }
            for side in Side::ALL {
                for player in &record.teams.get(side).players {
                    match self.deal() {
                        0 => a.teams.get_mut(side).players.push(player.clone()),
                        1 => b.teams.get_mut(side).players.push(player.clone()),
                        _ => {
                            let (pa, pb) = self.player(player);
                            a.teams.get_mut(side).players.push(pa);
                            b.teams.get_mut(side).players.push(pb);
                        }
                    }
                }
            }
            (a, b)
        }
    }

    proptest! {
        #[test]
        fn merging_a_record_with_itself_is_a_no_op(x in record()) {
            prop_assert_eq!(merge(&x, &x).unwrap(), x);
        }

        #[test]
        fn empty_record_is_the_identity(x in record()) {
            let empty = MatchRecord::empty();
            prop_assert_eq!(merge(&x, &empty).unwrap(), x.clone());
            prop_assert_eq!(merge(&empty, &x).unwrap(), x);
        }

        #[test]
        fn split_views_recombine(x in record(), masks in prop::collection::vec(0u8..3, 64)) {
            let mut splitter = Splitter { masks: masks.into_iter().cycle() };
            let (a, b) = splitter.record(&x);

            let ab = merge(&a, &b).unwrap();
            let ba = merge(&b, &a).unwrap();
            prop_assert_eq!(by_champion(ab), x.clone());
            prop_assert_eq!(by_champion(ba), x);
        }
    }
}
