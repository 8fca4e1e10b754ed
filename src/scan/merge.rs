//! Merging perfect intervals into the final result list
//!
//! Perfect intervals wait in a pending deque (sorted by descending start)
//! until the advancing window start has passed them; they are then folded
//! into the growing result list in a single pass, combining any overlap or
//! adjacency, so the output is sorted and pairwise disjoint by
//! construction.

use std::collections::VecDeque;

use super::perfect::PerfectInterval;
use crate::types::Interval;

/// Flush pending intervals that start before `window_start`
///
/// At most one interval is published per call: the pending interval with
/// the smallest start. It merges into the last result when it overlaps or
/// touches it, and opens a new result otherwise. Remaining pending
/// intervals starting before `window_start` are covered by what was just
/// published and are dropped.
pub(crate) fn flush_before(
    pending: &mut VecDeque<PerfectInterval>,
    results: &mut Vec<Interval>,
    window_start: usize,
) {
    let Some(oldest) = pending.back() else {
        return;
    };
    if oldest.start >= window_start {
        return;
    }

    match results.last_mut() {
        Some(last) if oldest.start <= last.end => {
            last.end = last.end.max(oldest.end);
        }
        _ => results.push(Interval::new(oldest.start, oldest.end)),
    }

    while let Some(oldest) = pending.back() {
        if oldest.start < window_start {
            pending.pop_back();
        } else {
            break;
        }
    }
}

/// Drain every pending interval through [`flush_before`]
///
/// Called when a window run ends (ambiguous base or end of sequence): the
/// virtual window start advances one position at a time until nothing is
/// pending.
pub(crate) fn drain_pending(
    pending: &mut VecDeque<PerfectInterval>,
    results: &mut Vec<Interval>,
    mut window_start: usize,
) {
    while !pending.is_empty() {
        window_start += 1;
        flush_before(pending, results, window_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perfect(start: usize, end: usize) -> PerfectInterval {
        PerfectInterval { start, end, score: 10, span: 4 }
    }

    #[test]
    fn test_keeps_intervals_still_in_window() {
        let mut pending = VecDeque::from([perfect(5, 9)]);
        let mut results = Vec::new();
        flush_before(&mut pending, &mut results, 5);
        assert!(results.is_empty());
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_publishes_passed_interval() {
        let mut pending = VecDeque::from([perfect(5, 9)]);
        let mut results = Vec::new();
        flush_before(&mut pending, &mut results, 6);
        assert_eq!(results, [Interval::new(5, 9)]);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_merges_overlap() {
        let mut pending = VecDeque::from([perfect(7, 14)]);
        let mut results = vec![Interval::new(5, 9)];
        flush_before(&mut pending, &mut results, 8);
        assert_eq!(results, [Interval::new(5, 14)]);
    }

    #[test]
    fn test_merges_adjacency() {
        let mut pending = VecDeque::from([perfect(9, 12)]);
        let mut results = vec![Interval::new(5, 9)];
        flush_before(&mut pending, &mut results, 10);
        assert_eq!(results, [Interval::new(5, 12)]);
    }

    #[test]
    fn test_disjoint_interval_opens_new_result() {
        let mut pending = VecDeque::from([perfect(11, 14)]);
        let mut results = vec![Interval::new(5, 9)];
        flush_before(&mut pending, &mut results, 12);
        assert_eq!(results, [Interval::new(5, 9), Interval::new(11, 14)]);
    }

    #[test]
    fn test_covered_pending_intervals_are_dropped() {
        // Descending by start: front (7, 12) is nested in back (6, 13).
        let mut pending = VecDeque::from([perfect(7, 12), perfect(6, 13)]);
        let mut results = Vec::new();
        flush_before(&mut pending, &mut results, 8);
        assert_eq!(results, [Interval::new(6, 13)]);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_merge_never_shrinks_result() {
        let mut pending = VecDeque::from([perfect(6, 8)]);
        let mut results = vec![Interval::new(5, 11)];
        flush_before(&mut pending, &mut results, 7);
        assert_eq!(results, [Interval::new(5, 11)]);
    }

    #[test]
    fn test_drain_publishes_everything() {
        let mut pending = VecDeque::from([perfect(20, 25), perfect(3, 9)]);
        let mut results = Vec::new();
        drain_pending(&mut pending, &mut results, 0);
        assert_eq!(results, [Interval::new(3, 9), Interval::new(20, 25)]);
    }
}
