//! The low-complexity scan pipeline
//!
//! A single forward sweep over the sequence drives four stages: the
//! triplet encoder (`encoding`), the rolling window scorer (`window`),
//! the perfect-interval finder (`perfect`) and the interval merger
//! (`merge`). Scan windows advance one base at a time and are never
//! materialized as a list; all per-window state lives in the
//! incrementally maintained `TripletWindow`.
//!
//! Bytes outside the canonical alphabet reset the scan: the window state
//! restarts after them and any pending perfect intervals drain into the
//! result list, so masked regions never cross an ambiguous base.

mod encoding;
mod merge;
mod perfect;
mod window;

use std::collections::VecDeque;

use crate::scan::encoding::{encode_base, extend_triplet, AMBIGUOUS};
use crate::scan::merge::{drain_pending, flush_before};
use crate::scan::perfect::{find_perfect, PerfectInterval};
use crate::scan::window::TripletWindow;
use crate::types::Interval;

/// Scan a sequence for low-complexity regions
///
/// This is the pure core of the crate: identical inputs always yield the
/// identical interval list, sorted by start coordinate, pairwise disjoint,
/// every member at least one base long. [`crate::DustMasker`] validates
/// its parameters and then delegates here.
///
/// A `window_size` below 3 cannot hold a triplet and yields no intervals,
/// as do sequences shorter than 3 bases.
///
/// # Examples
///
/// ```
/// use dustmask::{scan_sequence, Interval};
///
/// let intervals = scan_sequence(b"CGTATATATATAGTATGCGTACTGGGGGGGCT", 64, 20);
/// assert_eq!(intervals, [Interval::new(23, 30)]);
///
/// // A smaller threshold masks more aggressively.
/// let intervals = scan_sequence(b"CGTATATATATAGTATGCGTACTGGGGGGGCT", 64, 10);
/// assert_eq!(intervals, [Interval::new(2, 12), Interval::new(23, 30)]);
/// ```
pub fn scan_sequence(
    sequence: &[u8],
    window_size: usize,
    score_threshold: usize,
) -> Vec<Interval> {
    if window_size < 3 || sequence.len() < 3 {
        return Vec::new();
    }

    let mut window = TripletWindow::new(window_size, score_threshold);
    let mut pending: VecDeque<PerfectInterval> = VecDeque::new();
    let mut results: Vec<Interval> = Vec::new();

    let mut triplet: u8 = 0;
    let mut run = 0usize; // canonical bases seen since the last reset

    // One position past the end acts as a final ambiguous byte, draining
    // whatever is still pending.
    for i in 0..=sequence.len() {
        let code = if i < sequence.len() {
            encode_base(sequence[i])
        } else {
            AMBIGUOUS
        };

        if code < AMBIGUOUS {
            run += 1;
            triplet = extend_triplet(triplet, code);
            if run >= 3 {
                let window_start =
                    (i + 1 - run) + if run > window_size { run - window_size } else { 0 };
                flush_before(&mut pending, &mut results, window_start);
                window.push(triplet as usize);
                if window.score() * 10 > window.suffix_len() * score_threshold {
                    find_perfect(&window, window_start, score_threshold, &mut pending);
                }
            }
        } else {
            let window_start =
                (i + 1 - run) + if run >= window_size { run + 1 - window_size } else { 0 };
            drain_pending(&mut pending, &mut results, window_start);
            run = 0;
            triplet = 0;
            window.reset();
        }
    }

    // The sweep can propose an end one past the final base; clamp before
    // publishing.
    for interval in &mut results {
        interval.end = interval.end.min(sequence.len());
    }
    results
}
