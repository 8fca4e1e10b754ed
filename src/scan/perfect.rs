//! Perfect-interval search
//!
//! A candidate sub-interval of the scan window is *perfect* when its
//! normalized collision score clears the threshold and no strict
//! sub-interval of it scores strictly higher. Reporting only perfect
//! intervals is what removes nested redundant hits and makes the result
//! independent of scan direction: the criterion reads the same whether the
//! window is walked left-to-right or right-to-left, so a sequence and its
//! reverse always receive mirror-image masks.
//!
//! The search extends the left boundary one triplet at a time from the
//! window's suffix state, reusing its counts instead of rescoring each
//! candidate from scratch. All score comparisons cross-multiply
//! (`score * 10 > threshold * len`), keeping the arithmetic in integers.

use std::collections::VecDeque;

use super::window::TripletWindow;

/// A candidate low-complexity interval found inside one scan window
///
/// `start`/`end` are absolute sequence coordinates. `score` is the raw
/// collision count and `span` its normalizer (one less than the number of
/// triplets covered), so `score * 10 / span` is the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PerfectInterval {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) score: usize,
    pub(crate) span: usize,
}

/// Find every perfect interval ending at the window's right edge
///
/// New candidates are inserted into `pending`, which is kept sorted by
/// descending start coordinate. A candidate is admitted only when it beats
/// the threshold and is not dominated by a higher-scoring interval nested
/// inside it; at equal normalized score the shorter interval wins, which
/// keeps over-masking minimal.
pub(crate) fn find_perfect(
    window: &TripletWindow,
    window_start: usize,
    score_threshold: usize,
    pending: &mut VecDeque<PerfectInterval>,
) {
    let Some(leftmost) = window.len().checked_sub(window.suffix_len() + 1) else {
        return;
    };

    let mut counts = window.suffix_counts();
    let mut score = window.suffix_score();
    let mut best_score = 0;
    let mut best_span = 0;

    for i in (0..=leftmost).rev() {
        let code = window.get(i);
        score += counts[code];
        counts[code] += 1;

        let span = window.len() - i - 1;
        if score * 10 <= score_threshold * span {
            continue;
        }

        // Walk the pending intervals nested inside [i, window end),
        // remembering the best normalized score among them.
        let mut insert_at = 0;
        for (j, nested) in pending.iter().enumerate() {
            if nested.start < i + window_start {
                break;
            }
            insert_at = j + 1;
            if best_score == 0 || nested.score * best_span > best_score * nested.span {
                best_score = nested.score;
                best_span = nested.span;
            }
        }

        if best_score == 0 || score * best_span >= best_score * span {
            best_score = score;
            best_span = span;
            let candidate = PerfectInterval {
                start: i + window_start,
                // Two extra bases close the final triplet.
                end: window.len() + 2 + window_start,
                score,
                span,
            };
            pending.insert(insert_at, candidate);
        }
    }
}
