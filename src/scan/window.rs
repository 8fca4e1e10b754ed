//! Rolling triplet-count window
//!
//! [`TripletWindow`] is the scorer of the scan pipeline: it holds the
//! triplet codes currently inside the scan window together with two count
//! tables maintained incrementally as the window slides, so each advance
//! costs O(1) amortized rather than a recount of the whole window.
//!
//! The score of a count table is the number of triplet-pair collisions,
//! `Σ c * (c - 1) / 2` over the 64 codes, a direct measure of
//! repetitiveness. Two views are maintained:
//!
//! - the **whole-window** counts and score, used to decide whether the
//!   window is worth searching at all;
//! - the **suffix** counts, score and length, covering the last
//!   `suffix_len` triplets. The perfect-interval search extends left from
//!   this state. The suffix is kept short enough that no single triplet
//!   count in it exceeds `2 * score_threshold / 10`; a count crossing that
//!   bound shrinks the suffix from its left edge.

use std::collections::VecDeque;

use super::encoding::TRIPLET_CODES;

/// Incrementally maintained triplet counts for one scan window
#[derive(Debug, Clone)]
pub(crate) struct TripletWindow {
    /// Triplet codes currently inside the window, oldest first
    triplets: VecDeque<usize>,
    /// Maximum number of triplets held: `window_size - 2`
    capacity: usize,
    /// Score threshold, needed for the suffix count bound
    score_threshold: usize,
    /// Whole-window counts per triplet code
    counts: [usize; TRIPLET_CODES],
    /// Running collision score over `counts`
    score: usize,
    /// Counts over the last `suffix_len` triplets
    suffix_counts: [usize; TRIPLET_CODES],
    /// Running collision score over `suffix_counts`
    suffix_score: usize,
    /// Number of triplets in the suffix view
    suffix_len: usize,
}

impl TripletWindow {
    /// Create an empty window for the given parameters
    ///
    /// The caller guarantees `window_size >= 3`.
    pub(crate) fn new(window_size: usize, score_threshold: usize) -> Self {
        Self {
            triplets: VecDeque::new(),
            capacity: window_size - 2,
            score_threshold,
            counts: [0; TRIPLET_CODES],
            score: 0,
            suffix_counts: [0; TRIPLET_CODES],
            suffix_score: 0,
            suffix_len: 0,
        }
    }

    /// Slide the window one position: evict the oldest triplet when the
    /// window is full, then admit `code`
    pub(crate) fn push(&mut self, code: usize) {
        if self.triplets.len() >= self.capacity {
            if let Some(evicted) = self.triplets.pop_front() {
                self.counts[evicted] -= 1;
                self.score -= self.counts[evicted];
                if self.suffix_len > self.triplets.len() {
                    self.suffix_len -= 1;
                    self.suffix_counts[evicted] -= 1;
                    self.suffix_score -= self.suffix_counts[evicted];
                }
            }
        }

        self.triplets.push_back(code);
        self.suffix_len += 1;

        self.score += self.counts[code];
        self.counts[code] += 1;
        self.suffix_score += self.suffix_counts[code];
        self.suffix_counts[code] += 1;

        // A triplet count crossing the 2 * score_threshold / 10 bound
        // shrinks the suffix past that triplet's oldest occurrence.
        if self.suffix_counts[code] * 10 > 2 * self.score_threshold {
            loop {
                let dropped = self.triplets[self.triplets.len() - self.suffix_len];
                self.suffix_len -= 1;
                self.suffix_counts[dropped] -= 1;
                self.suffix_score -= self.suffix_counts[dropped];
                if dropped == code {
                    break;
                }
            }
        }
    }

    /// Clear all window state, as if freshly constructed
    pub(crate) fn reset(&mut self) {
        self.triplets.clear();
        self.counts = [0; TRIPLET_CODES];
        self.score = 0;
        self.suffix_counts = [0; TRIPLET_CODES];
        self.suffix_score = 0;
        self.suffix_len = 0;
    }

    /// Number of triplets currently inside the window
    pub(crate) fn len(&self) -> usize {
        self.triplets.len()
    }

    /// Whole-window collision score
    pub(crate) fn score(&self) -> usize {
        self.score
    }

    /// Number of triplets in the suffix view
    pub(crate) fn suffix_len(&self) -> usize {
        self.suffix_len
    }

    /// Collision score of the suffix view
    pub(crate) fn suffix_score(&self) -> usize {
        self.suffix_score
    }

    /// Copy of the suffix count table, for left-extension by the finder
    pub(crate) fn suffix_counts(&self) -> [usize; TRIPLET_CODES] {
        self.suffix_counts
    }

    /// Triplet code at window position `index` (0 = oldest)
    pub(crate) fn get(&self, index: usize) -> usize {
        self.triplets[index]
    }
}
