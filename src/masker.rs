//! Low-complexity masking of nucleotide sequences
//!
//! [`DustMasker`] is the public entry point: it validates its parameters,
//! runs the scan once at construction, and caches the resulting interval
//! list. Every read after construction ([`DustMasker::intervals`],
//! [`DustMasker::n_masked_bases`], [`DustMasker::mask`]) is an infallible
//! derived view of that cached result.
//!
//! # Examples
//!
//! ```
//! use dustmask::DustMasker;
//!
//! # fn main() -> dustmask::Result<()> {
//! let masker = DustMasker::with_defaults(b"CGTATATATATAGTATGCGTACTGGGGGGGCT")?;
//!
//! let pairs: Vec<(usize, usize)> =
//!     masker.intervals().iter().map(|&iv| iv.into()).collect();
//! assert_eq!(pairs, [(23, 30)]);
//! assert_eq!(masker.n_masked_bases(), 7);
//!
//! // Soft masking lowercases, hard masking writes 'N'.
//! assert_eq!(masker.mask(false), b"CGTATATATATAGTATGCGTACTgggggggCT");
//! assert_eq!(masker.mask(true), b"CGTATATATATAGTATGCGTACTNNNNNNNCT");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::error::{DustError, Result};
use crate::scan::scan_sequence;
use crate::types::Interval;

/// Default scan window length, `W` in the algorithm's terms
pub const DEFAULT_WINDOW_SIZE: usize = 64;

/// Default score threshold (10 times the normalized score cutoff)
pub const DEFAULT_SCORE_THRESHOLD: usize = 20;

/// Smallest window able to hold one triplet
const MIN_WINDOW_SIZE: usize = 3;

/// Check constructor parameters, before any scan work
pub(crate) fn validate_parameters(window_size: usize, score_threshold: usize) -> Result<()> {
    if window_size < MIN_WINDOW_SIZE {
        return Err(DustError::WindowSizeTooSmall(window_size));
    }
    if score_threshold == 0 {
        return Err(DustError::ScoreThresholdNotPositive);
    }
    Ok(())
}

/// Apply an interval list to a sequence, producing the masked copy
///
/// Pure renderer: positions outside every interval are copied unchanged;
/// positions inside are lowercased (`hard == false`) or replaced with `'N'`
/// (`hard == true`). Interval bounds beyond the sequence end are clamped,
/// so the call never fails.
///
/// # Examples
///
/// ```
/// use dustmask::{mask_sequence, Interval};
///
/// let masked = mask_sequence(b"TACCCCCCCGCG", &[Interval::new(2, 9)], false);
/// assert_eq!(masked, b"TAcccccccGCG");
///
/// let masked = mask_sequence(b"TACCCCCCCGCG", &[Interval::new(2, 9)], true);
/// assert_eq!(masked, b"TANNNNNNNGCG");
/// ```
pub fn mask_sequence(sequence: &[u8], intervals: &[Interval], hard: bool) -> Vec<u8> {
    let mut masked = sequence.to_vec();
    for interval in intervals {
        let start = interval.start.min(masked.len());
        let end = interval.end.min(masked.len());
        for base in &mut masked[start..end] {
            *base = if hard { b'N' } else { base.to_ascii_lowercase() };
        }
    }
    masked
}

/// Identifies and masks low-complexity regions of one nucleotide sequence
///
/// Construction runs the full scan; the sequence itself is only borrowed,
/// and nothing is copied until [`DustMasker::mask`] renders an output.
/// Bytes other than `A`, `C`, `G`, `T` (either case) are treated as
/// ambiguous: they are never masked and masked regions never cross them.
#[derive(Debug, Clone)]
pub struct DustMasker<'a> {
    sequence: &'a [u8],
    window_size: usize,
    score_threshold: usize,
    intervals: Vec<Interval>,
}

impl<'a> DustMasker<'a> {
    /// Scan `sequence` for low-complexity regions
    ///
    /// The empty sequence is valid and yields no intervals. Fails fast
    /// with a configuration error when `window_size < 3` (no triplet fits)
    /// or `score_threshold == 0`.
    ///
    /// # Errors
    ///
    /// [`DustError::WindowSizeTooSmall`], [`DustError::ScoreThresholdNotPositive`]
    pub fn new(sequence: &'a [u8], window_size: usize, score_threshold: usize) -> Result<Self> {
        validate_parameters(window_size, score_threshold)?;
        let intervals = scan_sequence(sequence, window_size, score_threshold);
        Ok(Self { sequence, window_size, score_threshold, intervals })
    }

    /// Scan with the canonical parameters (window 64, threshold 20)
    pub fn with_defaults(sequence: &'a [u8]) -> Result<Self> {
        Self::new(sequence, DEFAULT_WINDOW_SIZE, DEFAULT_SCORE_THRESHOLD)
    }

    /// The sequence supplied at construction
    pub fn sequence(&self) -> &'a [u8] {
        self.sequence
    }

    /// The scan window length
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The score threshold
    pub fn score_threshold(&self) -> usize {
        self.score_threshold
    }

    /// The low-complexity intervals, sorted and pairwise disjoint
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Total number of masked bases (the summed interval lengths)
    pub fn n_masked_bases(&self) -> usize {
        self.intervals.iter().map(Interval::len).sum()
    }

    /// Render the masked sequence
    ///
    /// `hard == false` lowercases masked regions (soft masking, reversible
    /// by the caller); `hard == true` replaces them with `'N'`.
    pub fn mask(&self, hard: bool) -> Vec<u8> {
        mask_sequence(self.sequence, &self.intervals, hard)
    }
}

impl fmt::Display for DustMasker<'_> {
    /// Diagnostic rendering with a sequence preview, e.g.
    /// `DustMasker(sequence: 'CGTATATA…', intervals: [(23, 30)])`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = String::from_utf8_lossy(&self.sequence[..self.sequence.len().min(8)]);
        write!(f, "DustMasker(sequence: '{}", preview)?;
        if self.sequence.len() > 8 {
            write!(f, "\u{2026}")?;
        }
        write!(f, "', intervals: [")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{interval}")?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Construction and validation =====

    #[test]
    fn test_construction_caches_intervals() {
        let masker = DustMasker::with_defaults(b"TACCCCCCCGCGTTTTTTT").unwrap();
        assert_eq!(masker.sequence(), b"TACCCCCCCGCGTTTTTTT");
        assert_eq!(masker.window_size(), 64);
        assert_eq!(masker.score_threshold(), 20);
        assert_eq!(
            masker.intervals(),
            [Interval::new(2, 9), Interval::new(12, 19)]
        );
    }

    #[test]
    fn test_window_size_too_small() {
        assert_eq!(
            DustMasker::new(b"ACGT", 2, 20).unwrap_err(),
            DustError::WindowSizeTooSmall(2)
        );
    }

    #[test]
    fn test_zero_score_threshold() {
        assert_eq!(
            DustMasker::new(b"ACGT", 64, 0).unwrap_err(),
            DustError::ScoreThresholdNotPositive
        );
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        let masker = DustMasker::with_defaults(b"").unwrap();
        assert!(masker.intervals().is_empty());
        assert_eq!(masker.n_masked_bases(), 0);
        assert_eq!(masker.mask(false), b"");
    }

    // ===== Derived reads =====

    #[test]
    fn test_n_masked_bases_sums_lengths() {
        let masker = DustMasker::with_defaults(b"TACCCCCCCGCGTTTTTTT").unwrap();
        assert_eq!(masker.n_masked_bases(), 14);
    }

    #[test]
    fn test_soft_mask() {
        let masker = DustMasker::with_defaults(b"TACCCCCCCGCGTTTTTTT").unwrap();
        assert_eq!(masker.mask(false), b"TAcccccccGCGttttttt");
    }

    #[test]
    fn test_hard_mask() {
        let masker = DustMasker::with_defaults(b"TACCCCCCCGCGTTTTTTT").unwrap();
        assert_eq!(masker.mask(true), b"TANNNNNNNGCGNNNNNNN");
    }

    #[test]
    fn test_mask_preserves_length_and_clean_regions() {
        let sequence = b"CGTATATATATAGTATGCGTACTGGGGGGGCT";
        let masker = DustMasker::with_defaults(sequence).unwrap();
        let masked = masker.mask(false);
        assert_eq!(masked.len(), sequence.len());
        for (i, (&original, &out)) in sequence.iter().zip(&masked).enumerate() {
            let inside = masker.intervals().iter().any(|iv| iv.start <= i && i < iv.end);
            if inside {
                assert_eq!(out, original.to_ascii_lowercase());
            } else {
                assert_eq!(out, original);
            }
        }
    }

    // ===== Renderer =====

    #[test]
    fn test_mask_sequence_clamps_out_of_range() {
        let masked = mask_sequence(b"ACGT", &[Interval::new(2, 99)], true);
        assert_eq!(masked, b"ACNN");
        let masked = mask_sequence(b"ACGT", &[Interval::new(9, 12)], true);
        assert_eq!(masked, b"ACGT");
    }

    #[test]
    fn test_mask_sequence_empty_intervals() {
        assert_eq!(mask_sequence(b"ACGT", &[], true), b"ACGT");
    }

    // ===== Diagnostics =====

    #[test]
    fn test_display_previews_long_sequence() {
        let masker = DustMasker::with_defaults(b"GTACCCCCCCGTAACGTTTTT").unwrap();
        assert_eq!(
            masker.to_string(),
            "DustMasker(sequence: 'GTACCCCC\u{2026}', intervals: [(3, 10)])"
        );
    }

    #[test]
    fn test_display_short_sequence_unabridged() {
        let masker = DustMasker::with_defaults(b"ACGTACGT").unwrap();
        assert_eq!(
            masker.to_string(),
            "DustMasker(sequence: 'ACGTACGT', intervals: [])"
        );
    }
}
