//! Python wrapper for the masker

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::masker::{
    mask_sequence, validate_parameters, DEFAULT_SCORE_THRESHOLD, DEFAULT_WINDOW_SIZE,
};
use crate::scan::scan_sequence;
use crate::types::Interval;

/// Identify and mask low-complexity regions in a nucleotide sequence
///
/// Args:
///     sequence (str): Nucleotide sequence to scan. Characters other than
///         'A', 'C', 'G', 'T' (either case) are treated as ambiguous
///         bases: they are never masked and masked regions never span
///         them.
///     window_size (int, default 64): Scan window length. The minimum
///         allowed value is 3.
///     score_threshold (int, default 20): Score threshold for subwindows.
///         Must be positive; smaller values mask more aggressively.
///
/// Attributes:
///     sequence (str): The sequence supplied at construction.
///     window_size (int): Scan window length in use.
///     score_threshold (int): Score threshold in use.
///     intervals (list of tuple): Half-open (start, end) coordinates of
///         the low-complexity regions, sorted and non-overlapping.
///     n_masked_bases (int): Total number of masked bases.
///
/// Raises:
///     ValueError: If window_size is smaller than 3 or score_threshold
///         is not positive.
///
/// Example:
///     >>> masker = DustMasker("TACCCCCCCGCGTTTTTTT")
///     >>> masker.intervals
///     [(2, 9), (12, 19)]
///     >>> masker.mask()
///     'TAcccccccGCGttttttt'
///     >>> masker.mask(hard=True)
///     'TANNNNNNNGCGNNNNNNN'
#[pyclass(name = "DustMasker", module = "dustmask")]
pub struct PyDustMasker {
    #[pyo3(get)]
    sequence: String,
    #[pyo3(get)]
    window_size: usize,
    #[pyo3(get)]
    score_threshold: usize,
    intervals: Vec<Interval>,
}

#[pymethods]
impl PyDustMasker {
    #[new]
    #[pyo3(signature = (sequence, window_size=DEFAULT_WINDOW_SIZE, score_threshold=DEFAULT_SCORE_THRESHOLD))]
    fn new(sequence: String, window_size: usize, score_threshold: usize) -> PyResult<Self> {
        validate_parameters(window_size, score_threshold)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let intervals = scan_sequence(sequence.as_bytes(), window_size, score_threshold);
        Ok(Self { sequence, window_size, score_threshold, intervals })
    }

    /// Low-complexity intervals as half-open (start, end) tuples
    #[getter]
    fn intervals(&self) -> Vec<(usize, usize)> {
        self.intervals.iter().map(|&iv| iv.into()).collect()
    }

    /// Total number of masked bases
    #[getter]
    fn n_masked_bases(&self) -> usize {
        self.intervals.iter().map(Interval::len).sum()
    }

    /// Return the sequence with low-complexity regions masked
    ///
    /// Args:
    ///     hard (bool, default False): If True, masked regions are
    ///         replaced with 'N' characters; otherwise they are
    ///         lowercased (soft masking).
    #[pyo3(signature = (hard=false))]
    fn mask(&self, hard: bool) -> PyResult<String> {
        let masked = mask_sequence(self.sequence.as_bytes(), &self.intervals, hard);
        String::from_utf8(masked).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let preview: String = self.sequence.chars().take(8).collect();
        let ellipsis = if self.sequence.chars().count() > 8 { "\u{2026}" } else { "" };
        let intervals: Vec<String> = self.intervals.iter().map(|iv| iv.to_string()).collect();
        format!(
            "DustMasker(sequence: '{}{}', intervals: [{}])",
            preview,
            ellipsis,
            intervals.join(", ")
        )
    }
}
