//! dustmask: low-complexity region detection for nucleotide sequences
//!
//! # Overview
//!
//! dustmask identifies short repetitive or skewed-composition stretches
//! (poly-A runs, short tandem repeats) in nucleotide sequences with the
//! symmetric DUST (SDUST) algorithm, and renders soft- or hard-masked
//! copies. Such regions cause false positives in downstream sequence
//! search and are conventionally masked out first.
//!
//! ## Key Properties
//!
//! - **Deterministic**: identical inputs always yield identical intervals
//! - **Symmetric**: a sequence and its reverse receive mirror-image masks
//! - **Incremental**: one O(n) sweep with O(1) amortized window updates
//! - **Tolerant**: ambiguity codes never error; they simply aren't masked
//!
//! ## Quick Start
//!
//! ```
//! use dustmask::DustMasker;
//!
//! # fn main() -> dustmask::Result<()> {
//! let masker = DustMasker::with_defaults(b"CGTATATATATAGTATGCGTACTGGGGGGGCT")?;
//!
//! assert_eq!(masker.n_masked_bases(), 7);
//! assert_eq!(masker.mask(false), b"CGTATATATATAGTATGCGTACTgggggggCT");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`scan`]: the scoring and interval-extraction pipeline
//! - [`masker`]: the public [`DustMasker`] type and the masking renderer
//! - [`error`]: configuration error types
//! - [`types`]: the [`Interval`] coordinate type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod masker;
pub mod scan;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export the public surface
pub use error::{DustError, Result};
pub use masker::{
    mask_sequence, DustMasker, DEFAULT_SCORE_THRESHOLD, DEFAULT_WINDOW_SIZE,
};
pub use scan::scan_sequence;
pub use types::Interval;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
