//! Python bindings for dustmask
//!
//! PyO3 wrappers exposing the masker to Python. Built only with the
//! `python` feature enabled.

use pyo3::prelude::*;

mod masker;

pub use masker::*;

/// dustmask: low-complexity region detection and masking
///
/// Identify and mask low-complexity regions in nucleotide sequences
/// using the symmetric DUST (SDUST) algorithm.
///
/// Example:
///     >>> import dustmask
///     >>> masker = dustmask.DustMasker("CGTATATATATAGTATGCGTACTGGGGGGGCT")
///     >>> masker.intervals
///     [(23, 30)]
///     >>> masker.mask()
///     'CGTATATATATAGTATGCGTACTgggggggCT'
#[pymodule]
fn dustmask(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDustMasker>()?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add(
        "__doc__",
        "Low-complexity region detection and masking with the symmetric DUST algorithm",
    )?;

    Ok(())
}
