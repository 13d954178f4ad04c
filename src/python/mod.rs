//! Python bindings for the decklist legality engine.
//!
//! The league bot is written in Python; these bindings let it parse and
//! verify submissions without reimplementing the rules.
//!
//! # Quick Start
//!
//! ```python
//! import randard_legality as rl
//!
//! snapshot = rl.PrintingSnapshot.load("printings.json")
//! maindeck, sideboard = rl.parse_decklist(text)
//!
//! verdict = snapshot.verify(maindeck, sideboard, legal_sets=["DOM", "M19"])
//! if not verdict.is_valid:
//!     for message in verdict.messages:
//!         print(message)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_solver;
mod py_verify;

pub use py_core::*;
pub use py_solver::*;
pub use py_verify::*;

/// randard_legality: decklist parsing and legality checks.
///
/// This module provides:
/// - Decklist parsing (text or file)
/// - Verification against format rules and legal sets
/// - The one-card-per-set assignment solver
#[pymodule]
fn randard_legality(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Decklists
    m.add_class::<PyDecklist>()?;
    m.add_function(wrap_pyfunction!(parse_decklist, m)?)?;
    m.add_function(wrap_pyfunction!(read_decklist_file, m)?)?;

    // Verification
    m.add_class::<PyFormatRules>()?;
    m.add_class::<PyVerdict>()?;
    m.add_class::<PyPrintingSnapshot>()?;
    m.add_function(wrap_pyfunction!(verify_decklist, m)?)?;

    // Solver
    m.add_class::<PyAssignment>()?;
    m.add_function(wrap_pyfunction!(assign_unique_sets, m)?)?;

    Ok(())
}
