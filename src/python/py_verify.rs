//! Verification bindings for Python.

use std::collections::HashMap;

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::core::{FormatRules, SetCodes, Submission};
use crate::legality::Verdict;
use crate::printings::{CardPrintings, PrintingSnapshot, SnapshotError};

use super::py_core::PyDecklist;
use super::py_solver::PyAssignment;

/// Python wrapper for FormatRules.
#[pyclass(name = "FormatRules")]
#[derive(Clone, Debug)]
pub struct PyFormatRules(pub FormatRules);

#[pymethods]
impl PyFormatRules {
    /// Create format rules.
    ///
    /// # Arguments
    /// - max_cards: Copy limit per card (default: 4)
    /// - min_deck_size: Minimum main deck size (default: 60)
    /// - max_deck_size: Maximum main deck size (default: None)
    /// - min_sideboard_size: Minimum sideboard size (default: 0)
    /// - max_sideboard_size: Maximum sideboard size (default: 15)
    /// - exemptions: Cards allowed in any number (default: basic lands and friends)
    #[new]
    #[pyo3(signature = (
        max_cards = 4,
        min_deck_size = 60,
        max_deck_size = None,
        min_sideboard_size = 0,
        max_sideboard_size = 15,
        exemptions = None
    ))]
    fn new(
        max_cards: u32,
        min_deck_size: u64,
        max_deck_size: Option<u64>,
        min_sideboard_size: u64,
        max_sideboard_size: u64,
        exemptions: Option<Vec<String>>,
    ) -> Self {
        let mut rules = FormatRules::default()
            .with_max_cards(max_cards)
            .with_min_deck_size(min_deck_size)
            .with_min_sideboard_size(min_sideboard_size)
            .with_max_sideboard_size(max_sideboard_size);
        rules.max_deck_size = max_deck_size;
        if let Some(names) = exemptions {
            rules.exemptions = names.into_iter().collect();
        }
        Self(rules)
    }

    #[getter]
    fn max_cards(&self) -> u32 {
        self.0.max_cards
    }

    #[getter]
    fn min_deck_size(&self) -> u64 {
        self.0.min_deck_size
    }

    #[getter]
    fn max_deck_size(&self) -> Option<u64> {
        self.0.max_deck_size
    }

    #[getter]
    fn min_sideboard_size(&self) -> u64 {
        self.0.min_sideboard_size
    }

    #[getter]
    fn max_sideboard_size(&self) -> u64 {
        self.0.max_sideboard_size
    }

    fn __repr__(&self) -> String {
        format!(
            "FormatRules(max_cards={}, min_deck_size={}, max_deck_size={:?}, min_sideboard_size={}, max_sideboard_size={})",
            self.0.max_cards,
            self.0.min_deck_size,
            self.0.max_deck_size,
            self.0.min_sideboard_size,
            self.0.max_sideboard_size
        )
    }
}

/// Python wrapper for Verdict.
#[pyclass(name = "Verdict")]
#[derive(Clone, Debug)]
pub struct PyVerdict(pub Verdict);

#[pymethods]
impl PyVerdict {
    /// True when no violations were found.
    #[getter]
    fn is_valid(&self) -> bool {
        self.0.is_valid()
    }

    /// Violation messages in order. Empty when valid.
    #[getter]
    fn messages(&self) -> Vec<String> {
        self.0.messages()
    }

    fn __len__(&self) -> usize {
        self.0.violations().len()
    }

    fn __repr__(&self) -> String {
        match &self.0 {
            Verdict::Valid => "Verdict(valid)".to_string(),
            Verdict::Invalid { violations } => {
                format!("Verdict(invalid, violations={})", violations.len())
            }
        }
    }
}

/// Python wrapper for PrintingSnapshot.
///
/// Load once, then verify any number of decklists against it.
#[pyclass(name = "PrintingSnapshot")]
#[derive(Clone, Debug)]
pub struct PyPrintingSnapshot(pub PrintingSnapshot);

#[pymethods]
impl PyPrintingSnapshot {
    /// Build a snapshot from `{card name: [set codes]}`.
    ///
    /// When `all_sets` is omitted the universe is every set in `printings`.
    #[new]
    #[pyo3(signature = (printings, all_sets = None))]
    fn new(printings: HashMap<String, Vec<String>>, all_sets: Option<Vec<String>>) -> Self {
        let printings: CardPrintings = printings
            .into_iter()
            .map(|(name, sets)| (name, sets.into_iter().collect::<SetCodes>()))
            .collect();
        let snapshot = match all_sets {
            Some(sets) => PrintingSnapshot::new(printings, sets.into_iter().collect()),
            None => PrintingSnapshot::from_printings(printings),
        };
        Self(snapshot)
    }

    /// Load a snapshot file (`.json` or bincode).
    #[staticmethod]
    fn load(path: std::path::PathBuf) -> PyResult<Self> {
        PrintingSnapshot::load(path).map(Self).map_err(snapshot_error)
    }

    /// Save the snapshot (`.json` or bincode, by extension).
    fn save(&self, path: std::path::PathBuf) -> PyResult<()> {
        self.0.save(path).map_err(snapshot_error)
    }

    /// Verify a decklist.
    ///
    /// `legal_sets` defaults to every set in the snapshot's universe.
    #[pyo3(signature = (maindeck, sideboard = None, legal_sets = None, rules = None))]
    fn verify(
        &self,
        maindeck: &PyDecklist,
        sideboard: Option<PyRef<'_, PyDecklist>>,
        legal_sets: Option<Vec<String>>,
        rules: Option<PyFormatRules>,
    ) -> PyVerdict {
        let legal: Option<SetCodes> = legal_sets.map(|sets| sets.into_iter().collect());
        let verifier = self.0.verifier(rules.map(|r| r.0).unwrap_or_default());
        PyVerdict(verifier.verify(
            &maindeck.0,
            sideboard.as_ref().map(|side| &side.0),
            legal.as_ref(),
        ))
    }

    /// Pair each card of maindeck + sideboard with a distinct legal set.
    ///
    /// Returns None when impossible.
    #[pyo3(signature = (maindeck, sideboard = None, legal_sets = None))]
    fn assign_unique(
        &self,
        maindeck: &PyDecklist,
        sideboard: Option<PyRef<'_, PyDecklist>>,
        legal_sets: Option<Vec<String>>,
    ) -> Option<PyAssignment> {
        let legal: Option<SetCodes> = legal_sets.map(|sets| sets.into_iter().collect());
        let submission = Submission::new(
            maindeck.0.clone(),
            sideboard.map(|side| side.0.clone()).unwrap_or_default(),
        );
        self.0
            .verifier(FormatRules::default())
            .assign_unique(&submission, legal.as_ref())
            .map(PyAssignment)
    }

    fn __len__(&self) -> usize {
        self.0.printings.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "PrintingSnapshot(cards={}, sets={})",
            self.0.printings.len(),
            self.0.all_sets.len()
        )
    }
}

/// Verify a decklist against printings given as `{card name: [set codes]}`.
///
/// One-shot form of `PrintingSnapshot(printings, all_sets).verify(...)`.
#[pyfunction]
#[pyo3(signature = (maindeck, printings, sideboard = None, all_sets = None, legal_sets = None, rules = None))]
pub fn verify_decklist(
    maindeck: &PyDecklist,
    printings: HashMap<String, Vec<String>>,
    sideboard: Option<PyRef<'_, PyDecklist>>,
    all_sets: Option<Vec<String>>,
    legal_sets: Option<Vec<String>>,
    rules: Option<PyFormatRules>,
) -> PyVerdict {
    PyPrintingSnapshot::new(printings, all_sets).verify(maindeck, sideboard, legal_sets, rules)
}

fn snapshot_error(err: SnapshotError) -> PyErr {
    match err {
        SnapshotError::Io { .. } => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}
