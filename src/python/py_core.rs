//! Decklist and parser bindings for Python.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::core::Decklist;
use crate::parser::{self, DecklistError};

/// Python wrapper for Decklist.
#[pyclass(name = "Decklist")]
#[derive(Clone, Debug)]
pub struct PyDecklist(pub Decklist);

#[pymethods]
impl PyDecklist {
    /// Create a decklist from `(name, count)` pairs.
    #[new]
    #[pyo3(signature = (entries = Vec::new()))]
    fn new(entries: Vec<(String, u32)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Add copies of a card.
    fn add(&mut self, name: &str, count: u32) {
        self.0.add(name, count);
    }

    /// Number of copies of a card.
    fn count(&self, name: &str) -> u32 {
        self.0.count(name)
    }

    /// Total number of cards.
    fn total(&self) -> u64 {
        self.0.total()
    }

    /// `(name, count)` pairs in first-insertion order.
    fn entries(&self) -> Vec<(String, u32)> {
        self.0
            .iter()
            .map(|(name, count)| (name.as_str().to_string(), count))
            .collect()
    }

    fn __contains__(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __repr__(&self) -> String {
        format!("Decklist(cards={}, distinct={})", self.0.total(), self.0.len())
    }
}

/// Parse decklist text into `(maindeck, sideboard)`.
///
/// Raises `ValueError` naming the offending line.
#[pyfunction]
pub fn parse_decklist(text: &str) -> PyResult<(PyDecklist, PyDecklist)> {
    let submission = parser::parse_decklist(text).map_err(decklist_error)?;
    Ok((PyDecklist(submission.maindeck), PyDecklist(submission.sideboard)))
}

/// Read and parse a decklist file into `(maindeck, sideboard)`.
#[pyfunction]
pub fn read_decklist_file(path: std::path::PathBuf) -> PyResult<(PyDecklist, PyDecklist)> {
    let submission =
        parser::read_decklist(parser::DecklistSource::File(&path)).map_err(decklist_error)?;
    Ok((PyDecklist(submission.maindeck), PyDecklist(submission.sideboard)))
}

fn decklist_error(err: DecklistError) -> PyErr {
    match err {
        DecklistError::Io { .. } => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}
