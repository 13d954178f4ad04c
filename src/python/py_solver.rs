//! Unique-set solver bindings for Python.

use std::collections::HashMap;

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::SetCodes;
use crate::solver::{self, Assignment, CandidateSets};

/// Python wrapper for Assignment.
#[pyclass(name = "Assignment")]
#[derive(Clone, Debug)]
pub struct PyAssignment(pub Assignment);

#[pymethods]
impl PyAssignment {
    /// The set paired with a card.
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).map(|set| set.as_str().to_string())
    }

    /// The assignment as a `{card name: set code}` dict.
    fn to_dict(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(name, set)| (name.as_str().to_string(), set.as_str().to_string()))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("Assignment(cards={})", self.0.len())
    }
}

/// Pair every card with a distinct set from its candidates.
///
/// `candidates` maps card names to any iterable of set codes. Returns
/// None when no pairing exists.
#[pyfunction]
pub fn assign_unique_sets(candidates: &Bound<'_, PyDict>) -> PyResult<Option<PyAssignment>> {
    let mut mapping = CandidateSets::new();
    for (name, sets) in candidates.iter() {
        let name: String = name.extract()?;
        let mut codes = SetCodes::new();
        for code in sets.iter()? {
            codes.insert(code?.extract::<String>()?);
        }
        mapping.insert(name, codes);
    }
    Ok(solver::assign_unique_sets(&mapping).map(PyAssignment))
}
