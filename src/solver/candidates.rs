//! Solver input and output: candidate sets per card, and the chosen pairing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardName, SetCode, SetCodes};

/// For each card, the sets it may represent.
///
/// Insertion-ordered. Adding sets for a card that is already present
/// extends its candidates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(CardName, SetCodes)>", into = "Vec<(CardName, SetCodes)>")]
pub struct CandidateSets {
    entries: Vec<(CardName, SetCodes)>,
    index: FxHashMap<CardName, usize>,
}

impl CandidateSets {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add candidate sets for a card.
    pub fn insert(&mut self, name: impl Into<CardName>, sets: SetCodes) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1.extend(sets.iter().cloned()),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, sets));
            }
        }
    }

    /// Candidate sets of a card, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SetCodes> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CardName, &SetCodes)> {
        self.entries.iter().map(|(name, sets)| (name, sets))
    }
}

impl<N: Into<CardName>> FromIterator<(N, SetCodes)> for CandidateSets {
    fn from_iter<I: IntoIterator<Item = (N, SetCodes)>>(iter: I) -> Self {
        let mut candidates = CandidateSets::new();
        for (name, sets) in iter {
            candidates.insert(name, sets);
        }
        candidates
    }
}

impl From<Vec<(CardName, SetCodes)>> for CandidateSets {
    fn from(entries: Vec<(CardName, SetCodes)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<CandidateSets> for Vec<(CardName, SetCodes)> {
    fn from(candidates: CandidateSets) -> Self {
        candidates.entries
    }
}

/// A pairing of every card with a distinct set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment(FxHashMap<CardName, SetCode>);

impl Assignment {
    /// Create an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The set paired with a card.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SetCode> {
        self.0.get(name)
    }

    /// Number of paired cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no card is paired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&CardName, &SetCode)> {
        self.0.iter()
    }

    /// Check that this assignment covers exactly the cards of `candidates`,
    /// draws each set from that card's candidates, and never reuses a set.
    #[must_use]
    pub fn satisfies(&self, candidates: &CandidateSets) -> bool {
        if self.len() != candidates.len() {
            return false;
        }
        let mut used = SetCodes::new();
        candidates.iter().all(|(name, sets)| {
            self.get(name.as_str())
                .is_some_and(|set| sets.contains(set.as_str()) && used.insert(set.clone()))
        })
    }
}

impl FromIterator<(CardName, SetCode)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (CardName, SetCode)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
