//! Card printing lookup.
//!
//! The card database is an external collaborator. The engine only sees it
//! through `PrintingIndex`, which answers one question: for a batch of card
//! names, which sets has each card legally been printed in?

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardName, SetCode, SetCodes};

/// Batch lookup of card printings.
///
/// Lookups are by exact, case-sensitive card name. Names the index does not
/// know are simply absent from the result.
pub trait PrintingIndex {
    /// Printings for every known name in `names`.
    fn printings_for(&self, names: &[&CardName]) -> CardPrintings;
}

impl<T: PrintingIndex + ?Sized> PrintingIndex for &T {
    fn printings_for(&self, names: &[&CardName]) -> CardPrintings {
        (**self).printings_for(names)
    }
}

/// In-memory mapping from card name to the sets it was printed in.
///
/// ## Example
///
/// ```
/// use randard_legality::core::SetCodes;
/// use randard_legality::printings::CardPrintings;
///
/// let mut printings = CardPrintings::new();
/// printings.add_printing("Dispel", "ALA");
/// printings.add_printing("Dispel", "M19");
///
/// let legal: SetCodes = ["ALA"].into_iter().collect();
/// assert_eq!(printings.legal_printings("Dispel", &legal).len(), 1);
/// assert!(printings.legal_printings("Unknown Card", &legal).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardPrintings(FxHashMap<CardName, SetCodes>);

impl CardPrintings {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all printings of a card, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<CardName>, sets: SetCodes) {
        self.0.insert(name.into(), sets);
    }

    /// Record one printing of a card.
    pub fn add_printing(&mut self, name: impl Into<CardName>, set: impl Into<SetCode>) {
        self.0.entry(name.into()).or_default().insert(set);
    }

    /// All printings of a card, if known.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SetCodes> {
        self.0.get(name)
    }

    /// Printings of a card restricted to `legal`.
    ///
    /// An unknown card has no legal printings.
    #[must_use]
    pub fn legal_printings(&self, name: &str, legal: &SetCodes) -> SetCodes {
        self.get(name)
            .map(|sets| sets.intersection(legal))
            .unwrap_or_default()
    }

    /// Number of cards with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&CardName, &SetCodes)> {
        self.0.iter()
    }

    /// Every set any card has been printed in.
    #[must_use]
    pub fn all_sets(&self) -> SetCodes {
        self.0.values().flat_map(|sets| sets.iter().cloned()).collect()
    }
}

impl PrintingIndex for CardPrintings {
    fn printings_for(&self, names: &[&CardName]) -> CardPrintings {
        names
            .iter()
            .filter_map(|name| {
                self.0
                    .get_key_value(*name)
                    .map(|(name, sets)| (name.clone(), sets.clone()))
            })
            .collect()
    }
}

impl<N: Into<CardName>> FromIterator<(N, SetCodes)> for CardPrintings {
    fn from_iter<I: IntoIterator<Item = (N, SetCodes)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, sets)| (name.into(), sets)).collect())
    }
}
