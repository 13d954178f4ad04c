//! Decklists as insertion-ordered multisets of card names.
//!
//! A `Decklist` maps each card name to a positive count. Adding a card that
//! is already present accumulates its count. Iteration follows the order in
//! which names were first added, which keeps every report derived from a
//! decklist stable across runs.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::CardName;

/// Multiset of card names with positive counts.
///
/// ## Example
///
/// ```
/// use randard_legality::core::Decklist;
///
/// let mut deck = Decklist::new();
/// deck.add("Forest", 10);
/// deck.add("Llanowar Elves", 4);
/// deck.add("Forest", 7);
///
/// assert_eq!(deck.count("Forest"), 17);
/// assert_eq!(deck.total(), 21);
/// assert_eq!(deck.len(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(CardName, u32)>", into = "Vec<(CardName, u32)>")]
pub struct Decklist {
    /// Entries in first-insertion order.
    entries: Vec<(CardName, u32)>,

    /// Position of each name in `entries`.
    index: FxHashMap<CardName, usize>,
}

impl Decklist {
    /// Create an empty decklist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` copies of a card.
    ///
    /// A count of zero never materializes an entry. Counts saturate at
    /// `u32::MAX` rather than wrapping.
    pub fn add(&mut self, name: impl Into<CardName>, count: u32) {
        if count == 0 {
            return;
        }
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => {
                let total = &mut self.entries[pos].1;
                *total = total.saturating_add(count);
            }
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, count));
            }
        }
    }

    /// Number of copies of a card (0 if absent).
    #[must_use]
    pub fn count(&self, name: &str) -> u32 {
        self.index.get(name).map_or(0, |&pos| self.entries[pos].1)
    }

    /// Check if the decklist contains at least one copy of a card.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the decklist has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of cards, counting copies.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| u64::from(*n)).sum()
    }

    /// Iterate over `(name, count)` in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CardName, u32)> {
        self.entries.iter().map(|(name, n)| (name, *n))
    }

    /// Iterate over distinct card names in first-insertion order.
    pub fn names(&self) -> impl Iterator<Item = &CardName> {
        self.entries.iter().map(|(name, _)| name)
    }

    /// Sum of two decklists.
    ///
    /// Cards from `self` come first, followed by cards only present in
    /// `other`, each group in its own insertion order.
    #[must_use]
    pub fn merged(&self, other: &Decklist) -> Decklist {
        let mut merged = self.clone();
        for (name, count) in other.iter() {
            merged.add(name.clone(), count);
        }
        merged
    }

    /// Entries sorted by descending count.
    ///
    /// Ties keep first-insertion order.
    #[must_use]
    pub fn most_common(&self) -> Vec<(&CardName, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

/// Two decklists are equal when they hold the same multiset,
/// regardless of insertion order.
impl PartialEq for Decklist {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(name, count)| other.count(name.as_str()) == count)
    }
}

impl Eq for Decklist {}

impl<N: Into<CardName>> FromIterator<(N, u32)> for Decklist {
    fn from_iter<I: IntoIterator<Item = (N, u32)>>(iter: I) -> Self {
        let mut deck = Decklist::new();
        deck.extend(iter);
        deck
    }
}

impl<N: Into<CardName>> Extend<(N, u32)> for Decklist {
    fn extend<I: IntoIterator<Item = (N, u32)>>(&mut self, iter: I) {
        for (name, count) in iter {
            self.add(name, count);
        }
    }
}

impl From<Vec<(CardName, u32)>> for Decklist {
    fn from(entries: Vec<(CardName, u32)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Decklist> for Vec<(CardName, u32)> {
    fn from(deck: Decklist) -> Self {
        deck.entries
    }
}

/// The result of parsing one decklist submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Main deck.
    pub maindeck: Decklist,

    /// Sideboard. Empty when the submission had no sideboard section.
    pub sideboard: Decklist,
}

impl Submission {
    /// Create a submission from its two halves.
    #[must_use]
    pub fn new(maindeck: Decklist, sideboard: Decklist) -> Self {
        Self { maindeck, sideboard }
    }

    /// Maindeck and sideboard added together.
    #[must_use]
    pub fn merged(&self) -> Decklist {
        self.maindeck.merged(&self.sideboard)
    }
}
