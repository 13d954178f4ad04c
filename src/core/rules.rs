//! Format rules: deck size bounds and copy limits.
//!
//! A league configures these once per format. The defaults match a
//! typical constructed format: at least 60 cards in the main deck, a
//! sideboard of at most 15, and at most 4 copies of any card.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::CardName;

/// Cards that may be played in any number regardless of `max_cards`.
pub const DEFAULT_COPY_LIMIT_EXEMPTIONS: &[&str] = &[
    "Relentless Rats",
    "Rat Colony",
    "Persistent Petitioners",
    "Shadowborn Apostle",
    "Plains",
    "Island",
    "Swamp",
    "Mountain",
    "Forest",
];

/// Set of card names exempt from the copy limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CopyLimitExemptions(FxHashSet<CardName>);

impl CopyLimitExemptions {
    /// An empty exemption list. Every card is held to the copy limit.
    #[must_use]
    pub fn none() -> Self {
        Self(FxHashSet::default())
    }

    /// Add an exempt card.
    #[must_use]
    pub fn with(mut self, name: impl Into<CardName>) -> Self {
        self.0.insert(name.into());
        self
    }

    /// Check if a card is exempt.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Number of exempt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no card is exempt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CopyLimitExemptions {
    fn default() -> Self {
        DEFAULT_COPY_LIMIT_EXEMPTIONS.iter().copied().collect()
    }
}

impl<N: Into<CardName>> FromIterator<N> for CopyLimitExemptions {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Deck construction rules for a format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatRules {
    /// Maximum copies of any non-exempt card, maindeck and sideboard combined.
    pub max_cards: u32,

    /// Minimum main deck size.
    pub min_deck_size: u64,

    /// Maximum main deck size. `None` for unbounded.
    pub max_deck_size: Option<u64>,

    /// Minimum sideboard size.
    pub min_sideboard_size: u64,

    /// Maximum sideboard size.
    pub max_sideboard_size: u64,

    /// Cards allowed in any number.
    pub exemptions: CopyLimitExemptions,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            max_cards: 4,
            min_deck_size: 60,
            max_deck_size: None,
            min_sideboard_size: 0,
            max_sideboard_size: 15,
            exemptions: CopyLimitExemptions::default(),
        }
    }
}

impl FormatRules {
    /// Create rules with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the copy limit.
    #[must_use]
    pub fn with_max_cards(mut self, max: u32) -> Self {
        self.max_cards = max;
        self
    }

    /// Set the minimum main deck size.
    #[must_use]
    pub fn with_min_deck_size(mut self, min: u64) -> Self {
        self.min_deck_size = min;
        self
    }

    /// Set the maximum main deck size.
    #[must_use]
    pub fn with_max_deck_size(mut self, max: u64) -> Self {
        self.max_deck_size = Some(max);
        self
    }

    /// Set the minimum sideboard size.
    #[must_use]
    pub fn with_min_sideboard_size(mut self, min: u64) -> Self {
        self.min_sideboard_size = min;
        self
    }

    /// Set the maximum sideboard size.
    #[must_use]
    pub fn with_max_sideboard_size(mut self, max: u64) -> Self {
        self.max_sideboard_size = max;
        self
    }

    /// Replace the copy-limit exemption list.
    #[must_use]
    pub fn with_exemptions(mut self, exemptions: CopyLimitExemptions) -> Self {
        self.exemptions = exemptions;
        self
    }

    /// Singleton-style rules: one copy of each card, exactly `size` cards.
    #[must_use]
    pub fn singleton(size: u64) -> Self {
        Self::default()
            .with_max_cards(1)
            .with_min_deck_size(size)
            .with_max_deck_size(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = FormatRules::default();
        assert_eq!(rules.max_cards, 4);
        assert_eq!(rules.min_deck_size, 60);
        assert_eq!(rules.max_deck_size, None);
        assert_eq!(rules.min_sideboard_size, 0);
        assert_eq!(rules.max_sideboard_size, 15);
        assert!(rules.exemptions.contains("Plains"));
        assert!(rules.exemptions.contains("Relentless Rats"));
        assert!(!rules.exemptions.contains("Dispel"));
    }

    #[test]
    fn test_builder() {
        let rules = FormatRules::new()
            .with_max_cards(1)
            .with_max_deck_size(100)
            .with_exemptions(CopyLimitExemptions::none().with("Seven Dwarves"));

        assert_eq!(rules.max_cards, 1);
        assert_eq!(rules.max_deck_size, Some(100));
        assert!(rules.exemptions.contains("Seven Dwarves"));
        assert!(!rules.exemptions.contains("Forest"));
    }

    #[test]
    fn test_singleton() {
        let rules = FormatRules::singleton(100);
        assert_eq!(rules.max_cards, 1);
        assert_eq!(rules.min_deck_size, 100);
        assert_eq!(rules.max_deck_size, Some(100));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let rules: FormatRules = serde_json::from_str(r#"{"max_cards": 2}"#).unwrap();
        assert_eq!(rules.max_cards, 2);
        assert_eq!(rules.min_deck_size, 60);
        assert_eq!(rules.exemptions.len(), DEFAULT_COPY_LIMIT_EXEMPTIONS.len());
    }
}
