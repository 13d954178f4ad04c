//! Verification outcomes.
//!
//! A submission is either `Valid` or `Invalid` with the complete, ordered
//! list of problems found. Problems are not errors: a player's deck is
//! expected to have zero or many of them, and the caller wants all of them.

use serde::{Deserialize, Serialize};

use crate::core::CardName;

/// A single reason a submission is not legal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Violation {
    /// Main deck below the minimum size.
    DeckTooSmall { min: u64 },
    /// Main deck above the maximum size.
    DeckTooLarge { max: u64 },
    /// Sideboard below the minimum size.
    SideboardTooSmall { min: u64 },
    /// Sideboard above the maximum size.
    SideboardTooLarge { max: u64 },
    /// More copies of a card than the format allows.
    TooManyCopies { card: CardName, max: u32 },
    /// No printing of the card is in a legal set.
    NotLegal { card: CardName },
}

impl Violation {
    /// The card this violation is about, if any.
    #[must_use]
    pub fn card(&self) -> Option<&CardName> {
        match self {
            Violation::TooManyCopies { card, .. } | Violation::NotLegal { card } => Some(card),
            _ => None,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::DeckTooSmall { min } => write!(f, "Deck has less than {min} cards"),
            Violation::DeckTooLarge { max } => write!(f, "Deck has more than {max} cards"),
            Violation::SideboardTooSmall { min } => {
                write!(f, "Sideboard has less than {min} cards")
            }
            Violation::SideboardTooLarge { max } => {
                write!(f, "Sideboard has more than {max} cards")
            }
            Violation::TooManyCopies { card, max } => {
                let noun = if *max == 1 { "copy" } else { "copies" };
                write!(f, "{card} has more than {max} {noun}")
            }
            Violation::NotLegal { card } => write!(f, "{card} is not legal"),
        }
    }
}

/// Result of verifying a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// No problems found.
    Valid,
    /// At least one problem found. `violations` is never empty.
    Invalid { violations: Vec<Violation> },
}

impl Verdict {
    /// Build a verdict from collected violations.
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Verdict::Valid
        } else {
            Verdict::Invalid { violations }
        }
    }

    /// Check if the submission passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The violations, empty when valid.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Verdict::Valid => &[],
            Verdict::Invalid { violations } => violations,
        }
    }

    /// Human-readable messages, one per violation, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations().iter().map(ToString::to_string).collect()
    }
}
