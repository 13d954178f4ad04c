//! Decklist legality verification.
//!
//! Three checks run in a fixed order and all contribute to one list:
//!
//! 1. Size bounds: main deck, then sideboard (unmerged counts).
//! 2. Copy limits: over maindeck + sideboard, most copies first.
//! 3. Set legality: every distinct card needs a printing in a legal set.

use crate::core::{Decklist, FormatRules, LegalSets, Submission};
use crate::printings::PrintingIndex;
use crate::solver::{assign_unique_sets, Assignment, CandidateSets};

use super::verdict::{Verdict, Violation};

/// Checks decklists against a format.
///
/// Holds read-only references to the card printing index and to the full
/// legal-set universe, which is used whenever no season-specific set list
/// is given.
///
/// ## Example
///
/// ```
/// use randard_legality::core::Decklist;
/// use randard_legality::legality::Verifier;
/// use randard_legality::printings::CardPrintings;
///
/// let mut printings = CardPrintings::new();
/// printings.add_printing("Island", "M19");
/// printings.add_printing("Dispel", "M19");
/// let universe = printings.all_sets();
///
/// let verifier = Verifier::new(&printings, &universe);
/// let deck: Decklist = [("Island", 56), ("Dispel", 4)].into_iter().collect();
///
/// assert!(verifier.verify(&deck, None, None).is_valid());
/// ```
pub struct Verifier<'a, I: PrintingIndex + ?Sized> {
    index: &'a I,
    all_sets: &'a LegalSets,
    rules: FormatRules,
}

impl<'a, I: PrintingIndex + ?Sized> Verifier<'a, I> {
    /// Create a verifier with default format rules.
    #[must_use]
    pub fn new(index: &'a I, all_sets: &'a LegalSets) -> Self {
        Self {
            index,
            all_sets,
            rules: FormatRules::default(),
        }
    }

    /// Use different format rules.
    #[must_use]
    pub fn with_rules(mut self, rules: FormatRules) -> Self {
        self.rules = rules;
        self
    }

    /// The format rules in effect.
    #[must_use]
    pub fn rules(&self) -> &FormatRules {
        &self.rules
    }

    /// Verify a main deck and optional sideboard.
    ///
    /// Without a sideboard only the main deck size bounds are checked.
    /// With one, both sets of bounds apply, and copy limits and legality
    /// are checked on the two lists added together. `legal_sets` defaults
    /// to the full universe.
    #[must_use]
    pub fn verify(
        &self,
        maindeck: &Decklist,
        sideboard: Option<&Decklist>,
        legal_sets: Option<&LegalSets>,
    ) -> Verdict {
        let mut violations = size_violations(&self.rules, maindeck, sideboard);

        let merged;
        let combined = match sideboard {
            Some(side) => {
                merged = maindeck.merged(side);
                &merged
            }
            None => maindeck,
        };

        violations.extend(copy_limit_violations(&self.rules, combined));
        violations.extend(self.legality_violations(combined, legal_sets));

        log::debug!(
            "verified {} cards ({} distinct): {} violations",
            combined.total(),
            combined.len(),
            violations.len()
        );
        for violation in &violations {
            log::trace!("violation: {violation}");
        }

        Verdict::from_violations(violations)
    }

    /// Verify a parsed submission, sideboard included.
    #[must_use]
    pub fn verify_submission(
        &self,
        submission: &Submission,
        legal_sets: Option<&LegalSets>,
    ) -> Verdict {
        self.verify(&submission.maindeck, Some(&submission.sideboard), legal_sets)
    }

    /// Legal printings of every distinct card in `decklist`, in decklist
    /// order. Unknown cards get an empty candidate set.
    #[must_use]
    pub fn candidate_sets(&self, decklist: &Decklist, legal_sets: Option<&LegalSets>) -> CandidateSets {
        let legal = legal_sets.unwrap_or(self.all_sets);
        let names: Vec<_> = decklist.names().collect();
        let printings = self.index.printings_for(&names);

        names
            .into_iter()
            .map(|name| (name.clone(), printings.legal_printings(name.as_str(), legal)))
            .collect()
    }

    /// Pair every card of the submission with a distinct legal set, for the
    /// one-card-per-set format variant.
    ///
    /// Returns `None` when no such pairing exists.
    #[must_use]
    pub fn assign_unique(
        &self,
        submission: &Submission,
        legal_sets: Option<&LegalSets>,
    ) -> Option<Assignment> {
        let candidates = self.candidate_sets(&submission.merged(), legal_sets);
        assign_unique_sets(&candidates)
    }

    fn legality_violations(&self, decklist: &Decklist, legal_sets: Option<&LegalSets>) -> Vec<Violation> {
        let legal = legal_sets.unwrap_or(self.all_sets);
        let names: Vec<_> = decklist.names().collect();
        let printings = self.index.printings_for(&names);

        names
            .into_iter()
            .filter(|name| {
                printings
                    .get(name.as_str())
                    .map_or(true, |sets| !sets.intersects(legal))
            })
            .map(|name| Violation::NotLegal { card: name.clone() })
            .collect()
    }
}

/// Size bound violations: main deck first, then sideboard.
fn size_violations(
    rules: &FormatRules,
    maindeck: &Decklist,
    sideboard: Option<&Decklist>,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    let deck_size = maindeck.total();
    if deck_size < rules.min_deck_size {
        violations.push(Violation::DeckTooSmall { min: rules.min_deck_size });
    } else if let Some(max) = rules.max_deck_size.filter(|&max| deck_size > max) {
        violations.push(Violation::DeckTooLarge { max });
    }

    if let Some(side) = sideboard {
        let side_size = side.total();
        if side_size < rules.min_sideboard_size {
            violations.push(Violation::SideboardTooSmall { min: rules.min_sideboard_size });
        } else if side_size > rules.max_sideboard_size {
            violations.push(Violation::SideboardTooLarge { max: rules.max_sideboard_size });
        }
    }

    violations
}

/// Copy limit violations in descending count order.
///
/// Once a card at or below the limit is reached every later card is too,
/// so the scan stops there.
fn copy_limit_violations(rules: &FormatRules, decklist: &Decklist) -> Vec<Violation> {
    decklist
        .most_common()
        .into_iter()
        .take_while(|&(_, count)| count > rules.max_cards)
        .filter(|(name, _)| !rules.exemptions.contains(name.as_str()))
        .map(|(name, _)| Violation::TooManyCopies {
            card: name.clone(),
            max: rules.max_cards,
        })
        .collect()
}
