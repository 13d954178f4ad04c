//! Legality verifier tests.
//!
//! These tests verify full submissions against format rules:
//! - Deck and sideboard size bounds
//! - Copy limits and exemptions
//! - Set legality, including unknown cards
//! - Violation ordering and repeatability

use randard_legality::core::{Decklist, FormatRules, SetCodes};
use randard_legality::legality::{Verdict, Verifier, Violation};
use randard_legality::parser::parse_decklist;
use randard_legality::printings::{CardPrintings, PrintingIndex, PrintingSnapshot};
use randard_legality::CardName;

fn sets(codes: &[&str]) -> SetCodes {
    codes.iter().copied().collect()
}

fn deck(entries: &[(&str, u32)]) -> Decklist {
    entries.iter().copied().collect()
}

/// Printings for a small card pool. Basic lands are in every set.
fn sample_printings() -> CardPrintings {
    let mut printings = CardPrintings::new();
    for basic in ["Plains", "Island", "Swamp", "Mountain", "Forest"] {
        for set in ["10E", "ALA", "M19", "WWK"] {
            printings.add_printing(basic, set);
        }
    }
    printings.insert("Dispel", sets(&["ALA", "M19"]));
    printings.insert("Jace, the Mind Sculptor", sets(&["WWK"]));
    printings.insert("Giant Growth", sets(&["10E", "M19"]));
    printings.insert("Llanowar Elves", sets(&["10E", "M19"]));
    printings.insert("Negate", sets(&["M19"]));
    printings
}

// =============================================================================
// Legality Tests
// =============================================================================

/// A card with a legal printing passes; one without fails.
#[test]
fn test_legal_and_illegal_cards() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let rules = FormatRules::default().with_min_deck_size(0);
    let verifier = Verifier::new(&printings, &universe).with_rules(rules);
    let legal = sets(&["ALA"]);

    let dispel = verifier.verify(&deck(&[("Dispel", 1)]), None, Some(&legal));
    assert_eq!(dispel, Verdict::Valid);

    let jace = verifier.verify(&deck(&[("Jace, the Mind Sculptor", 1)]), None, Some(&legal));
    assert_eq!(jace.messages(), vec!["Jace, the Mind Sculptor is not legal"]);
}

/// Without a legal set list, everything in the universe is legal.
#[test]
fn test_default_legal_sets_is_universe() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let verifier = Verifier::new(&printings, &universe);

    let list = deck(&[("Jace, the Mind Sculptor", 4), ("Island", 56)]);
    assert!(verifier.verify(&list, None, None).is_valid());
}

/// Unknown cards are illegal, not errors.
#[test]
fn test_unknown_card_is_not_legal() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let verifier = Verifier::new(&printings, &universe);

    let list = deck(&[("Island", 59), ("Totally Real Card", 1)]);
    assert_eq!(
        verifier.verify(&list, None, None).violations(),
        &[Violation::NotLegal { card: CardName::new("Totally Real Card") }]
    );
}

/// Sideboard cards are held to the same legality standard.
#[test]
fn test_sideboard_cards_checked_for_legality() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let verifier = Verifier::new(&printings, &universe);
    let legal = sets(&["M19"]);

    let verdict = verifier.verify(
        &deck(&[("Island", 60)]),
        Some(&deck(&[("Jace, the Mind Sculptor", 1)])),
        Some(&legal),
    );
    assert_eq!(verdict.messages(), vec!["Jace, the Mind Sculptor is not legal"]);
}

// =============================================================================
// Copy Limit Tests
// =============================================================================

/// Five copies of a normal card break the limit; five Plains do not.
#[test]
fn test_copy_limit_and_basic_lands() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let verifier = Verifier::new(&printings, &universe);

    let too_many = verifier.verify(&deck(&[("Dispel", 5), ("Island", 55)]), None, None);
    assert_eq!(too_many.violations().len(), 1);
    assert!(too_many.messages()[0].contains("Dispel"));

    let plains = verifier.verify(&deck(&[("Plains", 5), ("Island", 55)]), None, None);
    assert!(plains.is_valid());
}

/// Copy limits count maindeck and sideboard together.
#[test]
fn test_copy_limit_spans_sideboard() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let verifier = Verifier::new(&printings, &universe);

    let verdict = verifier.verify(
        &deck(&[("Negate", 3), ("Island", 57)]),
        Some(&deck(&[("Negate", 2)])),
        None,
    );
    assert_eq!(verdict.messages(), vec!["Negate has more than 4 copies"]);
}

/// Singular wording for a limit of one.
#[test]
fn test_singleton_wording() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let verifier = Verifier::new(&printings, &universe).with_rules(FormatRules::singleton(3));

    let verdict = verifier.verify(&deck(&[("Dispel", 2), ("Island", 1)]), None, None);
    assert_eq!(verdict.messages(), vec!["Dispel has more than 1 copy"]);
}

// =============================================================================
// Size Tests
// =============================================================================

/// 59 cards is too small; 60 is fine.
#[test]
fn test_minimum_deck_size_boundary() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let verifier = Verifier::new(&printings, &universe);

    let small = verifier.verify(&deck(&[("Island", 59)]), None, None);
    assert_eq!(small.messages(), vec!["Deck has less than 60 cards"]);

    let exact = verifier.verify(&deck(&[("Island", 60)]), None, None);
    assert!(exact.is_valid());
}

/// Size bounds use unmerged counts.
#[test]
fn test_sizes_are_unmerged() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let verifier = Verifier::new(&printings, &universe);

    // 50 + 15 = 65 combined, but the main deck alone is short.
    let verdict = verifier.verify(&deck(&[("Island", 50)]), Some(&deck(&[("Forest", 15)])), None);
    assert_eq!(verdict.messages(), vec!["Deck has less than 60 cards"]);

    let big_side = verifier.verify(&deck(&[("Island", 60)]), Some(&deck(&[("Forest", 16)])), None);
    assert_eq!(big_side.messages(), vec!["Sideboard has more than 15 cards"]);
}

/// Without a sideboard, sideboard bounds are not checked.
#[test]
fn test_sideboard_bounds_skipped_without_sideboard() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let rules = FormatRules::default().with_min_sideboard_size(15);
    let verifier = Verifier::new(&printings, &universe).with_rules(rules);

    assert!(verifier.verify(&deck(&[("Island", 60)]), None, None).is_valid());

    let verdict = verifier.verify(&deck(&[("Island", 60)]), Some(&Decklist::new()), None);
    assert_eq!(verdict.messages(), vec!["Sideboard has less than 15 cards"]);
}

/// Maximum deck size is optional.
#[test]
fn test_maximum_deck_size() {
    let printings = sample_printings();
    let universe = printings.all_sets();

    let unbounded = Verifier::new(&printings, &universe);
    assert!(unbounded.verify(&deck(&[("Island", 250)]), None, None).is_valid());

    let bounded = Verifier::new(&printings, &universe)
        .with_rules(FormatRules::default().with_max_deck_size(60));
    assert_eq!(
        bounded.verify(&deck(&[("Island", 61)]), None, None).messages(),
        vec!["Deck has more than 60 cards"]
    );
}

// =============================================================================
// Ordering Tests
// =============================================================================

/// Sizes first, then copies by count, then illegal cards in list order.
#[test]
fn test_violation_order() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let verifier = Verifier::new(&printings, &universe);
    let legal = sets(&["M19"]);

    let main = deck(&[
        ("Dispel", 5),
        ("Jace, the Mind Sculptor", 6),
        ("Unknown", 1),
        ("Negate", 6),
    ]);
    let side = deck(&[("Giant Growth", 16)]);

    let verdict = verifier.verify(&main, Some(&side), Some(&legal));
    assert_eq!(
        verdict.messages(),
        vec![
            "Deck has less than 60 cards",
            "Sideboard has more than 15 cards",
            "Giant Growth has more than 4 copies",
            "Jace, the Mind Sculptor has more than 4 copies",
            "Negate has more than 4 copies",
            "Dispel has more than 4 copies",
            "Jace, the Mind Sculptor is not legal",
            "Unknown is not legal",
        ]
    );
}

/// Verifying twice gives identical results.
#[test]
fn test_verify_is_repeatable() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let verifier = Verifier::new(&printings, &universe);
    let legal = sets(&["ALA"]);

    let main = deck(&[("Negate", 7), ("Jace, the Mind Sculptor", 1), ("Island", 10)]);
    let side = deck(&[("Unknown", 20)]);

    let first = verifier.verify(&main, Some(&side), Some(&legal));
    let second = verifier.verify(&main, Some(&side), Some(&legal));
    assert_eq!(first, second);
    assert_eq!(first.messages(), second.messages());
}

// =============================================================================
// Index Tests
// =============================================================================

/// An index that counts how often it is queried.
struct CountingIndex {
    inner: CardPrintings,
    calls: std::cell::Cell<usize>,
}

impl PrintingIndex for CountingIndex {
    fn printings_for(&self, names: &[&CardName]) -> CardPrintings {
        self.calls.set(self.calls.get() + 1);
        self.inner.printings_for(names)
    }
}

/// Legality is checked with one batch lookup per verification.
#[test]
fn test_single_batch_lookup() {
    let index = CountingIndex {
        inner: sample_printings(),
        calls: std::cell::Cell::new(0),
    };
    let universe = index.inner.all_sets();
    let verifier = Verifier::new(&index, &universe);

    let _ = verifier.verify(&deck(&[("Island", 30), ("Dispel", 4), ("Negate", 4)]), None, None);
    assert_eq!(index.calls.get(), 1);
}

// =============================================================================
// End-to-End Tests
// =============================================================================

/// Parse, then verify through a snapshot.
#[test]
fn test_parse_and_verify_submission() {
    let snapshot = PrintingSnapshot::from_printings(sample_printings());
    let verifier = snapshot.verifier(FormatRules::default());

    let text = "Deck\n4 Llanowar Elves\n4 Giant Growth\n52 Forest\nSideboard\n3 Negate\n";
    let submission = parse_decklist(text).unwrap();

    assert!(verifier.verify_submission(&submission, Some(&sets(&["M19"]))).is_valid());

    let verdict = verifier.verify_submission(&submission, Some(&sets(&["10E"])));
    assert_eq!(verdict.messages(), vec!["Negate is not legal"]);
}

/// The verifier works through a trait object.
#[test]
fn test_dyn_index() {
    let printings = sample_printings();
    let universe = printings.all_sets();
    let index: &dyn PrintingIndex = &printings;
    let verifier = Verifier::new(index, &universe);

    assert!(verifier.verify(&deck(&[("Island", 60)]), None, None).is_valid());
}
