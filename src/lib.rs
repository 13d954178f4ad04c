//! # randard-legality
//!
//! Decklist legality engine for rotating-format card game leagues.
//!
//! Turns a free-form decklist submission into a structured verdict:
//! parse the text, check deck sizes and copy limits, check every card
//! against the sets legal this season, and, for the one-card-per-set
//! variant, find a distinct legal set for every card.
//!
//! ## Design Principles
//!
//! 1. **Explicit data**: Card printings and the legal-set universe are
//!    read-only snapshots passed in by the caller. Nothing is fetched or
//!    cached globally.
//!
//! 2. **Verdicts, not errors**: Everything wrong with a deck is collected
//!    into one ordered list. Only malformed input text is an error.
//!
//! 3. **Pure calls**: Every operation is a function of its inputs. Callers
//!    can share snapshots across threads freely.
//!
//! ## Modules
//!
//! - `core`: Card names, set codes, decklists, format rules
//! - `parser`: Decklist text → maindeck and sideboard
//! - `printings`: Card printing lookup and snapshots
//! - `legality`: Verifier and verdicts
//! - `solver`: One-card-per-set assignment search

pub mod core;
pub mod parser;
pub mod printings;
pub mod legality;
pub mod solver;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardName, SetCode, SetCodes, LegalSets,
    Decklist, Submission,
    FormatRules, CopyLimitExemptions,
};

pub use crate::parser::{parse_decklist, read_decklist, DecklistError, DecklistSource};

pub use crate::printings::{CardPrintings, PrintingIndex, PrintingSnapshot, SnapshotError};

pub use crate::legality::{Verdict, Verifier, Violation};

pub use crate::solver::{
    assign_unique_sets, Assignment, CandidateSets,
    SolveReport, SolverStats, UniqueSetSolver,
};
