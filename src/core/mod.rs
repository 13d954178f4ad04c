//! Core data types: card and set identifiers, decklists, format rules.
//!
//! Everything here is plain data. Parsing, verification and solving live
//! in their own modules and only consume these types.

pub mod card;
pub mod decklist;
pub mod rules;
pub mod sets;

pub use card::{CardName, SetCode};
pub use decklist::{Decklist, Submission};
pub use rules::{CopyLimitExemptions, FormatRules, DEFAULT_COPY_LIMIT_EXEMPTIONS};
pub use sets::{LegalSets, SetCodes};
