//! Legality verification: size bounds, copy limits and set legality.
//!
//! ## Key Types
//!
//! - `Verifier`: checks decklists against `FormatRules` and legal sets
//! - `Verdict`: `Valid`, or `Invalid` with every `Violation` found
//! - `Violation`: one reason a deck is not legal, rendered as a message

pub mod verdict;
pub mod verifier;

pub use verdict::{Verdict, Violation};
pub use verifier::Verifier;
