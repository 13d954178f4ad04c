//! Decklist parsing: raw submission text to maindeck and sideboard.
//!
//! ## Key Items
//!
//! - `parse_decklist`: parse in-memory text
//! - `read_decklist`: parse from a `DecklistSource` (text or file)
//! - `DecklistError`: malformed line or unreadable file

pub mod decklist;
pub mod error;
pub mod source;

pub use decklist::parse_decklist;
pub use error::DecklistError;
pub use source::{read_decklist, DecklistSource};
