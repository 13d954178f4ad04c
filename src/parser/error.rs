//! Errors raised while reading a decklist.

use std::path::PathBuf;

use thiserror::Error;

/// A decklist that could not be read or interpreted.
///
/// Parsing stops at the first malformed line, so at most one line is
/// reported per submission.
#[derive(Debug, Error)]
pub enum DecklistError {
    /// A card line does not start with an integer quantity.
    #[error(
        "each line, except for maindeck and sideboard headings, must start with an integer; \
         line {line} starts with {token:?}"
    )]
    InvalidQuantity {
        /// 1-based line number.
        line: usize,
        /// The offending first token.
        token: String,
    },

    /// A card line has a quantity but nothing after it.
    #[error("line {line} has a quantity but no card name")]
    MissingCardName {
        /// 1-based line number.
        line: usize,
    },

    /// The decklist file could not be read.
    #[error("could not read decklist {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DecklistError {
    /// The 1-based line number of the offending line, if the error came
    /// from a specific line.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            DecklistError::InvalidQuantity { line, .. } | DecklistError::MissingCardName { line } => {
                Some(*line)
            }
            DecklistError::Io { .. } => None,
        }
    }
}
