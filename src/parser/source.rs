//! Where decklist text comes from.

use std::path::{Path, PathBuf};

use crate::core::Submission;

use super::decklist::parse_decklist;
use super::error::DecklistError;

/// Decklist input: either text already in memory or a file to read.
#[derive(Clone, Copy, Debug)]
pub enum DecklistSource<'a> {
    /// In-memory decklist text.
    Text(&'a str),
    /// Path to a UTF-8 text file.
    File(&'a Path),
}

impl<'a> DecklistSource<'a> {
    /// Read a decklist from a file.
    pub fn file(path: &'a impl AsRef<Path>) -> Self {
        DecklistSource::File(path.as_ref())
    }
}

/// Read and parse a decklist from any source.
pub fn read_decklist(source: DecklistSource<'_>) -> Result<Submission, DecklistError> {
    match source {
        DecklistSource::Text(text) => parse_decklist(text),
        DecklistSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| DecklistError::Io {
                path: PathBuf::from(path),
                source,
            })?;
            log::debug!("read decklist from {}", path.display());
            parse_decklist(&text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_source() {
        let submission = read_decklist(DecklistSource::Text("3 Shock\n")).unwrap();
        assert_eq!(submission.maindeck.count("Shock"), 3);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("randard-legality-does-not-exist.txt");
        let err = read_decklist(DecklistSource::file(&path)).unwrap_err();
        assert!(matches!(err, DecklistError::Io { .. }));
    }

    #[test]
    fn test_file_source() {
        let path = std::env::temp_dir().join(format!(
            "randard-legality-source-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "Deck\n20 Forest\nSideboard\n1 Naturalize\n").unwrap();

        let submission = read_decklist(DecklistSource::file(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(submission.maindeck.count("Forest"), 20);
        assert_eq!(submission.sideboard.count("Naturalize"), 1);
    }
}
