//! Read-only snapshot of card printing data.
//!
//! The league bot refreshes card data out of band and hands the engine a
//! snapshot: every card's printings plus the universe of sets that count as
//! "all sets ever legal". The snapshot is loaded once and passed by
//! reference to every verification.
//!
//! Two on-disk formats are supported: JSON for hand-edited or exported data,
//! and bincode for compact caches.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{FormatRules, SetCodes};
use crate::legality::Verifier;

use super::index::CardPrintings;

/// A snapshot that could not be loaded or saved.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid binary snapshot: {0}")]
    Binary(#[from] bincode::Error),

    #[error("could not access snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Card printings together with the full legal-set universe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintingSnapshot {
    /// Printings per card.
    pub printings: CardPrintings,

    /// Every set that is legal when no season restriction applies.
    pub all_sets: SetCodes,
}

impl PrintingSnapshot {
    /// Create a snapshot from explicit parts.
    #[must_use]
    pub fn new(printings: CardPrintings, all_sets: SetCodes) -> Self {
        Self { printings, all_sets }
    }

    /// Create a snapshot whose universe is every set any card appears in.
    #[must_use]
    pub fn from_printings(printings: CardPrintings) -> Self {
        let all_sets = printings.all_sets();
        Self { printings, all_sets }
    }

    /// Parse a snapshot from JSON.
    ///
    /// ```
    /// use randard_legality::printings::PrintingSnapshot;
    ///
    /// let snapshot = PrintingSnapshot::from_json(
    ///     r#"{"printings": {"Dispel": ["ALA", "M19"]}, "all_sets": ["ALA", "M19", "WWK"]}"#,
    /// ).unwrap();
    /// assert_eq!(snapshot.all_sets.len(), 3);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a bincode snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Encode as bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Load a snapshot from disk. Files ending in `.json` are read as JSON,
    /// anything else as bincode.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = if is_json(path) {
            serde_json::from_slice(&bytes)?
        } else {
            Self::from_bytes(&bytes)?
        };
        log::debug!(
            "loaded printing snapshot {}: {} cards, {} sets",
            path.display(),
            snapshot.printings.len(),
            snapshot.all_sets.len()
        );
        Ok(snapshot)
    }

    /// Write a snapshot to disk, choosing the format by extension like `load`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let bytes = if is_json(path) {
            serde_json::to_vec(self)?
        } else {
            self.to_bytes()?
        };
        std::fs::write(path, bytes).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// A verifier backed by this snapshot.
    #[must_use]
    pub fn verifier(&self, rules: FormatRules) -> Verifier<'_, CardPrintings> {
        Verifier::new(&self.printings, &self.all_sets).with_rules(rules)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PrintingSnapshot {
        let mut printings = CardPrintings::new();
        printings.add_printing("Dispel", "ALA");
        printings.add_printing("Dispel", "M19");
        printings.add_printing("Jace, the Mind Sculptor", "WWK");
        PrintingSnapshot::from_printings(printings)
    }

    #[test]
    fn test_universe_from_printings() {
        let snapshot = sample();
        assert_eq!(snapshot.all_sets.len(), 3);
    }

    #[test]
    fn test_json_and_binary_agree() {
        let snapshot = sample();

        let from_json = PrintingSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        let from_bin = PrintingSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();

        assert_eq!(from_json, snapshot);
        assert_eq!(from_bin, snapshot);
    }

    #[test]
    fn test_invalid_json() {
        let err = PrintingSnapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }

    #[test]
    fn test_save_and_load() {
        let snapshot = sample();
        let dir = std::env::temp_dir();
        let json_path = dir.join(format!("randard-snapshot-{}.json", std::process::id()));
        let bin_path = dir.join(format!("randard-snapshot-{}.bin", std::process::id()));

        snapshot.save(&json_path).unwrap();
        snapshot.save(&bin_path).unwrap();

        assert_eq!(PrintingSnapshot::load(&json_path).unwrap(), snapshot);
        assert_eq!(PrintingSnapshot::load(&bin_path).unwrap(), snapshot);

        std::fs::remove_file(json_path).unwrap();
        std::fs::remove_file(bin_path).unwrap();
    }
}
