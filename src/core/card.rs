//! Card and set identifiers.
//!
//! Both identifiers are opaque strings. The engine never interprets them:
//! equality is exact and case-sensitive, exactly as the card database
//! prints them.
//!
//! ## Naming conventions
//!
//! - Two-faced cards use the front-face name only.
//! - Split cards join both halves with `" // "` (e.g. `"Fire // Ice"`).

use serde::{Deserialize, Serialize};

/// Name of a card as printed on its canonical reference.
///
/// ```
/// use randard_legality::core::CardName;
///
/// let name = CardName::new("  Llanowar Elves ");
/// assert_eq!(name.as_str(), "Llanowar Elves");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardName(String);

impl CardName {
    /// Create a card name, trimming surrounding whitespace.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::borrow::Borrow<str> for CardName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Short code identifying a source-set (e.g. `"M19"`, `"WWK"`).
///
/// Ordered so that anything iterating over sets does so deterministically.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetCode(String);

impl SetCode {
    /// Create a set code. The code is stored as given.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SetCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SetCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SetCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for SetCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
