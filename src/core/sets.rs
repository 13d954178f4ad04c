//! Collections of set codes.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::SetCode;

/// A set of source-set codes, such as the sets legal in the current season
/// or the sets a card has been printed in.
///
/// ```
/// use randard_legality::core::SetCodes;
///
/// let legal: SetCodes = ["ALA", "M19"].into_iter().collect();
/// let printed: SetCodes = ["M19", "DOM"].into_iter().collect();
///
/// let both = printed.intersection(&legal);
/// assert!(both.contains("M19"));
/// assert_eq!(both.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetCodes(FxHashSet<SetCode>);

/// Set codes legal in a format.
pub type LegalSets = SetCodes;

impl SetCodes {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code. Returns `false` if it was already present.
    pub fn insert(&mut self, code: impl Into<SetCode>) -> bool {
        self.0.insert(code.into())
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    /// Number of codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &SetCode> {
        self.0.iter()
    }

    /// Codes present in both collections.
    #[must_use]
    pub fn intersection(&self, other: &SetCodes) -> SetCodes {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .0
            .iter()
            .filter(|code| large.0.contains(*code))
            .cloned()
            .collect()
    }

    /// Check if the two collections share at least one code.
    #[must_use]
    pub fn intersects(&self, other: &SetCodes) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.0.iter().any(|code| large.0.contains(code))
    }
}

impl<C: Into<SetCode>> FromIterator<C> for SetCodes {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<C: Into<SetCode>> Extend<C> for SetCodes {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a SetCodes {
    type Item = &'a SetCode;
    type IntoIter = std::collections::hash_set::Iter<'a, SetCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_is_symmetric() {
        let a: SetCodes = ["ALA", "M19", "WWK"].into_iter().collect();
        let b: SetCodes = ["WWK"].into_iter().collect();

        assert_eq!(a.intersection(&b), b.intersection(&a));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_disjoint() {
        let a: SetCodes = ["ALA"].into_iter().collect();
        let b: SetCodes = ["WWK"].into_iter().collect();

        assert!(a.intersection(&b).is_empty());
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&SetCodes::new()));
    }
}
