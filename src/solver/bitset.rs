//! Fixed-width bitset over a small index universe.
//!
//! Used for both card masks and set masks. Every mask in one solve is
//! created with the same width, so equality and hashing compare like with
//! like.

use smallvec::{smallvec, SmallVec};

const WORD_BITS: usize = 64;

/// A set of indices in `0..width`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitSet {
    words: SmallVec<[u64; 4]>,
}

impl BitSet {
    /// An empty bitset able to hold indices `0..width`.
    #[must_use]
    pub fn with_width(width: usize) -> Self {
        let words = width.div_ceil(WORD_BITS).max(1);
        Self {
            words: smallvec![0; words],
        }
    }

    /// Insert an index.
    pub fn insert(&mut self, index: usize) {
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    /// Remove an index.
    pub fn remove(&mut self, index: usize) {
        self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / WORD_BITS)
            .is_some_and(|word| word & (1u64 << (index % WORD_BITS)) != 0)
    }

    /// Number of indices present.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if no index is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Indices in `self` but not in `other`.
    #[must_use]
    pub fn difference(&self, other: &BitSet) -> BitSet {
        let words = self
            .words
            .iter()
            .zip(other.words.iter().chain(std::iter::repeat(&0)))
            .map(|(a, b)| a & !b)
            .collect();
        BitSet { words }
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(w * WORD_BITS + bit)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = BitSet::with_width(130);
        set.insert(0);
        set.insert(64);
        set.insert(129);

        assert!(set.contains(0));
        assert!(set.contains(64));
        assert!(set.contains(129));
        assert!(!set.contains(1));
        assert!(!set.contains(500));
        assert_eq!(set.count(), 3);

        set.remove(64);
        assert!(!set.contains(64));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_iter_ascending() {
        let mut set = BitSet::with_width(200);
        for i in [150, 3, 64, 63, 0] {
            set.insert(i);
        }
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 63, 64, 150]);
    }

    #[test]
    fn test_difference() {
        let mut a = BitSet::with_width(10);
        let mut b = BitSet::with_width(10);
        a.insert(1);
        a.insert(2);
        b.insert(2);
        b.insert(5);

        assert_eq!(a.difference(&b).iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(b.difference(&a).iter().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_zero_width() {
        let set = BitSet::with_width(0);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
