//! Backtracking search for a one-set-per-card assignment.
//!
//! Cards and sets are mapped onto dense indices once per solve. Candidate
//! sets become bitsets, so reducing the problem after a choice is a single
//! mask update rather than a rebuilt mapping.
//!
//! At every level the unplaced card with the fewest remaining options is
//! placed next. That ordering only affects speed: any order finds the same
//! answer to "is there an assignment".

use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::SetCode;

use super::bitset::BitSet;
use super::candidates::{Assignment, CandidateSets};
use super::stats::SolverStats;

/// Outcome of a solve, with statistics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolveReport {
    /// A witnessing assignment, or `None` if none exists.
    pub assignment: Option<Assignment>,

    /// Search statistics.
    pub stats: SolverStats,
}

/// Solver for the one-card-per-set format variant.
///
/// Never modifies the candidate mapping it is given, so one mapping can be
/// shared by any number of solvers.
///
/// ## Example
///
/// ```
/// use randard_legality::core::SetCodes;
/// use randard_legality::solver::{CandidateSets, UniqueSetSolver};
///
/// let candidates: CandidateSets = [
///     ("A", ["X", "Y"].into_iter().collect::<SetCodes>()),
///     ("B", ["X"].into_iter().collect::<SetCodes>()),
/// ]
/// .into_iter()
/// .collect();
///
/// let report = UniqueSetSolver::new(&candidates).solve();
/// let assignment = report.assignment.unwrap();
/// assert_eq!(assignment.get("A").unwrap().as_str(), "Y");
/// assert_eq!(assignment.get("B").unwrap().as_str(), "X");
/// ```
#[derive(Clone, Debug)]
pub struct UniqueSetSolver<'a> {
    candidates: &'a CandidateSets,
    memoize: bool,
}

impl<'a> UniqueSetSolver<'a> {
    /// Create a solver over `candidates`. Memoization of failed states is on.
    #[must_use]
    pub fn new(candidates: &'a CandidateSets) -> Self {
        Self {
            candidates,
            memoize: true,
        }
    }

    /// Enable or disable memoization of failed search states.
    #[must_use]
    pub fn with_memoization(mut self, enabled: bool) -> Self {
        self.memoize = enabled;
        self
    }

    /// Search for an assignment.
    #[must_use]
    pub fn solve(&self) -> SolveReport {
        let start = Instant::now();
        let (assignment, mut stats) = self.run();
        stats.time_us = start.elapsed().as_micros() as u64;

        log::debug!(
            "unique-set solve over {} cards: {} ({} nodes, {} backtracks, {} memo hits, {}us)",
            self.candidates.len(),
            if assignment.is_some() { "feasible" } else { "infeasible" },
            stats.nodes_visited,
            stats.backtracks,
            stats.memo_hits,
            stats.time_us
        );

        SolveReport { assignment, stats }
    }

    fn run(&self) -> (Option<Assignment>, SolverStats) {
        let mut universe: Vec<&SetCode> = self
            .candidates
            .iter()
            .flat_map(|(_, sets)| sets.iter())
            .collect();
        universe.sort();
        universe.dedup();

        let cards = self.candidates.len();
        if cards > universe.len() {
            // More cards than sets: no injective pairing can exist.
            return (None, SolverStats::new());
        }

        let position: FxHashMap<&SetCode, usize> =
            universe.iter().enumerate().map(|(i, &code)| (code, i)).collect();
        let options: Vec<BitSet> = self
            .candidates
            .iter()
            .map(|(_, sets)| {
                let mut mask = BitSet::with_width(universe.len());
                for code in sets {
                    mask.insert(position[code]);
                }
                mask
            })
            .collect();

        let mut search = Search {
            options: &options,
            placed: BitSet::with_width(cards),
            used: BitSet::with_width(universe.len()),
            chosen: vec![0; cards],
            failed: FxHashSet::default(),
            memoize: self.memoize,
            stats: SolverStats::new(),
        };

        let assignment = search.place(cards).then(|| {
            self.candidates
                .iter()
                .zip(&search.chosen)
                .map(|((name, _), &set)| (name.clone(), universe[set].clone()))
                .collect()
        });

        (assignment, search.stats)
    }
}

/// Pair every card with a distinct set drawn from its candidates.
///
/// Returns `None` when no such pairing exists. An empty mapping has the
/// empty assignment.
#[must_use]
pub fn assign_unique_sets(candidates: &CandidateSets) -> Option<Assignment> {
    UniqueSetSolver::new(candidates).solve().assignment
}

/// Mutable search state over dense card and set indices.
struct Search<'p> {
    /// Candidate sets per card.
    options: &'p [BitSet],
    /// Cards already paired.
    placed: BitSet,
    /// Sets already taken.
    used: BitSet,
    /// Set index chosen per card; meaningful only for placed cards.
    chosen: Vec<usize>,
    /// `(placed, used)` states known to have no completion.
    failed: FxHashSet<(BitSet, BitSet)>,
    memoize: bool,
    stats: SolverStats,
}

impl Search<'_> {
    /// Try to place the `remaining` unplaced cards.
    fn place(&mut self, remaining: usize) -> bool {
        if remaining == 0 {
            return true;
        }
        self.stats.nodes_visited += 1;

        if self.memoize && self.failed.contains(&(self.placed.clone(), self.used.clone())) {
            self.stats.memo_hits += 1;
            return false;
        }

        let Some((card, available)) = self.most_constrained() else {
            return false;
        };

        self.placed.insert(card);
        for set in available.iter() {
            self.used.insert(set);
            self.chosen[card] = set;
            if self.place(remaining - 1) {
                return true;
            }
            self.used.remove(set);
            self.stats.backtracks += 1;
        }
        self.placed.remove(card);

        if self.memoize {
            self.failed.insert((self.placed.clone(), self.used.clone()));
        }
        false
    }

    /// The unplaced card with the fewest available sets, and those sets.
    ///
    /// Ties go to the card that came first in the input.
    fn most_constrained(&self) -> Option<(usize, BitSet)> {
        let mut best: Option<(usize, BitSet, usize)> = None;
        for (card, options) in self.options.iter().enumerate() {
            if self.placed.contains(card) {
                continue;
            }
            let available = options.difference(&self.used);
            let count = available.count();
            if best.as_ref().map_or(true, |&(_, _, fewest)| count < fewest) {
                best = Some((card, available, count));
                if count == 0 {
                    break;
                }
            }
        }
        best.map(|(card, available, _)| (card, available))
    }
}
