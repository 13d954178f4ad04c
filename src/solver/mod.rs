//! Unique-set assignment for the one-card-per-set format variant.
//!
//! In this variant each source-set may be represented by at most one card,
//! and a card may represent any set it was legally printed in. Deciding
//! whether a deck qualifies is a bipartite matching problem between cards
//! and sets, solved here by backtracking search.
//!
//! ## Key Types
//!
//! - `CandidateSets`: card → sets it may represent
//! - `Assignment`: card → the distinct set chosen for it
//! - `UniqueSetSolver`: configurable solver returning a `SolveReport`
//! - `assign_unique_sets`: one-call convenience wrapper

pub mod bitset;
pub mod candidates;
pub mod search;
pub mod stats;

pub use bitset::BitSet;
pub use candidates::{Assignment, CandidateSets};
pub use search::{assign_unique_sets, SolveReport, UniqueSetSolver};
pub use stats::SolverStats;
