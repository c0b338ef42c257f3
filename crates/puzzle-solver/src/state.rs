//! The contract every puzzle state implements so the solver can search it.

use std::hash::Hash;

/// A single, immutable puzzle position.
///
/// Two states must compare equal (and hash equal) exactly when they describe
/// the same position, however they were reached. Cached or derived data must
/// stay out of `Eq` and `Hash`, otherwise the solver cannot collapse
/// different move orders that land on the same position.
pub trait PuzzleState: Clone + Eq + Hash {
    /// True when this position satisfies the puzzle's termination predicate.
    fn is_goal(&self) -> bool;

    /// Every position reachable with exactly one legal move.
    ///
    /// The result must be finite and the same set for equal states. Its order
    /// only decides which of several equally short paths the solver returns.
    fn neighbors(&self) -> Vec<Self>;
}
