//! **C6 — Entering-Arc Strategies.**
//!
//! A pivot rule answers one question each iteration: among the arcs whose
//! state makes them eligible to enter the basis (reduced cost of the wrong
//! sign for their bound state — spec.md §5.2), which one enters? All five
//! strategies spec.md §6 names are admissible (they only ever pick an
//! eligible arc, never fabricate one) and deterministic for a fixed
//! construction order, differing only in how much of the arc set they scan
//! before picking. This mirrors `petgraph`'s own split between *what* an
//! algorithm computes and *which* generic strategy/comparator drives it
//! (e.g. `min_spanning_tree`'s choice of union-find over repeated
//! reachability scans) — one trait, several interchangeable bodies.

mod altering_list;
mod best_eligible;
mod block_search;
mod candidate_list;
mod first_eligible;

pub use altering_list::AlteringList;
pub use best_eligible::BestEligible;
pub use block_search::BlockSearch;
pub use candidate_list::CandidateList;
pub use first_eligible::FirstEligible;

use crate::ids::ArcId;
use crate::num::SimplexInt;

/// What [`EnteringArcRule::find_entering_arc`] needs to know about one arc
/// to judge its eligibility: its current reduced cost, and whether it sits
/// at its lower or upper bound (a free/basic arc is never a pivot
/// candidate — it is already in the tree).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ArcBoundState {
    Lower,
    Upper,
}

/// A strategy for picking the next entering arc out of the non-tree arcs.
///
/// Implementors see the arc set through a minimal closure-based interface
/// rather than the engine's full state, so a rule can be unit-tested
/// against a synthetic reduced-cost table without constructing a solver.
pub trait EnteringArcRule<T: SimplexInt> {
    /// Scans (some or all of) the arcs in `0..arc_num`, using
    /// `reduced_cost_and_state(a)` to read each non-tree arc's current
    /// reduced cost and bound state (returning `None` for tree arcs, which
    /// are never candidates), and returns the arc to pivot in next, or
    /// `None` once no eligible arc remains (the optimality certificate of
    /// spec.md §8, P2).
    ///
    /// An arc at its lower bound is eligible when its reduced cost is
    /// negative; an arc at its upper bound is eligible when its reduced
    /// cost is positive (spec.md §5.2).
    fn find_entering_arc(
        &mut self,
        arc_num: usize,
        reduced_cost_and_state: impl Fn(ArcId) -> Option<(T, ArcBoundState)>,
    ) -> Option<ArcId>;

    /// Called once, after the preprocessor fixes the arc count, so rules
    /// that cache a scan cursor or sized scratch buffers (block search,
    /// candidate list) can size themselves. The default is a no-op, for
    /// rules that hold no state across calls.
    fn reset(&mut self, _arc_num: usize) {}
}

#[inline]
pub(crate) fn is_eligible<T: SimplexInt>(reduced_cost: T, state: ArcBoundState) -> bool {
    match state {
        ArcBoundState::Lower => reduced_cost < T::zero(),
        ArcBoundState::Upper => reduced_cost > T::zero(),
    }
}
