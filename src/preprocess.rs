//! **C4 — Preprocessor.**
//!
//! Turns a bound [`crate::graph::Digraph`] plus its cost/bound/supply maps
//! into the flat augmented-arc table the engine (C7) pivots over: lower
//! bounds eliminated, an artificial root and one artificial arc per node
//! appended, and the feasibility pre-check of spec.md §4.4 step 1 already
//! applied. Grounded on the same "freeze inputs, build scratch structures,
//! discard them before returning" shape as `petgraph::algo::dijkstra`'s
//! internal scratch `BinaryHeap` — the difference is this scratch
//! (augmented arcs + initial tree) is handed to [`crate::engine`] rather
//! than consumed on the spot.
//!
//! ## GEQ/LEQ construction
//!
//! spec.md leaves the exact GEQ/LEQ reduction to an artificial-arc model
//! as an implementation choice, bound only by the testable identities of
//! §8. The choice made here: the orientation of each node's artificial arc
//! is forced by the sign of its (lower-bound-shifted) supply exactly as in
//! the EQ case — `supply[n] >= 0` gets an `n -> r` arc, `supply[n] < 0`
//! gets `r -> n` — because that is the only orientation admitting a
//! nonnegative initial flow for a pure-artificial starting tree. What
//! varies by problem type is which of those arcs are left uncapacitated
//! (free to carry slack) versus pinned at exactly `|supply[n]|`:
//!
//! - `EQ`: every artificial arc pinned at `|supply[n]|`.
//! - `GEQ` (`bal(n) >= supply[n])`): `supply[n] >= 0` nodes stay pinned
//!   (that side of the construction already reduces to the EQ case);
//!   `supply[n] < 0` nodes get an uncapacitated `r -> n` arc, and standard
//!   conservation algebra on that orientation gives exactly
//!   `flow(r->n) = bal(n) - supply[n] >= 0`, i.e. the GEQ inequality.
//! - `LEQ`: the mirror image — `supply[n] <= 0` nodes stay pinned,
//!   `supply[n] > 0` nodes get an uncapacitated `n -> r` arc, giving
//!   `flow(n->r) = supply[n] - bal(n) >= 0`, i.e. the LEQ inequality.
//!
//! A pinned (finite-capacity) artificial arc must end at flow zero for the
//! solution to be feasible (spec.md §4.7 step 5); an uncapacitated one
//! never causes infeasibility by itself — it is exactly the "slack" that
//! GEQ/LEQ permit. See `DESIGN.md` for the worked derivation.

use crate::error::InvalidInput;
use crate::graph::Digraph;
use crate::ids::{ArcId, NodeId};
use crate::maps::{ArcMap, NodeMap};
use crate::num::SimplexInt;
use crate::problem::ProblemType;

/// The state an arc (original or artificial) sits in within the current
/// basis: pinned to its lower bound, pinned to its upper bound, or part of
/// the spanning tree (free to float within `[0, cap]`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum ArcState {
    Lower,
    Upper,
    Tree,
}

/// One arc of the augmented graph: either a copy of an original arc (with
/// its lower bound eliminated — `cost`/`cap` already reflect the shift) or
/// one of the `node_num` artificial arcs the preprocessor appends.
#[derive(Clone, Debug)]
pub(crate) struct AugmentedArc<T> {
    pub source: NodeId,
    pub target: NodeId,
    pub cost: T,
    /// Residual capacity after the lower-bound shift (`upper - lower`),
    /// or `None` for an uncapacitated arc.
    pub cap: Option<T>,
    /// Original `lower[a]` for a real arc (added back into the reported
    /// flow at the end); zero for artificial arcs.
    pub lower_shift: T,
}

pub(crate) struct Preprocessed<T: SimplexInt> {
    /// Number of original nodes; node ids `0..node_num` are the caller's,
    /// `root` is the one artificial node appended.
    pub node_num: usize,
    pub root: NodeId,
    pub total_nodes: usize,
    pub orig_arc_num: usize,
    pub total_arcs: usize,
    pub arcs: Vec<AugmentedArc<T>>,
    /// Current flow, in the shifted `[0, cap]` domain, indexed like `arcs`.
    pub flow: Vec<T>,
    pub state: Vec<ArcState>,
    pub artificial_cost: T,
}

impl<T: SimplexInt> Preprocessed<T> {
    #[inline]
    pub fn artificial_arc(&self, node: NodeId) -> ArcId {
        ArcId::new(self.orig_arc_num + node.index())
    }

    /// Whether `arc` is one of the `node_num` artificial arcs appended
    /// after the original ones.
    #[inline]
    pub fn is_artificial(&self, arc: ArcId) -> bool {
        arc.index() >= self.orig_arc_num
    }

    #[inline]
    pub fn pred_of(&self, node: NodeId) -> (ArcId, bool) {
        let arc = self.artificial_arc(node);
        let forward = self.arcs[arc.index()].source == node;
        (arc, forward)
    }
}

/// Outcome of preprocessing: either a ready-to-pivot augmented structure,
/// or an immediate infeasibility verdict from the supply-sum pre-check
/// (spec.md §4.4 step 1) — no tree is built in that case.
pub(crate) enum PreprocessOutcome<T: SimplexInt> {
    Ready(Box<Preprocessed<T>>),
    Infeasible,
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn preprocess<G, T, CostM, LowerM, UpperM, SupplyM>(
    graph: &G,
    cost: &CostM,
    lower: &LowerM,
    upper: &UpperM,
    supply: &SupplyM,
    problem_type: ProblemType,
) -> Result<PreprocessOutcome<T>, InvalidInput>
where
    G: Digraph,
    T: SimplexInt,
    CostM: ArcMap<T>,
    LowerM: ArcMap<T>,
    UpperM: ArcMap<T>,
    SupplyM: NodeMap<T>,
{
    let node_num = graph.node_num();
    let orig_arc_num = graph.arc_num();
    let infinite = T::max_value();

    let mut shifted_supply = vec![T::zero(); node_num];
    for n in graph.nodes() {
        shifted_supply[n.index()] = supply.get(n);
    }

    let mut arcs: Vec<AugmentedArc<T>> = Vec::with_capacity(orig_arc_num + node_num);
    let mut max_abs_cost = T::zero();
    for a in graph.arcs() {
        let lo = lower.get(a);
        let hi = upper.get(a);
        let c = cost.get(a);
        if c.abs() > max_abs_cost {
            max_abs_cost = c.abs();
        }
        if lo > hi {
            return Err(InvalidInput::LowerExceedsUpper { arc_index: a.index() });
        }
        let cap = if hi == infinite { None } else { Some(hi - lo) };

        let s = graph.source(a);
        let t = graph.target(a);
        shifted_supply[s.index()] = shifted_supply[s.index()] - lo;
        shifted_supply[t.index()] = shifted_supply[t.index()] + lo;

        arcs.push(AugmentedArc {
            source: s,
            target: t,
            cost: c,
            cap,
            lower_shift: lo,
        });
    }

    let total_shifted: T = shifted_supply
        .iter()
        .copied()
        .fold(T::zero(), |acc, x| acc + x);
    let precheck_ok = match problem_type {
        ProblemType::Eq => total_shifted == T::zero(),
        ProblemType::Geq => total_shifted <= T::zero(),
        ProblemType::Leq => total_shifted >= T::zero(),
    };
    if !precheck_ok {
        return Ok(PreprocessOutcome::Infeasible);
    }

    let artificial_cost = match max_abs_cost
        .checked_mul_usize(node_num)
        .and_then(|m| m.checked_add(T::one()))
    {
        Some(v) => v,
        None => T::max_value(),
    };

    let root = NodeId::new(node_num);
    let mut flow = vec![T::zero(); orig_arc_num + node_num];
    let mut state = vec![ArcState::Lower; orig_arc_num + node_num];
    for i in 0..orig_arc_num {
        state[i] = ArcState::Lower;
        flow[i] = T::zero();
    }

    for i in 0..node_num {
        let node = NodeId::new(i);
        let s = shifted_supply[i];
        let magnitude = s.abs();
        let (source, target, pinned) = if s >= T::zero() {
            let pinned = matches!(problem_type, ProblemType::Eq | ProblemType::Geq);
            (node, root, pinned)
        } else {
            let pinned = matches!(problem_type, ProblemType::Eq | ProblemType::Leq);
            (root, node, pinned)
        };
        arcs.push(AugmentedArc {
            source,
            target,
            cost: artificial_cost,
            cap: if pinned { Some(magnitude) } else { None },
            lower_shift: T::zero(),
        });
        let idx = orig_arc_num + i;
        flow[idx] = magnitude;
        state[idx] = ArcState::Tree;
    }

    Ok(PreprocessOutcome::Ready(Box::new(Preprocessed {
        node_num,
        root,
        total_nodes: node_num + 1,
        orig_arc_num,
        total_arcs: orig_arc_num + node_num,
        arcs,
        flow,
        state,
        artificial_cost,
    })))
}
