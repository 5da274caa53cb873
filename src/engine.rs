//! **C7 — Simplex Engine.**
//!
//! The main pivot loop: ask a [`crate::pivot::EnteringArcRule`] for an
//! entering arc, find the cycle it closes and the leaving arc along that
//! cycle via [`crate::tree::SpanningTree`], update flows/basis/potentials,
//! repeat until no entering arc remains (optimal), a pivot finds an
//! unbounded cycle, or the terminal scan over artificial arcs finds the
//! problem infeasible (spec.md §4.7).
//!
//! Grounded on the same "tight inner loop over a flat scratch structure"
//! shape as `petgraph::algo::bellman_ford`'s relax loop, generalized to
//! network simplex's three-phase pivot (find cycle, apply delta, restring
//! the tree) instead of a single edge relaxation.

use crate::ids::{ArcId, NodeId};
use crate::preprocess::{ArcState, Preprocessed};
use crate::pivot::{ArcBoundState, EnteringArcRule};
use crate::problem::{Stats, Status};
use crate::num::SimplexInt;
use crate::tree::SpanningTree;

pub(crate) struct Engine<T: SimplexInt> {
    data: Preprocessed<T>,
    tree: SpanningTree,
    potential: Vec<T>,
    pivots: usize,
}

/// Which side of the cycle the leaving arc was found on, and the node at
/// its "child" end in the pre-pivot tree — identifies both the arc to pull
/// out of the basis and which of the entering arc's endpoints lies in the
/// subtree being reattached.
#[derive(Copy, Clone, Debug)]
enum LeavingSide {
    /// The entering arc immediately re-exits at the opposite bound: a
    /// degenerate pivot, no tree restructuring.
    Entering,
    FirstLeg { child: NodeId },
    SecondLeg { child: NodeId },
}

impl<T: SimplexInt> Engine<T> {
    pub fn new(data: Preprocessed<T>) -> Self {
        let total_nodes = data.total_nodes;
        let root = data.root;
        let mut tree = SpanningTree::new(total_nodes, root);
        tree.init_star(|node| data.pred_of(node));
        let mut engine = Engine {
            data,
            tree,
            potential: vec![T::zero(); total_nodes],
            pivots: 0,
        };
        engine.recompute_potentials();
        engine
    }

    #[inline]
    fn cost(&self, arc: ArcId) -> T {
        self.data.arcs[arc.index()].cost
    }

    #[inline]
    fn cap(&self, arc: ArcId) -> Option<T> {
        self.data.arcs[arc.index()].cap
    }

    #[inline]
    fn source(&self, arc: ArcId) -> NodeId {
        self.data.arcs[arc.index()].source
    }

    #[inline]
    fn target(&self, arc: ArcId) -> NodeId {
        self.data.arcs[arc.index()].target
    }

    #[inline]
    fn reduced_cost(&self, arc: ArcId) -> T {
        self.cost(arc) + self.potential[self.source(arc).index()]
            - self.potential[self.target(arc).index()]
    }

    /// Recomputes every node's potential from scratch so that every tree
    /// arc has zero reduced cost, walking the tree in thread (preorder)
    /// order so a node's parent is always already assigned by the time
    /// the node itself is visited.
    ///
    /// [`SpanningTree`] rebuilds its thread wholesale on every pivot
    /// (see its module doc) rather than splicing incrementally, so this
    /// crate accepts the matching O(node_num) potential recomputation
    /// rather than the O(depth) shift spec.md §4.5 describes as possible.
    fn recompute_potentials(&mut self) {
        let thread = self.tree.thread().to_vec();
        self.potential[self.tree.root().index()] = T::zero();
        for &node in thread.iter().skip(1) {
            let parent = self.tree.parent(node);
            let arc = self.tree.pred_arc(node);
            let c = self.cost(arc);
            self.potential[node.index()] = if self.tree.pred_forward(node) {
                self.potential[parent.index()] + c
            } else {
                self.potential[parent.index()] - c
            };
        }
    }

    fn bound_state(state: ArcState) -> Option<ArcBoundState> {
        match state {
            ArcState::Lower => Some(ArcBoundState::Lower),
            ArcState::Upper => Some(ArcBoundState::Upper),
            ArcState::Tree => None,
        }
    }

    /// Runs the main loop to completion.
    pub fn run<R: EnteringArcRule<T>>(
        mut self,
        rule: &mut R,
    ) -> (Status, Preprocessed<T>, Vec<T>, Stats) {
        rule.reset(self.data.orig_arc_num);
        loop {
            let potential = &self.potential;
            let arcs = &self.data.arcs;
            let state = &self.data.state;
            let entering = rule.find_entering_arc(self.data.orig_arc_num, |a| {
                if state[a.index()] != ArcState::Tree {
                    let arc = &arcs[a.index()];
                    let rc = arc.cost + potential[arc.source.index()] - potential[arc.target.index()];
                    Self::bound_state(state[a.index()]).map(|s| (rc, s))
                } else {
                    None
                }
            });
            let Some(entering) = entering else {
                break;
            };
            self.pivots += 1;
            match self.pivot(entering) {
                PivotOutcome::Applied => continue,
                PivotOutcome::Unbounded => {
                    let stats = Stats { pivots: self.pivots };
                    return (Status::Unbounded, self.data, self.potential, stats);
                }
            }
        }
        let stats = Stats { pivots: self.pivots };
        if self.is_feasible() {
            self.undo_lower_shift();
            (Status::Optimal, self.data, self.potential, stats)
        } else {
            (Status::Infeasible, self.data, self.potential, stats)
        }
    }

    /// A pinned (finite-capacity) artificial arc must end the run at flow
    /// zero; an uncapacitated one (the GEQ/LEQ slack side, see
    /// `crate::preprocess`) never signals infeasibility on its own.
    fn is_feasible(&self) -> bool {
        for i in 0..self.data.node_num {
            let idx = self.data.orig_arc_num + i;
            if self.data.arcs[idx].cap.is_some() && self.data.flow[idx] != T::zero() {
                return false;
            }
        }
        true
    }

    fn undo_lower_shift(&mut self) {
        for i in 0..self.data.orig_arc_num {
            self.data.flow[i] = self.data.flow[i] + self.data.arcs[i].lower_shift;
        }
    }

    fn pivot(&mut self, entering: ArcId) -> PivotOutcome {
        let u = self.source(entering);
        let v = self.target(entering);
        let state_e = self.data.state[entering.index()];
        let join = self.tree.find_join(u, v);

        let (first, second) = if state_e == ArcState::Lower { (u, v) } else { (v, u) };

        // Entering arc's own headroom: how far it can move in the
        // `first -> second` counted direction before hitting its other
        // bound. `Lower` arcs start at 0 and move toward `cap`; `Upper`
        // arcs start at `cap` and move toward 0 — both give `cap` itself
        // as the room available, or unbounded if uncapacitated.
        let mut best: Option<(T, LeavingSide)> = self.cap(entering).map(|c| (c, LeavingSide::Entering));

        // second-leg: walking `second` up to `join`. A tree arc oriented
        // `node -> parent` (pred_forward == false) agrees with this
        // leg's forward (second-to-join) cycle direction.
        for (node, arc, pred_forward) in self.tree.path_up(second, join) {
            let headroom = if pred_forward {
                self.data.flow[arc.index()]
            } else {
                match self.cap(arc) {
                    Some(c) => c - self.data.flow[arc.index()],
                    None => continue,
                }
            };
            if best.map_or(true, |(d, _)| headroom < d) {
                best = Some((headroom, LeavingSide::SecondLeg { child: node }));
            }
        }

        // first-leg: walking `first` up to `join`, traversed by the cycle
        // in the opposite (descending, join-to-first) direction, so a
        // tree arc oriented `parent -> node` (pred_forward == true) is the
        // one that agrees with the cycle here.
        for (node, arc, pred_forward) in self.tree.path_up(first, join) {
            let headroom = if pred_forward {
                match self.cap(arc) {
                    Some(c) => c - self.data.flow[arc.index()],
                    None => continue,
                }
            } else {
                self.data.flow[arc.index()]
            };
            if best.map_or(true, |(d, _)| headroom < d) {
                best = Some((headroom, LeavingSide::FirstLeg { child: node }));
            }
        }

        let Some((delta, side)) = best else {
            return PivotOutcome::Unbounded;
        };

        let real_delta = if state_e == ArcState::Lower { delta } else { -delta };
        self.data.flow[entering.index()] = self.data.flow[entering.index()] + real_delta;

        for (_, arc, pred_forward) in self.tree.path_up(second, join) {
            let forward = !pred_forward;
            let signed = if forward { delta } else { -delta };
            self.data.flow[arc.index()] = self.data.flow[arc.index()] + signed;
        }
        for (_, arc, pred_forward) in self.tree.path_up(first, join) {
            let forward = pred_forward;
            let signed = if forward { delta } else { -delta };
            self.data.flow[arc.index()] = self.data.flow[arc.index()] + signed;
        }

        match side {
            LeavingSide::Entering => {
                self.data.state[entering.index()] = if state_e == ArcState::Lower {
                    ArcState::Upper
                } else {
                    ArcState::Lower
                };
            }
            LeavingSide::SecondLeg { child } | LeavingSide::FirstLeg { child } => {
                let leaving_arc = self.tree.pred_arc(child);
                let went_forward = matches!(side, LeavingSide::SecondLeg { .. })
                    != self.tree.pred_forward(child);
                self.data.state[leaving_arc.index()] = if went_forward {
                    ArcState::Upper
                } else {
                    ArcState::Lower
                };
                self.data.state[entering.index()] = ArcState::Tree;

                let (in_node, out_node) = match side {
                    LeavingSide::SecondLeg { .. } => (second, first),
                    LeavingSide::FirstLeg { .. } => (first, second),
                    LeavingSide::Entering => unreachable!(),
                };
                self.reattach(in_node, out_node, child, entering);
                self.tree.rebuild_thread();
                self.recompute_potentials();
            }
        }
        PivotOutcome::Applied
    }

    /// Reverses tree parent links along the path from `in_node` up to
    /// (but not including) `leaving_node`, then attaches the resulting
    /// chain to `out_node` via `entering` — the subtree that used to hang
    /// below `leaving_node` now hangs below `in_node`, connected to the
    /// rest of the tree through the new entering arc (spec.md §4.5,
    /// "Tree update").
    fn reattach(&mut self, in_node: NodeId, out_node: NodeId, leaving_node: NodeId, entering: ArcId) {
        let steps: Vec<(NodeId, ArcId, bool)> = self.tree.path_up(in_node, leaving_node).collect();
        for i in 0..steps.len() {
            let (node, arc, forward) = steps[i];
            let old_parent = if i + 1 < steps.len() { steps[i + 1].0 } else { leaving_node };
            self.tree.set_parent(old_parent, node, arc, !forward);
        }
        let entering_forward = self.source(entering) == out_node;
        self.tree.set_parent(in_node, out_node, entering, entering_forward);
    }
}

enum PivotOutcome {
    Applied,
    Unbounded,
}
