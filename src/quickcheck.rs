//! `Arbitrary` instance generation for property-based testing (spec.md §8).
//!
//! Mirrors `petgraph`'s own `quickcheck` module: that module implements
//! `Arbitrary` for `Graph` itself, behind the same `quickcheck` feature, so
//! downstream crates (and this crate's own `tests/`) can ask for an
//! arbitrary graph rather than hand-rolling one. [`ArbitraryInstance`] plays
//! that role for a fully-specified network simplex instance — graph plus
//! bound/cost/supply maps — since the properties of spec.md §8 (conservation,
//! complementary slackness, pivot-rule invariance) are properties of a whole
//! instance, not of the graph alone.
//!
//! Requires crate feature `"quickcheck"`.

use quickcheck::{Arbitrary, Gen};

use crate::graph::{Digraph, ListDigraph};
use crate::ids::NodeId;

/// A small, self-contained network simplex instance: a [`ListDigraph`]
/// together with per-arc lower/upper/cost and per-node supply, sized and
/// valued so every bound map is internally consistent (`lower <= upper`)
/// and finite (no `T::MAX` capacities, to keep shrinking and arithmetic in
/// property tests straightforward).
#[derive(Debug, Clone)]
pub struct ArbitraryInstance {
    pub graph: ListDigraph,
    pub lower: Vec<i32>,
    pub upper: Vec<i32>,
    pub cost: Vec<i32>,
    pub supply: Vec<i32>,
}

const MAX_NODES: usize = 8;
const MAX_CAP: i32 = 50;
const MAX_COST: i32 = 20;
const MAX_SUPPLY: i32 = 30;

/// Uniform `usize` in `range`, via masking a raw `u64` draw down to the
/// range's bit width rather than a modulo of the raw draw — keeps small
/// ranges from being biased toward their low end. Grounded on the
/// `gen_range` helper `petgraph`'s own quickcheck module defines for the
/// same purpose.
fn gen_range(g: &mut Gen, range: core::ops::Range<usize>) -> usize {
    let span = range.end - range.start;
    let bits = span.next_power_of_two().trailing_zeros();
    let mask = if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 };
    let x = u64::arbitrary(g) & mask;
    range.start + (x as usize % span.max(1))
}

fn gen_range_i32(g: &mut Gen, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    lo + gen_range(g, 0..(hi - lo) as usize + 1) as i32
}

impl Arbitrary for ArbitraryInstance {
    fn arbitrary(g: &mut Gen) -> Self {
        let node_num = 2 + gen_range(g, 0..MAX_NODES - 1);
        let mut graph = ListDigraph::with_nodes(0);
        for _ in 0..node_num {
            graph.add_node();
        }

        // Every node but the last gets at least one outgoing arc to a
        // higher-numbered node, guaranteeing the graph is connected enough
        // for a feasible EQ instance to exist once supplies balance.
        let mut lower = Vec::new();
        let mut upper = Vec::new();
        let mut cost = Vec::new();
        for u in 0..node_num - 1 {
            let extra_targets = gen_range(g, 0..3);
            let mut targets = vec![u + 1 + gen_range(g, 0..node_num - u - 1)];
            for _ in 0..extra_targets {
                targets.push(u + 1 + gen_range(g, 0..node_num - u - 1));
            }
            for v in targets {
                graph.add_arc(NodeId::new(u), NodeId::new(v));
                let lo = gen_range_i32(g, 0, MAX_CAP / 2);
                let hi = lo + gen_range_i32(g, 0, MAX_CAP / 2);
                lower.push(lo);
                upper.push(hi);
                cost.push(gen_range_i32(g, 1, MAX_COST));
            }
        }

        // Supplies at every node but the last are arbitrary; the last node
        // absorbs whatever imbalance they create, so the EQ precheck
        // (spec.md §4.4 step 1) always passes.
        let mut supply = vec![0i32; node_num];
        let mut total = 0i32;
        for s in supply.iter_mut().take(node_num - 1) {
            *s = gen_range_i32(g, -MAX_SUPPLY, MAX_SUPPLY);
            total += *s;
        }
        supply[node_num - 1] = -total;

        ArbitraryInstance {
            graph,
            lower,
            upper,
            cost,
            supply,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shrinking a graph-shaped value safely (without dangling arc
        // endpoints) needs care; dropping the highest-numbered node and its
        // incident arcs is the one reduction guaranteed to stay consistent.
        if self.graph.node_num() <= 2 {
            return Box::new(std::iter::empty());
        }
        let keep = self.graph.node_num() - 1;
        let mut graph = ListDigraph::with_nodes(0);
        for _ in 0..keep {
            graph.add_node();
        }
        let mut lower = Vec::new();
        let mut upper = Vec::new();
        let mut cost = Vec::new();
        for a in self.graph.arcs() {
            let s = self.graph.source(a);
            let t = self.graph.target(a);
            if s.index() < keep && t.index() < keep {
                graph.add_arc(s, t);
                lower.push(self.lower[a.index()]);
                upper.push(self.upper[a.index()]);
                cost.push(self.cost[a.index()]);
            }
        }
        let mut supply: Vec<i32> = self.supply[..keep].to_vec();
        let dropped = self.supply[keep];
        supply[keep - 1] += dropped;

        Box::new(std::iter::once(ArbitraryInstance {
            graph,
            lower,
            upper,
            cost,
            supply,
        }))
    }
}
