#![cfg(feature = "quickcheck")]
//! Property-based tests for the testable properties of spec.md §8 (P1-P4),
//! run over the `Arbitrary` instance generator in `src/quickcheck.rs`.
//! Mirrors the teacher's own `tests/quickcheck.rs`: `#![cfg(feature =
//! "quickcheck")]` at the top, plain `quickcheck! { fn prop(...) -> bool }`
//! blocks rather than a harness of their own.

#[macro_use]
extern crate quickcheck;

use rand::Rng;

use network_simplex::builder::ProblemBuilder;
use network_simplex::graph::{Digraph, ListDigraph};
use network_simplex::ids::{ArcId, NodeId};
use network_simplex::problem::PivotRule;
use network_simplex::quickcheck::ArbitraryInstance;

/// P1 (Bounds) + P2 (Conservation) + P3 (Complementary slackness): every
/// optimal solution to an arbitrary EQ instance satisfies all three at
/// once, since they are properties of the same returned flow/potential
/// pair.
fn check_optimal_solution(inst: &ArbitraryInstance) -> bool {
    let mut problem = ProblemBuilder::new(&inst.graph)
        .bound_maps(&inst.lower, &inst.upper)
        .cost_map(&inst.cost)
        .supply_map(&inst.supply);
    let Ok(status) = problem.run(PivotRule::BlockSearch) else {
        return true;
    };
    if !status.is_optimal() {
        // The generator always balances total supply to zero, so EQ
        // should never be infeasible for these instances; an unbounded
        // verdict can't arise either since every arc carries a finite
        // upper bound. Treat an unexpected non-optimal outcome as a
        // genuine property failure rather than silently passing.
        return false;
    }

    for a in inst.graph.arcs() {
        let flow = problem.flow(a);
        if flow < inst.lower[a.index()] || flow > inst.upper[a.index()] {
            return false;
        }
    }

    let mut bal = vec![0i32; inst.graph.node_num()];
    for a in inst.graph.arcs() {
        let flow = problem.flow(a);
        bal[inst.graph.source(a).index()] += flow;
        bal[inst.graph.target(a).index()] -= flow;
    }
    for (n, &b) in bal.iter().enumerate() {
        if b != inst.supply[n] {
            return false;
        }
    }

    for a in inst.graph.arcs() {
        let idx = a.index();
        let cost = inst.cost[idx];
        let source_pot = problem.potential(inst.graph.source(a));
        let target_pot = problem.potential(inst.graph.target(a));
        let reduced_cost = cost + source_pot - target_pot;
        let flow = problem.flow(a);
        let ok = reduced_cost == 0
            || (reduced_cost > 0 && flow == inst.lower[idx])
            || (reduced_cost < 0 && flow == inst.upper[idx]);
        if !ok {
            return false;
        }
    }

    true
}

/// P5 (Pivot-rule invariance): every pivot rule agrees on `total_cost()`
/// for the same instance, whatever that cost is.
fn check_pivot_rule_invariance(inst: &ArbitraryInstance) -> bool {
    let mut costs = Vec::new();
    for rule in [
        PivotRule::FirstEligible,
        PivotRule::BestEligible,
        PivotRule::BlockSearch,
        PivotRule::CandidateList,
        PivotRule::AlteringList,
    ] {
        let mut problem = ProblemBuilder::new(&inst.graph)
            .bound_maps(&inst.lower, &inst.upper)
            .cost_map(&inst.cost)
            .supply_map(&inst.supply);
        let Ok(status) = problem.run(rule) else {
            return true;
        };
        if !status.is_optimal() {
            return false;
        }
        costs.push(problem.total_cost());
    }
    costs.windows(2).all(|w| w[0] == w[1])
}

/// P6 (Round-trip of `reset`): `reset` then an identical rebind reproduces
/// the same solution as the first run.
fn check_reset_round_trip(inst: &ArbitraryInstance) -> bool {
    let mut problem = ProblemBuilder::new(&inst.graph)
        .bound_maps(&inst.lower, &inst.upper)
        .cost_map(&inst.cost)
        .supply_map(&inst.supply);
    let Ok(first) = problem.run(PivotRule::BlockSearch) else {
        return true;
    };
    let first_cost = problem.total_cost();

    let mut problem = problem
        .reset()
        .bound_maps(&inst.lower, &inst.upper)
        .cost_map(&inst.cost)
        .supply_map(&inst.supply);
    let Ok(second) = problem.run(PivotRule::BlockSearch) else {
        return true;
    };

    first == second && (!first.is_optimal() || first_cost == problem.total_cost())
}

quickcheck! {
    fn optimal_solution_satisfies_p1_p2_p3(inst: ArbitraryInstance) -> bool {
        check_optimal_solution(&inst)
    }
}

quickcheck! {
    fn pivot_rules_agree_on_cost(inst: ArbitraryInstance) -> bool {
        check_pivot_rule_invariance(&inst)
    }
}

quickcheck! {
    fn reset_then_rebind_reproduces_solution(inst: ArbitraryInstance) -> bool {
        check_reset_round_trip(&inst)
    }
}

/// Builds one random EQ-balanced instance on a chain topology (`0 -> 1 ->
/// ... -> n-1`, the one topology guaranteed connected regardless of which
/// arcs a `quickcheck`-shrunk [`ArbitraryInstance`] would have kept), using
/// `rand::Rng` directly rather than `quickcheck::Gen` — a second, simpler
/// source of random instances alongside the `Arbitrary`-driven properties
/// above, the same role `rand::Rng` plays in the teacher's own
/// `tests/quickcheck.rs` for hand-rolled generators that don't go through
/// `Arbitrary`.
fn random_chain_instance(rng: &mut impl Rng) -> (ListDigraph, Vec<i32>, Vec<i32>, Vec<i32>, Vec<i32>) {
    let node_num = rng.gen_range(2..8);
    let mut graph = ListDigraph::with_nodes(0);
    for _ in 0..node_num {
        graph.add_node();
    }
    // Fixed first so every arc's [lower, upper] is built to contain it —
    // a chain forces this exact amount of flow across every one of its
    // arcs, so picking bounds around it first is what keeps the instance
    // solvable instead of only solvable by chance.
    let total = rng.gen_range(1..20);
    let mut lower = Vec::new();
    let mut upper = Vec::new();
    let mut cost = Vec::new();
    for u in 0..node_num - 1 {
        graph.add_arc(NodeId::new(u), NodeId::new(u + 1));
        let lo = rng.gen_range(0..=total);
        let hi = total + rng.gen_range(0..20);
        lower.push(lo);
        upper.push(hi);
        cost.push(rng.gen_range(1..10));
    }
    let mut supply = vec![0i32; node_num];
    supply[0] = total;
    supply[node_num - 1] = -total;
    (graph, lower, upper, cost, supply)
}

/// Fuzzes several random chain instances (built via `rand::Rng`, not
/// `Arbitrary`) and checks the same P1/P2/P3 triple `check_optimal_solution`
/// checks for the `quickcheck`-generated instances above.
#[test]
fn random_chain_instances_satisfy_p1_p2_p3() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let (graph, lower, upper, cost, supply) = random_chain_instance(&mut rng);
        let mut problem = ProblemBuilder::new(&graph)
            .bound_maps(&lower, &upper)
            .cost_map(&cost)
            .supply_map(&supply);
        let status = problem.run(PivotRule::BlockSearch).unwrap();
        assert!(status.is_optimal(), "a balanced chain instance must be optimal");

        for a in graph.arcs() {
            let flow = problem.flow(a);
            assert!(flow >= lower[a.index()] && flow <= upper[a.index()]);
        }
        let mut bal = vec![0i32; graph.node_num()];
        for a in graph.arcs() {
            let flow = problem.flow(a);
            bal[graph.source(a).index()] += flow;
            bal[graph.target(a).index()] -= flow;
        }
        assert_eq!(bal, supply);
        for a in graph.arcs() {
            let idx = a.index();
            let reduced_cost = cost[idx] + problem.potential(graph.source(a)) - problem.potential(graph.target(a));
            let flow = problem.flow(a);
            assert!(
                reduced_cost == 0
                    || (reduced_cost > 0 && flow == lower[idx])
                    || (reduced_cost < 0 && flow == upper[idx])
            );
        }
    }
}
