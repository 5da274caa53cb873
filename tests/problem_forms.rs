use network_simplex::builder::ProblemBuilder;
use network_simplex::error::InvalidInput;
use network_simplex::graph::ListDigraph;
use network_simplex::ids::NodeId;
use network_simplex::problem::{PivotRule, ProblemType};

/// GEQ ("carry at least the stated supplies"): node 0's supply is pinned,
/// forcing exactly 5 units across the only arc even though node 1's demand
/// of 7 is never fully met — the shortfall is the GEQ slack spec.md §3
/// describes, not an infeasibility.
#[test]
fn geq_leaves_unmet_demand_as_slack_not_infeasibility() {
    let mut g = ListDigraph::new();
    let a = g.add_node();
    let b = g.add_node();
    let arc = g.add_arc(a, b);

    let cost = vec![1i32];
    let supply = vec![5i32, -7];

    let mut problem = ProblemBuilder::new(&g)
        .cost_map(&cost)
        .supply_map(&supply)
        .problem_type(ProblemType::CARRY_SUPPLIES);
    let status = problem.run(PivotRule::BlockSearch).unwrap();
    assert!(status.is_optimal());
    assert_eq!(problem.flow(arc), 5);
    assert_eq!(problem.total_cost(), 5);
}

/// LEQ ("satisfy at most the stated demands"), the mirror case: node 1's
/// supply of 7 is the free side, node 0's demand of 5 is pinned, so only 5
/// units actually move even though more supply is nominally available.
#[test]
fn leq_leaves_unused_supply_as_slack_not_infeasibility() {
    let mut g = ListDigraph::new();
    let a = g.add_node();
    let b = g.add_node();
    let arc = g.add_arc(b, a);

    let cost = vec![1i32];
    let supply = vec![-5i32, 7];

    let mut problem = ProblemBuilder::new(&g)
        .cost_map(&cost)
        .supply_map(&supply)
        .problem_type(ProblemType::SATISFY_DEMANDS);
    let status = problem.run(PivotRule::BlockSearch).unwrap();
    assert!(status.is_optimal());
    assert_eq!(problem.flow(arc), 5);
    assert_eq!(problem.total_cost(), 5);
}

/// `lower[a] > upper[a]` is rejected eagerly, before any tree is built.
#[test]
fn lower_exceeding_upper_is_rejected() {
    let mut g = ListDigraph::new();
    let a = g.add_node();
    let b = g.add_node();
    g.add_arc(a, b);

    let lower = vec![5i32];
    let upper = vec![1i32];
    let cost = vec![1i32];

    let mut problem = ProblemBuilder::new(&g)
        .bound_maps(&lower, &upper)
        .cost_map(&cost);
    let err = problem.run(PivotRule::BlockSearch).unwrap_err();
    assert_eq!(err, InvalidInput::LowerExceedsUpper { arc_index: 0 });
}

/// Binding both `supplyMap` and `stSupply` is a contract violation
/// regardless of binding order (spec.md §4.3).
#[test]
fn supply_map_and_st_supply_are_mutually_exclusive() {
    let mut g = ListDigraph::new();
    let a = g.add_node();
    let b = g.add_node();
    g.add_arc(a, b);
    let supply = vec![1i32, -1];

    let mut problem = ProblemBuilder::new(&g)
        .supply_map(&supply)
        .st_supply(NodeId::new(0), NodeId::new(1), 1);
    let err = problem.run(PivotRule::BlockSearch).unwrap_err();
    assert_eq!(err, InvalidInput::ConflictingSupplySpec);
}

/// `stSupply` with an id outside the bound graph is rejected rather than
/// panicking.
#[test]
fn st_supply_out_of_range_id_is_rejected() {
    let mut g = ListDigraph::new();
    g.add_node();
    g.add_node();

    let mut problem: ProblemBuilder<'_, _, i32> =
        ProblemBuilder::new(&g).st_supply(NodeId::new(0), NodeId::new(9), 1);
    let err = problem.run(PivotRule::BlockSearch).unwrap_err();
    assert_eq!(err, InvalidInput::IdOutOfRange);
}

/// An unbalanced EQ instance (supplies don't sum to zero) is reported as
/// `Infeasible` via the precheck, not panicked or silently approximated.
#[test]
fn unbalanced_eq_instance_is_infeasible() {
    let mut g = ListDigraph::new();
    let a = g.add_node();
    let b = g.add_node();
    g.add_arc(a, b);
    let supply = vec![5i32, -3];

    let mut problem = ProblemBuilder::new(&g).supply_map(&supply);
    let status = problem.run(PivotRule::BlockSearch).unwrap();
    assert!(!status.is_optimal());
}
