//! **C3 — Problem Builder.**
//!
//! The fluent configuration surface spec.md §4.3 describes: bind maps,
//! pick a problem form, optionally set a single source-target supply
//! pair, pick a pivot rule, and `run`. Mirrors the chained-setter shape of
//! `petgraph`'s own builder-style APIs (e.g. `GraphMap::with_capacity`
//! chains, or `Dfs::from_parts`) in spirit, generalized here to a
//! multi-option builder since the solver has many independent bindings
//! rather than one or two constructor arguments.
//!
//! Binding any map is idempotent until [`ProblemBuilder::reset`] (spec.md
//! §4.3); `supplyMap`/`stSupply` are the one pair of mutually exclusive
//! options, checked at [`ProblemBuilder::run`] rather than at bind time so
//! binding order never matters.

use crate::engine::Engine;
use crate::error::InvalidInput;
use crate::graph::Digraph;
use crate::ids::{ArcId, NodeId};
use crate::maps::{ArcMap, ArcMapMut, ConstMap, NodeMap, NodeMapMut};
use crate::num::SimplexInt;
use crate::pivot::{AlteringList, BestEligible, BlockSearch, CandidateList, EnteringArcRule, FirstEligible};
use crate::preprocess::{preprocess, Preprocessed, PreprocessOutcome};
use crate::problem::{PivotRule, ProblemType, Stats, Status};

enum SupplySpec<'a, T> {
    Unset,
    Map(&'a dyn NodeMap<T>),
    StSupply { s: NodeId, t: NodeId, k: T },
}

enum FlowSink<'a, T> {
    External(&'a mut dyn ArcMapMut<T>),
    Owned(Vec<T>),
}

impl<'a, T: SimplexInt> FlowSink<'a, T> {
    fn get(&self, a: ArcId) -> T {
        match self {
            FlowSink::External(m) => m.get(a),
            FlowSink::Owned(v) => v.get(a),
        }
    }
    fn set(&mut self, a: ArcId, value: T) {
        match self {
            FlowSink::External(m) => m.set(a, value),
            FlowSink::Owned(v) => v.set(a, value),
        }
    }
}

enum PotentialSink<'a, T> {
    External(&'a mut dyn NodeMapMut<T>),
    Owned(Vec<T>),
}

impl<'a, T: SimplexInt> PotentialSink<'a, T> {
    fn get(&self, n: NodeId) -> T {
        match self {
            PotentialSink::External(m) => m.get(n),
            PotentialSink::Owned(v) => v.get(n),
        }
    }
    fn set(&mut self, n: NodeId, value: T) {
        match self {
            PotentialSink::External(m) => m.set(n, value),
            PotentialSink::Owned(v) => v.set(n, value),
        }
    }
}

/// Holds the last successful solve's augmented arc table and potentials,
/// so `flow`/`potential`/`total_cost` can answer after `run` returns
/// without the caller threading anything back through.
struct SolveResult<T: SimplexInt> {
    data: Preprocessed<T>,
    stats: Stats,
}

/// The fluent builder of spec.md §4.3. Borrows its graph and read-only
/// maps for the duration of `run`; flow/potential destinations are either
/// caller-provided (borrowed) or privately owned, falling back per
/// spec.md §4.2/§4.3's documented defaults.
pub struct ProblemBuilder<'a, G: Digraph, T: SimplexInt> {
    graph: &'a G,
    lower: Option<&'a dyn ArcMap<T>>,
    upper: Option<&'a dyn ArcMap<T>>,
    cost: Option<&'a dyn ArcMap<T>>,
    supply: SupplySpec<'a, T>,
    supply_conflict: bool,
    problem_type: ProblemType,
    flow_sink: FlowSink<'a, T>,
    potential_sink: PotentialSink<'a, T>,
    last: Option<SolveResult<T>>,
}

impl<'a, G: Digraph, T: SimplexInt> ProblemBuilder<'a, G, T> {
    pub fn new(graph: &'a G) -> Self {
        ProblemBuilder {
            graph,
            lower: None,
            upper: None,
            cost: None,
            supply: SupplySpec::Unset,
            supply_conflict: false,
            problem_type: ProblemType::default(),
            flow_sink: FlowSink::Owned(vec![T::zero(); graph.arc_num()]),
            potential_sink: PotentialSink::Owned(vec![T::zero(); graph.node_num()]),
            last: None,
        }
    }

    pub fn lower_map(mut self, map: &'a dyn ArcMap<T>) -> Self {
        self.lower = Some(map);
        self
    }

    pub fn upper_map(mut self, map: &'a dyn ArcMap<T>) -> Self {
        self.upper = Some(map);
        self
    }

    /// Alias for [`ProblemBuilder::upper_map`] (spec.md §4.3:
    /// `capacityMap` is interchangeable with `upperMap`).
    pub fn capacity_map(self, map: &'a dyn ArcMap<T>) -> Self {
        self.upper_map(map)
    }

    pub fn bound_maps(self, lower: &'a dyn ArcMap<T>, upper: &'a dyn ArcMap<T>) -> Self {
        self.lower_map(lower).upper_map(upper)
    }

    pub fn cost_map(mut self, map: &'a dyn ArcMap<T>) -> Self {
        self.cost = Some(map);
        self
    }

    pub fn supply_map(mut self, map: &'a dyn NodeMap<T>) -> Self {
        if matches!(self.supply, SupplySpec::StSupply { .. }) {
            self.supply_conflict = true;
        }
        self.supply = SupplySpec::Map(map);
        self
    }

    pub fn st_supply(mut self, s: NodeId, t: NodeId, k: T) -> Self {
        if matches!(self.supply, SupplySpec::Map(_)) {
            self.supply_conflict = true;
        }
        self.supply = SupplySpec::StSupply { s, t, k };
        self
    }

    pub fn flow_map(mut self, map: &'a mut dyn ArcMapMut<T>) -> Self {
        self.flow_sink = FlowSink::External(map);
        self
    }

    pub fn potential_map(mut self, map: &'a mut dyn NodeMapMut<T>) -> Self {
        self.potential_sink = PotentialSink::External(map);
        self
    }

    pub fn problem_type(mut self, t: ProblemType) -> Self {
        self.problem_type = t;
        self
    }

    /// Drops all bound maps and parameters; the graph binding survives
    /// (spec.md §4.3).
    pub fn reset(mut self) -> Self {
        self.lower = None;
        self.upper = None;
        self.cost = None;
        self.supply = SupplySpec::Unset;
        self.supply_conflict = false;
        self.problem_type = ProblemType::default();
        self.flow_sink = FlowSink::Owned(vec![T::zero(); self.graph.arc_num()]);
        self.potential_sink = PotentialSink::Owned(vec![T::zero(); self.graph.node_num()]);
        self.last = None;
        self
    }

    fn materialize_supply(&self, node_num: usize) -> Vec<T> {
        match &self.supply {
            SupplySpec::Unset => vec![T::zero(); node_num],
            SupplySpec::Map(m) => (0..node_num).map(|i| m.get(NodeId::new(i))).collect(),
            SupplySpec::StSupply { s, t, k } => {
                let mut v = vec![T::zero(); node_num];
                v[s.index()] = *k;
                v[t.index()] = -*k;
                v
            }
        }
    }

    /// Executes the solver with the given pivot rule. `true`/`Optimal`
    /// means the caller's (or the private fallback) flow/potential maps
    /// now hold the solution; `Infeasible`/`Unbounded` leave them
    /// untouched (spec.md §3, "writable maps are populated exactly once
    /// on successful return").
    pub fn run(&mut self, pivot: PivotRule) -> Result<Status, InvalidInput> {
        if self.supply_conflict {
            return Err(InvalidInput::ConflictingSupplySpec);
        }
        let node_num = self.graph.node_num();
        if let SupplySpec::StSupply { s, t, .. } = &self.supply {
            if s.index() >= node_num || t.index() >= node_num {
                return Err(InvalidInput::IdOutOfRange);
            }
        }
        let supply_vec = self.materialize_supply(node_num);

        let default_lower = ConstMap(T::zero());
        let default_upper = ConstMap(T::max_value());
        let default_cost = ConstMap(T::one());
        let lower_ref: &dyn ArcMap<T> = self.lower.unwrap_or(&default_lower);
        let upper_ref: &dyn ArcMap<T> = self.upper.unwrap_or(&default_upper);
        let cost_ref: &dyn ArcMap<T> = self.cost.unwrap_or(&default_cost);

        let outcome = preprocess(
            self.graph,
            &cost_ref,
            &lower_ref,
            &upper_ref,
            &supply_vec,
            self.problem_type,
        )?;

        match outcome {
            PreprocessOutcome::Infeasible => {
                self.last = None;
                Ok(Status::Infeasible)
            }
            PreprocessOutcome::Ready(data) => {
                let engine = Engine::new(*data);
                let (status, data, potential, stats) = dispatch(engine, pivot);
                if status == Status::Optimal {
                    for i in 0..data.orig_arc_num {
                        self.flow_sink.set(ArcId::new(i), data.flow[i]);
                    }
                    for i in 0..node_num {
                        self.potential_sink.set(NodeId::new(i), potential[i]);
                    }
                }
                self.last = Some(SolveResult { data, stats });
                Ok(status)
            }
        }
    }

    /// Pivot-count introspection from the most recent `run` (zero if `run`
    /// has not been called, or returned `Infeasible` before any tree was
    /// built).
    pub fn stats(&self) -> Stats {
        self.last.as_ref().map_or(Stats::default(), |l| l.stats)
    }

    pub fn flow(&self, arc: ArcId) -> T {
        self.flow_sink.get(arc)
    }

    pub fn potential(&self, node: NodeId) -> T {
        self.potential_sink.get(node)
    }

    pub fn flow_map(&self) -> &dyn ArcMap<T> {
        match &self.flow_sink {
            FlowSink::External(m) => &**m,
            FlowSink::Owned(v) => v,
        }
    }

    pub fn potential_map(&self) -> &dyn NodeMap<T> {
        match &self.potential_sink {
            PotentialSink::External(m) => &**m,
            PotentialSink::Owned(v) => v,
        }
    }

    /// `Σ cost[a]·flow[a]` in the flow/cost type itself — the "default
    /// accumulator" spec.md §4.3 describes. Use [`ProblemBuilder::total_cost_as`]
    /// for a wider accumulator.
    pub fn total_cost(&self) -> T {
        self.total_cost_as()
    }

    /// `Σ cost[a]·flow[a]` accumulated in `Acc` rather than `T`, so a
    /// caller solving with a narrow flow/cost type can still sum into a
    /// wider one without overflow (spec.md §4.3, §6).
    pub fn total_cost_as<Acc: SimplexInt>(&self) -> Acc
    where
        T: Into<Acc>,
    {
        let Some(last) = &self.last else {
            return Acc::zero();
        };
        let mut total = Acc::zero();
        for i in 0..last.data.orig_arc_num {
            let arc = &last.data.arcs[i];
            let contribution: Acc = arc.cost.into();
            let flow: Acc = last.data.flow[i].into();
            total = total + contribution * flow;
        }
        total
    }
}

fn dispatch<T: SimplexInt>(
    engine: Engine<T>,
    pivot: PivotRule,
) -> (Status, Preprocessed<T>, Vec<T>, Stats) {
    match pivot {
        PivotRule::FirstEligible => engine.run(&mut FirstEligible::default()),
        PivotRule::BestEligible => engine.run(&mut BestEligible::default()),
        PivotRule::BlockSearch => engine.run(&mut BlockSearch::default()),
        PivotRule::CandidateList => engine.run(&mut CandidateList::default()),
        PivotRule::AlteringList => engine.run(&mut AlteringList::default()),
    }
}
