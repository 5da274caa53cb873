use std::iter::Copied;
use std::ops::Range;
use std::slice;

use super::Digraph;
use crate::ids::{ArcId, Direction, NodeId};

/// General-purpose adjacency-list digraph: arcs are added one at a time and
/// may form any topology, including parallel arcs and self-loops.
///
/// This is the backend the [`crate::Preprocessor`] augments with an
/// artificial root and one artificial arc per node (spec.md §4.4): nodes
/// and arcs already present keep their ids, and the artificial pieces are
/// simply appended, so the augmented structure is a `ListDigraph` that is a
/// superset of the caller's graph.
#[derive(Debug, Default, Clone)]
pub struct ListDigraph {
    arc_endpoints: Vec<(NodeId, NodeId)>,
    out_arcs: Vec<Vec<ArcId>>,
    in_arcs: Vec<Vec<ArcId>>,
}

impl ListDigraph {
    pub fn new() -> Self {
        ListDigraph::default()
    }

    pub fn with_nodes(node_num: usize) -> Self {
        ListDigraph {
            arc_endpoints: Vec::new(),
            out_arcs: vec![Vec::new(); node_num],
            in_arcs: vec![Vec::new(); node_num],
        }
    }

    /// Append a fresh node, returning its id.
    pub fn add_node(&mut self) -> NodeId {
        self.out_arcs.push(Vec::new());
        self.in_arcs.push(Vec::new());
        NodeId::new(self.out_arcs.len() - 1)
    }

    /// Append an arc `from -> to`, returning its id. Parallel arcs and
    /// self-loops are both permitted.
    pub fn add_arc(&mut self, from: NodeId, to: NodeId) -> ArcId {
        let id = ArcId::new(self.arc_endpoints.len());
        self.arc_endpoints.push((from, to));
        self.out_arcs[from.index()].push(id);
        self.in_arcs[to.index()].push(id);
        id
    }
}

impl Digraph for ListDigraph {
    fn node_num(&self) -> usize {
        self.out_arcs.len()
    }

    fn arc_num(&self) -> usize {
        self.arc_endpoints.len()
    }

    fn source(&self, arc: ArcId) -> NodeId {
        self.arc_endpoints[arc.index()].0
    }

    fn target(&self, arc: ArcId) -> NodeId {
        self.arc_endpoints[arc.index()].1
    }

    fn find_arc(&self, from: NodeId, to: NodeId, prev: Option<ArcId>) -> Option<ArcId> {
        let candidates = &self.out_arcs[from.index()];
        let start = match prev {
            None => 0,
            Some(prev_id) => candidates.iter().position(|&a| a == prev_id)? + 1,
        };
        candidates[start..]
            .iter()
            .copied()
            .find(|&a| self.target(a) == to)
    }

    type Nodes<'a> = NodeRange;
    fn nodes(&self) -> NodeRange {
        NodeRange::new(0..self.node_num())
    }

    type Arcs<'a> = ArcRange;
    fn arcs(&self) -> ArcRange {
        ArcRange::new(0..self.arc_num())
    }

    type Incidence<'a> = Copied<slice::Iter<'a, ArcId>>;
    fn incident(&self, node: NodeId, dir: Direction) -> Self::Incidence<'_> {
        match dir {
            Direction::Outgoing => self.out_arcs[node.index()].iter().copied(),
            Direction::Incoming => self.in_arcs[node.index()].iter().copied(),
        }
    }
}

/// Iterator over `0..node_num()` yielding [`NodeId`]s.
#[derive(Debug, Clone)]
pub struct NodeRange(Range<usize>);

impl NodeRange {
    pub(crate) fn new(range: Range<usize>) -> Self {
        NodeRange(range)
    }
}

impl Iterator for NodeRange {
    type Item = NodeId;
    fn next(&mut self) -> Option<NodeId> {
        self.0.next().map(NodeId::new)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Iterator over `0..arc_num()` yielding [`ArcId`]s.
#[derive(Debug, Clone)]
pub struct ArcRange(Range<usize>);

impl ArcRange {
    pub(crate) fn new(range: Range<usize>) -> Self {
        ArcRange(range)
    }
}

impl Iterator for ArcRange {
    type Item = ArcId;
    fn next(&mut self) -> Option<ArcId> {
        self.0.next().map(ArcId::new)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
