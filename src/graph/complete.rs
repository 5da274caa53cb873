use super::{ArcRange, Digraph, NodeRange};
use crate::ids::{ArcId, Direction, NodeId};

/// The complete directed graph on `N` nodes: all `N²` arcs, including
/// self-loops, exist implicitly. Arc `(s, t)` has id `s * N + t` (spec.md
/// §4.1), so endpoint lookup and both incidence directions are O(1)/O(N)
/// closed-form computations rather than stored adjacency.
#[derive(Debug, Clone, Copy)]
pub struct CompleteDigraph {
    n: usize,
}

impl CompleteDigraph {
    pub fn new(n: usize) -> Self {
        CompleteDigraph { n }
    }

    #[inline]
    pub fn arc(&self, s: NodeId, t: NodeId) -> ArcId {
        ArcId::new(s.index() * self.n + t.index())
    }
}

impl Digraph for CompleteDigraph {
    fn node_num(&self) -> usize {
        self.n
    }

    fn arc_num(&self) -> usize {
        self.n * self.n
    }

    fn source(&self, arc: ArcId) -> NodeId {
        NodeId::new(arc.index() / self.n)
    }

    fn target(&self, arc: ArcId) -> NodeId {
        NodeId::new(arc.index() % self.n)
    }

    fn find_arc(&self, from: NodeId, to: NodeId, prev: Option<ArcId>) -> Option<ArcId> {
        // Exactly one arc per ordered pair: a second call always reports
        // "no more", matching the sentinel contract in spec.md §4.1(iii).
        match prev {
            None => Some(self.arc(from, to)),
            Some(_) => None,
        }
    }

    type Nodes<'a> = NodeRange;
    fn nodes(&self) -> NodeRange {
        NodeRange::new(0..self.n)
    }

    type Arcs<'a> = ArcRange;
    fn arcs(&self) -> ArcRange {
        ArcRange::new(0..self.arc_num())
    }

    type Incidence<'a> = CompleteIncidence;
    fn incident(&self, node: NodeId, dir: Direction) -> CompleteIncidence {
        CompleteIncidence {
            n: self.n,
            node: node.index(),
            dir,
            cursor: 0,
        }
    }
}

/// Out-arcs of `node` are the contiguous range `node*N .. node*N+N`;
/// in-arcs are the strided sequence `node, node+N, node+2N, ...`. Both are
/// produced by the same cursor walking `0..N`.
#[derive(Debug, Clone)]
pub struct CompleteIncidence {
    n: usize,
    node: usize,
    dir: Direction,
    cursor: usize,
}

impl Iterator for CompleteIncidence {
    type Item = ArcId;
    fn next(&mut self) -> Option<ArcId> {
        if self.cursor >= self.n {
            return None;
        }
        let other = self.cursor;
        self.cursor += 1;
        let id = match self.dir {
            Direction::Outgoing => self.node * self.n + other,
            Direction::Incoming => other * self.n + self.node,
        };
        Some(ArcId::new(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n.saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}
