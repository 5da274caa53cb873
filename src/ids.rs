//! Stable integer identifiers for nodes and arcs.
//!
//! Mirrors the shape of `petgraph`'s `NodeIndex`/`EdgeIndex` newtypes, but
//! drops the generic `Ix: IndexType` backing integer: the simplex engine
//! never deals in graphs large enough that the `u8`/`u16` memory shaving
//! matters, and a fixed `usize` keeps the rest of the crate free of an extra
//! type parameter threaded through every trait bound.

use std::fmt;

/// Identifies a node of a [`Digraph`](crate::graph::Digraph).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Identifies an arc of a [`Digraph`](crate::graph::Digraph).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ArcId(usize);

impl ArcId {
    #[inline]
    pub fn new(index: usize) -> Self {
        ArcId(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for ArcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArcId({})", self.0)
    }
}

/// The direction of an incidence query: arcs leaving a node, or arcs
/// entering it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Outgoing,
    Incoming,
}

impl Direction {
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Outgoing => Direction::Incoming,
            Direction::Incoming => Direction::Outgoing,
        }
    }
}
