//! **C1 — Graph Model.**
//!
//! Directed multigraph with stable integer node/arc ids and efficient
//! incidence iteration. This plays the role `petgraph`'s `visit` module
//! traits (`NodeCount`, `EdgeCount`, `NodeIndexable`, `IntoEdgesDirected`)
//! play for its generic algorithms: a capability interface the simplex
//! engine is written against, with several concrete backends satisfying it
//! uniformly (spec.md §9, "Capability abstraction over graph kinds").
//!
//! Three backends are provided, matching spec.md §4.1:
//! - [`ListDigraph`]: general adjacency-list digraph, arcs added one at a
//!   time, arbitrary topology.
//! - [`CompleteDigraph`]: N nodes, all N² arcs (including self-loops).
//! - [`CompleteGraph`]: N nodes, all N(N-1)/2 undirected edges, each
//!   exposed as the two directed arcs it folds out to.

mod complete;
mod complete_undirected;
mod list;

pub use complete::CompleteDigraph;
pub use complete_undirected::CompleteGraph;
pub use list::{ArcRange, ListDigraph, NodeRange};

use crate::ids::{ArcId, Direction, NodeId};

/// The graph-model capability the simplex engine (and its preprocessor)
/// consumes: stable ids, endpoint lookup, and incidence iteration.
///
/// Associated iterator types are GATs rather than `Box<dyn Iterator>` —
/// `rust-version = "1.65"` in `Cargo.toml` is chosen specifically so this
/// compiles without boxing, keeping incidence iteration allocation-free the
/// way `petgraph`'s own `graph::Neighbors` iterators are.
pub trait Digraph {
    /// Number of nodes. Node ids are exactly `0..node_num()`.
    fn node_num(&self) -> usize;
    /// Number of arcs. Arc ids are exactly `0..arc_num()`.
    fn arc_num(&self) -> usize;

    fn source(&self, arc: ArcId) -> NodeId;
    fn target(&self, arc: ArcId) -> NodeId;

    /// Find an arc from `from` to `to`. `prev`, if given, must be a
    /// previously returned arc between the same endpoints; the search
    /// resumes after it, so repeated calls enumerate all parallel arcs and
    /// finally return `None`.
    fn find_arc(&self, from: NodeId, to: NodeId, prev: Option<ArcId>) -> Option<ArcId>;

    type Nodes<'a>: Iterator<Item = NodeId>
    where
        Self: 'a;
    fn nodes(&self) -> Self::Nodes<'_>;

    type Arcs<'a>: Iterator<Item = ArcId>
    where
        Self: 'a;
    fn arcs(&self) -> Self::Arcs<'_>;

    type Incidence<'a>: Iterator<Item = ArcId>
    where
        Self: 'a;
    /// Arcs incident to `node` in the given direction.
    fn incident(&self, node: NodeId, dir: Direction) -> Self::Incidence<'_>;

    #[inline]
    fn out_arcs(&self, node: NodeId) -> Self::Incidence<'_> {
        self.incident(node, Direction::Outgoing)
    }

    #[inline]
    fn in_arcs(&self, node: NodeId) -> Self::Incidence<'_> {
        self.incident(node, Direction::Incoming)
    }

    #[inline]
    fn max_node_id(&self) -> usize {
        self.node_num().saturating_sub(1)
    }

    #[inline]
    fn max_arc_id(&self) -> usize {
        self.arc_num().saturating_sub(1)
    }
}
