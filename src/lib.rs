//! **network-simplex** computes minimum-cost flows over directed graphs
//! using the network simplex method: maintain a spanning-tree basis of an
//! augmented graph, repeatedly pivot in an arc with a violated reduced cost,
//! and read off `flow`/`potential` once no such arc remains.
//!
//! The most prominent type is [`ProblemBuilder`], a fluent configuration
//! surface over a bound [`graph::Digraph`]: attach cost/bound/supply maps,
//! pick a [`problem::ProblemType`] and [`problem::PivotRule`], and `run`.
//!
//! ```
//! use network_simplex::graph::ListDigraph;
//! use network_simplex::builder::ProblemBuilder;
//! use network_simplex::problem::PivotRule;
//!
//! let mut g = ListDigraph::new();
//! let a = g.add_node();
//! let b = g.add_node();
//! let c = g.add_node();
//! g.add_arc(a, b);
//! g.add_arc(b, c);
//!
//! let cost = vec![1i32, 1];
//! let supply = vec![5i32, 0, -5];
//!
//! let mut problem = ProblemBuilder::new(&g).cost_map(&cost).supply_map(&supply);
//! let status = problem.run(PivotRule::BlockSearch).unwrap();
//! assert!(status.is_optimal());
//! assert_eq!(problem.total_cost(), 10);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod ids;
pub mod maps;
pub mod num;
pub mod pivot;
pub mod problem;

mod engine;
mod preprocess;
mod tree;

#[cfg(feature = "quickcheck")]
pub mod quickcheck;

pub use builder::ProblemBuilder;
pub use error::InvalidInput;
pub use problem::{PivotRule, ProblemType, Stats, Status};
