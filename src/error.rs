//! Programmer-error surface.
//!
//! Mirrors `crates/core/src/error.rs`'s minimal `Error` type in the teacher
//! crate: a small `Debug + Display + std::error::Error` type for conditions
//! the spec treats as contract violations rather than ordinary algorithmic
//! outcomes (spec.md §7: "Contract violations ... the implementer may
//! either check and fail with a defined `InvalidInput` kind or treat as
//! undefined behavior, but consistently"). This crate checks.
use core::fmt;

/// A bound map or supply configuration that violates the solver's input
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// `lower[a] > upper[a]` for some arc `a`.
    LowerExceedsUpper { arc_index: usize },
    /// Both `supplyMap` and `stSupply` were bound; spec.md §4.3 declares
    /// them mutually exclusive.
    ConflictingSupplySpec,
    /// A node or arc id passed to `stSupply`/bound maps is out of range for
    /// the bound graph.
    IdOutOfRange,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::LowerExceedsUpper { arc_index } => {
                write!(f, "lower bound exceeds upper bound on arc {arc_index}")
            }
            InvalidInput::ConflictingSupplySpec => {
                write!(f, "supplyMap and stSupply are mutually exclusive")
            }
            InvalidInput::IdOutOfRange => write!(f, "node or arc id out of range"),
        }
    }
}

impl std::error::Error for InvalidInput {}
