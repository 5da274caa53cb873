//! Integer domain the solver computes over.
//!
//! Grounded in `petgraph::algo`'s `Measure`/`BoundedMeasure` trait family:
//! the teacher defines a small numeric-capability trait per algorithm family
//! (`FloatMeasure` for Dijkstra-style distances, `BoundedMeasure` for
//! overflow-aware relaxations) rather than depending on an external numeric
//! crate. The network simplex method needs signed, totally-ordered,
//! negatable integers with a known `MAX`/`MIN` (to size the artificial
//! cost, see [`crate::engine::artificial_cost`]), so `SimplexInt` is that
//! family's signed-integer member.

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

/// The signed integer domain flows, costs, capacities and supplies live in.
///
/// Implemented for the signed primitive integer types. Callers pick the
/// width; the engine does not widen or narrow on their behalf (spec.md
/// §4.3: `totalCost<T>` is generic *precisely* so overflow avoidance is the
/// caller's choice, not the engine's). `Mul` is part of the bound (not just
/// `checked_mul_usize`) because `total_cost`/`total_cost_as` (see
/// `crate::builder`) accumulate `cost[a] * flow[a]` directly in the
/// accumulator type.
pub trait SimplexInt:
    Copy
    + Ord
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn min_value() -> Self;
    fn max_value() -> Self;
    /// Absolute value; panics on `MIN.abs()` exactly like the primitive
    /// `i*::abs` does, which cannot occur here because node supplies and
    /// bounds derived from a solvable instance never reach `Self::MIN`.
    fn abs(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_mul_usize(self, rhs: usize) -> Option<Self>;
}

macro_rules! impl_simplex_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl SimplexInt for $t {
                #[inline]
                fn zero() -> Self { 0 }
                #[inline]
                fn one() -> Self { 1 }
                #[inline]
                fn min_value() -> Self { <$t>::MIN }
                #[inline]
                fn max_value() -> Self { <$t>::MAX }
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
                #[inline]
                fn checked_mul_usize(self, rhs: usize) -> Option<Self> {
                    let rhs = <$t>::try_from(rhs).ok()?;
                    <$t>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

impl_simplex_int!(i16, i32, i64, i128, isize);
