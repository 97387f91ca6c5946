//! Distance relaxers: what "better path" means.
//!
//! A relaxer is a pair of operators over a cost type:
//! - `combine(a, b)`: extend a path of cost `a` by an edge of cost `b`
//! - `compare(a, b)`: `a` is strictly better than `b`
//!
//! [`ShortestDistance`] is the (min, +) pair, [`CriticalDistance`] the
//! (max, +) pair. Every relaxation algorithm is generic over the relaxer, so
//! switching the type parameter turns a shortest-path computation into a
//! critical-path (longest-path) one without touching the algorithm.
//!
//! Each relaxer has an *infinity* marking unreached vertices. `combine`
//! saturates at it, so relaxing out of an unreached vertex never succeeds. A
//! sum that overflows the cost type also comes out as infinity.

use core::fmt::Debug;
use core::ops::Add;

use num_traits::{Bounded, CheckedAdd, Zero};

/// Numeric cost usable with the provided relaxers.
pub trait Cost: Copy + PartialOrd + Debug + Zero + Bounded + Add<Output = Self> {
    /// `self + other`, or `None` if the sum does not fit the type.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            #[inline]
            fn checked_sum(self, other: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &other)
            }
        }
    )*};
}

macro_rules! float_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            #[inline]
            fn checked_sum(self, other: Self) -> Option<Self> {
                let sum = self + other;
                sum.is_finite().then_some(sum)
            }
        }
    )*};
}

integer_cost!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_cost!(f32, f64);

/// The (combine, compare) pair behind every relaxation algorithm.
pub trait DistanceRelaxer<C: Cost> {
    /// Distance of an unreached vertex.
    fn infinity() -> C;

    /// Distance of the root.
    fn zero() -> C {
        C::zero()
    }

    /// Cost of a path of cost `a` extended by cost `b`.
    fn combine(a: C, b: C) -> C;

    /// Returns `true` if `a` is strictly better than `b`.
    fn compare(a: C, b: C) -> bool;

    /// The improved distance through an edge, if it improves on
    /// `current_best`.
    #[inline]
    fn relax(current_best: C, edge_cost: C, predecessor_dist: C) -> Option<C> {
        let candidate = Self::combine(predecessor_dist, edge_cost);
        Self::compare(candidate, current_best).then_some(candidate)
    }

    /// Returns `true` if `distance` is not [`infinity`](Self::infinity).
    #[inline]
    fn is_reached(distance: C) -> bool {
        distance != Self::infinity()
    }
}

/// Minimize total cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShortestDistance;

impl<C: Cost> DistanceRelaxer<C> for ShortestDistance {
    #[inline]
    fn infinity() -> C {
        C::max_value()
    }

    #[inline]
    fn combine(a: C, b: C) -> C {
        let inf = C::max_value();
        if a == inf || b == inf {
            inf
        } else {
            a.checked_sum(b).unwrap_or(inf)
        }
    }

    #[inline]
    fn compare(a: C, b: C) -> bool {
        a < b
    }
}

/// Maximize total cost: longest paths, the critical path of a schedule.
///
/// Infinity is `C::min_value()`, so the cost type must be signed; for an
/// unsigned type it would coincide with the root's zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CriticalDistance;

impl<C: Cost> DistanceRelaxer<C> for CriticalDistance {
    #[inline]
    fn infinity() -> C {
        C::min_value()
    }

    #[inline]
    fn combine(a: C, b: C) -> C {
        let inf = C::min_value();
        if a == inf || b == inf {
            inf
        } else {
            a.checked_sum(b).unwrap_or(inf)
        }
    }

    #[inline]
    fn compare(a: C, b: C) -> bool {
        a > b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_relaxes_only_on_improvement() {
        assert_eq!(ShortestDistance::relax(10.0, 2.0, 3.0), Some(5.0));
        assert_eq!(ShortestDistance::relax(5.0, 2.0, 3.0), None);
        assert_eq!(ShortestDistance::relax(f64::MAX, 2.0, 3.0), Some(5.0));
    }

    #[test]
    fn critical_relaxes_toward_longer_paths() {
        assert_eq!(CriticalDistance::relax(4i64, 2, 3), Some(5));
        assert_eq!(CriticalDistance::relax(6i64, 2, 3), None);
        assert_eq!(<CriticalDistance as DistanceRelaxer<i64>>::infinity(), i64::MIN);
    }

    #[test]
    fn combine_saturates_at_infinity() {
        let inf: u32 = ShortestDistance::infinity();
        assert_eq!(ShortestDistance::combine(inf, 1u32), inf);
        assert_eq!(ShortestDistance::relax(inf, 1u32, inf), None);
        assert!(!<ShortestDistance as DistanceRelaxer<u32>>::is_reached(inf));

        let neg_inf: i32 = CriticalDistance::infinity();
        assert_eq!(CriticalDistance::combine(neg_inf, -5i32), neg_inf);
        assert_eq!(CriticalDistance::relax(neg_inf, 7i32, neg_inf), None);
    }

    #[test]
    fn overflowing_sums_saturate_to_infinity() {
        let half = 1u32 << 31;
        assert_eq!(ShortestDistance::combine(half, half), u32::MAX);
        assert_eq!(ShortestDistance::relax(u32::MAX, half, half), None);
        assert_eq!(ShortestDistance::relax(u32::MAX, half - 2, half), Some(u32::MAX - 1));

        assert_eq!(CriticalDistance::combine(i64::MIN + 1, -2i64), i64::MIN);
        assert_eq!(ShortestDistance::combine(f64::MAX / 2.0 * 1.5, f64::MAX / 2.0), f64::MAX);
    }
}
