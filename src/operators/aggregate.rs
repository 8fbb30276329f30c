//! Count, sum, average (spec §4.1).
//!
//! `count` returns a weight (it's a ring sum, no information is lost).
//! `sum`/`average` need to combine an arbitrary numeric projection `f`
//! with the integer weight attached to each element; spec.md leaves the
//! numeric result type unspecified (it is language-neutral), so this crate
//! follows the teacher's `Aggregate` operator convention of letting the
//! caller's closure pick the output type, and fixes weight-to-scalar
//! conversion at `f64` -- the natural choice for an `average`, which is
//! undefined (not just imprecise) when `count == 0`.

use crate::algebra::{zset::ZSet, ZRingValue};
use std::hash::Hash;

pub fn count<A, W>(z: &ZSet<A, W>) -> W
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    z.iter().fold(W::zero(), |acc, (_, w)| acc + w.clone())
}

/// `Σ f(x) · w_x`, as an `f64` (spec §4.1: "sum(z, f) = Σ f(x)·w_x").
pub fn sum<A, W>(z: &ZSet<A, W>, f: impl Fn(&A) -> f64) -> f64
where
    A: Eq + Hash + Clone,
    W: ZRingValue + WeightAsF64,
{
    z.iter().map(|(k, w)| f(k) * w.as_f64()).sum()
}

/// `sum / count`, `None` when `count == 0` (spec §4.1: "undefined when
/// count = 0").
pub fn average<A, W>(z: &ZSet<A, W>, f: impl Fn(&A) -> f64) -> Option<f64>
where
    A: Eq + Hash + Clone,
    W: ZRingValue + WeightAsF64,
{
    let n: f64 = z.iter().map(|(_, w)| w.as_f64()).sum();
    if n == 0.0 {
        None
    } else {
        Some(sum(z, f) / n)
    }
}

/// Weight types that can be converted to `f64` for `sum`/`average`.
/// Implemented for the built-in integer weight types; user weight types
/// that want to use `sum`/`average` implement it themselves.
pub trait WeightAsF64 {
    fn as_f64(&self) -> f64;
}

impl WeightAsF64 for i64 {
    fn as_f64(&self) -> f64 {
        *self as f64
    }
}

impl WeightAsF64 for crate::algebra::checked_int::CheckedI64 {
    fn as_f64(&self) -> f64 {
        self.into_inner() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::checked_int::CheckedI64;

    fn w(n: i64) -> CheckedI64 {
        CheckedI64::from(n)
    }

    #[test]
    fn count_sums_weights() {
        let z: ZSet<i32> = ZSet::from_pairs([(1, w(2)), (2, w(3)), (3, w(-1))]);
        assert_eq!(count(&z), w(4));
    }

    #[test]
    fn sum_and_average() {
        let z: ZSet<i32> = ZSet::from_pairs([(10, w(1)), (20, w(1)), (30, w(2))]);
        assert_eq!(sum(&z, |k| *k as f64), 10.0 + 20.0 + 30.0 * 2.0);
        assert_eq!(average(&z, |k| *k as f64), Some((10.0 + 20.0 + 60.0) / 4.0));
    }

    #[test]
    fn average_of_empty_is_none() {
        let z: ZSet<i32> = ZSet::zero();
        assert_eq!(average(&z, |k| *k as f64), None);
    }
}
