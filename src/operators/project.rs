//! Projection operator (spec §4.1). Linear in the Z-set argument.

use crate::algebra::{zset::ZSet, ZRingValue};
use std::hash::Hash;

/// `{ π(x) ↦ Σ_{y : π(y)=π(x)} w_y }`: map every key through `proj`, then
/// canonicalize, summing weights of elements that collide under `proj`.
pub fn project<A, B, W>(z: &ZSet<A, W>, proj: impl Fn(&A) -> B) -> ZSet<B, W>
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    W: ZRingValue,
{
    ZSet::from_pairs(z.iter().map(|(k, w)| (proj(k), w.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::checked_int::CheckedI64;

    fn w(n: i64) -> CheckedI64 {
        CheckedI64::from(n)
    }

    #[test]
    fn merges_colliding_keys() {
        let z: ZSet<i32> = ZSet::from_pairs([(1, w(2)), (11, w(3)), (2, w(1))]);
        let out = project(&z, |k| k % 10);
        assert_eq!(out, ZSet::from_pairs([(1, w(5)), (2, w(1))]));
    }

    #[test]
    fn is_linear() {
        let a: ZSet<i32> = ZSet::from_pairs([(1, w(2)), (11, w(-3))]);
        let b: ZSet<i32> = ZSet::from_pairs([(1, w(1)), (2, w(5))]);
        let f = |k: &i32| k % 10;

        let lhs = project(&(a.clone() + b.clone()), f);
        let rhs = project(&a, f) + project(&b, f);
        assert_eq!(lhs, rhs);
    }
}
