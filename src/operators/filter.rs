//! Filter operator (spec §4.1). Linear: `filter(a + b, P) == filter(a, P) +
//! filter(b, P)`.

use crate::algebra::{zset::ZSet, ZRingValue};
use std::hash::Hash;

/// Retain every `(key, weight)` pair whose key satisfies `pred`. Weights
/// are preserved untouched, so positivity and set-ness both survive.
pub fn filter<A, W>(z: &ZSet<A, W>, pred: impl Fn(&A) -> bool) -> ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    ZSet::from_pairs(
        z.iter()
            .filter(|(k, _)| pred(k))
            .map(|(k, w)| (k.clone(), w.clone())),
    )
}
