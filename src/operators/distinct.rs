//! Distinct, union, difference (spec §4.1). `distinct` is idempotent
//! (`distinct(distinct(x)) == distinct(x)`); `union`/`difference` decompose
//! into `add`/`subtract` followed by `distinct`, matching the teacher's
//! `Circuit` composition guidance (spec §4.3: "Union and difference
//! decompose into linear plus distinct").

use crate::algebra::{zset::ZSet, ZRingValue};
use std::hash::Hash;

/// Drop every key whose weight is not strictly positive; set every
/// remaining weight to one (set semantics on the output).
pub fn distinct<A, W>(z: &ZSet<A, W>) -> ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    ZSet::from_pairs(
        z.iter()
            .filter(|(_, w)| w.ge0() && !w.is_zero())
            .map(|(k, _)| (k.clone(), W::one())),
    )
}

pub fn union<A, W>(a: &ZSet<A, W>, b: &ZSet<A, W>) -> ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    distinct(&(a.clone() + b.clone()))
}

pub fn difference<A, W>(a: &ZSet<A, W>, b: &ZSet<A, W>) -> ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    distinct(&(a.clone() - b.clone()))
}
