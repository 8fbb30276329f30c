//! Stateless top-K (spec §4.1). `canonicalize; drop non-positive; sort by
//! cmp (stable on ties); take [offset, offset+k); weight = 1`.
//!
//! Open question (spec §9): the source's filter-then-sort order on ties is
//! unspecified. This crate picks **stable by insertion order**: when `cmp`
//! considers two records equal, the one that was added to the Z-set first
//! (by [`ZSet`]'s insertion sequence, see `algebra::zset`) sorts first.
//! `entries()` already yields insertion order, and `Vec::sort_by` is a
//! stable sort, so simply sorting `entries()` gives this for free.

use crate::algebra::{zset::ZSet, ZRingValue};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::{cmp::Ordering, hash::Hash};

/// The `k` highest-ranked elements of `z` under `cmp`, starting at
/// `offset`, each emitted with weight one.
pub fn top_k<A, W>(
    z: &ZSet<A, W>,
    mut cmp: impl FnMut(&A, &A) -> Ordering,
    k: usize,
    offset: usize,
) -> ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    let positive: Vec<&A> = z
        .entries()
        .into_iter()
        .filter(|(_, w)| w.ge0() && !w.is_zero())
        .map(|(k, _)| k)
        .collect();

    let sorted = positive.into_iter().sorted_by(|a, b| cmp(a, b));

    ZSet::from_pairs(
        sorted
            .skip(offset)
            .take(k)
            .map(|x| (x.clone(), W::one())),
    )
}

/// Build a `top_k` comparator over a `f64`-valued sort key, descending.
/// `f64` has no total order (`NaN`), so ranking by a float field needs a
/// wrapper that does; `OrderedFloat` is that wrapper. Typical use:
/// `top_k(&products, cmp_by_f64_desc(|p| p.price), 3, 0)`.
pub fn cmp_by_f64_desc<A>(key: impl Fn(&A) -> f64) -> impl Fn(&A, &A) -> Ordering {
    move |a, b| OrderedFloat(key(b)).cmp(&OrderedFloat(key(a)))
}
