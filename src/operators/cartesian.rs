//! Cartesian product (spec §4.1). Bilinear: linear in each argument
//! independently.

use crate::algebra::{zset::ZSet, ZRingValue};
use std::hash::Hash;

/// `((x, y) ↦ w_a(x) · w_b(y))` for every pair, dropping zero products.
pub fn cartesian_product<A, B, W>(a: &ZSet<A, W>, b: &ZSet<B, W>) -> ZSet<(A, B), W>
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    W: ZRingValue,
{
    let mut out = ZSet::new();
    for (x, wa) in a.entries() {
        for (y, wb) in b.entries() {
            out.append((x.clone(), y.clone()), wa.clone() * wb.clone());
        }
    }
    out
}
