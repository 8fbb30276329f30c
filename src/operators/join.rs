//! Equi-join and intersection (spec §4.1). Both are bilinear. `equi_join`
//! builds a temporary hash index on `b`; the persistent, incrementally
//! maintained form lives in [`crate::stateful::join::StatefulJoin`] (spec
//! §4.6) -- the index here is scoped to a single call.

use crate::algebra::{zset::ZSet, ZRingValue};
use hashbrown::HashMap;
use std::hash::Hash;

/// For each `(x, wₐ)` in `a`, emit `((x, y), wₐ·w_b)` for every `y` in `b`
/// with `keyA(x) == keyB(y)`.
pub fn equi_join<A, B, K, W>(
    a: &ZSet<A, W>,
    b: &ZSet<B, W>,
    key_a: impl Fn(&A) -> K,
    key_b: impl Fn(&B) -> K,
) -> ZSet<(A, B), W>
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    K: Eq + Hash,
    W: ZRingValue,
{
    let mut index: HashMap<K, Vec<(&B, &W)>> = HashMap::new();
    for (y, wb) in b.entries() {
        index.entry(key_b(y)).or_default().push((y, wb));
    }

    let mut out = ZSet::new();
    for (x, wa) in a.entries() {
        if let Some(matches) = index.get(&key_a(x)) {
            for (y, wb) in matches {
                out.append((x.clone(), (*y).clone()), wa.clone() * (*wb).clone());
            }
        }
    }
    out
}

/// Equi-join with the identity key on both sides: the shared record,
/// emitted once, with weight equal to the product of the two weights.
pub fn intersect<A, W>(a: &ZSet<A, W>, b: &ZSet<A, W>) -> ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    let mut out = ZSet::new();
    for (x, wa) in a.entries() {
        if let Some(wb) = b.iter().find(|(y, _)| *y == x).map(|(_, w)| w.clone()) {
            out.append(x.clone(), wa.clone() * wb);
        }
    }
    out
}
