//! The stateful equi-join (spec §4.6): two persistent hash-indexes and a
//! materialized-view map, maintained via the bilinear delta formula with
//! `O(|Δ| · k̄)` cost (`k̄` = average fan-out per join key) rather than a
//! full re-join on every call.

use crate::algebra::{zset::ZSet, ZRingValue};
use hashbrown::HashMap;
use std::hash::Hash;

/// `StatefulJoin<T, U, K, V, W>`: joins relation `A` (element type `T`)
/// against relation `B` (element type `U`) on a shared key type `K`,
/// producing elements of type `V` via a user-supplied `join_func`.
pub struct StatefulJoin<T, U, K, V, W, KA, KB, F>
where
    T: Clone,
    U: Clone,
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    W: ZRingValue,
    KA: Fn(&T) -> K,
    KB: Fn(&U) -> K,
    F: Fn(&K, &T, &U) -> V,
{
    key_a: KA,
    key_b: KB,
    join_func: F,
    index_a: HashMap<K, Vec<(T, W)>>,
    index_b: HashMap<K, Vec<(U, W)>>,
    view: HashMap<V, W>,
}

impl<T, U, K, V, W, KA, KB, F> StatefulJoin<T, U, K, V, W, KA, KB, F>
where
    T: Clone,
    U: Clone,
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    W: ZRingValue,
    KA: Fn(&T) -> K,
    KB: Fn(&U) -> K,
    F: Fn(&K, &T, &U) -> V,
{
    pub fn new(key_a: KA, key_b: KB, join_func: F) -> Self {
        Self {
            key_a,
            key_b,
            join_func,
            index_a: HashMap::new(),
            index_b: HashMap::new(),
            view: HashMap::new(),
        }
    }

    /// `initialize(a, b)` is `process_increment(a, b)` starting from empty
    /// state (spec §4.6). Intended to be called once, on a fresh join.
    pub fn initialize(&mut self, a: &ZSet<T, W>, b: &ZSet<U, W>) -> ZSet<V, W> {
        self.process_increment(a, b)
    }

    /// Join `delta_a` against the (pre-update) `index_b`.
    fn join_against_index(
        &self,
        delta: &ZSet<T, W>,
        index: &HashMap<K, Vec<(U, W)>>,
    ) -> ZSet<V, W> {
        let mut out = ZSet::new();
        for (t, wt) in delta.entries() {
            let k = (self.key_a)(t);
            if let Some(matches) = index.get(&k) {
                for (u, wu) in matches {
                    out.append((self.join_func)(&k, t, u), wt.clone() * wu.clone());
                }
            }
        }
        out
    }

    fn index_against_delta(
        &self,
        index: &HashMap<K, Vec<(T, W)>>,
        delta: &ZSet<U, W>,
    ) -> ZSet<V, W> {
        let mut out = ZSet::new();
        for (u, wu) in delta.entries() {
            let k = (self.key_b)(u);
            if let Some(matches) = index.get(&k) {
                for (t, wt) in matches {
                    out.append((self.join_func)(&k, t, u), wt.clone() * wu.clone());
                }
            }
        }
        out
    }

    fn delta_against_delta(&self, delta_a: &ZSet<T, W>, delta_b: &ZSet<U, W>) -> ZSet<V, W> {
        let mut tmp: HashMap<K, Vec<(&U, &W)>> = HashMap::new();
        for (u, wu) in delta_b.entries() {
            tmp.entry((self.key_b)(u)).or_default().push((u, wu));
        }
        let mut out = ZSet::new();
        for (t, wt) in delta_a.entries() {
            let k = (self.key_a)(t);
            if let Some(matches) = tmp.get(&k) {
                for (u, wu) in matches {
                    out.append((self.join_func)(&k, t, u), wt.clone() * (*wu).clone());
                }
            }
        }
        out
    }

    /// The bilinear delta formula (spec §4.6):
    /// `delta = Δa⋈Δb + Δa⋈index_B + index_A⋈Δb`, computed before either
    /// index is updated, then both indexes and the materialized view are
    /// updated from `delta`.
    pub fn process_increment(&mut self, delta_a: &ZSet<T, W>, delta_b: &ZSet<U, W>) -> ZSet<V, W> {
        log::trace!(
            "StatefulJoin::process_increment: |Δa|={} |Δb|={}",
            delta_a.len(),
            delta_b.len()
        );

        let mut delta = ZSet::new();
        if !delta_a.is_empty() && !delta_b.is_empty() {
            delta += self.delta_against_delta(delta_a, delta_b);
        }
        if !delta_a.is_empty() {
            delta += self.join_against_index(delta_a, &self.index_b);
        }
        if !delta_b.is_empty() {
            delta += self.index_against_delta(&self.index_a, delta_b);
        }

        for (t, wt) in delta_a.entries() {
            self.index_a
                .entry((self.key_a)(t))
                .or_default()
                .push((t.clone(), wt.clone()));
        }
        for (u, wu) in delta_b.entries() {
            self.index_b
                .entry((self.key_b)(u))
                .or_default()
                .push((u.clone(), wu.clone()));
        }

        for (v, w) in delta.entries() {
            use hashbrown::hash_map::Entry::*;
            match self.view.entry(v.clone()) {
                Occupied(mut o) => {
                    let merged = o.get().clone() + w.clone();
                    if merged.is_zero() {
                        o.remove();
                    } else {
                        *o.get_mut() = merged;
                    }
                }
                Vacant(e) => {
                    if !w.is_zero() {
                        e.insert(w.clone());
                    }
                }
            }
        }

        delta
    }

    /// `O(|view|)` conversion of the materialized-view map to a Z-set; the
    /// map itself is maintained incrementally in `O(|Δ|)` by
    /// `process_increment`.
    pub fn get_materialized_view(&self) -> ZSet<V, W> {
        ZSet::from_pairs(self.view.iter().map(|(v, w)| (v.clone(), w.clone())))
    }

    /// Read-only debug view of the internal indexes (spec §6). Never
    /// exposed mutably (spec §5: "operator internal state ... never
    /// exposed mutably").
    pub fn get_indexes(&self) -> (&HashMap<K, Vec<(T, W)>>, &HashMap<K, Vec<(U, W)>>) {
        (&self.index_a, &self.index_b)
    }

    pub fn reset(&mut self) {
        log::debug!("StatefulJoin::reset");
        self.index_a.clear();
        self.index_b.clear();
        self.view.clear();
    }
}
