//! The stateful top-K maintainer (spec §4.7, §3.5): an ordered sequence of
//! positively-weighted records plus the previously emitted window, used to
//! derive `new_topK − last_topK` on every increment instead of re-sorting
//! the whole relation from scratch on the read path.

use crate::algebra::{zset::ZSet, ZRingValue};
use hashbrown::HashMap;
use std::{cmp::Ordering, hash::Hash};

/// Constructor knobs grouped into one struct, following the teacher's
/// convention for operators with more than two parameters (`Aggregate::new`,
/// `Join::new`).
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub limit: usize,
    pub offset: usize,
}

impl Config {
    pub fn new(limit: usize) -> Self {
        Self { limit, offset: 0 }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Read-only snapshot of a [`StatefulTopK`]'s internal state (spec §6:
/// `get_current_state`), never a mutable view (spec §5).
pub struct TopKState<'a, T, W>
where
    T: Eq + Hash + Clone,
    W: ZRingValue,
{
    pub top_k: &'a ZSet<T, W>,
    pub tracked_records: usize,
}

/// `K` is the (usually smaller, cheaper-to-hash) key `key_fn` extracts from
/// each record; passing the identity function recovers the spec's
/// "object-identity"/whole-record fallback (spec §4.7's key policy), at the
/// cost of requiring `T: Eq + Hash`.
pub struct StatefulTopK<T, W, K, KF, CMP>
where
    T: Clone,
    W: ZRingValue,
    K: Eq + Hash + Clone,
    KF: Fn(&T) -> K,
    CMP: Fn(&T, &T) -> Ordering,
{
    config: Config,
    key_fn: KF,
    cmp: CMP,
    items: HashMap<K, (T, W, u64)>,
    next_seq: u64,
    previous_topk: ZSet<T, W>,
}

impl<T, W, K, KF, CMP> StatefulTopK<T, W, K, KF, CMP>
where
    T: Eq + Hash + Clone,
    W: ZRingValue,
    K: Eq + Hash + Clone,
    KF: Fn(&T) -> K,
    CMP: Fn(&T, &T) -> Ordering,
{
    pub fn new(config: Config, key_fn: KF, cmp: CMP) -> Self {
        Self {
            config,
            key_fn,
            cmp,
            items: HashMap::new(),
            next_seq: 0,
            previous_topk: ZSet::zero(),
        }
    }

    /// Fold `delta` into the live-record map (spec §4.7 step 1): merge
    /// weights for known keys, drop on non-positive, insert on
    /// strictly-positive-and-new, ignore non-positive-and-absent.
    ///
    /// Every record that enters the map is stamped with the insertion
    /// sequence number it was first inserted under, mirroring
    /// `ZSet`'s own `Entry.seq` (`algebra/zset.rs`); a record that is
    /// later removed (weight goes non-positive) and reinserted is treated
    /// as new and gets a fresh sequence number, exactly as re-appending a
    /// cancelled-out key to a `ZSet` would.
    fn merge_delta(&mut self, delta: &ZSet<T, W>) {
        use hashbrown::hash_map::Entry::*;
        for (record, dw) in delta.entries() {
            let k = (self.key_fn)(record);
            match self.items.entry(k) {
                Occupied(mut o) => {
                    let new_w = o.get().1.clone() + dw.clone();
                    if new_w.le0() {
                        o.remove();
                    } else {
                        o.get_mut().1 = new_w;
                    }
                }
                Vacant(v) => {
                    if dw.ge0() && !dw.is_zero() {
                        let seq = self.next_seq;
                        self.next_seq += 1;
                        v.insert((record.clone(), dw.clone(), seq));
                    }
                }
            }
        }
    }

    /// Recompute the key→position map implicitly by sorting, materialize
    /// the `[offset, offset+limit)` window (spec §4.7 steps 2-3) and return
    /// `new_topK − previous_topK` (step 4).
    ///
    /// Ties under `cmp` break by insertion sequence number, not by
    /// `HashMap`'s arbitrary iteration order (`Vec::sort_by` is stable, but
    /// only relative to whatever order `self.items.values()` happens to
    /// yield) -- this is what makes ties resolve the same way as the
    /// stateless `operators::topk::top_k`, which sorts `ZSet::entries()`
    /// (already insertion-ordered).
    fn rebuild_window(&mut self) -> ZSet<T, W> {
        let mut records: Vec<&(T, W, u64)> = self.items.values().collect();
        records.sort_by(|a, b| (self.cmp)(&a.0, &b.0).then_with(|| a.2.cmp(&b.2)));

        let window = ZSet::from_pairs(
            records
                .into_iter()
                .skip(self.config.offset)
                .take(self.config.limit)
                .map(|(r, _, _)| (r.clone(), W::one())),
        );

        let delta_out = window.clone() - self.previous_topk.clone();
        self.previous_topk = window;
        delta_out
    }

    /// Spec §4.7: per-delta incremental maintenance.
    pub fn process_increment(&mut self, delta: &ZSet<T, W>) -> ZSet<T, W> {
        log::trace!("StatefulTopK::process_increment: |Δ|={}", delta.len());
        self.merge_delta(delta);
        self.rebuild_window()
    }

    /// Bulk-init fast path (spec §4.7), intended for the first delta fed
    /// into a fresh `StatefulTopK`: aggregates, sorts, and builds the
    /// window in one pass rather than diffing against an (empty) prior
    /// state.
    pub fn process_initial(&mut self, delta: &ZSet<T, W>) -> ZSet<T, W> {
        debug_assert!(
            self.items.is_empty() && self.previous_topk.is_empty(),
            "process_initial called on a StatefulTopK that already has state"
        );
        self.merge_delta(delta);
        log::debug!(
            "StatefulTopK::process_initial: built index of {} records",
            self.items.len()
        );
        self.rebuild_window()
    }

    pub fn get_current_state(&self) -> TopKState<'_, T, W> {
        TopKState {
            top_k: &self.previous_topk,
            tracked_records: self.items.len(),
        }
    }

    pub fn reset(&mut self) {
        log::debug!("StatefulTopK::reset");
        self.items.clear();
        self.next_seq = 0;
        self.previous_topk = ZSet::zero();
    }
}
