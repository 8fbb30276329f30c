//! `Stream[A]` (spec §3.3): a total function `ℕ -> A`, `A` an abelian
//! group, implemented as a sparse mapping from time index to value.
//! `at(t)` for an unset time returns the group zero, never an arbitrary
//! default.

pub mod ops;

use crate::algebra::GroupValue;
use std::collections::BTreeMap;

/// A sparse, time-indexed container of group elements. Iterating `entries`
/// walks times in increasing order, which is what [`ops::integrate`] and
/// [`ops::differentiate`] rely on to process only the set entries of the
/// input (spec §4.2: "must iterate only over the set entries of the input,
/// not over an unbounded time axis").
#[derive(Clone, Debug)]
pub struct Stream<V>
where
    V: GroupValue,
{
    values: BTreeMap<usize, V>,
}

impl<V> Stream<V>
where
    V: GroupValue,
{
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub fn from_entries<I: IntoIterator<Item = (usize, V)>>(entries: I) -> Self {
        let mut s = Self::new();
        for (t, v) in entries {
            s.set(t, v);
        }
        s
    }

    /// `at(t)`: the value at `t`, or the group zero if `t` was never set.
    pub fn at(&self, t: usize) -> V {
        self.values.get(&t).cloned().unwrap_or_else(V::zero)
    }

    /// Set the value at `t`. Setting the group zero removes the entry
    /// (keeps the sparse representation sparse).
    pub fn set(&mut self, t: usize, v: V) {
        if v.is_zero() {
            self.values.remove(&t);
        } else {
            self.values.insert(t, v);
        }
    }

    /// `currentTime = max(set-time) + 1`, or `0` if empty (spec §3.3). This
    /// is the smallest `t'` the stream *guarantees* is zero for all `t >=
    /// t'`; it is not a promise that no later call will ever `set` a
    /// smaller time's neighbor.
    pub fn current_time(&self) -> usize {
        self.values.keys().next_back().map_or(0, |t| t + 1)
    }

    /// The highest time index with a non-zero entry, or `None` if empty.
    pub fn max_set_time(&self) -> Option<usize> {
        self.values.keys().next_back().copied()
    }

    /// Set entries in increasing time order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &V)> {
        self.values.iter().map(|(&t, v)| (t, v))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V> Default for Stream<V>
where
    V: GroupValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PartialEq for Stream<V>
where
    V: GroupValue,
{
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

/// Serialized as the sparse sequence of `(time, value)` pairs actually
/// set (spec §A.5: "derives `Serialize`/`Deserialize` for `ZSet`,
/// `Stream`, and the `(record, weight)` pairs"), mirroring
/// `ZSet`'s own seq-of-pairs encoding in `algebra/zset.rs` rather than
/// serializing the dense `0..=current_time` range.
#[cfg(feature = "with-serde")]
impl<V> serde::Serialize for Stream<V>
where
    V: GroupValue + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for (t, v) in self.entries() {
            seq.serialize_element(&(t, v))?;
        }
        seq.end()
    }
}

#[cfg(feature = "with-serde")]
impl<'de, V> serde::Deserialize<'de> for Stream<V>
where
    V: GroupValue + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<(usize, V)>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::zset::ZSet;

    #[test]
    fn at_unset_time_is_group_zero() {
        let s: Stream<ZSet<&str>> = Stream::new();
        assert!(s.at(42).is_empty());
    }

    #[test]
    fn current_time_tracks_the_high_watermark() {
        let mut s: Stream<ZSet<&str>> = Stream::new();
        assert_eq!(s.current_time(), 0);
        s.set(0, ZSet::from_pairs([("a", crate::algebra::checked_int::CheckedI64::from(1))]));
        assert_eq!(s.current_time(), 1);
        s.set(2, ZSet::from_pairs([("b", crate::algebra::checked_int::CheckedI64::from(1))]));
        assert_eq!(s.current_time(), 3);
    }

    #[test]
    fn setting_the_zero_value_clears_the_slot() {
        let mut s: Stream<ZSet<&str>> = Stream::new();
        s.set(0, ZSet::from_pairs([("a", crate::algebra::checked_int::CheckedI64::from(1))]));
        s.set(0, ZSet::zero());
        assert!(s.at(0).is_empty());
        assert_eq!(s.max_set_time(), None);
    }
}
