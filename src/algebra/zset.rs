//! The Z-set value type (spec §3.1-§3.2).
//!
//! A Z-set over domain `A` is a mapping `A -> W` with finite support, `W`
//! an integer-like ring (`ZRingValue`). Canonical form drops zero-weighted
//! entries and never repeats a key. `ZSet` is always stored canonically;
//! the "non-canonical builder form" spec §3.1 permits is `ZSet::builder()`,
//! an append-only sequence that is folded into canonical form on `build()`.

use crate::algebra::{checked_int::CheckedI64, ZRingValue};
use hashbrown::HashMap;
use std::{
    hash::Hash,
    ops::{Add, AddAssign, Neg, Sub},
};

/// One entry in the canonical map: the current weight plus the sequence
/// number assigned the first time this key was ever inserted. The sequence
/// number is what lets `top_k` (spec §4.1, Open Question on tie order)
/// implement a deterministic "stable by insertion order" tie-break despite
/// the backing map having no intrinsic iteration order.
#[derive(Clone, Debug)]
struct Entry<W> {
    weight: W,
    seq: u64,
}

/// A Z-set: a multiset over `A` with weights in `W`, zero-free and
/// duplicate-free by construction.
#[derive(Clone, Debug)]
pub struct ZSet<A, W = CheckedI64>
where
    A: Eq + Hash + Clone,
{
    data: HashMap<A, Entry<W>>,
    next_seq: u64,
}

impl<A, W> ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            next_seq: 0,
        }
    }

    pub fn zero() -> Self {
        Self::new()
    }

    /// Fold a raw, possibly-repeating sequence of `(key, weight)` pairs into
    /// canonical form. This is `mergeRecords` from spec §3.1.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, W)>,
    {
        let mut z = Self::new();
        for (key, weight) in pairs {
            z.append(key, weight);
        }
        z
    }

    /// Start a non-canonical builder (spec §3.1's append-only construction
    /// form). Equivalent to `from_pairs` but useful when pairs are produced
    /// incrementally rather than from an existing iterator.
    pub fn builder() -> ZSetBuilder<A, W> {
        ZSetBuilder { pairs: Vec::new() }
    }

    /// Add `weight` to `key`'s current weight, dropping the entry if the
    /// result is zero. `self` remains canonical after the call.
    pub fn append(&mut self, key: A, weight: W) {
        use hashbrown::hash_map::Entry::*;
        match self.data.entry(key) {
            Occupied(mut o) => {
                let merged = o.get().weight.clone() + weight;
                if merged.is_zero() {
                    o.remove();
                } else {
                    o.get_mut().weight = merged;
                }
            }
            Vacant(v) => {
                if !weight.is_zero() {
                    let seq = self.next_seq;
                    self.next_seq += 1;
                    v.insert(Entry { weight, seq });
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True iff every weight is exactly one -- a classical set.
    pub fn is_set(&self) -> bool {
        self.data.values().all(|e| e.weight == W::one())
    }

    /// True iff every weight is non-negative.
    pub fn is_positive(&self) -> bool {
        self.data.values().all(|e| e.weight.ge0())
    }

    pub fn weight(&self, key: &A) -> W {
        self.data
            .get(key)
            .map(|e| e.weight.clone())
            .unwrap_or_else(W::zero)
    }

    pub fn contains(&self, key: &A) -> bool {
        self.data.contains_key(key)
    }

    /// Scale every weight by `scalar`.
    pub fn multiply(&self, scalar: &W) -> Self {
        let mut out = Self::new();
        for (k, w) in self.iter() {
            out.append(k.clone(), w.clone() * scalar.clone());
        }
        out
    }

    /// Iterate `(key, weight)` pairs in arbitrary (hash) order. Use
    /// [`Self::entries`] when a deterministic order is required.
    pub fn iter(&self) -> impl Iterator<Item = (&A, &W)> {
        self.data.iter().map(|(k, e)| (k, &e.weight))
    }

    /// Entries ordered by first-insertion sequence number. This is the
    /// order `top_k` (spec §4.1) uses to break ties stably, since the
    /// backing map has no intrinsic order of its own.
    pub fn entries(&self) -> Vec<(&A, &W)> {
        let mut v: Vec<(&A, &W, u64)> = self
            .data
            .iter()
            .map(|(k, e)| (k, &e.weight, e.seq))
            .collect();
        v.sort_by_key(|&(_, _, seq)| seq);
        v.into_iter().map(|(k, w, _)| (k, w)).collect()
    }

    pub fn into_pairs(self) -> Vec<(A, W)> {
        let mut v: Vec<(A, W, u64)> = self
            .data
            .into_iter()
            .map(|(k, e)| (k, e.weight, e.seq))
            .collect();
        v.sort_by_key(|&(_, _, seq)| seq);
        v.into_iter().map(|(k, w, _)| (k, w)).collect()
    }
}

impl<A, W> Default for ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, W> PartialEq for ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    /// Semantic equality (spec §3.1): two Z-sets are equal iff their
    /// canonical key -> weight mappings are identical, regardless of
    /// insertion order.
    fn eq(&self, other: &Self) -> bool {
        if self.data.len() != other.data.len() {
            return false;
        }
        self.data
            .iter()
            .all(|(k, e)| other.data.get(k).is_some_and(|oe| oe.weight == e.weight))
    }
}

impl<A, W> Eq for ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
}

impl<A, W> FromIterator<(A, W)> for ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    fn from_iter<I: IntoIterator<Item = (A, W)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<A, W> Add for ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    type Output = Self;

    /// Pointwise weight addition, dropping entries that cancel to zero
    /// (spec §3.2).
    fn add(self, other: Self) -> Self {
        let mut out = self;
        for (k, w) in other.into_pairs() {
            out.append(k, w);
        }
        out
    }
}

impl<A, W> AddAssign for ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    fn add_assign(&mut self, other: Self) {
        for (k, w) in other.into_pairs() {
            self.append(k, w);
        }
    }
}

impl<A, W> Neg for ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = Self::new();
        for (k, w) in self.into_pairs() {
            out.append(k, -w);
        }
        out
    }
}

impl<A, W> Sub for ZSet<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl<A, W> num::Zero for ZSet<A, W>
where
    A: Eq + Hash + Clone + 'static,
    W: ZRingValue,
{
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

/// A non-canonical, append-only sequence of `(key, weight)` pairs (spec
/// §3.1). Call [`ZSetBuilder::build`] to canonicalize.
pub struct ZSetBuilder<A, W> {
    pairs: Vec<(A, W)>,
}

impl<A, W> ZSetBuilder<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    pub fn push(&mut self, key: A, weight: W) -> &mut Self {
        self.pairs.push((key, weight));
        self
    }

    pub fn build(self) -> ZSet<A, W> {
        ZSet::from_pairs(self.pairs)
    }
}

#[cfg(feature = "with-serde")]
impl<A, W> serde::Serialize for ZSet<A, W>
where
    A: Eq + Hash + Clone + serde::Serialize,
    W: ZRingValue + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.data.len()))?;
        for (k, w) in self.entries() {
            seq.serialize_element(&(k, w))?;
        }
        seq.end()
    }
}

#[cfg(feature = "with-serde")]
impl<'de, A, W> serde::Deserialize<'de> for ZSet<A, W>
where
    A: Eq + Hash + Clone + serde::Deserialize<'de>,
    W: ZRingValue + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pairs = Vec::<(A, W)>::deserialize(deserializer)?;
        Ok(Self::from_pairs(pairs))
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
    fn canonical_form_drops_zero_weights() {
        let z: ZSet<&str> = ZSet::from_pairs([("a", w(2)), ("a", w(-2)), ("b", w(1))]);
        assert_eq!(z.len(), 1);
        assert!(z.contains(&"b"));
        assert!(!z.contains(&"a"));
    }

    #[test]
    fn s1_zset_group() {
        let r: ZSet<&str> = ZSet::from_pairs([("joe", w(1)), ("anne", w(-1))]);
        let s: ZSet<&str> = ZSet::from_pairs([("joe", w(2)), ("bob", w(1))]);

        let sum = r.clone() + s.clone();
        let expected: ZSet<&str> =
            ZSet::from_pairs([("joe", w(3)), ("anne", w(-1)), ("bob", w(1))]);
        assert_eq!(sum, expected);

        let neg_r: ZSet<&str> = ZSet::from_pairs([("joe", w(-1)), ("anne", w(1))]);
        assert_eq!(-r, neg_r);
    }

    #[test]
    fn is_set_and_is_positive() {
        let set: ZSet<i32> = ZSet::from_pairs([(1, w(1)), (2, w(1))]);
        assert!(set.is_set());
        assert!(set.is_positive());

        let not_set: ZSet<i32> = ZSet::from_pairs([(1, w(2))]);
        assert!(!not_set.is_set());
        assert!(not_set.is_positive());

        let not_positive: ZSet<i32> = ZSet::from_pairs([(1, w(-1))]);
        assert!(!not_positive.is_positive());
    }

    #[test]
    fn group_laws_hold() {
        let a: ZSet<i32> = ZSet::from_pairs([(1, w(2)), (2, w(-3))]);
        let b: ZSet<i32> = ZSet::from_pairs([(2, w(1)), (3, w(4))]);
        let c: ZSet<i32> = ZSet::from_pairs([(1, w(-2)), (4, w(5))]);

        assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a.clone() + (b.clone() + c.clone())
        );
        assert_eq!(a.clone() + ZSet::zero(), a.clone());
        assert_eq!(a.clone() + (-a.clone()), ZSet::zero());
    }

    #[test]
    fn builder_and_merge_records_are_idempotent() {
        let built = ZSet::<&str>::builder()
            .push("a", w(1))
            .push("a", w(1))
            .push("b", w(-1))
            .build();
        let merged_twice: ZSet<&str> = ZSet::from_pairs(built.clone().into_pairs());
        assert_eq!(built, merged_twice);
        assert_eq!(built.weight(&"a"), w(2));
        assert!(!built.contains(&"b"));
    }
}
