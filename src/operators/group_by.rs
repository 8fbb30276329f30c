//! Group-by (spec §4.1): `k(x) -> Z-set`, linear in the key function.

use crate::algebra::{zset::ZSet, ZRingValue};
use hashbrown::HashMap;
use std::hash::Hash;

/// A mapping from group key to the Z-set of records in that group, with
/// weights preserved from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupedZSet<K, A, W>
where
    K: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    groups: HashMap<K, ZSet<A, W>>,
}

impl<K, A, W> GroupedZSet<K, A, W>
where
    K: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    pub fn get(&self, key: &K) -> Option<&ZSet<A, W>> {
        self.groups.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &ZSet<A, W>)> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn group_by<A, K, W>(z: &ZSet<A, W>, k: impl Fn(&A) -> K) -> GroupedZSet<K, A, W>
where
    A: Eq + Hash + Clone,
    K: Eq + Hash + Clone,
    W: ZRingValue,
{
    let mut groups: HashMap<K, ZSet<A, W>> = HashMap::new();
    for (x, weight) in z.entries() {
        groups
            .entry(k(x))
            .or_insert_with(ZSet::zero)
            .append(x.clone(), weight.clone());
    }
    GroupedZSet { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::checked_int::CheckedI64;

    fn w(n: i64) -> CheckedI64 {
        CheckedI64::from(n)
    }

    #[test]
    fn partitions_by_key_preserving_weights() {
        let z: ZSet<(i32, &str)> =
            ZSet::from_pairs([((1, "a"), w(2)), ((1, "b"), w(1)), ((2, "c"), w(-1))]);
        let grouped = group_by(&z, |(k, _)| *k);

        assert_eq!(grouped.len(), 2);
        assert_eq!(
            grouped.get(&1),
            Some(&ZSet::from_pairs([((1, "a"), w(2)), ((1, "b"), w(1))]))
        );
        assert_eq!(grouped.get(&2), Some(&ZSet::from_pairs([((2, "c"), w(-1))])));
    }

    #[test]
    fn is_linear_in_the_key_function_sense() {
        // group_by(a + b, k) should equal the per-group sums of group_by(a, k)
        // and group_by(b, k).
        let a: ZSet<i32> = ZSet::from_pairs([(1, w(1)), (2, w(2))]);
        let b: ZSet<i32> = ZSet::from_pairs([(1, w(3))]);
        let key = |x: &i32| x % 2;

        let combined = group_by(&(a.clone() + b.clone()), key);
        let ga = group_by(&a, key);
        let gb = group_by(&b, key);

        for k in [0, 1] {
            let expected = ga.get(&k).cloned().unwrap_or_else(ZSet::zero)
                + gb.get(&k).cloned().unwrap_or_else(ZSet::zero);
            assert_eq!(combined.get(&k).cloned().unwrap_or_else(ZSet::zero), expected);
        }
    }
}
