//! Abelian group witnesses (spec §6: "Group witnesses `AbelianGroup[A]` for
//! every `A` appearing in a Stream").
//!
//! Most group-valued types the crate works with (in particular
//! [`crate::algebra::zset::ZSet`]) implement [`GroupValue`](super::GroupValue)
//! directly, so a `Stream<A>` can usually be built from `A: GroupValue`
//! alone without an explicit witness object. `ZSetGroup` and [`GroupPair`]
//! exist for the two cases spec §6/§3.2 call out explicitly: a reusable,
//! nameable witness type for Z-sets, and the group-of-a-tuple construction
//! ("the tuple group on (A, B) is the product of the component groups").

use super::GroupValue;
use num::Zero;
use std::{
    fmt,
    ops::{Add, AddAssign, Neg},
};

/// An abelian group: `zero`, `add`, `negate`, with `subtract` derived.
/// Laws (spec §3.2): commutativity, associativity, identity, inverse.
pub trait AbelianGroup {
    type Item: Clone;

    fn zero(&self) -> Self::Item;
    fn add(&self, a: &Self::Item, b: &Self::Item) -> Self::Item;
    fn negate(&self, a: &Self::Item) -> Self::Item;

    fn subtract(&self, a: &Self::Item, b: &Self::Item) -> Self::Item {
        self.add(a, &self.negate(b))
    }
}

/// A zero-sized witness for any type that already implements [`GroupValue`].
/// Exists so call sites that want an explicit, nameable group object (per
/// spec §6's external-interface list) have one, without requiring every
/// `Stream<A>` to carry a witness value at runtime.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZSetGroup<A> {
    _marker: std::marker::PhantomData<A>,
}

impl<A> ZSetGroup<A> {
    pub fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<A> AbelianGroup for ZSetGroup<A>
where
    A: GroupValue,
{
    type Item = A;

    fn zero(&self) -> A {
        A::zero()
    }

    fn add(&self, a: &A, b: &A) -> A {
        a.clone() + b.clone()
    }

    fn negate(&self, a: &A) -> A {
        -a.clone()
    }
}

/// The product of two abelian groups: `(A, B)` with component-wise
/// operations. A plain tuple `(A, B)` cannot implement `Add`/`Neg` directly
/// in this crate (both the tuple type and the `std::ops` traits are
/// foreign), so `GroupPair` is the concrete carrier for spec §3.2's "tuple
/// group on (A, B) is the product of the component groups".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupPair<A, B>(pub A, pub B);

impl<A, B> Add for GroupPair<A, B>
where
    A: Add<Output = A>,
    B: Add<Output = B>,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        GroupPair(self.0 + other.0, self.1 + other.1)
    }
}

impl<A, B> AddAssign for GroupPair<A, B>
where
    A: AddAssign,
    B: AddAssign,
{
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl<A, B> Neg for GroupPair<A, B>
where
    A: Neg<Output = A>,
    B: Neg<Output = B>,
{
    type Output = Self;

    fn neg(self) -> Self {
        GroupPair(-self.0, -self.1)
    }
}

impl<A, B> Zero for GroupPair<A, B>
where
    A: Zero,
    B: Zero,
{
    fn zero() -> Self {
        GroupPair(A::zero(), B::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero() && self.1.is_zero()
    }
}

impl<A, B> fmt::Display for GroupPair<A, B>
where
    A: fmt::Display,
    B: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{checked_int::CheckedI64, zset::ZSet};

    fn w(n: i64) -> CheckedI64 {
        CheckedI64::from(n)
    }

    #[test]
    fn zset_group_witness_matches_direct_ops() {
        let g: ZSetGroup<ZSet<i32>> = ZSetGroup::new();
        let a: ZSet<i32> = ZSet::from_pairs([(1, w(2)), (2, w(-1))]);
        let b: ZSet<i32> = ZSet::from_pairs([(1, w(1))]);

        assert_eq!(g.add(&a, &b), a.clone() + b.clone());
        assert_eq!(g.negate(&a), -a.clone());
        assert_eq!(g.zero(), ZSet::zero());
        assert_eq!(g.subtract(&a, &b), a - b);
    }

    #[test]
    fn group_pair_is_componentwise() {
        let a = GroupPair(2i64, -3i64);
        let b = GroupPair(-1i64, 5i64);
        assert_eq!(a.clone() + b.clone(), GroupPair(1, 2));
        assert_eq!(-a, GroupPair(-2, 3));
        assert!(GroupPair::<i64, i64>::zero().is_zero());
    }
}
