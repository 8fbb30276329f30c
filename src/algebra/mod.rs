/*
MIT License
SPDX-License-Identifier: MIT

Copyright (c) 2021 VMware, Inc
*/

//! Abstract algebraic concepts the rest of the crate is built on: monoids,
//! groups, rings, and the ref-based arithmetic traits that let weight types
//! like [`checked_int::CheckedInt`] avoid needless clones.

pub mod checked_int;
pub mod group;
pub mod zset;

use num::{One, Zero};
use std::ops::{Add, AddAssign, Mul, Neg};

/// A type with an associative addition and a zero.
/// We trust the implementation to have an associative addition.
pub trait MonoidValue: Clone + Eq + 'static + Add<Output = Self> + Zero + AddAssign {}

impl<T> MonoidValue for T where T: Clone + Eq + 'static + Add<Output = Self> + Zero + AddAssign {}

/// A `MonoidValue` with negation. We expect all our groups to be commutative.
pub trait GroupValue: MonoidValue + Neg<Output = Self> {}

impl<T> GroupValue for T where
    T: Clone + Eq + 'static + Add<Output = Self> + Zero + AddAssign + Neg<Output = Self>
{
}

/// A group with a multiplication operation.
pub trait RingValue: GroupValue + Mul<Output = Self> + One {}

impl<T> RingValue for T where
    T: Clone
        + Eq
        + 'static
        + Add<Output = Self>
        + Zero
        + AddAssign
        + Neg<Output = Self>
        + Mul<Output = Self>
        + One
{
}

/// A ring whose elements can be compared against zero. This is the bound
/// used for Z-set weights throughout the crate (spec §3.1: `wₐ ∈ ℤ \ {0}`).
pub trait ZRingValue: RingValue + Ord {
    /// True if the value is greater than or equal to zero.
    fn ge0(&self) -> bool {
        *self >= Self::zero()
    }

    /// True if the value is less than or equal to zero.
    fn le0(&self) -> bool {
        *self <= Self::zero()
    }
}

impl<T> ZRingValue for T where
    T: Clone
        + Eq
        + 'static
        + Add<Output = Self>
        + Zero
        + AddAssign
        + Neg<Output = Self>
        + Mul<Output = Self>
        + One
        + Ord
{
}

/// Value has a zero and can report whether it currently holds it.
/// Distinct from `num::Zero` so that ref-based arithmetic on [`checked_int`]
/// doesn't force a `num` blanket impl everywhere a plain zero-check suffices.
pub trait HasZero {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

impl<T> HasZero for T
where
    T: Zero,
{
    fn zero() -> Self {
        <T as Zero>::zero()
    }

    fn is_zero(&self) -> bool {
        <T as Zero>::is_zero(self)
    }
}

pub trait HasOne {
    fn one() -> Self;
}

impl<T> HasOne for T
where
    T: One,
{
    fn one() -> Self {
        <T as One>::one()
    }
}

/// Add without consuming either operand, for weight types expensive to clone.
pub trait AddByRef {
    fn add_by_ref(&self, other: &Self) -> Self;
}

pub trait AddAssignByRef {
    fn add_assign_by_ref(&mut self, other: &Self);
}

pub trait NegByRef {
    fn neg_by_ref(&self) -> Self;
}

/// Multiply without consuming either operand.
pub trait MulByRef<Rhs = Self> {
    type Output;

    fn mul_by_ref(&self, rhs: &Rhs) -> Self::Output;
}

/// Scale a payload by a weight, used where a Z-set value is multiplied by
/// the weight attached to it (e.g. `cartesian_product`'s `wₐ · w_b`).
pub trait MulByWeight<W> {
    fn weigh(&self, w: &W) -> Self;
}

#[cfg(test)]
mod tests {
    use super::{One, Zero};

    #[test]
    fn fixed_integer_tests_i64() {
        assert_eq!(0, i64::zero());
        assert_eq!(1, i64::one());

        let two = i64::one() + i64::one();
        assert_eq!(2, two);
        assert_eq!(-2, -two);
        assert_eq!(-4, two * -two);
    }
}
