/*
MIT License
SPDX-License-Identifier: MIT

Copyright (c) 2021 VMware, Inc
*/

//! Ring on numeric values that panics on overflow.
//!
//! `CheckedInt<T>` computes exactly like any signed numeric value, but
//! panics instead of wrapping when an operation would overflow `T`. This is
//! the default Z-set weight type (spec §7: "an implementation using machine
//! integers must either use a sufficiently large type ... or detect and
//! fail loudly on overflow"); using `i64` directly would wrap silently.

use crate::algebra::{AddAssignByRef, AddByRef, MulByRef, MulByWeight, NegByRef};
use num::{
    traits::{CheckedNeg, One, Zero},
    CheckedAdd, CheckedMul,
};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Mul, Neg},
};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct CheckedInt<T> {
    value: T,
}

impl<T> CheckedInt<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Add for CheckedInt<T>
where
    T: CheckedAdd,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            value: self.value.checked_add(&other.value).expect("weight overflow"),
        }
    }
}

impl<T> AddByRef for CheckedInt<T>
where
    T: CheckedAdd,
{
    fn add_by_ref(&self, other: &Self) -> Self {
        Self {
            value: self.value.checked_add(&other.value).expect("weight overflow"),
        }
    }
}

impl<T> AddAssign for CheckedInt<T>
where
    T: CheckedAdd,
{
    fn add_assign(&mut self, other: Self) {
        self.value = self.value.checked_add(&other.value).expect("weight overflow")
    }
}

impl<T> AddAssignByRef for CheckedInt<T>
where
    T: CheckedAdd,
{
    fn add_assign_by_ref(&mut self, other: &Self) {
        self.value = self.value.checked_add(&other.value).expect("weight overflow")
    }
}

impl<T> Mul for CheckedInt<T>
where
    T: CheckedMul,
{
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            value: self.value.checked_mul(&other.value).expect("weight overflow"),
        }
    }
}

impl<T> MulByRef for CheckedInt<T>
where
    T: CheckedMul,
{
    type Output = Self;

    fn mul_by_ref(&self, rhs: &Self) -> Self {
        Self {
            value: self.value.checked_mul(&rhs.value).expect("weight overflow"),
        }
    }
}

impl<T> NegByRef for CheckedInt<T>
where
    T: CheckedNeg,
{
    fn neg_by_ref(&self) -> Self {
        Self {
            value: self.value.checked_neg().expect("weight overflow"),
        }
    }
}

impl<T> Neg for CheckedInt<T>
where
    T: CheckedNeg,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: self.value.checked_neg().expect("weight overflow"),
        }
    }
}

impl<T> Zero for CheckedInt<T>
where
    T: Zero + CheckedAdd,
{
    fn zero() -> Self {
        Self::new(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl<T> One for CheckedInt<T>
where
    T: One + CheckedMul,
{
    fn one() -> Self {
        Self::new(T::one())
    }
}

impl<T> PartialEq<T> for CheckedInt<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &T) -> bool {
        &self.value == other
    }
}

impl<T> PartialOrd<T> for CheckedInt<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<T> From<T> for CheckedInt<T> {
    fn from(value: T) -> Self {
        Self { value }
    }
}

impl<T> Debug for CheckedInt<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

impl<T> Display for CheckedInt<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

impl<D, T> MulByWeight<CheckedInt<T>> for D
where
    D: MulByRef<T, Output = D>,
{
    fn weigh(&self, w: &CheckedInt<T>) -> Self {
        self.mul_by_ref(&w.value)
    }
}

/// The weight type used by default throughout the crate's examples and tests.
pub type CheckedI64 = CheckedInt<i64>;

#[cfg(feature = "with-serde")]
impl<T> serde::Serialize for CheckedInt<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "with-serde")]
impl<'de, T> serde::Deserialize<'de> for CheckedInt<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::{AddAssignByRef, AddByRef, CheckedI64, MulByRef, NegByRef};
    use crate::algebra::ZRingValue;
    use num::{One, Zero};

    #[test]
    fn fixed_integer_tests() {
        assert_eq!(0i64, CheckedI64::zero().into_inner());
        assert_eq!(1i64, CheckedI64::one().into_inner());

        let two = CheckedI64::one().add_by_ref(&CheckedI64::one());
        assert_eq!(2i64, two.into_inner());
        assert_eq!(-2i64, two.neg_by_ref().into_inner());
        assert_eq!(-4i64, two.mul_by_ref(&two.neg_by_ref()).into_inner());

        let mut three = two;
        three.add_assign_by_ref(&CheckedI64::from(1i64));
        assert_eq!(3i64, three.into_inner());
        assert!(!three.is_zero());
    }

    #[test]
    #[should_panic(expected = "weight overflow")]
    fn overflow_panics() {
        let max = CheckedI64::from(i64::MAX);
        let _ = max.add_by_ref(&CheckedI64::one());
    }

    #[test]
    fn ordering_matches_inner_value() {
        let a = CheckedI64::from(3);
        let b = CheckedI64::from(5);
        assert!(a < b);
        assert!(a.ge0());
        assert!(CheckedI64::from(-1).le0());
    }
}
