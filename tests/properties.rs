//! Property-based coverage of spec §8 items 1-5: the abelian group laws,
//! canonicalization idempotence, filter linearity, join bilinearity, and
//! the distinct fixed point. Uses `proptest` the way the teacher's
//! `adapters::server` test module does (`TestRunner`/strategies), just
//! through the `proptest!` macro instead of a manual runner since these
//! run outside an async harness.

use dbsp_core::{
    algebra::checked_int::CheckedI64,
    operators::{distinct, equi_join, filter},
    ZSet,
};
use proptest::prelude::*;
use proptest_derive::Arbitrary;

/// A small finite domain keeps `ZSet` equality checks (and the number of
/// distinct keys a strategy can generate) bounded, per spec §8's "finite
/// domain" qualifier on the group-law properties.
fn key_strategy() -> impl Strategy<Value = i32> {
    0..8i32
}

fn weight_strategy() -> impl Strategy<Value = CheckedI64> {
    (-5i64..=5i64).prop_map(CheckedI64::from)
}

fn zset_strategy() -> impl Strategy<Value = ZSet<i32>> {
    prop::collection::vec((key_strategy(), weight_strategy()), 0..12)
        .prop_map(|pairs| ZSet::from_pairs(pairs))
}

proptest! {
    /// Spec §8 item 1: commutativity, associativity, identity, inverse.
    #[test]
    fn group_laws_hold(a in zset_strategy(), b in zset_strategy(), c in zset_strategy()) {
        prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        prop_assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a.clone() + (b.clone() + c.clone())
        );
        prop_assert_eq!(a.clone() + ZSet::zero(), a.clone());
        prop_assert_eq!(a.clone() + (-a.clone()), ZSet::zero());
    }

    /// Spec §8 item 2: `merge(merge(x)) == merge(x)`, and the result is
    /// canonical (no duplicate keys, no zero weights -- both of which
    /// `ZSet` enforces by construction, so re-folding its own pairs is a
    /// no-op).
    #[test]
    fn canonicalization_is_idempotent(a in zset_strategy()) {
        let reparsed: ZSet<i32> = ZSet::from_pairs(a.clone().into_pairs());
        prop_assert_eq!(reparsed.clone(), a.clone());
        let twice: ZSet<i32> = ZSet::from_pairs(reparsed.clone().into_pairs());
        prop_assert_eq!(twice, reparsed);
        prop_assert!(a.iter().all(|(_, w)| !w.is_zero()));
    }

    /// Spec §8 item 3: `filter(a + b, P) == filter(a, P) + filter(b, P)`.
    #[test]
    fn filter_is_linear(a in zset_strategy(), b in zset_strategy()) {
        let pred = |k: &i32| *k % 2 == 0;
        let lhs = filter(&(a.clone() + b.clone()), pred);
        let rhs = filter(&a, pred) + filter(&b, pred);
        prop_assert_eq!(lhs, rhs);
    }

    /// Spec §8 item 4: join is bilinear in both arguments.
    #[test]
    fn join_is_bilinear_in_the_first_argument(
        a1 in zset_strategy(),
        a2 in zset_strategy(),
        b in zset_strategy(),
    ) {
        let key = |k: &i32| *k % 4;
        let lhs = equi_join(&(a1.clone() + a2.clone()), &b, key, key);
        let rhs = equi_join(&a1, &b, key, key) + equi_join(&a2, &b, key, key);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn join_is_bilinear_in_the_second_argument(
        a in zset_strategy(),
        b1 in zset_strategy(),
        b2 in zset_strategy(),
    ) {
        let key = |k: &i32| *k % 4;
        let lhs = equi_join(&a, &(b1.clone() + b2.clone()), key, key);
        let rhs = equi_join(&a, &b1, key, key) + equi_join(&a, &b2, key, key);
        prop_assert_eq!(lhs, rhs);
    }

    /// Spec §8 item 5: `distinct(distinct(x)) == distinct(x)`.
    #[test]
    fn distinct_is_a_fixed_point(a in zset_strategy()) {
        prop_assert_eq!(distinct(&distinct(&a)), distinct(&a));
    }
}

/// A typed record, generated via `#[derive(Arbitrary)]`, exercising join
/// bilinearity (spec §8 item 4) over something closer to a real relation
/// than a bare integer key -- the `proptest-derive` use case spec.md's
/// A.4/D sections call out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Arbitrary)]
struct Order {
    #[proptest(strategy = "0u32..4")]
    user_id: u32,
    #[proptest(strategy = "0u32..20")]
    item_id: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Arbitrary)]
struct User {
    #[proptest(strategy = "0u32..4")]
    id: u32,
}

fn order_zset_strategy() -> impl Strategy<Value = ZSet<Order>> {
    prop::collection::vec((any::<Order>(), weight_strategy()), 0..8)
        .prop_map(|pairs| ZSet::from_pairs(pairs))
}

fn user_zset_strategy() -> impl Strategy<Value = ZSet<User>> {
    prop::collection::vec((any::<User>(), weight_strategy()), 0..8)
        .prop_map(|pairs| ZSet::from_pairs(pairs))
}

proptest! {
    #[test]
    fn order_user_join_is_bilinear(
        a1 in order_zset_strategy(),
        a2 in order_zset_strategy(),
        users in user_zset_strategy(),
    ) {
        let key_order = |o: &Order| o.user_id;
        let key_user = |u: &User| u.id;

        let lhs = equi_join(&(a1.clone() + a2.clone()), &users, key_order, key_user);
        let rhs = equi_join(&a1, &users, key_order, key_user)
            + equi_join(&a2, &users, key_order, key_user);
        prop_assert_eq!(lhs, rhs);
    }
}
