//! Maintains a materialized "top-3 spenders" view over an `orders` /
//! `users` join as order deltas arrive, without ever recomputing the join
//! or the ranking from scratch.
//!
//! Run with `RUST_LOG=trace cargo run --example orders_view` to see the
//! `log` records `StatefulJoin`/`StatefulTopK` emit on every increment.

use anyhow::Result;
use dbsp_core::{
    stateful::topk::Config as TopKConfig,
    stateful::{StatefulJoin, StatefulTopK},
    ZSet,
};
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct User {
    id: u32,
    name: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Order {
    user_id: u32,
    amount_cents: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Spend {
    user: &'static str,
    total_cents: i64,
}

fn by_spend_desc(a: &Spend, b: &Spend) -> Ordering {
    b.total_cents.cmp(&a.total_cents)
}

fn w(n: i64) -> dbsp_core::CheckedI64 {
    dbsp_core::CheckedI64::from(n)
}

fn main() -> Result<()> {
    env_logger::init();

    let users: ZSet<User> = ZSet::from_pairs([
        (User { id: 1, name: "alice" }, w(1)),
        (User { id: 2, name: "bob" }, w(1)),
        (User { id: 3, name: "carol" }, w(1)),
    ]);

    // The join's key is `user_id`; its output folds each (order, user)
    // pair down to a single `Spend { user, total_cents }` per order, which
    // the top-K maintainer then aggregates by summing weights per spender
    // name -- the join emits one Z-set entry per *order*, and ZSet::append
    // inside StatefulTopK::merge_delta sums duplicate entries under the
    // same key, so repeated orders from the same user naturally combine.
    let mut join = StatefulJoin::new(
        |o: &Order| o.user_id,
        |u: &User| u.id,
        |_k: &u32, o: &Order, u: &User| Spend {
            user: u.name,
            total_cents: o.amount_cents,
        },
    );
    let mut topk = StatefulTopK::new(TopKConfig::new(3), |s: &Spend| s.user, by_spend_desc);

    let initial_orders: ZSet<Order> = ZSet::from_pairs([
        (Order { user_id: 1, amount_cents: 5_000 }, w(1)),
        (Order { user_id: 2, amount_cents: 1_200 }, w(1)),
    ]);
    let initial_spend = join.initialize(&initial_orders, &users);
    let initial_view = topk.process_initial(&initial_spend);
    println!("initial top spenders delta: {initial_view:?}");

    // A new order arrives for carol; her name rises into the window even
    // though her very first order (here, the whole delta) is the only one
    // she has placed so far.
    let new_order: ZSet<Order> = ZSet::from_pairs([(Order { user_id: 3, amount_cents: 9_000 }, w(1))]);
    let join_delta = join.process_increment(&new_order, &ZSet::zero());
    let topk_delta = topk.process_increment(&join_delta);
    println!("after carol's order, top spenders delta: {topk_delta:?}");

    let state = topk.get_current_state();
    println!("current top spenders: {:?}", state.top_k.entries());

    Ok(())
}
