/*
MIT License
SPDX-License-Identifier: MIT

Copyright (c) 2021 VMware, Inc
*/

//! Incremental view maintenance over Z-sets: an abelian-group algebra
//! (`algebra`), stateless relational operators (`operators`), the stream
//! calculus of integration/differentiation/delay/lift (`stream`), the
//! stateful equi-join and top-K maintainers (`stateful`), and a minimal
//! composable circuit layer with reactive subscriptions (`circuit`).
//!
//! See each module's docs for the relevant section of the design this
//! crate implements.

pub mod algebra;
pub mod circuit;
pub mod error;
pub mod operators;
pub mod stateful;
pub mod stream;

pub use algebra::checked_int::{CheckedI64, CheckedInt};
pub use algebra::group::{AbelianGroup, GroupPair, ZSetGroup};
pub use algebra::zset::ZSet;
pub use algebra::{GroupValue, MonoidValue, RingValue, ZRingValue};
pub use circuit::{Circuit, Subscribers};
pub use error::{Error, Result};
pub use stateful::{StatefulDistinct, StatefulJoin, StatefulTopK};
pub use stream::Stream;
