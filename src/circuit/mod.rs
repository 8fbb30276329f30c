//! `Circuit[A, B]` (spec §4.3): an opaque, composable wrapper over a
//! stream-to-stream operator, plus static constructors that bind the
//! relational operators of §4.1 into circuits by lifting them and, where
//! needed, surrounding them with the incremental formulas of §4.2/§4.4.
//!
//! Grounded on the teacher's `circuit::circuit_builder::Circuit` in naming
//! and in the "typed composable pipeline" idea, but not in its multi-worker
//! scheduler: that machinery exists to support recursive nested scopes and
//! distributed execution, both out of scope here.

pub mod subscription;

pub use subscription::Subscribers;

use crate::algebra::{group::GroupPair, GroupValue};
use crate::stream::{ops, Stream};

/// A boxed `Stream[A] -> Stream[B]` transformation. Composable via
/// [`Circuit::compose`]; run via [`Circuit::execute`].
pub struct Circuit<A, B>
where
    A: GroupValue,
    B: GroupValue,
{
    run: Box<dyn Fn(&Stream<A>) -> Stream<B>>,
}

impl<A, B> Circuit<A, B>
where
    A: GroupValue,
    B: GroupValue,
{
    pub fn new(run: impl Fn(&Stream<A>) -> Stream<B> + 'static) -> Self {
        Self { run: Box::new(run) }
    }

    /// `execute(input) -> Stream[B]` (spec §4.3).
    pub fn execute(&self, input: &Stream<A>) -> Stream<B> {
        (self.run)(input)
    }

    /// `compose(other: Circuit[B, C]) -> Circuit[A, C]`: function
    /// composition of the underlying stream operators (spec §4.3).
    pub fn compose<C>(self, other: Circuit<B, C>) -> Circuit<A, C>
    where
        C: GroupValue,
    {
        Circuit::new(move |s: &Stream<A>| other.execute(&self.execute(s)))
    }

    /// Wrap a pointwise function `A -> B` as a circuit via `lift` alone
    /// (spec §4.3: "linear operators ... are wrapped only in lift").
    pub fn lift(f: impl Fn(&A) -> B + 'static) -> Self {
        Circuit::new(move |s| ops::lift(s, &f))
    }

    /// Wrap an arbitrary (not-necessarily-linear) snapshot query
    /// `Stream[A] -> Stream[B]` with the generic `D ∘ Q ∘ I` incrementalizer
    /// (spec §4.2). Correct for any `q`; prefer a more specific constructor
    /// (`lift`, `bilinear`) when the operator's algebraic shape is known, as
    /// those collapse the `I`/`D` wrappers away.
    pub fn incrementalize(q: impl Fn(&Stream<A>) -> Stream<B> + 'static) -> Self {
        Circuit::new(ops::incrementalize(q))
    }
}

/// A bilinear operator `op: A × B -> C` wrapped as a circuit over a single
/// `Stream[GroupPair[A, B]]` input (spec §4.4, theorem 3.4). `GroupPair` is
/// this crate's concrete carrier for "a pair of streams" since `Circuit` is
/// defined over one input stream; splitting it into its two components via
/// `lift` and running `bilinear_incremental` avoids ever materializing the
/// `I`/`D` round trip that the generic `incrementalize` constructor would
/// otherwise require.
impl<A, B, C> Circuit<GroupPair<A, B>, C>
where
    A: GroupValue,
    B: GroupValue,
    C: GroupValue,
{
    pub fn bilinear(op: impl Fn(&A, &B) -> C + 'static) -> Self {
        Circuit::new(move |s: &Stream<GroupPair<A, B>>| {
            let a = ops::lift(s, |p| p.0.clone());
            let b = ops::lift(s, |p| p.1.clone());
            ops::bilinear_incremental(&a, &b, &op)
        })
    }
}
