//! Stream operators (spec §4.2): `lift`, `delay`, `integrate`,
//! `differentiate`, `incrementalize`, and the bilinear delta formula used
//! by [`crate::circuit::Circuit::bilinear`] (spec §4.4).
//!
//! On the integrate/differentiate split (spec §9 Open Question: the source
//! has two disagreeing `integrate` implementations): this crate picks the
//! reading that makes `I` and `D` mutual inverses on streams zero
//! almost-everywhere (spec §4.2): `integrate` emits at every `t` in `[0,
//! t_max]` (so the running total is correct across gaps); `differentiate`
//! emits only where `s[t] != zero` or `s[t-1] != zero`.

use super::Stream;
use crate::algebra::GroupValue;

/// `(↑f(s))[t] = f(s[t])`. Iterates only the input's set entries; the
/// zero value of the output stream is implicitly `f(zero_A)` since
/// `Stream::at` already returns the group zero for unset times.
pub fn lift<A, B>(s: &Stream<A>, f: impl Fn(&A) -> B) -> Stream<B>
where
    A: GroupValue,
    B: GroupValue,
{
    Stream::from_entries(s.entries().map(|(t, v)| (t, f(v))))
}

/// `(z⁻¹ s)[0] = zero`; `(z⁻¹ s)[t+1] = s[t]`.
pub fn delay<A>(s: &Stream<A>) -> Stream<A>
where
    A: GroupValue,
{
    Stream::from_entries(s.entries().map(|(t, v)| (t + 1, v.clone())))
}

/// `I(s)[t] = Σ_{i≤t} s[i]`. Walks `0..=t_max` (the highest set time),
/// including gaps, so the running accumulator is correct at every step;
/// times past `t_max` are the final accumulator value and are not
/// materialized (querying them via `Stream::at` still returns it, since it
/// was set at `t_max`, and the group is zero-preserving past that only if
/// no further input ever arrives -- which integrate cannot know in
/// advance, matching spec §3.3's "guaranteed" semantics for `current_time`).
pub fn integrate<A>(s: &Stream<A>) -> Stream<A>
where
    A: GroupValue,
{
    let mut out = Stream::new();
    let Some(t_max) = s.max_set_time() else {
        return out;
    };

    let mut acc = A::zero();
    for t in 0..=t_max {
        acc += s.at(t);
        out.set(t, acc.clone());
    }
    out
}

/// `D(s)[t] = s[t] − s[t−1]`, `s[−1] = zero`. Emits at every `t` where
/// either `s[t]` or `s[t−1]` is non-zero (spec §4.2), which is exactly the
/// set of times needed for `D(I(s)) == s` to hold on streams zero
/// almost-everywhere.
pub fn differentiate<A>(s: &Stream<A>) -> Stream<A>
where
    A: GroupValue,
{
    let mut out = Stream::new();
    let mut candidate_times: Vec<usize> = s.entries().map(|(t, _)| t).collect();
    for (t, _) in s.entries() {
        candidate_times.push(t + 1);
    }
    candidate_times.sort_unstable();
    candidate_times.dedup();

    for t in candidate_times {
        let prev = if t == 0 { A::zero() } else { s.at(t - 1) };
        let delta = s.at(t) + (-prev);
        out.set(t, delta);
    }
    out
}

/// `Q^Δ = D ∘ Q ∘ I`: always correct, not always efficient. Linear
/// operators satisfy `Q^Δ = Q` (the wrappers collapse); this generic form
/// is the fallback for any stream-to-stream function.
pub fn incrementalize<A, B>(q: impl Fn(&Stream<A>) -> Stream<B>) -> impl Fn(&Stream<A>) -> Stream<B>
where
    A: GroupValue,
    B: GroupValue,
{
    move |delta: &Stream<A>| differentiate(&q(&integrate(delta)))
}

/// The bilinear delta formula (spec §4.4, theorem 3.4):
/// `(a × b)^Δ = Δa×Δb + Δa×I(b) + I(a)×Δb`. Walks both streams' set
/// times while maintaining running cumulatives, skipping any term whose
/// one input is empty at that step, matching a bilinear `op` against the
/// efficient delta-to-delta form without materializing the full `I`/`D`
/// round trip.
pub fn bilinear_incremental<A, B, C>(
    a: &Stream<A>,
    b: &Stream<B>,
    op: impl Fn(&A, &B) -> C,
) -> Stream<C>
where
    A: GroupValue,
    B: GroupValue,
    C: GroupValue,
{
    let mut out = Stream::new();
    let mut cumulative_a = A::zero();
    let mut cumulative_b = B::zero();

    let mut times: Vec<usize> = a.entries().map(|(t, _)| t).collect();
    times.extend(b.entries().map(|(t, _)| t));
    times.sort_unstable();
    times.dedup();

    for t in times {
        let delta_a = a.at(t);
        let delta_b = b.at(t);

        let mut delta = C::zero();
        if !delta_a.is_zero() && !delta_b.is_zero() {
            delta += op(&delta_a, &delta_b);
        }
        if !delta_a.is_zero() && !cumulative_b.is_zero() {
            delta += op(&delta_a, &cumulative_b);
        }
        if !cumulative_a.is_zero() && !delta_b.is_zero() {
            delta += op(&cumulative_a, &delta_b);
        }

        cumulative_a += delta_a;
        cumulative_b += delta_b;
        out.set(t, delta);
    }
    out
}
