//! The optimized distinct increment (spec §4.5, proposition 4.7): instead
//! of recomputing `distinct(I(input))` from scratch on every delta, this
//! maintains the previous integrated Z-set and emits only the sign
//! transitions a delta causes.

use crate::algebra::{zset::ZSet, ZRingValue};
use std::hash::Hash;

/// Maintains `I(input)` across calls and emits, per affected key, `+1` on
/// a non-positive→positive transition, `-1` on a positive→non-positive
/// transition, and nothing otherwise (spec §4.5).
pub struct StatefulDistinct<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    previous_integrated: ZSet<A, W>,
}

impl<A, W> StatefulDistinct<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    pub fn new() -> Self {
        Self {
            previous_integrated: ZSet::zero(),
        }
    }

    /// Feed one delta of the input relation, returning the delta of
    /// `distinct(I(input))`.
    pub fn process_increment(&mut self, delta: &ZSet<A, W>) -> ZSet<A, W> {
        log::trace!("StatefulDistinct::process_increment: |Δ|={}", delta.len());

        let mut out = ZSet::new();
        for (x, dw) in delta.entries() {
            let old = self.previous_integrated.weight(x);
            let new = old.clone() + dw.clone();
            let was_positive = old.ge0() && !old.is_zero();
            let is_positive = new.ge0() && !new.is_zero();
            if was_positive && !is_positive {
                out.append(x.clone(), -W::one());
            } else if !was_positive && is_positive {
                out.append(x.clone(), W::one());
            }
        }

        for (x, dw) in delta.entries() {
            self.previous_integrated.append(x.clone(), dw.clone());
        }

        out
    }

    pub fn reset(&mut self) {
        log::debug!("StatefulDistinct::reset");
        self.previous_integrated = ZSet::zero();
    }
}

impl<A, W> Default for StatefulDistinct<A, W>
where
    A: Eq + Hash + Clone,
    W: ZRingValue,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algebra::checked_int::CheckedI64, operators::distinct};

    fn w(n: i64) -> CheckedI64 {
        CheckedI64::from(n)
    }

    #[test]
    fn transitions_match_batch_distinct_of_the_integrated_input() {
        let mut sd: StatefulDistinct<&str, CheckedI64> = StatefulDistinct::new();
        let mut integrated: ZSet<&str> = ZSet::zero();

        let deltas: Vec<ZSet<&str>> = vec![
            ZSet::from_pairs([("a", w(2)), ("b", w(1))]),
            ZSet::from_pairs([("a", w(-2))]), // a: 2 -> 0, positive -> non-positive
            ZSet::from_pairs([("a", w(1))]),  // a: 0 -> 1, non-positive -> positive
        ];

        for d in &deltas {
            let before = distinct(&integrated);
            let out = sd.process_increment(d);
            integrated = integrated + d.clone();
            let after = distinct(&integrated);
            assert_eq!(before.clone() + out, after);
        }
    }

    #[test]
    fn no_transition_when_weight_stays_on_the_same_side_of_zero() {
        let mut sd: StatefulDistinct<&str, CheckedI64> = StatefulDistinct::new();
        let out = sd.process_increment(&ZSet::from_pairs([("a", w(3))]));
        assert_eq!(out, ZSet::from_pairs([("a", w(1))]));

        // a goes from 3 to 5: stays positive, no further transition.
        let out2 = sd.process_increment(&ZSet::from_pairs([("a", w(2))]));
        assert!(out2.is_empty());
    }

    #[test]
    fn reset_forgets_the_integrated_state() {
        let mut sd: StatefulDistinct<&str, CheckedI64> = StatefulDistinct::new();
        sd.process_increment(&ZSet::from_pairs([("a", w(3))]));
        sd.reset();
        // Without the reset, going from 3 to 4 would stay positive and emit
        // nothing; after reset, "a" looks brand new and a +1 transition fires.
        let out = sd.process_increment(&ZSet::from_pairs([("a", w(1))]));
        assert_eq!(out, ZSet::from_pairs([("a", w(1))]));
    }
}
