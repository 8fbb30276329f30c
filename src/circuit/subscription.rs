//! Reactive observer glue (spec §4.8, §6 "Subscription"): a set of
//! callbacks invoked with every value a [`super::Circuit`] produces,
//! modeled on the teacher's `Inspect` operator but generalized from one
//! callback to many, with per-subscriber failure isolation (spec §5:
//! "isolate per-subscriber failures").

use std::panic::{catch_unwind, AssertUnwindSafe};

/// An opaque, stable handle to a registered subscriber (spec §6:
/// "subscribe(callback) -> unsubscribe"). Unlike a `Vec` index, a
/// `SubscriptionId` never refers to a different subscriber after some
/// other subscriber is removed -- ids are never reused within the
/// lifetime of a `Subscribers<T>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A registry of callbacks notified on every `Circuit::execute` output.
/// A panicking subscriber is caught and logged; it does not prevent the
/// remaining subscribers from being notified.
///
/// Callbacks are stored as `(SubscriptionId, callback)` pairs in a `Vec`,
/// not keyed by position: [`Self::subscribe`] hands back the id, never a
/// position, and [`Self::unsubscribe`] finds and drops the matching
/// entry by id. Earlier revisions handed back the `Vec` index directly,
/// which meant every later `unsubscribe` silently shifted the indices of
/// all higher-positioned subscribers -- a stale index could then
/// unsubscribe the wrong callback instead of erroring. Delivery order
/// still follows the `Vec`'s element order, which is insertion order
/// (spec §4.8/§5: "insertion order of subscribers") since `subscribe`
/// only ever pushes and `unsubscribe` only ever removes, never reorders.
pub struct Subscribers<T> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Box<dyn Fn(&T)>)>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }

    /// Register a callback, returning a stable [`SubscriptionId`] for use
    /// with [`Self::unsubscribe`].
    pub fn subscribe(&mut self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback by id. A no-op if the id
    /// was never issued or has already been unsubscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.callbacks.retain(|(cid, _)| *cid != id);
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Notify every subscriber with `value`, in insertion order. A
    /// subscriber that panics is caught (via `catch_unwind`) and logged
    /// as an error; it does not abort notification of the remaining
    /// subscribers.
    pub fn notify(&self, value: &T) {
        for (id, callback) in self.callbacks.iter() {
            let result = catch_unwind(AssertUnwindSafe(|| callback(value)));
            if result.is_err() {
                log::error!("Subscribers::notify: subscriber {id:?} panicked, isolated");
            }
        }
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}
