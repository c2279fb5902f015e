// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll tick fan-out with scoped subscriptions.
//!
//! ## Usage
//!
//! 1) Create one [`ScrollDispatcher`] per page and hand clones to whatever
//!    drives scrolling (usually a [`ScrollEngine`](crate::ScrollEngine) binding).
//! 2) Each section calls [`ScrollDispatcher::subscribe`] when it activates and
//!    keeps the returned [`Subscription`] for as long as it is alive.
//! 3) The engine calls [`ScrollDispatcher::dispatch`] once per tick.
//! 4) Dropping the [`Subscription`] (or calling [`Subscription::unsubscribe`])
//!    stops delivery. This happens on every exit path, including early
//!    returns and unwinding.
//!
//! ## Ordering
//!
//! - Subscribers are called in registration order.
//! - All subscribers of one tick receive the same [`ScrollEvent`].
//! - A subscription dropped during a tick is not called for the rest of that
//!   tick. A subscription created during a tick is first called on the next.
//! - Calling [`ScrollDispatcher::dispatch`] from inside a subscriber is ignored.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

use crate::ScrollEvent;

type Callback = Rc<RefCell<dyn FnMut(&ScrollEvent)>>;

struct Slot {
    id: u64,
    callback: Callback,
}

#[derive(Default)]
struct Inner {
    slots: Vec<Slot>,
    next_id: u64,
    dispatching: bool,
    last_event: Option<ScrollEvent>,
    ticks: u64,
}

impl Inner {
    fn contains(&self, id: u64) -> bool {
        self.slots.iter().any(|slot| slot.id == id)
    }
}

/// Single-threaded fan-out of [`ScrollEvent`]s to subscribers.
///
/// Cloning a dispatcher yields another handle to the same subscriber list.
#[derive(Clone, Default)]
pub struct ScrollDispatcher {
    inner: Rc<RefCell<Inner>>,
}

impl ScrollDispatcher {
    /// Creates a dispatcher with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` to be called on every tick.
    ///
    /// Delivery stops when the returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription immediately unsubscribes"]
    pub fn subscribe(&self, callback: impl FnMut(&ScrollEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let callback: Callback = Rc::new(RefCell::new(callback));
        inner.slots.push(Slot { id, callback });
        tracing::debug!(id, subscribers = inner.slots.len(), "scroll subscriber added");
        Subscription {
            id,
            dispatcher: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers `event` to every live subscriber in registration order.
    ///
    /// Returns the number of subscribers called. Re-entrant calls made from a
    /// subscriber return `0` without delivering anything.
    pub fn dispatch(&self, event: ScrollEvent) -> usize {
        let snapshot: SmallVec<[(u64, Callback); 8]> = {
            let mut inner = self.inner.borrow_mut();
            if inner.dispatching {
                tracing::warn!(scroll = event.scroll, "ignoring re-entrant scroll dispatch");
                return 0;
            }
            inner.dispatching = true;
            inner.last_event = Some(event);
            inner.ticks += 1;
            inner
                .slots
                .iter()
                .map(|slot| (slot.id, slot.callback.clone()))
                .collect()
        };
        let _guard = DispatchGuard(&self.inner);

        let mut delivered = 0;
        for (id, callback) in snapshot {
            if !self.inner.borrow().contains(id) {
                continue;
            }
            (&mut *callback.borrow_mut())(&event);
            delivered += 1;
        }
        tracing::trace!(scroll = event.scroll, delivered, "scroll tick dispatched");
        delivered
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().slots.len()
    }

    /// Returns the most recently dispatched event, if any.
    #[must_use]
    pub fn last_event(&self) -> Option<ScrollEvent> {
        self.inner.borrow().last_event
    }

    /// Returns the number of ticks dispatched so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.inner.borrow().ticks
    }
}

impl fmt::Debug for ScrollDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ScrollDispatcher")
            .field("subscribers", &inner.slots.len())
            .field("dispatching", &inner.dispatching)
            .field("last_event", &inner.last_event)
            .field("ticks", &inner.ticks)
            .finish()
    }
}

/// Clears the dispatching flag even if a subscriber unwinds.
struct DispatchGuard<'a>(&'a RefCell<Inner>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.borrow_mut().dispatching = false;
    }
}

/// A live registration with a [`ScrollDispatcher`].
///
/// Dropping the handle unsubscribes. The handle does not keep the dispatcher
/// alive; if the dispatcher is gone, dropping is a no-op.
pub struct Subscription {
    id: u64,
    dispatcher: Weak<RefCell<Inner>>,
}

impl Subscription {
    /// Returns `true` while the subscriber will still receive ticks.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.dispatcher
            .upgrade()
            .is_some_and(|inner| inner.borrow().contains(self.id))
    }

    /// Unsubscribes now. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.dispatcher.upgrade() else {
            return;
        };
        // Keep the removed callback alive until the borrow is released; it may
        // own other subscriptions whose drop needs this dispatcher again.
        let removed: SmallVec<[Slot; 1]> = {
            let mut inner = inner.borrow_mut();
            let mut removed = SmallVec::new();
            let mut i = 0;
            while i < inner.slots.len() {
                if inner.slots[i].id == self.id {
                    removed.push(inner.slots.remove(i));
                } else {
                    i += 1;
                }
            }
            removed
        };
        if !removed.is_empty() {
            tracing::debug!(id = self.id, "scroll subscriber removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn dispatch_reaches_subscribers_in_order() {
        let dispatcher = ScrollDispatcher::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let log = log.clone();
            dispatcher.subscribe(move |e| log.borrow_mut().push(("a", e.scroll)))
        };
        let b = {
            let log = log.clone();
            dispatcher.subscribe(move |e| log.borrow_mut().push(("b", e.scroll)))
        };

        assert_eq!(dispatcher.dispatch(ScrollEvent::at(5.0)), 2);
        assert_eq!(*log.borrow(), [("a", 5.0), ("b", 5.0)]);
        assert!(a.is_active() && b.is_active());
    }

    #[test]
    fn dropping_subscription_stops_delivery() {
        let dispatcher = ScrollDispatcher::new();
        let count = Rc::new(Cell::new(0));

        let sub = {
            let count = count.clone();
            dispatcher.subscribe(move |_| count.set(count.get() + 1))
        };
        dispatcher.dispatch(ScrollEvent::at(1.0));
        drop(sub);
        dispatcher.dispatch(ScrollEvent::at(2.0));

        assert_eq!(count.get(), 1);
        assert_eq!(dispatcher.subscriber_count(), 0);
        assert_eq!(dispatcher.ticks(), 2);
    }

    #[test]
    fn early_return_releases_subscription() {
        fn activate(dispatcher: &ScrollDispatcher, bail: bool) -> Option<Subscription> {
            let sub = dispatcher.subscribe(|_| {});
            if bail {
                return None;
            }
            Some(sub)
        }

        let dispatcher = ScrollDispatcher::new();
        assert!(activate(&dispatcher, true).is_none());
        assert_eq!(dispatcher.subscriber_count(), 0);

        let kept = activate(&dispatcher, false);
        assert_eq!(dispatcher.subscriber_count(), 1);
        drop(kept);
        assert_eq!(dispatcher.subscriber_count(), 0);
    }

    #[test]
    fn subscription_dropped_mid_tick_is_skipped() {
        let dispatcher = ScrollDispatcher::new();
        let victim_calls = Rc::new(Cell::new(0));
        let victim_slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _killer = {
            let victim_slot = victim_slot.clone();
            dispatcher.subscribe(move |_| {
                victim_slot.borrow_mut().take();
            })
        };
        let victim = {
            let victim_calls = victim_calls.clone();
            dispatcher.subscribe(move |_| victim_calls.set(victim_calls.get() + 1))
        };
        *victim_slot.borrow_mut() = Some(victim);

        assert_eq!(dispatcher.dispatch(ScrollEvent::at(1.0)), 1);
        assert_eq!(victim_calls.get(), 0);
    }

    #[test]
    fn subscribe_during_tick_starts_next_tick() {
        let dispatcher = ScrollDispatcher::new();
        let late_calls = Rc::new(Cell::new(0));
        let late: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _spawner = {
            let dispatcher = dispatcher.clone();
            let late = late.clone();
            let late_calls = late_calls.clone();
            dispatcher.clone().subscribe(move |_| {
                if late.borrow().is_none() {
                    let late_calls = late_calls.clone();
                    *late.borrow_mut() = Some(
                        dispatcher.subscribe(move |_| late_calls.set(late_calls.get() + 1)),
                    );
                }
            })
        };

        dispatcher.dispatch(ScrollEvent::at(1.0));
        assert_eq!(late_calls.get(), 0);
        dispatcher.dispatch(ScrollEvent::at(2.0));
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn reentrant_dispatch_is_ignored() {
        let dispatcher = ScrollDispatcher::new();
        let inner_result = Rc::new(Cell::new(usize::MAX));

        let _sub = {
            let d = dispatcher.clone();
            let inner_result = inner_result.clone();
            dispatcher.subscribe(move |e| {
                if e.scroll < 10.0 {
                    inner_result.set(d.dispatch(ScrollEvent::at(e.scroll + 100.0)));
                }
            })
        };

        assert_eq!(dispatcher.dispatch(ScrollEvent::at(1.0)), 1);
        assert_eq!(inner_result.get(), 0);
        assert_eq!(dispatcher.last_event(), Some(ScrollEvent::at(1.0)));
        // The flag is cleared after the tick.
        assert_eq!(dispatcher.dispatch(ScrollEvent::at(50.0)), 1);
    }

    #[test]
    fn subscription_outliving_dispatcher_is_inert() {
        let dispatcher = ScrollDispatcher::new();
        let sub = dispatcher.subscribe(|_| {});
        drop(dispatcher);
        assert!(!sub.is_active());
        drop(sub);
    }
}
