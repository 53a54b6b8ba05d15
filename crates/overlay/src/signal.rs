// Chunk: docs/chunks/outcome_signals - Synchronous outcome signal dispatch

//! Synchronous signals connecting the overlay widget to its observers.
//!
//! # Design
//!
//! The widget raises its submit and cancel outcomes during the key event
//! that caused them, so observers hear an outcome before the host sees
//! another event. A queued channel would break that ordering, so `Signal`
//! dispatches inline: `emit` walks the subscribed handlers on the calling
//! thread and returns once every live handler has run.
//!
//! Handlers detach when the `Subscription` returned at subscribe time is
//! disposed or dropped. Detachment takes effect immediately: a handler
//! detached mid-emission by an earlier handler does not run. Handlers
//! subscribed mid-emission only hear later emissions.

use std::cell::{Cell, RefCell};
use std::mem;
use std::rc::Rc;

/// Handle to an attached handler. Dropping it detaches the handler.
#[must_use = "dropping a Subscription detaches its handler"]
pub struct Subscription {
    detached: Rc<Cell<bool>>,
}

impl Subscription {
    /// Detaches the handler now rather than at drop time.
    pub fn dispose(&self) {
        self.detached.set(true);
    }

    /// Whether the handler is still attached.
    pub fn is_attached(&self) -> bool {
        !self.detached.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detached.set(true);
    }
}

struct Handler<T> {
    detached: Rc<Cell<bool>>,
    once: bool,
    callback: Box<dyn FnMut(&T)>,
}

/// A synchronous multi-listener signal carrying values of type `T`.
pub struct Signal<T> {
    handlers: RefCell<Vec<Handler<T>>>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Signal {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Attaches `callback` until its subscription is disposed or dropped.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        self.attach(Box::new(callback), false)
    }

    /// Attaches `callback` for at most one emission.
    pub fn subscribe_once(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        self.attach(Box::new(callback), true)
    }

    fn attach(&self, callback: Box<dyn FnMut(&T)>, once: bool) -> Subscription {
        let detached = Rc::new(Cell::new(false));
        self.handlers.borrow_mut().push(Handler {
            detached: Rc::clone(&detached),
            once,
            callback,
        });
        Subscription { detached }
    }

    /// Runs every attached handler with `value`, in subscription order.
    ///
    /// The handler list is released while callbacks run, so a handler may
    /// detach other subscriptions or attach new ones without re-entrant
    /// borrow failures.
    pub fn emit(&self, value: &T) {
        let mut running = mem::take(&mut *self.handlers.borrow_mut());
        for handler in running.iter_mut() {
            if handler.detached.get() {
                continue;
            }
            (handler.callback)(value);
            if handler.once {
                handler.detached.set(true);
            }
        }
        running.retain(|handler| !handler.detached.get());
        let mut handlers = self.handlers.borrow_mut();
        let attached_during_emit = mem::take(&mut *handlers);
        *handlers = running;
        handlers.extend(attached_during_emit);
    }

    /// Detaches every handler. Outstanding subscriptions become inert.
    pub fn clear(&self) {
        for handler in self.handlers.borrow_mut().drain(..) {
            handler.detached.set(true);
        }
    }

    /// Number of currently attached handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers
            .borrow()
            .iter()
            .filter(|handler| !handler.detached.get())
            .count()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Signal::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Delivery ====================

    #[test]
    fn test_emit_delivers_value_to_handler() {
        let signal: Signal<i32> = Signal::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = Rc::clone(&seen);
        let _sub = signal.subscribe(move |value| seen_clone.borrow_mut().push(*value));

        signal.emit(&7);
        signal.emit(&8);

        assert_eq!(*seen.borrow(), vec![7, 8]);
    }

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let signal: Signal<()> = Signal::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let _a = signal.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        let _b = signal.subscribe(move |_| second.borrow_mut().push("second"));

        signal.emit(&());

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_emit_with_no_handlers_is_noop() {
        let signal: Signal<String> = Signal::new();
        signal.emit(&"nobody listening".to_string());
    }

    // ==================== Detachment ====================

    #[test]
    fn test_dispose_detaches_handler() {
        let signal: Signal<()> = Signal::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = Rc::clone(&count);
        let sub = signal.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        signal.emit(&());
        sub.dispose();
        signal.emit(&());

        assert_eq!(count.get(), 1);
        assert!(!sub.is_attached());
    }

    #[test]
    fn test_dropping_subscription_detaches_handler() {
        let signal: Signal<()> = Signal::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = Rc::clone(&count);
        let sub = signal.subscribe(move |_| count_clone.set(count_clone.get() + 1));
        drop(sub);

        signal.emit(&());

        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_clear_detaches_all_handlers() {
        let signal: Signal<()> = Signal::new();
        let count = Rc::new(Cell::new(0));

        let a = Rc::clone(&count);
        let sub_a = signal.subscribe(move |_| a.set(a.get() + 1));
        let b = Rc::clone(&count);
        let sub_b = signal.subscribe(move |_| b.set(b.get() + 1));

        signal.clear();
        signal.emit(&());

        assert_eq!(count.get(), 0);
        assert!(!sub_a.is_attached());
        assert!(!sub_b.is_attached());
    }

    #[test]
    fn test_handler_detached_mid_emission_does_not_run() {
        let signal: Signal<()> = Signal::new();
        let ran = Rc::new(Cell::new(false));
        let victim_slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let slot = Rc::clone(&victim_slot);
        let _killer = signal.subscribe(move |_| {
            if let Some(victim) = slot.borrow().as_ref() {
                victim.dispose();
            }
        });

        let ran_clone = Rc::clone(&ran);
        let victim = signal.subscribe(move |_| ran_clone.set(true));
        *victim_slot.borrow_mut() = Some(victim);

        signal.emit(&());

        assert!(!ran.get());
    }

    // ==================== Once semantics ====================

    #[test]
    fn test_subscribe_once_fires_exactly_once() {
        let signal: Signal<i32> = Signal::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = Rc::clone(&seen);
        let sub = signal.subscribe_once(move |value| seen_clone.borrow_mut().push(*value));

        signal.emit(&1);
        signal.emit(&2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert!(!sub.is_attached());
    }

    // ==================== Mid-emission subscription ====================

    #[test]
    fn test_handler_attached_mid_emission_waits_for_next_emit() {
        struct Shared {
            signal: Signal<()>,
            late_count: Cell<u32>,
            late_sub: RefCell<Option<Subscription>>,
        }

        let shared = Rc::new(Shared {
            signal: Signal::new(),
            late_count: Cell::new(0),
            late_sub: RefCell::new(None),
        });

        let outer = Rc::clone(&shared);
        let _attacher = shared.signal.subscribe(move |_| {
            if outer.late_sub.borrow().is_some() {
                return;
            }
            let inner = Rc::clone(&outer);
            let sub = outer
                .signal
                .subscribe(move |_| inner.late_count.set(inner.late_count.get() + 1));
            *outer.late_sub.borrow_mut() = Some(sub);
        });

        shared.signal.emit(&());
        assert_eq!(shared.late_count.get(), 0);

        shared.signal.emit(&());
        assert_eq!(shared.late_count.get(), 1);
    }

    // ==================== Bookkeeping ====================

    #[test]
    fn test_handler_count_tracks_attachment() {
        let signal: Signal<()> = Signal::new();
        assert_eq!(signal.handler_count(), 0);

        let sub_a = signal.subscribe(|_| {});
        let sub_b = signal.subscribe(|_| {});
        assert_eq!(signal.handler_count(), 2);

        sub_a.dispose();
        assert_eq!(signal.handler_count(), 1);

        drop(sub_b);
        assert_eq!(signal.handler_count(), 0);
    }
}
