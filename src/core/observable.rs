//! Single-threaded observable value.
//!
//! `Observable` is the writer side and stays with the owner of the state.
//! Readers get an `ObservableRef`, which can read the current value and
//! register callbacks but cannot publish. Callbacks run synchronously inside
//! `publish`, in the order they were registered.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Slot<T> {
    id: u64,
    callback: Callback<T>,
}

struct Inner<T> {
    current: Option<T>,
    slots: Vec<Slot<T>>,
    next_id: u64,
}

impl<T> Inner<T> {
    fn is_subscribed(&self, id: u64) -> bool {
        self.slots.iter().any(|slot| slot.id == id)
    }
}

pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                current: None,
                slots: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Stores `value` and notifies every subscriber.
    ///
    /// # Panics
    ///
    /// If a callback publishes to the observable it is subscribed to.
    pub fn publish(&self, value: T) {
        let snapshot: Vec<(u64, Callback<T>)> = {
            let mut inner = self.inner.borrow_mut();
            inner.current = Some(value.clone());
            inner
                .slots
                .iter()
                .map(|slot| (slot.id, Rc::clone(&slot.callback)))
                .collect()
        };

        for (id, callback) in snapshot {
            // an earlier callback may have dropped this subscription
            if !self.inner.borrow().is_subscribed(id) {
                continue;
            }
            let Ok(mut callback) = callback.try_borrow_mut() else {
                panic!("observer published to the observable it is subscribed to");
            };
            (&mut *callback)(&value);
        }
    }

    pub fn get_current(&self) -> Option<T> {
        self.inner.borrow().current.clone()
    }

    pub fn read_only(&self) -> ObservableRef<T> {
        ObservableRef {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().slots.len()
    }

    /// Drops every registered callback. Outstanding `Subscription`s become no-ops.
    pub fn clear_subscribers(&self) {
        self.inner.borrow_mut().slots.clear();
    }
}

impl<T: Clone + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only handle onto an `Observable`.
pub struct ObservableRef<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for ObservableRef<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> ObservableRef<T> {
    pub fn get_current(&self) -> Option<T> {
        self.inner.borrow().current.clone()
    }

    /// Registers `callback`. If a value is already present the callback is
    /// invoked with it before this returns.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.slots.push(Slot {
                id,
                callback: Rc::clone(&callback),
            });
            (id, inner.current.clone())
        };

        if let Some(value) = current {
            (&mut *callback.borrow_mut())(&value);
        }

        let inner: Rc<RefCell<dyn Detach>> = self.inner.clone();
        Subscription {
            id,
            target: Rc::downgrade(&inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().slots.len()
    }
}

trait Detach {
    fn detach(&mut self, id: u64);
}

impl<T> Detach for Inner<T> {
    fn detach(&mut self, id: u64) {
        self.slots.retain(|slot| slot.id != id);
    }
}

/// Keeps a callback registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    target: Weak<RefCell<dyn Detach>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(target) = self.target.upgrade() {
            // skip if the observable is mid-publish and already borrowed
            if let Ok(mut target) = target.try_borrow_mut() {
                target.detach(self.id);
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&String) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: &String| sink.borrow_mut().push(value.clone()))
    }

    #[test]
    fn test_initial_state_is_absent() {
        let state: Observable<String> = Observable::new();
        assert_eq!(state.get_current(), None);
        assert_eq!(state.read_only().get_current(), None);
    }

    #[test]
    fn test_publish_notifies_in_order() {
        let state = Observable::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let _a = state
            .read_only()
            .subscribe(move |v: &String| first.borrow_mut().push(format!("a:{}", v)));
        let second = Rc::clone(&order);
        let _b = state
            .read_only()
            .subscribe(move |v: &String| second.borrow_mut().push(format!("b:{}", v)));

        state.publish("24".to_string());

        assert_eq!(*order.borrow(), vec!["a:24", "b:24"]);
        assert_eq!(state.get_current().as_deref(), Some("24"));
    }

    #[test]
    fn test_late_subscriber_receives_current_value() {
        let state = Observable::new();
        state.publish("6".to_string());

        let (seen, callback) = recorder();
        let _sub = state.read_only().subscribe(callback);

        assert_eq!(*seen.borrow(), vec!["6"]);
    }

    #[test]
    fn test_dropped_subscription_is_not_called() {
        let state = Observable::new();
        let (seen, callback) = recorder();
        let sub = state.read_only().subscribe(callback);

        state.publish("1".to_string());
        drop(sub);
        state.publish("2".to_string());

        assert_eq!(*seen.borrow(), vec!["1"]);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_during_publish() {
        let state: Observable<String> = Observable::new();
        let reader = state.read_only();

        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let killer_target = Rc::clone(&victim);
        let _killer = reader.subscribe(move |_| {
            drop(killer_target.borrow_mut().take());
        });

        let (seen, callback) = recorder();
        *victim.borrow_mut() = Some(reader.subscribe(callback));

        state.publish("x".to_string());

        assert!(seen.borrow().is_empty());
        assert_eq!(state.subscriber_count(), 1);
    }

    #[test]
    fn test_callback_can_read_current_value() {
        let state: Observable<String> = Observable::new();
        let reader = state.read_only();
        let inner_reader = reader.clone();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let _sub = reader.subscribe(move |_| {
            *sink.borrow_mut() = inner_reader.get_current();
        });

        state.publish("42".to_string());

        assert_eq!(seen.borrow().as_deref(), Some("42"));
    }

    #[test]
    #[should_panic(expected = "observer published to the observable it is subscribed to")]
    fn test_reentrant_publish_panics_with_clear_message() {
        let state: Rc<Observable<String>> = Rc::new(Observable::new());
        let writer = Rc::clone(&state);
        let _sub = state.read_only().subscribe(move |value: &String| {
            if value == "first" {
                writer.publish("second".to_string());
            }
        });

        state.publish("first".to_string());
    }

    #[test]
    fn test_clear_subscribers() {
        let state = Observable::new();
        let (seen, callback) = recorder();
        let sub = state.read_only().subscribe(callback);

        state.clear_subscribers();
        state.publish("gone".to_string());
        drop(sub);

        assert!(seen.borrow().is_empty());
        assert_eq!(state.subscriber_count(), 0);
    }
}
