// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;
type ListenerList<T> = RefCell<Vec<(u64, Listener<T>)>>;

/// Canal publish/subscribe de un solo hilo. Los clones comparten los listeners.
pub struct EventBus<T> {
    listeners: Rc<ListenerList<T>>,
    next_id: Rc<Cell<u64>>,
}

impl<T: 'static> EventBus<T> {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Suscribirse a eventos. El listener vive mientras viva la `Subscription`.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(callback)));

        let weak: Weak<ListenerList<T>> = Rc::downgrade(&self.listeners);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(listeners) = weak.upgrade() {
                    listeners.borrow_mut().retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    /// Notifica a los listeners registrados en el momento de la llamada.
    /// Un listener puede suscribirse o desuscribirse mientras se le notifica.
    pub fn publish(&self, event: &T) {
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in snapshot {
            callback(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T: 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: self.listeners.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

/// Handle que devuelve `subscribe`; al soltarlo se elimina el listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_live_subscribers_only() {
        let bus = EventBus::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let seen = seen.clone();
            bus.subscribe(move |n| seen.borrow_mut().push(("first", *n)))
        };
        let _second = {
            let seen = seen.clone();
            bus.subscribe(move |n| seen.borrow_mut().push(("second", *n)))
        };

        bus.publish(&1);
        drop(first);
        bus.publish(&2);

        assert_eq!(*seen.borrow(), vec![("first", 1), ("second", 1), ("second", 2)]);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn listener_can_unsubscribe_itself_while_notified() {
        let bus = EventBus::<()>::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let sub = {
            let slot = slot.clone();
            let hits = hits.clone();
            bus.subscribe(move |_| {
                hits.set(hits.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);

        bus.publish(&());
        bus.publish(&());
        assert_eq!(hits.get(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_bus_is_harmless() {
        let sub = {
            let bus = EventBus::<u8>::new();
            bus.subscribe(|_| {})
        };
        sub.unsubscribe();
    }
}
