//! # Notification bus — single-slot queue of transient status messages
//!
//! Any call site publishes; one display surface subscribes and renders. At most
//! one [`Notification`] is active at a time: publishing replaces the current
//! one and invalidates every outstanding [`ExpiryToken`], so an auto-expiry
//! armed for an earlier notification can never dismiss a later one.
//!
//! The bus itself owns no timer. [`publish`](NotificationBus::publish) hands
//! back a token and the display surface schedules a sleep for
//! [`DISPLAY_DURATION`] before calling [`expire`](NotificationBus::expire);
//! stale tokens are no-ops. That keeps this module free of any executor and
//! makes the supersede/cancel rules directly testable.
//!
//! States: `idle --publish--> showing`, `showing --publish--> showing`
//! (content replaced), `showing --dismiss|expire--> idle`. All operations are
//! infallible, synchronous and in-memory.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// How long a notification stays visible before auto-expiry.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

/// A transient, user-visible status message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Proof of a particular publish. Only the token minted by the most recent
/// publish can still dismiss; everything older is dead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpiryToken(u64);

type Listener = Rc<dyn Fn(Option<&Notification>)>;

#[derive(Default)]
struct BusInner {
    current: Option<Notification>,
    epoch: u64,
    next_listener: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Cheap-clone handle to the process-wide notification slot.
#[derive(Clone, Default)]
pub struct NotificationBus {
    inner: Rc<RefCell<BusInner>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the active notification. Subscribing does not replay the
    /// current value, so late subscribers query this instead.
    pub fn current(&self) -> Option<Notification> {
        self.inner.borrow().current.clone()
    }

    /// Replace the active notification, notify subscribers synchronously and
    /// return the token the display surface's auto-expiry must present.
    pub fn publish(&self, kind: NotificationKind, message: impl Into<String>) -> ExpiryToken {
        let token = {
            let mut inner = self.inner.borrow_mut();
            inner.epoch += 1;
            inner.current = Some(Notification {
                kind,
                message: message.into(),
            });
            ExpiryToken(inner.epoch)
        };
        self.deliver();
        token
    }

    /// Clear the active notification. Idempotent: when already idle nothing
    /// happens and subscribers are not notified.
    pub fn dismiss(&self) {
        let was_showing = self.inner.borrow_mut().current.take().is_some();
        if was_showing {
            self.deliver();
        }
    }

    /// Auto-expiry entry point. Dismisses only while `token` still matches the
    /// showing notification; superseded and already-dismissed tokens do
    /// nothing.
    pub fn expire(&self, token: ExpiryToken) {
        let live = {
            let inner = self.inner.borrow();
            inner.current.is_some() && inner.epoch == token.0
        };
        if live {
            self.dismiss();
        }
    }

    /// Register a listener invoked on every publish and dismiss with the new
    /// value (`None` when the slot empties). Dropping the returned
    /// subscription detaches it.
    pub fn subscribe(
        &self,
        listener: impl Fn(Option<&Notification>) + 'static,
    ) -> NotificationSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, Rc::new(listener)));
        NotificationSubscription {
            id,
            inner: Rc::clone(&self.inner),
        }
    }

    fn deliver(&self) {
        // Snapshot so listeners may publish or (un)subscribe mid-delivery.
        let (snapshot, current) = {
            let inner = self.inner.borrow();
            let snapshot: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (snapshot, inner.current.clone())
        };
        for listener in snapshot {
            listener(current.as_ref());
        }
    }
}

/// Handle keeping a notification listener registered.
pub struct NotificationSubscription {
    id: u64,
    inner: Rc<RefCell<BusInner>>,
}

impl NotificationSubscription {
    /// Explicitly detach the listener. Dropping the handle does the same.
    pub fn unsubscribe(self) {}
}

impl Drop for NotificationSubscription {
    fn drop(&mut self) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        bus: &NotificationBus,
    ) -> (
        Rc<RefCell<Vec<Option<Notification>>>>,
        NotificationSubscription,
    ) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = bus.subscribe(move |notification| sink.borrow_mut().push(notification.cloned()));
        (seen, sub)
    }

    #[test]
    fn publish_shows_and_expire_clears() {
        let bus = NotificationBus::new();
        let (seen, _sub) = record(&bus);

        let token = bus.publish(NotificationKind::Success, "Added to cart");
        assert_eq!(
            bus.current(),
            Some(Notification {
                kind: NotificationKind::Success,
                message: "Added to cart".to_string(),
            })
        );

        bus.expire(token);
        assert!(bus.current().is_none());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_some());
        assert!(seen[1].is_none());
    }

    #[test]
    fn newer_publish_supersedes_older_expiry() {
        let bus = NotificationBus::new();

        let first = bus.publish(NotificationKind::Success, "Added to cart");
        let second = bus.publish(NotificationKind::Error, "Failed");

        // The superseded timer fires; nothing happens.
        bus.expire(first);
        assert_eq!(
            bus.current(),
            Some(Notification {
                kind: NotificationKind::Error,
                message: "Failed".to_string(),
            })
        );

        // Only the final publish's token dismisses.
        bus.expire(second);
        assert!(bus.current().is_none());
    }

    #[test]
    fn expire_after_dismiss_is_a_noop() {
        let bus = NotificationBus::new();
        let (seen, _sub) = record(&bus);

        let first = bus.publish(NotificationKind::Warning, "hold on");
        bus.dismiss();
        let _second = bus.publish(NotificationKind::Success, "done");

        // The first notification's timer must not clear the newer one.
        bus.expire(first);
        assert_eq!(bus.current().map(|n| n.message), Some("done".to_string()));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let bus = NotificationBus::new();
        let (seen, _sub) = record(&bus);

        bus.dismiss();
        assert!(seen.borrow().is_empty());

        bus.publish(NotificationKind::Success, "ok");
        bus.dismiss();
        bus.dismiss();
        // One publish delivery, one dismiss delivery, nothing more.
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn subscribe_does_not_replay_current_value() {
        let bus = NotificationBus::new();
        bus.publish(NotificationKind::Success, "before");

        let (seen, _sub) = record(&bus);
        assert!(seen.borrow().is_empty());

        // Late subscribers query the snapshot instead.
        assert_eq!(bus.current().map(|n| n.message), Some("before".to_string()));
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let bus = NotificationBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let _a = bus.subscribe(move |_| first.borrow_mut().push("a"));
        let second = Rc::clone(&order);
        let _b = bus.subscribe(move |_| second.borrow_mut().push("b"));

        bus.publish(NotificationKind::Warning, "ordered");
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn dropped_subscription_detaches_listener() {
        let bus = NotificationBus::new();
        let (seen, sub) = record(&bus);

        bus.publish(NotificationKind::Success, "one");
        assert_eq!(seen.borrow().len(), 1);

        sub.unsubscribe();
        bus.publish(NotificationKind::Success, "two");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn clones_share_the_slot() {
        let bus = NotificationBus::new();
        let other = bus.clone();

        let token = bus.publish(NotificationKind::Success, "shared");
        assert_eq!(
            other.current().map(|n| n.message),
            Some("shared".to_string())
        );

        other.expire(token);
        assert!(bus.current().is_none());
    }
}
