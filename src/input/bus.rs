//! Producer-to-controller event fan-out.
//!
//! Producers publish [`InputEvent`]s into the bus at any point between
//! ticks; each subscribed controller drains its own queue exactly once
//! per tick. A [`Subscription`] unsubscribes when dropped, so controller
//! teardown can never leave a dangling observer behind.

use std::sync::mpsc;

use super::event::InputEvent;

/// Fan-out point between input producers and rig controllers.
///
/// Publishing with zero subscribers (or before any producer exists) is
/// a no-op, never an error.
#[derive(Debug, Default)]
pub struct InputBus {
    senders: Vec<mpsc::Sender<InputEvent>>,
}

impl InputBus {
    /// Empty bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber.
    ///
    /// Events published after this call are queued for the returned
    /// subscription until it is dropped.
    #[must_use]
    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        Subscription { rx }
    }

    /// Publish an event to every live subscriber.
    ///
    /// Subscriptions whose receivers were dropped are pruned here.
    pub fn publish(&mut self, event: InputEvent) {
        self.senders.retain(|tx| tx.send(event).is_ok());
    }

    /// Number of subscribers still live as of the last publish.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }
}

/// RAII guard for a bus subscription; dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    rx: mpsc::Receiver<InputEvent>,
}

impl Subscription {
    /// Drain all events published since the last drain, oldest first.
    pub fn drain(&self) -> mpsc::TryIter<'_, InputEvent> {
        self.rx.try_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn published_events_arrive_in_order() {
        let mut bus = InputBus::new();
        let sub = bus.subscribe();

        bus.publish(InputEvent::Zoom { amount: -1.0 });
        bus.publish(InputEvent::Rotate { amount: 0.5 });

        let events: Vec<_> = sub.drain().collect();
        assert_eq!(
            events,
            vec![
                InputEvent::Zoom { amount: -1.0 },
                InputEvent::Rotate { amount: 0.5 },
            ]
        );
        assert_eq!(sub.drain().count(), 0);
    }

    #[test]
    fn every_subscriber_sees_every_event() {
        let mut bus = InputBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.publish(InputEvent::Move {
            direction: Vec3::Z,
        });

        assert_eq!(a.drain().count(), 1);
        assert_eq!(b.drain().count(), 1);
    }

    #[test]
    fn publishing_with_no_subscribers_is_safe() {
        let mut bus = InputBus::new();
        bus.publish(InputEvent::Focus { active: true });
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn dropped_subscription_is_pruned_on_publish() {
        let mut bus = InputBus::new();
        let sub = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        drop(sub);
        bus.publish(InputEvent::Rotate { amount: 1.0 });
        assert_eq!(bus.subscriber_count(), 0);
    }
}
