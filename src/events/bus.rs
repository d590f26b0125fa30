//! # Event bus for broadcasting admission events.
//!
//! [`Bus`] fans admission events out to any number of observers. Every submission
//! running through a gate publishes here, including resubmissions after a deferral.
//! Observers either take the raw stream ([`Bus::subscribe`]) or a [`Subscription`]
//! narrowed to the event kinds they care about.
//!
//! ## Architecture
//! ```text
//! Publishers (many):                     Receivers (any):
//!   Gate::submit      ──┐                  ┌──► subscribe()             (all kinds)
//!   remediation       ──┼──────► Bus ──────┤
//!   Defer             ──┘  (broadcast)     └──► subscribe_kinds([..])   (filtered)
//! ```
//!
//! ## Rules
//! - `publish()` never blocks and never waits for receivers.
//! - One bounded ring buffer is shared by all receivers; slow ones get `Lagged(n)`.
//! - Filtering happens on the receiving side; lag counts include skipped kinds.
//! - Events published with no live receivers are dropped.

use std::sync::Arc;

use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};

use super::event::{Event, EventKind};

/// Broadcast channel for admission events.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a bus holding up to `capacity` unread events (at least 1).
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publishes an event to all live receivers.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a receiver for every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }

    /// Creates a subscription yielding only events whose kind is in `kinds`.
    ///
    /// An empty `kinds` slice yields nothing.
    pub fn subscribe_kinds(&self, kinds: &[EventKind]) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
            kinds: Arc::from(kinds),
        }
    }
}

/// Receiver narrowed to a set of [`EventKind`]s.
#[derive(Debug)]
pub struct Subscription {
    rx: broadcast::Receiver<Event>,
    kinds: Arc<[EventKind]>,
}

impl Subscription {
    /// Returns the kinds this subscription yields.
    pub fn kinds(&self) -> &[EventKind] {
        &self.kinds
    }

    /// Waits for the next matching event.
    ///
    /// ### Errors
    /// `RecvError::Closed` once every gate sharing the bus is dropped;
    /// `RecvError::Lagged(n)` if this receiver fell behind.
    pub async fn recv(&mut self) -> Result<Event, RecvError> {
        loop {
            let ev = self.rx.recv().await?;
            if self.kinds.contains(&ev.kind) {
                return Ok(ev);
            }
        }
    }

    /// Returns the next buffered matching event without waiting.
    pub fn try_recv(&mut self) -> Result<Event, TryRecvError> {
        loop {
            let ev = self.rx.try_recv()?;
            if self.kinds.contains(&ev.kind) {
                return Ok(ev);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn receivers_only_see_events_after_subscribing() {
        let bus = Bus::new(0);
        bus.publish(Event::new(EventKind::Dispatched));

        let mut rx = bus.subscribe();
        bus.publish(Event::new(EventKind::RuleDenied).with_job("mailer"));

        let ev = rx.recv().await.unwrap();
        assert_eq!(ev.kind, EventKind::RuleDenied);
        assert_eq!(ev.job.as_deref(), Some("mailer"));
    }

    #[tokio::test]
    async fn subscription_skips_other_kinds() {
        let bus = Bus::new(16);
        let mut sub = bus.subscribe_kinds(&[EventKind::DeferScheduled, EventKind::Dispatched]);

        bus.publish(Event::new(EventKind::RulePassed));
        bus.publish(Event::new(EventKind::DeferScheduled).with_job("report"));
        bus.publish(Event::new(EventKind::RuleDenied));
        bus.publish(Event::new(EventKind::Dispatched));

        assert_eq!(sub.recv().await.unwrap().kind, EventKind::DeferScheduled);
        assert_eq!(sub.try_recv().unwrap().kind, EventKind::Dispatched);
        assert_eq!(sub.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[test]
    fn empty_filter_yields_nothing() {
        let bus = Bus::new(4);
        let mut sub = bus.subscribe_kinds(&[]);
        bus.publish(Event::new(EventKind::Dispatched));

        assert!(sub.kinds().is_empty());
        assert_eq!(sub.try_recv().unwrap_err(), TryRecvError::Empty);
    }
}
