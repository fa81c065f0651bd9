//! Event publishing/subscription abstraction.
//!
//! The bus distributes notifications to any number of listeners (UI toasts,
//! log sinks, tests). It is broadcast-only: every subscription receives a copy
//! of each message published after it subscribed. Nothing is persisted.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::Event;

/// A subscription to an event stream.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// while let Ok(alert) = subscription.try_recv() {
///     show_toast(&alert);
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain every message currently queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish()` may fail (e.g. lock poisoning); callers that treat
/// notifications as fire-and-forget should go through [`publish_best_effort`].
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}

/// Publish an event, logging (never propagating) a failure.
pub fn publish_best_effort<E, B>(bus: &B, event: E)
where
    E: Event,
    B: EventBus<E> + ?Sized,
{
    let event_type = event.event_type();
    if let Err(err) = bus.publish(event) {
        tracing::warn!(event_type, error = ?err, "failed to publish event");
    }
}
