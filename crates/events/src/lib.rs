//! Notification events and the in-process pub/sub bus that carries them.
//!
//! Events here are fire-and-forget notifications (e.g. stock alerts raised by
//! a sale). Publishing never affects the outcome of the operation that raised
//! the event.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription, publish_best_effort};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
