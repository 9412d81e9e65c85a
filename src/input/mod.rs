//! Input plumbing: producer-facing event types and the bus that fans
//! them out to subscribed controllers.

/// Event fan-out with RAII subscriptions.
pub mod bus;
/// Producer-facing input request events.
pub mod event;

pub use bus::{InputBus, Subscription};
pub use event::InputEvent;
