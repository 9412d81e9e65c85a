//! Tag-driven entity-behavior state machines.
//!
//! A [`BehaviorState`] runs once per scheduling step and reports the tag
//! of the state that should replace it. The [`StateDriver`] resolves
//! tags through a [`StateRegistry`] of plain constructor functions and
//! swaps instances only when the tag changes, so a state that keeps
//! returning its own tag persists (timers and in-progress motions keep
//! their fields across ticks). No runtime type reflection is involved
//! anywhere: a tag is just a static name.

/// The per-actor driver.
pub mod driver;
/// Tag-to-constructor table.
pub mod registry;
/// State contract and tags.
pub mod state;

pub use driver::StateDriver;
pub use registry::StateRegistry;
pub use state::{BehaviorState, StateCtor, StateId};
