//! The per-actor state machine driver.

use super::registry::StateRegistry;
use super::state::{BehaviorState, StateId};
use crate::error::RigError;
use crate::scene::Actor;

/// Holds one current behavior state and swaps it by successor tag.
///
/// Each tick the driver runs the current state and compares the
/// reported tag to the state's own: a matching tag keeps the instance
/// (its fields persist), a different tag runs the old state's exit
/// hook, constructs the successor from the registry, and swaps it in.
/// There is no terminal tag at this layer — a state may return its own
/// tag forever, and teardown happens by dropping the driver.
pub struct StateDriver {
    registry: StateRegistry,
    current: Box<dyn BehaviorState>,
}

impl StateDriver {
    /// Driver starting in the `initial` state, constructed immediately
    /// against the actor.
    ///
    /// # Errors
    ///
    /// [`RigError::UnknownState`] if `initial` has no registered
    /// constructor — a configuration error caught before the first
    /// tick.
    pub fn new(
        registry: StateRegistry,
        initial: StateId,
        actor: &mut Actor,
    ) -> Result<Self, RigError> {
        let current = registry
            .create(initial, actor)
            .ok_or(RigError::UnknownState(initial))?;
        Ok(Self { registry, current })
    }

    /// Tag of the current state.
    #[must_use]
    pub fn current_id(&self) -> StateId {
        self.current.id()
    }

    /// Run the current state once and apply its requested transition.
    ///
    /// # Errors
    ///
    /// [`RigError::UnknownState`] if the reported successor has no
    /// registered constructor. The current state stays in place and its
    /// exit hook does not run.
    pub fn tick(&mut self, actor: &mut Actor, dt: f32) -> Result<(), RigError> {
        let current_id = self.current.id();
        let next = self.current.tick(actor, dt);
        if next == current_id {
            return Ok(());
        }

        if !self.registry.contains(next) {
            log::error!(
                "state '{current_id}' requested unknown successor '{next}'"
            );
            return Err(RigError::UnknownState(next));
        }

        self.current.exit(actor);
        if let Some(successor) = self.registry.create(next, actor) {
            log::debug!("state transition {current_id} -> {next}");
            self.current = successor;
        }
        Ok(())
    }
}
