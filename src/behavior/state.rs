use std::fmt;

use crate::scene::Actor;

/// Tag identifying a behavior state kind.
///
/// States report the tag of their successor from
/// [`BehaviorState::tick`]; the driver resolves tags against a
/// [`StateRegistry`](super::StateRegistry) constructor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(&'static str);

impl StateId {
    /// Tag from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The tag's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One unit-behavior state bound to an actor.
///
/// The driver constructs a state when it is entered, so entry logic
/// lives in the constructor. [`tick`](Self::tick) runs once per
/// scheduling step; [`exit`](Self::exit) runs exactly once before the
/// instance is replaced, never on a self-transition. Exactly one state
/// is current per driver at any time; there is no history stack.
pub trait BehaviorState {
    /// The state's own tag.
    fn id(&self) -> StateId;

    /// Run one step against the bound actor and report the successor
    /// tag.
    ///
    /// Returning [`id`](Self::id) keeps this instance alive; any other
    /// tag asks the driver to construct that state and swap it in.
    fn tick(&mut self, actor: &mut Actor, dt: f32) -> StateId;

    /// Teardown hook for states holding acquired resources (timers,
    /// subscriptions). Default: nothing to release.
    fn exit(&mut self, _actor: &mut Actor) {}
}

/// Constructor resolving a tag into a fresh state bound to an actor.
pub type StateCtor = fn(&mut Actor) -> Box<dyn BehaviorState>;
