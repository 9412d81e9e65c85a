use rustc_hash::FxHashMap;

use super::state::{BehaviorState, StateCtor, StateId};
use crate::scene::Actor;

/// Constructor table mapping state tags to the functions that build
/// them.
///
/// The registry is the validation point for successor tags: a tag
/// without an entry cannot be entered, and the driver surfaces it as a
/// configuration error instead of constructing an unknown state.
#[derive(Default)]
pub struct StateRegistry {
    ctors: FxHashMap<StateId, StateCtor>,
}

impl StateRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for a tag, replacing any previous entry.
    pub fn register(&mut self, id: StateId, ctor: StateCtor) {
        if self.ctors.insert(id, ctor).is_some() {
            log::warn!(
                "state '{id}' registered twice; keeping the newer constructor"
            );
        }
    }

    /// Whether a tag has a registered constructor.
    #[must_use]
    pub fn contains(&self, id: StateId) -> bool {
        self.ctors.contains_key(&id)
    }

    /// Number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    /// Whether no tags are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }

    /// Construct the state for a tag, if registered.
    pub(crate) fn create(
        &self,
        id: StateId,
        actor: &mut Actor,
    ) -> Option<Box<dyn BehaviorState>> {
        self.ctors.get(&id).map(|ctor| ctor(actor))
    }
}
