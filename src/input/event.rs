use glam::Vec3;

/// Input requests producers publish toward the rig.
///
/// Each variant maps to one accumulator channel; any number of producers
/// may emit any mix of them between two ticks, in any order.
///
/// # Example
///
/// ```
/// use camrig::input::{InputBus, InputEvent};
/// use glam::Vec3;
///
/// let mut bus = InputBus::new();
/// bus.publish(InputEvent::Move {
///     direction: Vec3::new(0.0, 0.0, 1.0),
/// });
/// bus.publish(InputEvent::Zoom { amount: -1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Move contribution in rig-local space.
    Move {
        /// Direction * magnitude; x strafes, z moves in/out.
        direction: Vec3,
    },
    /// Rotate contribution around world up.
    Rotate {
        /// Signed rotate magnitude.
        amount: f32,
    },
    /// Zoom contribution.
    Zoom {
        /// Signed zoom amount (negative = in, positive = out).
        amount: f32,
    },
    /// Focus-on-target request.
    Focus {
        /// Whether the snap is being requested; `false` is the
        /// level-triggered steady state.
        active: bool,
    },
}
