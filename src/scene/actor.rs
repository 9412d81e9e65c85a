use glam::Vec3;

use crate::camera::Camera;
use crate::scene::Transform;

/// A scene actor the rig core binds to: a world transform plus an
/// optional camera child.
///
/// The camera rig actor carries a camera; plain unit actors driven by
/// behavior states do not.
#[derive(Debug, Default)]
pub struct Actor {
    /// World transform, mutated only by whichever controller or state
    /// machine owns the actor.
    pub transform: Transform,
    /// Camera child, present only on camera-rig actors.
    pub camera: Option<Camera>,
}

impl Actor {
    /// Actor at a position with no camera child.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            transform: Transform::from_position(position),
            camera: None,
        }
    }

    /// Attach a camera child.
    #[must_use]
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }
}
