use glam::{Quat, Vec3};

/// World transform of a rig or actor: position plus yaw about world up.
///
/// Yaw is the only rotation the rig ever applies; pitch and roll stay
/// fixed by construction, so a single wrapped angle is the whole
/// orientation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Rotation around the world up axis, in degrees, wrapped to
    /// [0, 360).
    pub yaw: f32,
}

impl Transform {
    /// Transform at a position with no rotation.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
        }
    }

    /// Orientation as a quaternion about world up.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians())
    }

    /// Map a direction from rig-local space into world space.
    #[must_use]
    pub fn transform_direction(&self, local: Vec3) -> Vec3 {
        self.rotation() * local
    }

    /// Rotate around world up by `degrees`, wrapping into [0, 360).
    pub fn rotate_yaw(&mut self, degrees: f32) {
        self.yaw = (self.yaw + degrees).rem_euclid(360.0);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
        }
    }
}
