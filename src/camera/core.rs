use glam::{Mat4, Vec3};

use crate::scene::Transform;

/// Projection mode of a rig camera.
///
/// The variant decides which zoom strategy drives the camera and which
/// scalar that strategy controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Orthographic projection.
    Orthographic {
        /// Vertical half-height of the view volume.
        size: f32,
    },
    /// Perspective projection.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f32,
    },
}

/// Camera handle: projection parameters plus placement relative to the
/// rig pivot.
///
/// The camera is a child of the rig; `local_position` and `local_target`
/// are expressed in rig-local space and follow the rig transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Projection variant and its controlled scalar.
    pub projection: Projection,
    /// Position relative to the rig pivot, in rig-local space.
    pub local_position: Vec3,
    /// Aim point relative to the rig pivot, in rig-local space.
    pub local_target: Vec3,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Orthographic camera with the given view half-height.
    #[must_use]
    pub fn orthographic(size: f32) -> Self {
        Self {
            projection: Projection::Orthographic { size },
            local_position: Vec3::ZERO,
            local_target: Vec3::ZERO,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Perspective camera with the given vertical field of view in
    /// degrees.
    #[must_use]
    pub fn perspective(fovy: f32) -> Self {
        Self {
            projection: Projection::Perspective { fovy },
            local_position: Vec3::ZERO,
            local_target: Vec3::ZERO,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Whether the camera is orthographic.
    #[must_use]
    pub fn is_orthographic(&self) -> bool {
        matches!(self.projection, Projection::Orthographic { .. })
    }

    /// World-space eye position for a rig transform.
    #[must_use]
    pub fn world_eye(&self, rig: &Transform) -> Vec3 {
        rig.position + rig.transform_direction(self.local_position)
    }

    /// World-space aim point for a rig transform.
    #[must_use]
    pub fn world_target(&self, rig: &Transform) -> Vec3 {
        rig.position + rig.transform_direction(self.local_target)
    }

    /// Combined view-projection matrix for a rig transform and viewport
    /// aspect ratio (width / height).
    #[must_use]
    pub fn view_projection(&self, rig: &Transform, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(
            self.world_eye(rig),
            self.world_target(rig),
            Vec3::Y,
        );
        let proj = match self.projection {
            Projection::Orthographic { size } => Mat4::orthographic_rh(
                -size * aspect,
                size * aspect,
                -size,
                size,
                self.znear,
                self.zfar,
            ),
            Projection::Perspective { fovy } => Mat4::perspective_rh(
                fovy.to_radians(),
                aspect,
                self.znear,
                self.zfar,
            ),
        };
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_variant_is_detectable() {
        assert!(Camera::orthographic(5.0).is_orthographic());
        assert!(!Camera::perspective(60.0).is_orthographic());
    }

    #[test]
    fn world_eye_follows_rig_position_and_yaw() {
        let mut cam = Camera::perspective(60.0);
        cam.local_position = Vec3::new(0.0, 14.0, -10.0);

        let mut rig = Transform::from_position(Vec3::new(5.0, 0.0, 5.0));
        let eye = cam.world_eye(&rig);
        assert!((eye - Vec3::new(5.0, 14.0, -5.0)).length() < 1e-4);

        // A quarter turn swings the offset around the pivot.
        rig.rotate_yaw(90.0);
        let eye = cam.world_eye(&rig);
        assert!((eye - Vec3::new(-5.0, 14.0, 5.0)).length() < 1e-3);
    }

    #[test]
    fn view_projection_is_finite_for_both_projections() {
        let rig = Transform::default();
        for mut cam in [Camera::orthographic(5.0), Camera::perspective(60.0)]
        {
            cam.local_position = Vec3::new(0.0, 14.0, -10.0);
            cam.local_target = Vec3::Y * 2.0;
            let m = cam.view_projection(&rig, 16.0 / 9.0);
            assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
        }
    }
}
