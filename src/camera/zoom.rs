//! Projection-specific zoom strategies.
//!
//! The rig controller never does zoom math itself: it hands the request
//! to whichever strategy was selected for the camera's projection at
//! construction time. Each strategy owns its controlled scalar and
//! writes the result back through the camera handle.

use glam::{Vec2, Vec3};

use super::core::{Camera, Projection};

/// Projection-specific zoom algorithm bound to one camera.
///
/// Both operations are monotonic and clamped: `zoom_in` never takes the
/// controlled scalar below its limit, `zoom_out` never above it. The
/// limits differ per call (near vs. far). Compute-then-clamp keeps
/// repeated calls at a limit exact instead of drifting across many small
/// frame-sized steps.
pub trait ZoomStrategy {
    /// Zoom in by `amount`, flooring the controlled scalar at `limit`.
    fn zoom_in(&mut self, camera: &mut Camera, amount: f32, limit: f32);

    /// Zoom out by `amount`, capping the controlled scalar at `limit`.
    fn zoom_out(&mut self, camera: &mut Camera, amount: f32, limit: f32);

    /// Current value of the controlled scalar.
    fn level(&self) -> f32;

    /// Strategy name for logging.
    fn name(&self) -> &'static str;
}

/// Drives the orthographic view half-height.
#[derive(Debug)]
pub struct OrthographicZoom {
    size: f32,
}

impl OrthographicZoom {
    /// Strategy seeded with a starting half-height, applied to the
    /// camera immediately.
    #[must_use]
    pub fn new(camera: &mut Camera, starting_zoom: f32) -> Self {
        let strategy = Self {
            size: starting_zoom,
        };
        strategy.apply(camera);
        strategy
    }

    fn apply(&self, camera: &mut Camera) {
        if let Projection::Orthographic { size } = &mut camera.projection {
            *size = self.size;
        }
    }
}

impl ZoomStrategy for OrthographicZoom {
    fn zoom_in(&mut self, camera: &mut Camera, amount: f32, limit: f32) {
        self.size = (self.size - amount).max(limit);
        self.apply(camera);
    }

    fn zoom_out(&mut self, camera: &mut Camera, amount: f32, limit: f32) {
        self.size = (self.size + amount).min(limit);
        self.apply(camera);
    }

    fn level(&self) -> f32 {
        self.size
    }

    fn name(&self) -> &'static str {
        "orthographic"
    }
}

/// Drives a perspective camera's distance from the rig pivot.
///
/// The configured rig offset fixes the direction the camera sits along;
/// zooming rescales only the distance, so the offset's height:depth
/// ratio is preserved and the camera slides along a straight line
/// toward the pivot.
#[derive(Debug)]
pub struct PerspectiveZoom {
    distance: f32,
    direction: Vec3,
}

impl PerspectiveZoom {
    /// Strategy seeded with the rig offset (distance behind pivot,
    /// height above pivot) and a starting distance.
    #[must_use]
    pub fn new(offset: Vec2, starting_zoom: f32) -> Self {
        let direction = Vec3::new(0.0, offset.y.abs(), -offset.x.abs())
            .normalize_or_zero();
        Self {
            distance: starting_zoom,
            direction,
        }
    }

    fn apply(&self, camera: &mut Camera) {
        camera.local_position = self.direction * self.distance;
    }
}

impl ZoomStrategy for PerspectiveZoom {
    fn zoom_in(&mut self, camera: &mut Camera, amount: f32, limit: f32) {
        self.distance = (self.distance - amount).max(limit);
        self.apply(camera);
    }

    fn zoom_out(&mut self, camera: &mut Camera, amount: f32, limit: f32) {
        self.distance = (self.distance + amount).min(limit);
        self.apply(camera);
    }

    fn level(&self) -> f32 {
        self.distance
    }

    fn name(&self) -> &'static str {
        "perspective"
    }
}

/// Select the strategy matching the camera's projection, seeded with the
/// starting zoom.
pub fn for_camera(
    camera: &mut Camera,
    offset: Vec2,
    starting_zoom: f32,
) -> Box<dyn ZoomStrategy> {
    match camera.projection {
        Projection::Orthographic { .. } => {
            Box::new(OrthographicZoom::new(camera, starting_zoom))
        }
        Projection::Perspective { .. } => {
            Box::new(PerspectiveZoom::new(offset, starting_zoom))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ortho_size(camera: &Camera) -> f32 {
        match camera.projection {
            Projection::Orthographic { size } => size,
            Projection::Perspective { .. } => panic!("not orthographic"),
        }
    }

    #[test]
    fn orthographic_zoom_in_clamps_at_near_limit() {
        let mut cam = Camera::orthographic(5.0);
        let mut zoom = OrthographicZoom::new(&mut cam, 5.0);

        // Overshooting the floor lands exactly on it, never below.
        zoom.zoom_in(&mut cam, 10.0, 2.0);
        assert_eq!(zoom.level(), 2.0);
        assert_eq!(ortho_size(&cam), 2.0);
    }

    #[test]
    fn orthographic_zoom_is_idempotent_at_the_limit() {
        let mut cam = Camera::orthographic(5.0);
        let mut zoom = OrthographicZoom::new(&mut cam, 2.0);

        for _ in 0..100 {
            zoom.zoom_in(&mut cam, 0.013, 2.0);
        }
        assert_eq!(zoom.level(), 2.0);

        for _ in 0..100 {
            zoom.zoom_out(&mut cam, 0.013, 16.0);
        }
        for _ in 0..100 {
            zoom.zoom_out(&mut cam, 100.0, 16.0);
        }
        assert_eq!(zoom.level(), 16.0);
    }

    #[test]
    fn orthographic_round_trip_away_from_limits() {
        let mut cam = Camera::orthographic(5.0);
        let mut zoom = OrthographicZoom::new(&mut cam, 5.0);

        zoom.zoom_in(&mut cam, 1.5, 2.0);
        zoom.zoom_out(&mut cam, 1.5, 16.0);
        assert!((zoom.level() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn perspective_zoom_moves_camera_along_offset_direction() {
        let offset = Vec2::new(10.0, 14.0);
        let mut cam = Camera::perspective(60.0);
        let mut zoom = PerspectiveZoom::new(offset, 5.0);

        zoom.zoom_in(&mut cam, 1.0, 2.0);
        assert!((zoom.level() - 4.0).abs() < 1e-5);
        assert!((cam.local_position.length() - 4.0).abs() < 1e-4);

        // Height:depth ratio of the configured offset is preserved.
        let ratio = cam.local_position.y / -cam.local_position.z;
        assert!((ratio - 14.0 / 10.0).abs() < 1e-4);
    }

    #[test]
    fn perspective_zoom_clamps_both_directions() {
        let mut cam = Camera::perspective(60.0);
        let mut zoom = PerspectiveZoom::new(Vec2::new(10.0, 14.0), 5.0);

        zoom.zoom_in(&mut cam, 50.0, 2.0);
        assert_eq!(zoom.level(), 2.0);
        zoom.zoom_in(&mut cam, 0.1, 2.0);
        assert_eq!(zoom.level(), 2.0);

        zoom.zoom_out(&mut cam, 50.0, 16.0);
        assert_eq!(zoom.level(), 16.0);
        zoom.zoom_out(&mut cam, 0.1, 16.0);
        assert_eq!(zoom.level(), 16.0);
    }

    #[test]
    fn strategy_selection_follows_projection() {
        let offset = Vec2::new(10.0, 14.0);

        let mut ortho = Camera::orthographic(3.0);
        let strategy = for_camera(&mut ortho, offset, 5.0);
        assert_eq!(strategy.name(), "orthographic");
        // Seeding applies the starting zoom to the camera.
        assert_eq!(ortho_size(&ortho), 5.0);

        let mut persp = Camera::perspective(60.0);
        let strategy = for_camera(&mut persp, offset, 5.0);
        assert_eq!(strategy.name(), "perspective");
    }
}
