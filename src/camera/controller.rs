//! The rig controller: consumes each frame's accumulated input and
//! drives the rig transform and camera.

use glam::{Vec2, Vec3};

use super::accumulator::{FrameInput, InputAccumulator};
use super::bounds::BoundsRect;
use super::core::Camera;
use super::zoom::{self, ZoomStrategy};
use crate::error::RigError;
use crate::input::{InputBus, InputEvent, Subscription};
use crate::options::Options;
use crate::scene::{Actor, Transform};

/// Owns the rig transform and camera and resolves each frame's
/// accumulated input into one bounded camera update.
///
/// Input producers never touch the camera: they publish events on an
/// [`InputBus`] (or call the accumulator mutators directly), and
/// [`tick`](Self::tick) consumes the frame totals exactly once, applying
/// movement, focus snap, rotation, and zoom in that order. Focus is
/// authoritative: it overwrites any movement applied the same tick.
pub struct RigController {
    transform: Transform,
    camera: Camera,
    zoom: Box<dyn ZoomStrategy>,
    input: InputAccumulator,
    subscription: Option<Subscription>,

    lateral_speed: f32,
    in_out_speed: f32,
    rotate_speed: f32,
    zoom_speed: f32,
    near_limit: f32,
    far_limit: f32,
    bounds: BoundsRect,
}

impl RigController {
    /// Build a controller around a rig actor.
    ///
    /// The actor's camera child is placed at the configured offset
    /// behind and above the pivot, aimed at the look-at point, and bound
    /// to the zoom strategy matching its projection. The strategy choice
    /// is made once, here.
    ///
    /// # Errors
    ///
    /// [`RigError::MissingCamera`] if the actor has no camera child: a
    /// rig without a camera cannot select a zoom strategy, so
    /// construction fails fast rather than proceeding with a null
    /// strategy.
    pub fn new(actor: Actor, options: &Options) -> Result<Self, RigError> {
        let Actor { transform, camera } = actor;
        let mut camera = camera.ok_or(RigError::MissingCamera)?;

        let offset = Vec2::from(options.camera.offset);
        camera.local_position =
            Vec3::new(0.0, offset.y.abs(), -offset.x.abs());
        camera.local_target = Vec3::Y * options.camera.look_at_offset;

        let zoom =
            zoom::for_camera(&mut camera, offset, options.zoom.starting_zoom);
        log::debug!("rig controller bound to {} zoom strategy", zoom.name());

        Ok(Self {
            transform,
            camera,
            zoom,
            input: InputAccumulator::new(),
            subscription: None,
            lateral_speed: options.camera.lateral_speed,
            in_out_speed: options.camera.in_out_speed,
            rotate_speed: options.camera.rotate_speed,
            zoom_speed: options.zoom.speed,
            near_limit: options.zoom.near_limit,
            far_limit: options.zoom.far_limit,
            bounds: BoundsRect::new(
                Vec2::from(options.bounds.min),
                Vec2::from(options.bounds.max),
            ),
        })
    }

    /// Subscribe to an input bus, replacing any previous subscription.
    pub fn activate(&mut self, bus: &mut InputBus) {
        self.subscription = Some(bus.subscribe());
    }

    /// Drop the bus subscription; published events no longer reach this
    /// controller.
    pub fn deactivate(&mut self) {
        self.subscription = None;
    }

    /// Direct access to the accumulator for producers that bypass the
    /// bus (scripted input, tests).
    pub fn input_mut(&mut self) -> &mut InputAccumulator {
        &mut self.input
    }

    /// Rig world transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Camera handle, reflecting the latest zoom state.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current zoom level. Orthographic: view half-height; perspective:
    /// distance from the pivot.
    #[must_use]
    pub fn zoom_level(&self) -> f32 {
        self.zoom.level()
    }

    /// Run one frame: drain the bus subscription, take the accumulated
    /// totals, and apply them over `dt` seconds.
    ///
    /// Call this from the host's late per-frame hook, after all input
    /// producers have fired for the frame, so the totals reflect the
    /// whole frame.
    ///
    /// `focus_target` is the bound focus actor's current position, if
    /// one is bound. It is snapshotted here, once per tick, so a focus
    /// request snaps to where the target is *now*, not where it was when
    /// the request was made. `None` turns focus requests into no-ops.
    pub fn tick(&mut self, dt: f32, focus_target: Option<Vec3>) {
        self.drain_bus();
        let frame = self.input.take();
        self.apply(frame, dt, focus_target);
    }

    fn drain_bus(&mut self) {
        let Some(subscription) = &self.subscription else {
            return;
        };
        for event in subscription.drain() {
            match event {
                InputEvent::Move { direction } => {
                    self.input.add_move(direction);
                }
                InputEvent::Rotate { amount } => {
                    self.input.add_rotate(amount);
                }
                InputEvent::Zoom { amount } => self.input.add_zoom(amount),
                InputEvent::Focus { active } => {
                    self.input.request_focus(active);
                }
            }
        }
    }

    /// Apply one frame of totals. Step order is the contract:
    /// move-then-clamp, focus snap, rotate, zoom — last writer wins on
    /// position, which makes focus authoritative over movement.
    fn apply(
        &mut self,
        frame: FrameInput,
        dt: f32,
        focus_target: Option<Vec3>,
    ) {
        if frame.movement != Vec3::ZERO {
            let scaled = Vec3::new(
                frame.movement.x * self.lateral_speed,
                frame.movement.y,
                frame.movement.z * self.in_out_speed,
            );
            self.transform.position +=
                self.transform.transform_direction(scaled) * dt;
            self.lock_in_bounds();
        }

        if frame.focus {
            if let Some(target) = focus_target {
                self.transform.position = target;
            } else {
                log::debug!("focus requested with no bound target");
            }
        }

        if frame.rotate != 0.0 {
            self.transform
                .rotate_yaw(frame.rotate * dt * self.rotate_speed);
        }

        if frame.zoom < 0.0 {
            self.zoom.zoom_in(
                &mut self.camera,
                dt * frame.zoom.abs() * self.zoom_speed,
                self.near_limit,
            );
        } else if frame.zoom > 0.0 {
            self.zoom.zoom_out(
                &mut self.camera,
                dt * frame.zoom * self.zoom_speed,
                self.far_limit,
            );
        }
    }

    /// Clamp the ground-plane position into bounds; height is never
    /// clamped.
    fn lock_in_bounds(&mut self) {
        let clamped = self.bounds.clamp(Vec2::new(
            self.transform.position.x,
            self.transform.position.z,
        ));
        self.transform.position.x = clamped.x;
        self.transform.position.z = clamped.y;
    }
}
