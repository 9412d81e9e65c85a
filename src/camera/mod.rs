//! Camera rig core: per-frame input resolution, bounded movement, and
//! projection-specific zoom.

/// Per-frame input totals and their accumulator.
pub mod accumulator;
/// Ground-plane movement bounds.
pub mod bounds;
/// The rig controller consuming frame input.
pub mod controller;
/// Camera handle and projection types.
pub mod core;
/// Projection-specific zoom strategies.
pub mod zoom;

pub use accumulator::{FrameInput, InputAccumulator};
pub use bounds::BoundsRect;
pub use controller::RigController;
pub use core::{Camera, Projection};
pub use zoom::{OrthographicZoom, PerspectiveZoom, ZoomStrategy};
