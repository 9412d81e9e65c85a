//! Scene-side handle types the rig core drives.
//!
//! The engine's scene graph owns richer objects; the rig core only needs
//! the transform it mutates and, for the camera rig itself, the camera
//! child it zooms.

/// Actor handle: transform plus optional camera child.
pub mod actor;
/// World transform with yaw-only rotation.
pub mod transform;

pub use actor::Actor;
pub use transform::Transform;
