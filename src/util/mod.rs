//! Shared utilities for the rig core.
//!
//! Currently just frame timing for hosts that do not bring their own
//! scheduler clock.

pub mod frame_timing;
