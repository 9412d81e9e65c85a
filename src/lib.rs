// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Input-driven camera rig controller for interactive 3D scenes.
//!
//! camrig resolves per-frame input requests from any number of producers
//! (keyboard, mouse, gamepad, scripted) into one bounded camera update
//! per tick, delegating zoom to a projection-specific strategy. A
//! companion tag-driven state machine runs per-actor behaviors.
//!
//! # Key entry points
//!
//! - [`camera::RigController`] - the per-tick consumer of accumulated
//!   input
//! - [`input::InputBus`] - producer-to-controller event fan-out with
//!   RAII subscriptions
//! - [`behavior::StateDriver`] - tag-driven behavior state machine
//! - [`options::Options`] - session configuration (placement, speeds,
//!   zoom limits, bounds)
//!
//! # Architecture
//!
//! Producers publish [`input::InputEvent`]s at any point between ticks;
//! they never touch the camera. Each tick, the controller drains its bus
//! subscription into an [`camera::InputAccumulator`], takes the frame
//! totals by value, and applies movement, focus snap, rotation, and zoom
//! in that order. All mutation is single-threaded and synchronous within
//! one tick.

pub mod behavior;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;

pub use error::RigError;
