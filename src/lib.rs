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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
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

//! Navigation controller for virtual-globe cameras.
//!
//! A navigation widget exposes four knobs (zoom ring, tilt ring, compass
//! ring and pan joystick). This crate turns pointer drags on those knobs
//! into five continuous control values, relaxes released knobs back to
//! rest every frame, and converts the values into camera motion for the
//! active scene mode (flat 2D, oblique Columbus view, or a full 3D
//! ellipsoid).
//!
//! # Key entry points
//!
//! - [`navigation::Navigation`] - per-widget controller; call
//!   [`update`](navigation::Navigation::update) once per frame
//! - [`camera::CameraControl`] - the camera capability the controller
//!   drives, with [`camera::GlobeCamera`] as a ready-made implementation
//! - [`control::ControlState`] - clamped control values with change
//!   listeners for the presentation layer
//! - [`options::NavigationOptions`] - feature flags, limits and rates,
//!   loadable from TOML presets
//!
//! # Frame flow
//!
//! Pointer events are applied immediately through
//! [`input::PointerGestureMapper`]. Once per frame the controller runs the
//! decay step, then hands the control values to the
//! [`translate::ModeTranslator`] of the current [`navigation::SceneMode`].

pub mod camera;
pub mod control;
pub mod error;
pub mod geometry;
pub mod input;
pub mod navigation;
pub mod options;
pub mod translate;
