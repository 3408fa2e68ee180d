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

//! Camera configuration conversion and pivot-stable navigation for 3D
//! viewers.
//!
//! A camera description exported by an authoring tool (eye, target, up
//! hint, lens) is validated and converted into a [`camera::CameraPose`],
//! then applied to the live [`camera::Camera`] held by a
//! [`camera::Viewport`]. Pointer input then drives a
//! [`navigation::NavigationEngine`] that orbits around a point that stays
//! fixed on screen, pans in the view plane and zooms towards the cursor.
//!
//! # Key entry points
//!
//! - [`config::CameraConfig`] - a parsed camera config with its scene list
//! - [`camera::apply_description`] - validate, convert and apply in one go
//! - [`navigation::NavigationEngine`] - orbit/pan/zoom state machine
//! - [`calibration::CalibrationConsole`] - keyboard tools for matching an
//!   unknown source convention
//! - [`options::Options`] - TOML settings for the lens, sensitivities and
//!   key bindings
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use viewcam::camera::{apply_description, Camera, Viewport};
//! use viewcam::config::ConversionStrategy;
//!
//! let raw = serde_json::json!({
//!     "current_camera": {
//!         "position": [1.0, 2.0, 3.0],
//!         "target": [0.0, 0.0, 0.0],
//!         "field_of_view": 40.0
//!     }
//! });
//! let mut viewport =
//!     Viewport::with_camera(Camera::default(), Vec3::ZERO, 800, 600);
//! let strategy = ConversionStrategy::default();
//! let report = apply_description(&raw, strategy, &mut viewport)?;
//! assert!(report.warnings.is_empty());
//! assert_eq!(viewport.target(), Some(Vec3::ZERO));
//! # Ok::<(), viewcam::error::CameraError>(())
//! ```

pub mod calibration;
pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod navigation;
pub mod options;
pub mod scene;
