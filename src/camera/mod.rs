//! Camera system for 3D scene viewing.
//!
//! Provides the live camera and its projection, the viewport that pairs it
//! with a pivot target, pose application, pivot resolution and the
//! orbit/pan/zoom primitives the navigation engine drives.

/// Applying poses onto the live camera.
pub mod applier;
/// Orbit, pan, zoom, fit and reset primitives over a camera and target.
pub mod controller;
/// Core camera struct and projection types.
pub mod core;
/// Rotation-center resolution for drag gestures.
pub mod pivot;
/// Normalized camera placement.
pub mod pose;
/// Camera + pivot target + drawable size.
pub mod viewport;

pub use applier::{
    apply_description, apply_pose, apply_to_viewport, fit_clip_planes,
    ApplyReport, ApplyWarning, LensRequest,
};
pub use controller::CameraRig;
pub use core::{Camera, Projection, DEFAULT_FILM_GAUGE_MM};
pub use pivot::{pick_or_project, PivotResolver, ScreenCenterPivot};
pub use pose::CameraPose;
pub use viewport::Viewport;
