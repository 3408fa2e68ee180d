//! Pushing a [`CameraPose`] onto the live camera.

use glam::Vec3;
use serde_json::Value;

use super::controller::CameraRig;
use super::core::{Camera, DEFAULT_FILM_GAUGE_MM};
use super::pose::CameraPose;
use super::viewport::Viewport;
use crate::config::{validate, ConversionStrategy};
use crate::error::CameraError;

/// Lens request the camera could not honour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LensRequest {
    /// Vertical FOV in degrees.
    FieldOfView(f32),
    /// Focal length in millimetres.
    FocalLength(f32),
}

/// Non-fatal condition raised while applying a pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApplyWarning {
    /// A lens parameter was requested on a non-perspective camera and
    /// skipped.
    UnsupportedProjection(LensRequest),
}

/// What happened during an apply besides the placement itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    /// Skipped requests, in the order they were encountered.
    pub warnings: Vec<ApplyWarning>,
}

impl ApplyReport {
    /// Whether the pose was applied without any skipped request.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    fn skip(&mut self, request: LensRequest) {
        log::warn!(
            "only perspective cameras support lens settings; \
             ignoring {request:?}"
        );
        self.warnings
            .push(ApplyWarning::UnsupportedProjection(request));
    }
}

/// Apply `pose` to `camera` and its pivot `target`.
///
/// Placement first (position, target, up, then look-at so the new up is
/// used), then lens: a FOV override if present, then a focal length if
/// present. A missing FOV keeps the camera's current one. Lens requests on
/// an orthographic camera are skipped with a warning. The projection
/// matrix is current when this returns.
pub fn apply_pose(
    pose: &CameraPose,
    camera: &mut Camera,
    target: &mut Vec3,
) -> ApplyReport {
    let mut report = ApplyReport::default();
    CameraRig::new(camera, target).place(pose);

    if let Some(fov) = pose.fov_deg {
        if camera.set_fovy(fov) {
            log::debug!("field of view set to {fov}°");
        } else {
            report.skip(LensRequest::FieldOfView(fov));
        }
    }

    if let Some(focal) = pose.focal_length_mm {
        let gauge = pose.film_gauge_mm.unwrap_or(DEFAULT_FILM_GAUGE_MM);
        if camera.set_focal_length(focal, gauge) {
            log::debug!("focal length set to {focal}mm on a {gauge}mm gauge");
        } else {
            report.skip(LensRequest::FocalLength(focal));
        }
    }

    report
}

/// Apply `pose` to the camera and target held by `viewport`.
pub fn apply_to_viewport(
    pose: &CameraPose,
    viewport: &mut Viewport,
) -> Result<ApplyReport, CameraError> {
    let (camera, target) = viewport.rig()?.into_parts();
    Ok(apply_pose(pose, camera, target))
}

/// Validate, convert and apply a raw camera description in one step.
///
/// Nothing is mutated unless validation passes and the viewport is ready.
pub fn apply_description(
    raw: &Value,
    strategy: ConversionStrategy,
    viewport: &mut Viewport,
) -> Result<ApplyReport, CameraError> {
    let description = validate(raw)?;
    if !viewport.is_ready() {
        return Err(CameraError::UninitializedTarget);
    }
    let pose = strategy.convert(&description);
    log::info!(
        "applying camera config ({strategy:?}): eye {} → target {}",
        pose.position,
        pose.target
    );
    apply_to_viewport(&pose, viewport)
}

/// Near plane never goes below this.
const MIN_NEAR: f32 = 0.001;

/// Fit the clip planes to a model whose longest edge is `max_dim`, so
/// neither a tiny nor a huge model gets clipped.
pub fn fit_clip_planes(camera: &mut Camera, max_dim: f32) {
    let near = (max_dim * 0.01).clamp(MIN_NEAR, 0.1);
    let far = (max_dim * 100.0).max(1000.0);
    camera.set_clip_planes(near, far);
}
