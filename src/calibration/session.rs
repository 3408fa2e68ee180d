use glam::Vec3;

use super::transform::{TransformCandidate, TransformCycler};
use crate::camera::{apply_to_viewport, ApplyReport, CameraPose, Viewport};
use crate::config::CameraDescription;
use crate::error::CameraError;

/// FOV assumed for a source description that does not state one, when
/// comparing against the live camera.
const ASSUMED_SOURCE_FOV: f32 = 45.0;

/// Up hint used for a source description without one; authoring tools
/// that need calibration are usually Z-up.
const SOURCE_UP: Vec3 = Vec3::Z;

/// Interactive axis-remap test over one source description.
///
/// Position and target go through the current [`TransformCandidate`] with
/// the description's `unit_scale` (1 when absent); the up hint goes
/// through it unscaled.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationSession {
    source: CameraDescription,
    cycler: TransformCycler,
}

/// Snapshot for the "current transform" report.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformInfo {
    /// Position of the candidate in the cycle.
    pub index: usize,
    /// The candidate.
    pub candidate: TransformCandidate,
    /// The source description under test.
    pub source: CameraDescription,
    /// Live camera and target.
    pub live: CameraPose,
}

/// Source values next to live values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Per-axis `|live − source|` of the eye position.
    pub position_delta: Vec3,
    /// Per-axis `|live − source|` of the target.
    pub target_delta: Vec3,
    /// `|live FOV − source FOV|`; `None` for a camera without a FOV.
    pub fov_delta: Option<f32>,
}

impl CalibrationSession {
    /// Session over `source`, on the first candidate.
    #[must_use]
    pub fn start(source: CameraDescription) -> Self {
        log::info!("transform test started; candidates:");
        for (i, candidate) in TransformCandidate::ALL.iter().enumerate() {
            log::info!("  {i}: {}", candidate.name());
        }
        Self {
            source,
            cycler: TransformCycler::new(),
        }
    }

    /// The description under test.
    #[must_use]
    pub fn source(&self) -> &CameraDescription {
        &self.source
    }

    /// The candidate cursor.
    #[must_use]
    pub fn cycler(&self) -> &TransformCycler {
        &self.cycler
    }

    /// The candidate cursor, mutably.
    pub fn cycler_mut(&mut self) -> &mut TransformCycler {
        &mut self.cycler
    }

    /// Pose the current candidate assigns to the source.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        let candidate = self.cycler.current();
        let scale = self.source.unit_scale.unwrap_or(1.0);
        CameraPose::look_at(
            candidate.apply(self.source.position, scale),
            candidate.apply(self.source.target, scale),
            candidate.apply(self.source.up_vector.unwrap_or(SOURCE_UP), 1.0),
        )
    }

    /// Place the camera with the current candidate.
    ///
    /// # Errors
    ///
    /// [`CameraError::UninitializedTarget`] when the viewport is not
    /// ready.
    pub fn apply(
        &self,
        viewport: &mut Viewport,
    ) -> Result<ApplyReport, CameraError> {
        let pose = self.pose();
        log::info!(
            "transform {}: {} | eye {} target {} up {} distance {:.4}",
            self.cycler.index(),
            self.cycler.current().name(),
            pose.position,
            pose.target,
            pose.up,
            pose.distance()
        );
        apply_to_viewport(&pose, viewport)
    }

    /// Current candidate and live camera values.
    ///
    /// # Errors
    ///
    /// [`CameraError::UninitializedTarget`] when the viewport is not
    /// ready.
    pub fn info(
        &self,
        viewport: &Viewport,
    ) -> Result<TransformInfo, CameraError> {
        let live = live_pose(viewport)?;
        let info = TransformInfo {
            index: self.cycler.index(),
            candidate: self.cycler.current(),
            source: self.source,
            live,
        };
        log::info!("transform {}: {}", info.index, info.candidate.name());
        log::info!("source: {:?}", info.source);
        log::info!(
            "live: eye {} target {} up {} fov {:?}",
            live.position,
            live.target,
            live.up,
            live.fov_deg
        );
        Ok(info)
    }

    /// Raw source values against the live camera.
    ///
    /// # Errors
    ///
    /// [`CameraError::UninitializedTarget`] when the viewport is not
    /// ready.
    pub fn compare(
        &self,
        viewport: &Viewport,
    ) -> Result<Comparison, CameraError> {
        let live = live_pose(viewport)?;
        let source_fov =
            self.source.field_of_view.unwrap_or(ASSUMED_SOURCE_FOV);
        let comparison = Comparison {
            position_delta: (live.position - self.source.position).abs(),
            target_delta: (live.target - self.source.target).abs(),
            fov_delta: live.fov_deg.map(|fov| (fov - source_fov).abs()),
        };
        log::info!(
            "source: eye {} target {} up {:?} fov {:?}",
            self.source.position,
            self.source.target,
            self.source.up_vector,
            self.source.field_of_view
        );
        log::info!(
            "live: eye {} target {} up {} fov {:?}",
            live.position,
            live.target,
            live.up,
            live.fov_deg
        );
        log::info!(
            "difference: eye {} target {} fov {:?}",
            comparison.position_delta,
            comparison.target_delta,
            comparison.fov_delta
        );
        Ok(comparison)
    }
}

fn live_pose(viewport: &Viewport) -> Result<CameraPose, CameraError> {
    match (viewport.camera(), viewport.target()) {
        (Some(camera), Some(target)) => Ok(CameraPose::capture(camera, target)),
        _ => Err(CameraError::UninitializedTarget),
    }
}
