use glam::Vec3;

use super::core::{Camera, Projection};

/// Normalized camera placement, independent of any live camera.
///
/// Produced fresh by a conversion and consumed once by
/// [`apply_pose`](super::applier::apply_pose).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in renderer units.
    pub position: Vec3,
    /// Look-at point in renderer units.
    pub target: Vec3,
    /// Up hint.
    pub up: Vec3,
    /// Vertical FOV override; `None` keeps the live camera's FOV.
    pub fov_deg: Option<f32>,
    /// Focal length override in millimetres.
    pub focal_length_mm: Option<f32>,
    /// Film gauge to pair with the focal length; `None` means 35 mm.
    pub film_gauge_mm: Option<f32>,
}

impl CameraPose {
    /// Pose with only placement set; lens parameters are left alone.
    #[must_use]
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            position,
            target,
            up,
            fov_deg: None,
            focal_length_mm: None,
            film_gauge_mm: None,
        }
    }

    /// Snapshot of a live camera and its pivot target.
    #[must_use]
    pub fn capture(camera: &Camera, target: Vec3) -> Self {
        Self {
            position: camera.position,
            target,
            up: camera.up,
            fov_deg: camera.fovy(),
            focal_length_mm: camera.focal_length(),
            film_gauge_mm: match camera.projection() {
                Projection::Perspective { film_gauge, .. } => Some(film_gauge),
                Projection::Orthographic { .. } => None,
            },
        }
    }

    /// Eye-to-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }
}
