use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::description::CameraDescription;
use crate::camera::{CameraPose, DEFAULT_FILM_GAUGE_MM};

/// Unit scale used when a description does not carry one.
pub const DEFAULT_UNIT_SCALE: f32 = 25.4;

/// Up hint used when a description does not carry one.
pub const DEFAULT_UP: Vec3 = Vec3::Y;

/// How source coordinates map into renderer coordinates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[cfg_attr(feature = "binary", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ConversionStrategy {
    /// Multiply position and target by `unit_scale` (default 25.4), keep
    /// the source axes as they are. Up is not scaled.
    #[default]
    UniformScale,
    /// Z-up to Y-up remap `(x, y, z) → (x, z, −y)` without unit scaling,
    /// on a 35 mm film gauge.
    AxisSwap,
}

impl ConversionStrategy {
    /// Every strategy, default first.
    pub const ALL: [Self; 2] = [Self::UniformScale, Self::AxisSwap];

    /// Produce the pose this strategy assigns to `desc`.
    #[must_use]
    pub fn convert(self, desc: &CameraDescription) -> CameraPose {
        match self {
            Self::UniformScale => uniform_scale(desc),
            Self::AxisSwap => axis_swap(desc),
        }
    }

    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UniformScale => "uniform scale",
            Self::AxisSwap => "axis swap",
        }
    }
}

/// Convert with the default strategy.
#[must_use]
pub fn convert(desc: &CameraDescription) -> CameraPose {
    ConversionStrategy::default().convert(desc)
}

fn uniform_scale(desc: &CameraDescription) -> CameraPose {
    let scale = desc.unit_scale.unwrap_or(DEFAULT_UNIT_SCALE);
    CameraPose {
        position: desc.position * scale,
        target: desc.target * scale,
        up: desc.up_vector.unwrap_or(DEFAULT_UP),
        fov_deg: desc.field_of_view,
        focal_length_mm: desc.focal_length,
        film_gauge_mm: None,
    }
}

fn axis_swap(desc: &CameraDescription) -> CameraPose {
    CameraPose {
        position: z_up_to_y_up(desc.position),
        target: z_up_to_y_up(desc.target),
        up: desc.up_vector.map_or(DEFAULT_UP, z_up_to_y_up),
        fov_deg: desc.field_of_view,
        focal_length_mm: desc.focal_length,
        film_gauge_mm: Some(DEFAULT_FILM_GAUGE_MM),
    }
}

fn z_up_to_y_up(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, -v.y)
}
