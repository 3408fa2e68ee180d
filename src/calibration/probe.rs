use crate::config::CameraDescription;

/// Common unit factors worth trying when a config's distances look off.
pub const UNIT_SCALES: [(&str, f32); 7] = [
    ("inches to metres", 0.0254),
    ("centimetres to metres", 0.01),
    ("millimetres to metres", 0.001),
    ("feet to metres", 0.3048),
    ("no conversion", 1.0),
    ("tenth", 0.1),
    ("half", 0.5),
];

/// Eye-to-target distance a description would have under one unit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTrial {
    /// What the factor converts.
    pub label: &'static str,
    /// The factor.
    pub scale: f32,
    /// Source distance times `scale`.
    pub distance: f32,
}

/// Try every entry of [`UNIT_SCALES`] on `desc` and log the resulting
/// distances, so the right `unit_scale` can be read off against a
/// distance measured in the authoring tool.
#[must_use]
pub fn probe_unit_scales(desc: &CameraDescription) -> Vec<ScaleTrial> {
    let source = desc.distance();
    log::info!("source eye-to-target distance: {source}");
    UNIT_SCALES
        .iter()
        .map(|&(label, scale)| {
            let trial = ScaleTrial {
                label,
                scale,
                distance: source * scale,
            };
            log::info!("{label} ({scale}): distance {:.4}", trial.distance);
            trial
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn trials_scale_the_source_distance() {
        let desc =
            CameraDescription::new(Vec3::new(0.0, 100.0, 0.0), Vec3::ZERO);
        let trials = probe_unit_scales(&desc);
        assert_eq!(trials.len(), UNIT_SCALES.len());
        let inches = trials.first().unwrap();
        assert!((inches.distance - 2.54).abs() < 1e-5);
        let none = trials.iter().find(|t| t.scale == 1.0).unwrap();
        assert_eq!(none.distance, 100.0);
    }
}
