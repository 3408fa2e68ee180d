use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::ConversionStrategy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Pointer sensitivities and config conversion.
pub struct NavigationOptions {
    /// Radians of orbit per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan step per pixel, as a fraction of the eye-to-target distance.
    #[schemars(title = "Pan Speed", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub pan_speed: f32,
    /// Fractional distance change per scroll event.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// How strongly zoom pulls the pivot target towards the zoom center.
    #[schemars(skip)]
    pub target_follow: f32,
    /// Polar-angle margin (radians) kept by the spherical fallback orbit.
    #[schemars(skip)]
    pub pitch_margin: f32,
    /// Framing margin for fit-to-view (1.2 leaves 20%).
    #[schemars(skip)]
    pub fit_padding: f32,
    /// How external camera configs map into renderer coordinates.
    #[schemars(title = "Config Conversion")]
    pub strategy: ConversionStrategy,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.005,
            pan_speed: 0.002,
            zoom_speed: 0.1,
            target_follow: 0.3,
            pitch_margin: 0.1,
            fit_padding: 1.2,
            strategy: ConversionStrategy::default(),
        }
    }
}
