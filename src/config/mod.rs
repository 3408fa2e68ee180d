//! External camera configs: validation, conversion into renderer poses,
//! scene lists and export.
//!
//! A config is JSON, either a bare camera description or one wrapped as
//! `{"current_camera": {...}}`, optionally with a `scenes` list whose
//! entries carry their own `camera_info`:
//!
//! ```json
//! {
//!   "current_camera": {
//!     "position": [120.0, -340.0, 66.0],
//!     "target": [0.0, 0.0, 40.0],
//!     "up_vector": [0.0, 0.0, 1.0],
//!     "field_of_view": 35.0,
//!     "unit_scale": 0.0254
//!   },
//!   "scenes": [{ "name": "Entrance", "camera_info": { "...": "..." } }]
//! }
//! ```

mod convert;
mod description;
mod scenes;

pub use convert::{
    convert, ConversionStrategy, DEFAULT_UNIT_SCALE, DEFAULT_UP,
};
pub use description::{validate, CameraDescription, CURRENT_CAMERA_KEY};
pub use scenes::{SceneCatalog, SceneEntry};
use glam::Vec3;
use serde_json::{json, Map, Value};

use crate::camera::{Camera, CameraPose};
use crate::error::ConfigError;

/// A loaded camera config: the raw JSON, its validated description and
/// its scene list.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    raw: Value,
    description: CameraDescription,
    scenes: SceneCatalog,
}

impl CameraConfig {
    /// Validate a parsed config.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`validate`] or from reading the scene
    /// list.
    pub fn from_value(raw: Value) -> Result<Self, ConfigError> {
        let description = validate(&raw)?;
        let scenes = SceneCatalog::from_config(&raw)?;
        log::info!(
            "loaded camera config with {} scene(s), source distance {:.4}",
            scenes.len(),
            description.distance()
        );
        Ok(Self {
            raw,
            description,
            scenes,
        })
    }

    /// Parse and validate config text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed text, otherwise as
    /// [`from_value`](Self::from_value).
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// The config exactly as loaded.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The top-level camera description.
    #[must_use]
    pub fn description(&self) -> &CameraDescription {
        &self.description
    }

    /// The scene list.
    #[must_use]
    pub fn scenes(&self) -> &SceneCatalog {
        &self.scenes
    }

    /// The scene list, mutably (for moving its cursor).
    pub fn scenes_mut(&mut self) -> &mut SceneCatalog {
        &mut self.scenes
    }
}

/// Export a live camera and pivot target as a config.
///
/// Values are in renderer units with `unit_scale: 1`, so importing the
/// result with [`ConversionStrategy::UniformScale`] puts the camera back
/// where it was. Lens fields are only written for perspective cameras.
/// `scenes` are appended when given and non-empty.
#[must_use]
pub fn export_config(
    camera: &Camera,
    target: Vec3,
    scenes: Option<&SceneCatalog>,
) -> Value {
    let pose = CameraPose::capture(camera, target);
    let mut current = Map::new();
    let _ = current.insert("position".into(), json!(pose.position.to_array()));
    let _ = current.insert("target".into(), json!(pose.target.to_array()));
    let _ = current.insert("up_vector".into(), json!(pose.up.to_array()));
    if let Some(fov) = pose.fov_deg {
        let _ = current.insert("field_of_view".into(), json!(fov));
    }
    if let Some(focal) = pose.focal_length_mm {
        let _ = current.insert("focal_length".into(), json!(focal));
    }
    let _ = current.insert("unit_scale".into(), json!(1.0));

    let mut config = Map::new();
    let _ = config.insert(CURRENT_CAMERA_KEY.into(), Value::Object(current));
    if let Some(scenes) = scenes.filter(|s| !s.is_empty()) {
        let _ = config.insert("scenes".into(), json!(scenes.entries()));
    }
    Value::Object(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::apply_pose;

    const SAMPLE: &str = r#"{
        "current_camera": {"position": [10, -20, 5], "target": [0, 0, 1],
                           "up_vector": [0, 0, 1], "field_of_view": 40},
        "scenes": [{"name": "Top", "camera_info": {
            "position": [0, 0, 9], "target": [0, 0, 0]
        }}]
    }"#;

    #[test]
    fn parses_description_and_scenes() {
        let config = CameraConfig::from_json_str(SAMPLE).unwrap();
        assert_eq!(config.description().position, Vec3::new(10.0, -20.0, 5.0));
        assert_eq!(config.description().field_of_view, Some(40.0));
        assert_eq!(config.scenes().len(), 1);
        assert!(config.raw().get("scenes").is_some());
    }

    #[test]
    fn malformed_text_is_a_json_error() {
        assert!(matches!(
            CameraConfig::from_json_str("{\"position\": [1, 2,"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn export_then_import_is_identity() {
        let mut camera = Camera::perspective(50.0, 1.5, 0.1, 500.0);
        let mut target = Vec3::ZERO;
        let pose = CameraPose::look_at(
            Vec3::new(3.25, -1.5, 7.0),
            Vec3::new(0.5, 0.25, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        let _ = apply_pose(&pose, &mut camera, &mut target);

        let exported = export_config(&camera, target, None);
        assert_eq!(exported["current_camera"]["unit_scale"], json!(1.0));
        assert!(exported.get("scenes").is_none());

        let reimported = convert(&validate(&exported).unwrap());
        assert_eq!(reimported.position, camera.position);
        assert_eq!(reimported.target, target);
        assert_eq!(reimported.up, camera.up);
        assert!((reimported.fov_deg.unwrap() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn export_includes_non_empty_scenes() {
        let config = CameraConfig::from_json_str(SAMPLE).unwrap();
        let exported = export_config(
            &Camera::default(),
            Vec3::ZERO,
            Some(config.scenes()),
        );
        assert_eq!(exported["scenes"][0]["name"], json!("Top"));
    }

    #[test]
    fn orthographic_export_has_no_lens_fields() {
        let camera = Camera::orthographic(10.0, 1.0, 0.1, 100.0);
        let exported = export_config(&camera, Vec3::ZERO, None);
        let current = &exported["current_camera"];
        assert!(current.get("field_of_view").is_none());
        assert!(current.get("focal_length").is_none());
    }
}
