use glam::Vec3;
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Key under which exported configs nest the camera description.
pub const CURRENT_CAMERA_KEY: &str = "current_camera";

/// Validated external camera description, still in source units.
///
/// Unknown JSON fields are ignored. Use [`validate`] to build one from raw
/// JSON.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDescription {
    /// Eye position.
    pub position: Vec3,
    /// Look-at point.
    pub target: Vec3,
    /// Up hint, if given.
    pub up_vector: Option<Vec3>,
    /// Vertical field of view in degrees, if given.
    pub field_of_view: Option<f32>,
    /// Focal length in millimetres, if given.
    pub focal_length: Option<f32>,
    /// Source-to-renderer length factor, if given.
    pub unit_scale: Option<f32>,
}

impl CameraDescription {
    /// Description with only the required fields.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up_vector: None,
            field_of_view: None,
            focal_length: None,
            unit_scale: None,
        }
    }

    /// Eye-to-target distance in source units.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }
}

/// Squared length below which an up hint has no usable direction.
const MIN_UP_LENGTH_SQ: f32 = 1e-12;

/// Check a raw camera description and turn it into a [`CameraDescription`].
///
/// Accepts a bare description or one wrapped as `{"current_camera": {...}}`.
///
/// # Errors
///
/// - [`ConfigError::MissingField`] when `position` or `target` is absent
///   or `null`.
/// - [`ConfigError::InvalidArrayShape`] when a vector field is not an array
///   of three elements.
/// - [`ConfigError::InvalidNumber`] when a component or scalar is not a
///   finite number representable as `f32`, when `field_of_view` is outside
///   `(0, 180)`, when `focal_length` / `unit_scale` is not positive, or
///   when `up_vector` has (near) zero length.
pub fn validate(raw: &Value) -> Result<CameraDescription, ConfigError> {
    let body = unwrap_current(raw);
    let fields = body.as_object();

    let position = require_vec3(fields, "position")?;
    let target = require_vec3(fields, "target")?;
    let up_vector = optional_vec3(fields, "up_vector")?;
    if up_vector.is_some_and(|up| up.length_squared() < MIN_UP_LENGTH_SQ) {
        return Err(ConfigError::InvalidNumber { field: "up_vector" });
    }

    let field_of_view =
        optional_scalar(fields, "field_of_view", |v| v > 0.0 && v < 180.0)?;
    let focal_length = optional_scalar(fields, "focal_length", |v| v > 0.0)?;
    let unit_scale = optional_scalar(fields, "unit_scale", |v| v > 0.0)?;

    Ok(CameraDescription {
        position,
        target,
        up_vector,
        field_of_view,
        focal_length,
        unit_scale,
    })
}

/// The description object, looking through a `current_camera` wrapper.
pub(crate) fn unwrap_current(raw: &Value) -> &Value {
    match raw.get(CURRENT_CAMERA_KEY) {
        Some(inner) if inner.is_object() => inner,
        _ => raw,
    }
}

fn field<'a>(
    fields: Option<&'a Map<String, Value>>,
    name: &str,
) -> Option<&'a Value> {
    fields
        .and_then(|map| map.get(name))
        .filter(|value| !value.is_null())
}

fn require_vec3(
    fields: Option<&Map<String, Value>>,
    name: &'static str,
) -> Result<Vec3, ConfigError> {
    optional_vec3(fields, name)?
        .ok_or(ConfigError::MissingField { field: name })
}

fn optional_vec3(
    fields: Option<&Map<String, Value>>,
    name: &'static str,
) -> Result<Option<Vec3>, ConfigError> {
    let Some(value) = field(fields, name) else {
        return Ok(None);
    };
    let Value::Array(items) = value else {
        return Err(ConfigError::InvalidArrayShape {
            field: name,
            len: None,
        });
    };
    let [x, y, z] = items.as_slice() else {
        return Err(ConfigError::InvalidArrayShape {
            field: name,
            len: Some(items.len()),
        });
    };
    Ok(Some(Vec3::new(
        finite_f32(x, name)?,
        finite_f32(y, name)?,
        finite_f32(z, name)?,
    )))
}

fn optional_scalar(
    fields: Option<&Map<String, Value>>,
    name: &'static str,
    in_range: impl Fn(f32) -> bool,
) -> Result<Option<f32>, ConfigError> {
    let Some(value) = field(fields, name) else {
        return Ok(None);
    };
    let number = finite_f32(value, name)?;
    if in_range(number) {
        Ok(Some(number))
    } else {
        Err(ConfigError::InvalidNumber { field: name })
    }
}

/// Narrow a JSON number to a finite `f32`.
fn finite_f32(value: &Value, name: &'static str) -> Result<f32, ConfigError> {
    value
        .as_f64()
        .map(|v| v as f32)
        .filter(|v| v.is_finite())
        .ok_or(ConfigError::InvalidNumber { field: name })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_and_wrapped_forms_agree() {
        let bare = json!({"position": [1, 2, 3], "target": [0, 0, 0]});
        let wrapped = json!({"current_camera": bare.clone(), "scenes": []});
        assert_eq!(validate(&bare).unwrap(), validate(&wrapped).unwrap());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let raw = json!({
            "position": [1, 2, 3],
            "target": [0, 0, 0],
            "name": "front door",
            "aperture": 2.8
        });
        let desc = validate(&raw).unwrap();
        assert_eq!(desc.position, Vec3::new(1.0, 2.0, 3.0));
        assert!(desc.up_vector.is_none());
        assert!(desc.field_of_view.is_none());
    }

    #[test]
    fn missing_or_null_required_fields() {
        for field in ["position", "target"] {
            let mut raw = json!({"position": [1, 0, 0], "target": [0, 0, 0]});
            let _ = raw.as_object_mut().unwrap().remove(field);
            assert!(matches!(
                validate(&raw),
                Err(ConfigError::MissingField { field: f }) if f == field
            ));

            raw[field] = Value::Null;
            assert!(matches!(
                validate(&raw),
                Err(ConfigError::MissingField { field: f }) if f == field
            ));
        }
    }

    #[test]
    fn wrong_shapes_per_vector_field() {
        for field in ["position", "target", "up_vector"] {
            let mut raw = json!({"position": [1, 0, 0], "target": [0, 0, 0]});

            raw[field] = json!([1, 2]);
            assert!(matches!(
                validate(&raw),
                Err(ConfigError::InvalidArrayShape { field: f, len: Some(2) })
                    if f == field
            ));

            raw[field] = json!([1, 2, 3, 4]);
            assert!(matches!(
                validate(&raw),
                Err(ConfigError::InvalidArrayShape { field: f, len: Some(4) })
                    if f == field
            ));

            raw[field] = json!("1,2,3");
            assert!(matches!(
                validate(&raw),
                Err(ConfigError::InvalidArrayShape { field: f, len: None })
                    if f == field
            ));
        }
    }

    #[test]
    fn zero_length_up_is_rejected() {
        let mut raw = json!({"position": [1, 0, 0], "target": [0, 0, 0]});
        for up in [json!([0, 0, 0]), json!([1e-9, 0, 0])] {
            raw["up_vector"] = up;
            assert!(matches!(
                validate(&raw),
                Err(ConfigError::InvalidNumber { field: "up_vector" })
            ));
        }
        raw["up_vector"] = json!([0, 0, 2]);
        let up = validate(&raw).unwrap().up_vector;
        assert_eq!(up, Some(Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn bad_components_per_vector_field() {
        for field in ["position", "target", "up_vector"] {
            let mut raw = json!({"position": [1, 0, 0], "target": [0, 0, 0]});

            raw[field] = json!([1, "2", 3]);
            assert!(matches!(
                validate(&raw),
                Err(ConfigError::InvalidNumber { field: f }) if f == field
            ));

            raw[field] = json!([1, null, 3]);
            assert!(matches!(
                validate(&raw),
                Err(ConfigError::InvalidNumber { field: f }) if f == field
            ));

            // finite as f64, infinite as f32
            raw[field] = json!([1e300, 0, 0]);
            assert!(matches!(
                validate(&raw),
                Err(ConfigError::InvalidNumber { field: f }) if f == field
            ));
        }
    }

    #[test]
    fn scalar_ranges() {
        let base = json!({"position": [1, 0, 0], "target": [0, 0, 0]});
        let cases = [
            ("field_of_view", json!(0)),
            ("field_of_view", json!(180)),
            ("field_of_view", json!("wide")),
            ("focal_length", json!(-35)),
            ("unit_scale", json!(0)),
        ];
        for (field, value) in cases {
            let mut raw = base.clone();
            raw[field] = value;
            assert!(matches!(
                validate(&raw),
                Err(ConfigError::InvalidNumber { field: f }) if f == field
            ));
        }

        let mut raw = base;
        raw["field_of_view"] = json!(60.5);
        raw["focal_length"] = json!(35);
        raw["unit_scale"] = json!(0.0254);
        let desc = validate(&raw).unwrap();
        assert_eq!(desc.field_of_view, Some(60.5));
        assert_eq!(desc.focal_length, Some(35.0));
        assert_eq!(desc.unit_scale, Some(0.0254));
    }

    #[test]
    fn non_object_body_reports_position_missing() {
        assert!(matches!(
            validate(&json!([1, 2, 3])),
            Err(ConfigError::MissingField { field: "position" })
        ));
    }
}
