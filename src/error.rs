//! Crate-level error types.

use thiserror::Error;

/// Rejection of an external camera description.
///
/// Raised before anything is mutated, so a failed load leaves the live
/// camera exactly as it was.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field is absent or `null`.
    #[error("camera config is missing required field `{field}`")]
    MissingField {
        /// JSON key of the field.
        field: &'static str,
    },
    /// A vector field is not an array of exactly three elements.
    #[error("`{field}` must be an array of 3 numbers{}", describe_len(.len))]
    InvalidArrayShape {
        /// JSON key of the field.
        field: &'static str,
        /// Actual array length, `None` when the value is not an array.
        len: Option<usize>,
    },
    /// A component or scalar is non-numeric, non-finite or out of range.
    #[error("`{field}` must contain valid finite numbers")]
    InvalidNumber {
        /// JSON key of the field.
        field: &'static str,
    },
    /// The config text is not valid JSON.
    #[error("camera config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[allow(clippy::ref_option)]
fn describe_len(len: &Option<usize>) -> String {
    len.map_or_else(
        || String::from(" (got a non-array value)"),
        |n| format!(" (got {n} elements)"),
    )
}

/// Failure of a camera apply or navigation call.
#[derive(Debug, Error)]
pub enum CameraError {
    /// The camera, pivot target or viewport size is not available yet.
    #[error("camera or pivot target is not initialized")]
    UninitializedTarget,
    /// The camera description was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failure loading or saving [`Options`](crate::options::Options).
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Generic I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse failure.
    #[error("options parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML serialization failure.
    #[error("options serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
