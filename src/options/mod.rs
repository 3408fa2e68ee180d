//! Centralized camera and navigation options with TOML preset support.
//!
//! All tweakable settings (initial projection, pointer sensitivities,
//! config conversion, calibration keybindings) are consolidated here.
//! Options serialize to/from TOML so presets can live next to the camera
//! configs they were tuned for.

mod camera;
mod keybindings;
mod navigation;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial camera projection.
    pub camera: CameraOptions,
    /// Pointer sensitivities and config conversion.
    pub navigation: NavigationOptions,
    /// Calibration console key bindings.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Io`] when the file cannot be read,
    /// [`OptionsError::Parse`] when it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        let options = toml::from_str(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`OptionsError::Serialize`] or [`OptionsError::Io`].
    pub fn save(&self, path: &Path) -> Result<(), OptionsError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
