use std::collections::HashMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::input::CalibrationAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping calibration actions to key
/// codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ResetCamera` → `"KeyR"`). Actions
    /// missing from a file keep their default key.
    #[serde(deserialize_with = "merge_with_defaults")]
    pub bindings: HashMap<CalibrationAction, String>,
}

fn default_bindings() -> HashMap<CalibrationAction, String> {
    HashMap::from([
        (CalibrationAction::StartTransformTest, "Digit0".into()),
        (CalibrationAction::ResetCamera, "KeyR".into()),
        (CalibrationAction::NextScene, "KeyS".into()),
        (CalibrationAction::CycleTransform, "KeyT".into()),
        (CalibrationAction::ShowTransformInfo, "KeyI".into()),
        (CalibrationAction::CompareValues, "KeyC".into()),
        (CalibrationAction::ShowHelp, "KeyH".into()),
    ])
}

/// Overrides replace the default key of their action. A default whose key
/// an override claims is dropped, leaving that action unbound; two
/// overrides sharing a key are rejected.
fn merge_with_defaults<'de, D>(
    deserializer: D,
) -> Result<HashMap<CalibrationAction, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides =
        HashMap::<CalibrationAction, String>::deserialize(deserializer)?;
    let mut claimed: HashMap<&str, CalibrationAction> = HashMap::new();
    for (action, key) in &overrides {
        if let Some(other) = claimed.insert(key.as_str(), *action) {
            return Err(D::Error::custom(format!(
                "key {key} is bound to both {other:?} and {action:?}"
            )));
        }
    }

    let mut bindings = default_bindings();
    bindings.retain(|action, key| {
        let keep = claimed.get(key.as_str()).is_none_or(|a| a == action);
        if !keep {
            log::warn!("{action:?} loses its default key {key}");
        }
        keep
    });
    bindings.extend(overrides);
    Ok(bindings)
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    ///
    /// If `bindings` was edited so that one key maps to several actions,
    /// the first in declaration order wins.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CalibrationAction> {
        self.bindings
            .iter()
            .filter(|(_, bound)| *bound == key)
            .map(|(action, _)| *action)
            .min()
    }

    /// Key bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: CalibrationAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }
}
