use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// One saved viewpoint from the `scenes` list of a camera config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntry {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Index assigned by the authoring tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    /// Camera description for this scene, validated when it is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_info: Option<Value>,
}

impl SceneEntry {
    /// Name if present, else a label built from the tool index.
    #[must_use]
    pub fn label(&self) -> String {
        match (&self.name, self.index) {
            (Some(name), _) => name.clone(),
            (None, Some(index)) => format!("Scene {index}"),
            (None, None) => String::from("Unnamed scene"),
        }
    }
}

/// Ordered scene list with a cursor.
///
/// The cursor starts before the first scene, so the first
/// [`advance`](Self::advance) lands on scene 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneCatalog {
    scenes: Vec<SceneEntry>,
    current: Option<usize>,
}

impl SceneCatalog {
    /// Catalog over `scenes`, cursor unset.
    #[must_use]
    pub fn new(scenes: Vec<SceneEntry>) -> Self {
        Self {
            scenes,
            current: None,
        }
    }

    /// Read the top-level `scenes` array of a camera config.
    ///
    /// A missing or non-array `scenes` key gives an empty catalog.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] when an entry has the wrong shape.
    pub fn from_config(raw: &Value) -> Result<Self, ConfigError> {
        let Some(list) = raw.get("scenes").filter(|v| v.is_array()) else {
            log::debug!("config has no scene list");
            return Ok(Self::default());
        };
        let scenes: Vec<SceneEntry> = serde_json::from_value(list.clone())?;
        for (i, scene) in scenes.iter().enumerate() {
            log::debug!("scene {}: {}", i + 1, scene.label());
        }
        Ok(Self::new(scenes))
    }

    /// Number of scenes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether there are no scenes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// All scenes in order.
    #[must_use]
    pub fn entries(&self) -> &[SceneEntry] {
        &self.scenes
    }

    /// Position of the cursor, if set.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Scene under the cursor, if set.
    #[must_use]
    pub fn current(&self) -> Option<&SceneEntry> {
        self.current.and_then(|i| self.scenes.get(i))
    }

    /// Move the cursor to `index` (0-based).
    ///
    /// Out-of-range indices leave the cursor where it was.
    pub fn select(&mut self, index: usize) -> Option<&SceneEntry> {
        if index >= self.scenes.len() {
            log::info!(
                "scene {} is out of range ({} scenes)",
                index + 1,
                self.scenes.len()
            );
            return None;
        }
        self.current = Some(index);
        self.scenes.get(index)
    }

    /// Advance the cursor with wraparound.
    pub fn advance(&mut self) -> Option<&SceneEntry> {
        if self.scenes.is_empty() {
            log::info!("no scenes available");
            return None;
        }
        let index = self.current.map_or(0, |i| (i + 1) % self.scenes.len());
        self.select(index)
    }

    /// First scene with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&SceneEntry> {
        self.scenes
            .iter()
            .find(|scene| scene.name.as_deref() == Some(name))
    }

    /// First scene with the given tool index.
    #[must_use]
    pub fn find_by_index(&self, index: i64) -> Option<&SceneEntry> {
        self.scenes.iter().find(|scene| scene.index == Some(index))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn catalog() -> SceneCatalog {
        SceneCatalog::from_config(&json!({
            "current_camera": {"position": [1, 0, 0], "target": [0, 0, 0]},
            "scenes": [
                {"name": "Entrance", "index": 4},
                {"index": 7,
                 "camera_info": {"position": [0, 5, 0], "target": [0, 0, 0]}},
                {}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn advance_starts_at_first_and_wraps() {
        let mut scenes = catalog();
        assert!(scenes.current().is_none());
        let order: Vec<Option<usize>> = (0..4)
            .map(|_| {
                let _ = scenes.advance();
                scenes.current_index()
            })
            .collect();
        assert_eq!(order, vec![Some(0), Some(1), Some(2), Some(0)]);
    }

    #[test]
    fn out_of_range_select_keeps_cursor() {
        let mut scenes = catalog();
        assert!(scenes.select(1).is_some());
        assert!(scenes.select(3).is_none());
        assert_eq!(scenes.current_index(), Some(1));
    }

    #[test]
    fn labels_and_lookups() {
        let scenes = catalog();
        let labels: Vec<String> =
            scenes.entries().iter().map(SceneEntry::label).collect();
        assert_eq!(labels, ["Entrance", "Scene 7", "Unnamed scene"]);
        assert_eq!(scenes.find_by_index(7), scenes.entries().get(1));
        assert_eq!(scenes.find_by_name("Entrance"), scenes.entries().first());
        assert!(scenes.find_by_name("Garage").is_none());
    }

    #[test]
    fn missing_scene_list_is_empty() {
        let mut scenes =
            SceneCatalog::from_config(&json!({"position": [1, 0, 0]})).unwrap();
        assert!(scenes.is_empty());
        assert!(scenes.advance().is_none());
    }

    #[test]
    fn malformed_entry_is_rejected() {
        let raw = json!({"scenes": [{"name": 12}]});
        assert!(matches!(
            SceneCatalog::from_config(&raw),
            Err(ConfigError::Json(_))
        ));
    }
}
