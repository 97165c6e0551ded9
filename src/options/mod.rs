//! Centralized configuration with TOML preset support.
//!
//! All tweakable settings (camera, asset/shader paths, procedural geometry,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! host can persist them however it likes.

mod camera;
mod geometry;
mod keybindings;
mod paths;

use std::path::Path;

pub use camera::CameraOptions;
pub use geometry::GeometryOptions;
pub use keybindings::KeybindingOptions;
pub use paths::PathOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MeshcamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera start pose, projection and control parameters.
    pub camera: CameraOptions,
    /// Asset and shader search roots.
    pub paths: PathOptions,
    /// Procedural geometry parameters.
    pub geometry: GeometryOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MeshcamError::OptionsParse`] for malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, MeshcamError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| MeshcamError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MeshcamError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, MeshcamError> {
        let content = std::fs::read_to_string(path).map_err(MeshcamError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`MeshcamError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), MeshcamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MeshcamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MeshcamError::Io)?;
        }
        std::fs::write(path, content).map_err(MeshcamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
move_speed = 5.0

[paths]
asset_root = "/data/assets"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.move_speed, 5.0);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 60.0);
        assert_eq!(opts.paths.shader_root, Path::new("src/shaders"));
        assert_eq!(opts.geometry.sphere_level, 4);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.key_for(KeyAction::TurnLeft), Some("ArrowLeft"));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn loaded_keybindings_rebuild_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "KeyI"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyI"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn rebinding_replaces_old_key() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveLeft, "KeyQ");
        assert_eq!(bindings.lookup("KeyQ"), Some(KeyAction::MoveLeft));
        assert_eq!(bindings.lookup("KeyA"), None);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("meshcam-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.geometry.sphere_level = 2;
        opts.save(&dir.join("low_detail.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();

        let loaded = Options::load(&dir.join("low_detail.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            Options::list_presets(&dir),
            vec!["default".to_owned(), "low_detail".to_owned()]
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn invalid_toml_is_an_options_error() {
        let err = Options::from_toml("[camera\nfovy = 1").unwrap_err();
        assert!(matches!(err, MeshcamError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("paths"));
        assert!(props.contains_key("geometry"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("move_speed").is_some());
        assert!(camera.get("znear").is_none());
    }
}
