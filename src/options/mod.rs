//! Centralized viewer options with TOML preset support.
//!
//! Display toggles, colors, lighting, picking, camera and keybindings are
//! consolidated here. Options serialize to/from TOML so a preset directory
//! can hold named view configurations.

mod camera;
mod colors;
mod display;
mod lighting;
mod picking;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use lighting::LightingOptions;
pub use picking::PickingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[picking]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial view-mode toggles and base pass raster state.
    pub display: DisplayOptions,
    /// Overlay and base pass colors.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Lamp and Phong parameters.
    pub lighting: LightingOptions,
    /// Ray picking and overlay parameters.
    pub picking: PickingOptions,
    /// Camera projection and start pose.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
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
    use crate::engine::ViewerCommand;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[picking]
point_pick_epsilon = 0.05
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.picking.point_pick_epsilon, 0.05);
        // Everything else should be default
        assert_eq!(opts.picking.parallel_threshold, 2048);
        assert_eq!(opts.camera.fovy, 45.0);
        assert!(opts.display.show_fill);
        assert!(!opts.display.show_lines);
    }

    #[test]
    fn default_colors_match_palette() {
        let colors = ColorOptions::default();
        assert_eq!(
            colors.highlight_point,
            [0.021_568_63, 0.986_274_5, 0.903_921_6]
        );
        assert_eq!(colors.select_triangle[0], 0.821_568_63);
    }

    #[test]
    fn keybinding_lookup() {
        let keys = Options::default().keybindings;
        assert_eq!(keys.lookup("KeyF"), Some(ViewerCommand::ToggleFill));
        assert_eq!(keys.lookup("Escape"), Some(ViewerCommand::Cancel));
        assert_eq!(keys.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_override_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
KeyW = "toggle_line"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(ViewerCommand::ToggleLine)
        );
        // A bindings table replaces the defaults wholesale
        assert_eq!(opts.keybindings.lookup("KeyL"), None);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("model-viewer-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.display.show_points = true;
        opts.save(&dir.join("points.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["default", "points"]);
        let loaded = Options::load(&dir.join("points.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_errors_are_typed() {
        let dir = std::env::temp_dir()
            .join(format!("model-viewer-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let bad = dir.join("bad.toml");
        std::fs::write(&bad, "[picking\n").unwrap();
        assert!(matches!(
            Options::load(&bad),
            Err(ViewerError::OptionsParse(_))
        ));
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(ViewerError::Io(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("display"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("picking"));
        assert!(props.contains_key("camera"));

        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));
        assert!(!props.contains_key("keybindings"));

        let picking = &props["picking"]["properties"];
        assert!(picking.get("point_pick_epsilon").is_some());
        assert!(picking.get("parallel_threshold").is_none());
        let lighting = &props["lighting"]["properties"];
        assert!(lighting.get("ambient").is_some());
        assert!(lighting.get("lamp_position").is_none());
    }
}
