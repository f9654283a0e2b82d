//! Options methods for ModelViewer

use std::path::Path;

use super::{ModelViewer, ViewMode};
use crate::options::Options;
use crate::picking::RayCaster;

impl ModelViewer {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and apply them to the caster, camera and passes.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values into the subsystems. The camera keeps
    /// its pose; interaction modes stay as they are.
    pub fn apply_options(&mut self) {
        self.caster = RayCaster::from_options(&self.options.picking);

        let co = &self.options.camera;
        self.camera.fovy = co.fovy.min(co.max_fovy);
        self.camera.znear = co.znear;
        self.camera.zfar = co.zfar;

        self.mode = ViewMode {
            select: self.mode.select,
            camera: self.mode.camera,
            ..ViewMode::from_display(&self.options.display)
        };
    }

    /// Apply a single view option by key/value from a frontend panel.
    /// Returns true if the option was recognized and applied.
    pub fn apply_view_option(
        &mut self,
        key: &str,
        value: &serde_json::Value,
    ) -> bool {
        let display = &mut self.options.display;
        let applied = match key {
            "show_fill" => set_bool(&mut display.show_fill, value),
            "show_lines" => set_bool(&mut display.show_lines, value),
            "show_points" => set_bool(&mut display.show_points, value),
            "show_lamp" => set_bool(&mut display.show_lamp, value),
            "line_width" => set_f32(&mut display.line_width, value),
            "point_size" => set_f32(&mut display.point_size, value),
            "point_pick_epsilon" => set_f32(
                &mut self.options.picking.point_pick_epsilon,
                value,
            ),
            "overlay_point_size" => set_f32(
                &mut self.options.picking.overlay_point_size,
                value,
            ),
            _ => {
                log::warn!("unknown view option '{key}'");
                return false;
            }
        };
        if applied {
            self.apply_options();
        } else {
            log::warn!("view option '{key}' rejected value {value}");
        }
        applied
    }

    /// Load a named view preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded view preset '{name}'");
                self.set_options(opts);
                true
            }
            Err(e) => {
                log::error!("Failed to load view preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named view preset.
    /// Returns true on success.
    pub fn save_preset(&self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved view preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to save view preset '{name}': {e}");
                false
            }
        }
    }
}

fn set_bool(field: &mut bool, value: &serde_json::Value) -> bool {
    let Some(v) = value.as_bool() else {
        return false;
    };
    *field = v;
    true
}

fn set_f32(field: &mut f32, value: &serde_json::Value) -> bool {
    let Some(v) = value.as_f64() else {
        return false;
    };
    *field = v as f32;
    true
}
