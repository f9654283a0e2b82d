//! Command dispatch for ModelViewer

use super::{CommandOutcome, ModelViewer, ViewerCommand};
use crate::error::ViewerError;

impl ModelViewer {
    /// Perform one command.
    ///
    /// Selection commands only act in select mode with a model loaded and
    /// a non-empty viewport; model drags only act outside camera mode.
    /// Failures are logged and reported as [`CommandOutcome::Ignored`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// viewer.execute(ViewerCommand::SetSelectMode { enabled: true });
    /// viewer.execute(ViewerCommand::PickAt { x: 320.0, y: 240.0 });
    /// viewer.execute(ViewerCommand::ConfirmHighlight);
    /// ```
    pub fn execute(&mut self, command: ViewerCommand) -> CommandOutcome {
        match self.dispatch(command) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("{command:?} rejected: {e}");
                CommandOutcome::Ignored
            }
        }
    }

    fn dispatch(
        &mut self,
        command: ViewerCommand,
    ) -> Result<CommandOutcome, ViewerError> {
        let outcome = match command {
            ViewerCommand::PickAt { x, y } => {
                let (width, height) = self.viewport;
                if !self.can_select() || width == 0 || height == 0 {
                    return Ok(CommandOutcome::Ignored);
                }
                let _ = self.pick_at(x, y)?;
                CommandOutcome::Updated
            }
            ViewerCommand::ConfirmHighlight => {
                if !self.can_select() {
                    return Ok(CommandOutcome::Ignored);
                }
                CommandOutcome::Confirmed(self.confirm_highlight()?)
            }
            ViewerCommand::InspectSelection => {
                if !self.can_select() {
                    return Ok(CommandOutcome::Ignored);
                }
                let text = self.inspect_selection()?;
                log::info!("select {text}");
                CommandOutcome::Inspected(text)
            }
            ViewerCommand::SetSelectMode { enabled } => {
                self.mode.select = enabled;
                CommandOutcome::Updated
            }
            ViewerCommand::ToggleFill => {
                self.mode.fill = !self.mode.fill;
                log::info!("fill pass {}", on_off(self.mode.fill));
                CommandOutcome::Updated
            }
            ViewerCommand::ToggleLine => {
                self.mode.line = !self.mode.line;
                log::info!("line pass {}", on_off(self.mode.line));
                CommandOutcome::Updated
            }
            ViewerCommand::TogglePoint => {
                self.mode.point = !self.mode.point;
                log::info!("point pass {}", on_off(self.mode.point));
                CommandOutcome::Updated
            }
            ViewerCommand::ToggleLamp => {
                self.mode.lamp = !self.mode.lamp;
                log::info!("lamp {}", on_off(self.mode.lamp));
                CommandOutcome::Updated
            }
            ViewerCommand::ToggleCameraMode => {
                self.mode.camera = !self.mode.camera;
                log::info!("camera mode {}", on_off(self.mode.camera));
                CommandOutcome::Updated
            }
            ViewerCommand::Cancel => {
                if self.mode.select {
                    self.mode.select = false;
                } else if self.mode.camera {
                    self.mode.camera = false;
                } else {
                    return Ok(CommandOutcome::CloseRequested);
                }
                CommandOutcome::Updated
            }
            ViewerCommand::ResetView => {
                self.reset_view();
                CommandOutcome::Updated
            }
            ViewerCommand::RotateModel { delta } => {
                if !self.can_drag_model() {
                    return Ok(CommandOutcome::Ignored);
                }
                self.transform.rotate(delta);
                CommandOutcome::Updated
            }
            ViewerCommand::PanModel { delta } => {
                if !self.can_drag_model() {
                    return Ok(CommandOutcome::Ignored);
                }
                self.transform.pan(delta);
                CommandOutcome::Updated
            }
            ViewerCommand::Scroll { delta } => {
                if self.mode.camera {
                    self.camera.zoom(delta, self.options.camera.max_fovy);
                } else if self.loaded.is_some() {
                    self.transform.scroll(delta);
                } else {
                    return Ok(CommandOutcome::Ignored);
                }
                CommandOutcome::Updated
            }
            ViewerCommand::LookCamera { delta } => {
                if !self.mode.camera {
                    return Ok(CommandOutcome::Ignored);
                }
                self.camera.look(delta, self.options.camera.look_sensitivity);
                CommandOutcome::Updated
            }
            ViewerCommand::MoveCamera { direction } => {
                self.camera.fly(direction, self.options.camera.move_step);
                CommandOutcome::Updated
            }
            ViewerCommand::Resize { width, height } => {
                self.viewport = (width, height);
                self.camera.resize(width, height);
                CommandOutcome::Updated
            }
        };
        Ok(outcome)
    }

    fn can_select(&self) -> bool {
        self.mode.select && self.loaded.is_some()
    }

    fn can_drag_model(&self) -> bool {
        !self.mode.camera && self.loaded.is_some()
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::camera::CameraMove;
    use crate::geometry::primitives;
    use crate::options::Options;
    use crate::selection::Confirmation;

    fn cube_viewer() -> ModelViewer {
        let mut viewer = ModelViewer::new(Options::default(), (600, 600));
        viewer
            .load_meshes(vec![primitives::unit_cube()], "cube.obj")
            .unwrap();
        viewer
    }

    #[test]
    fn selection_commands_need_select_mode() {
        let mut viewer = cube_viewer();
        let pick = ViewerCommand::PickAt { x: 300.0, y: 300.0 };
        assert_eq!(viewer.execute(pick), CommandOutcome::Ignored);
        assert_eq!(
            viewer.execute(ViewerCommand::ConfirmHighlight),
            CommandOutcome::Ignored
        );

        let _ = viewer.execute(ViewerCommand::SetSelectMode { enabled: true });
        assert_eq!(viewer.execute(pick), CommandOutcome::Updated);
        assert!(matches!(
            viewer.execute(ViewerCommand::ConfirmHighlight),
            CommandOutcome::Confirmed(Confirmation::Triangle {
                highlighted: true,
                ..
            })
        ));
        assert!(matches!(
            viewer.execute(ViewerCommand::ConfirmHighlight),
            CommandOutcome::Confirmed(Confirmation::Triangle {
                highlighted: false,
                ..
            })
        ));
        match viewer.execute(ViewerCommand::InspectSelection) {
            CommandOutcome::Inspected(text) => {
                assert!(text.starts_with("Face:"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_viewport_blocks_picking() {
        let mut viewer = cube_viewer();
        let _ = viewer.execute(ViewerCommand::SetSelectMode { enabled: true });
        let _ = viewer.execute(ViewerCommand::Resize {
            width: 0,
            height: 0,
        });
        assert_eq!(
            viewer.execute(ViewerCommand::PickAt { x: 0.0, y: 0.0 }),
            CommandOutcome::Ignored
        );
    }

    #[test]
    fn select_mode_without_model_is_ignored() {
        let mut viewer = ModelViewer::new(Options::default(), (600, 600));
        let _ = viewer.execute(ViewerCommand::SetSelectMode { enabled: true });
        assert_eq!(
            viewer.execute(ViewerCommand::PickAt { x: 1.0, y: 1.0 }),
            CommandOutcome::Ignored
        );
        assert_eq!(
            viewer.execute(ViewerCommand::Scroll { delta: 1.0 }),
            CommandOutcome::Ignored
        );
    }

    #[test]
    fn cancel_unwinds_modes_then_requests_close() {
        let mut viewer = cube_viewer();
        let _ = viewer.execute(ViewerCommand::SetSelectMode { enabled: true });
        let _ = viewer.execute(ViewerCommand::ToggleCameraMode);
        let cancel = viewer.execute(ViewerCommand::Cancel);
        assert_eq!(cancel, CommandOutcome::Updated);
        assert!(!viewer.mode().select && viewer.mode().camera);
        let cancel = viewer.execute(ViewerCommand::Cancel);
        assert_eq!(cancel, CommandOutcome::Updated);
        assert!(!viewer.mode().camera);
        assert_eq!(
            viewer.execute(ViewerCommand::Cancel),
            CommandOutcome::CloseRequested
        );
    }

    #[test]
    fn scroll_zooms_in_camera_mode_and_scales_otherwise() {
        let mut viewer = cube_viewer();
        let _ = viewer.execute(ViewerCommand::Scroll { delta: 10.0 });
        assert!((viewer.transform().scale - 1.3).abs() < 1e-6);
        assert_eq!(viewer.camera().fovy, 45.0);

        let _ = viewer.execute(ViewerCommand::ToggleCameraMode);
        let _ = viewer.execute(ViewerCommand::Scroll { delta: 10.0 });
        assert_eq!(viewer.camera().fovy, 35.0);
        assert!((viewer.transform().scale - 1.3).abs() < 1e-6);
    }

    #[test]
    fn drags_are_blocked_in_camera_mode() {
        let mut viewer = cube_viewer();
        let delta = Vec2::new(20.0, 0.0);
        let _ = viewer.execute(ViewerCommand::ToggleCameraMode);
        assert_eq!(
            viewer.execute(ViewerCommand::RotateModel { delta }),
            CommandOutcome::Ignored
        );
        assert_eq!(
            viewer.execute(ViewerCommand::LookCamera { delta }),
            CommandOutcome::Updated
        );
        assert_ne!(viewer.camera().target, Vec3::ZERO);

        let _ = viewer.execute(ViewerCommand::ToggleCameraMode);
        let _ = viewer.execute(ViewerCommand::RotateModel { delta });
        let _ = viewer.execute(ViewerCommand::PanModel { delta });
        assert!(viewer.transform().rotation.y > 0.0);
        assert!(viewer.transform().position.x > 0.0);
    }

    #[test]
    fn reset_view_restores_start_pose() {
        let mut viewer = cube_viewer();
        let _ = viewer.execute(ViewerCommand::MoveCamera {
            direction: CameraMove::Left,
        });
        let _ = viewer.execute(ViewerCommand::Scroll { delta: 3.0 });
        assert!(viewer.camera().eye.x < 0.0);
        let _ = viewer.execute(ViewerCommand::ResetView);
        assert_eq!(viewer.camera().eye, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(viewer.transform().scale, 1.0);
    }

    #[test]
    fn pass_toggles_flip_view_mode() {
        let mut viewer = cube_viewer();
        for command in [
            ViewerCommand::ToggleFill,
            ViewerCommand::ToggleLine,
            ViewerCommand::TogglePoint,
            ViewerCommand::ToggleLamp,
        ] {
            assert_eq!(viewer.execute(command), CommandOutcome::Updated);
        }
        let mode = viewer.mode();
        assert!(!mode.fill && mode.line && mode.point && !mode.lamp);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut viewer = cube_viewer();
        let _ = viewer.execute(ViewerCommand::Resize {
            width: 800,
            height: 400,
        });
        assert_eq!(viewer.viewport(), (800, 400));
        assert_eq!(viewer.camera().aspect, 2.0);
    }
}
