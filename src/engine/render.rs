//! Frame emission and window title for ModelViewer

use glam::{Mat4, Vec3};

use super::{BasePass, FrameSink, FrameUniforms, ModelViewer};

impl ModelViewer {
    /// Emit one frame of draw calls.
    ///
    /// Order: persistent vertex highlights, persistent triangle highlights,
    /// the live preview (select mode only), then the fill, line and point
    /// base passes enabled in the view mode, and finally the lamp marker.
    pub fn render<S: FrameSink + ?Sized>(&self, sink: &mut S) {
        let view = self.view_state();
        let display = &self.options.display;
        sink.begin_frame(
            display.clear_color,
            &FrameUniforms {
                model: view.model,
                view: view.view,
                projection: view.projection,
                eye: view.camera_position,
            },
        );

        if let Some(loaded) = &self.loaded {
            let colors = &self.options.colors;
            let picking = &self.options.picking;
            let selection = &loaded.selection;

            sink.set_color(colors.highlight_point);
            selection.points().render(
                sink,
                picking.highlight_point_offset,
                picking.overlay_point_size,
            );
            sink.set_color(colors.highlight_triangle);
            selection.triangles().render(
                sink,
                picking.highlight_triangle_offset,
                0.0,
            );

            if self.mode.select {
                if loaded.last_pick.point_valid() {
                    sink.set_color(colors.select_point);
                    selection.preview_point().render(
                        sink,
                        picking.preview_offset,
                        picking.overlay_point_size,
                    );
                } else if loaded.last_pick.face_valid() {
                    sink.set_color(colors.select_triangle);
                    selection.preview_triangle().render(
                        sink,
                        picking.preview_offset,
                        0.0,
                    );
                }
            }

            let meshes = loaded.model.meshes();
            if self.mode.fill {
                for mesh in meshes {
                    sink.draw_mesh(
                        mesh.handle(),
                        BasePass::Fill,
                        Some(&self.options.lighting),
                    );
                }
            }
            if self.mode.line {
                sink.set_color(colors.line);
                let pass = BasePass::Line {
                    width: display.line_width,
                    offset: display.line_offset,
                };
                for mesh in meshes {
                    sink.draw_mesh(mesh.handle(), pass, None);
                }
            }
            if self.mode.point {
                sink.set_color(colors.point);
                let pass = BasePass::Point {
                    size: display.point_size,
                    offset: display.point_offset,
                };
                for mesh in meshes {
                    sink.draw_mesh(mesh.handle(), pass, None);
                }
            }
        }

        if self.mode.lamp {
            let lighting = &self.options.lighting;
            sink.draw_lamp(
                Mat4::from_translation(Vec3::from_array(lighting.lamp_position))
                    * Mat4::from_scale(Vec3::splat(lighting.lamp_scale)),
            );
        }
    }

    /// Window title, e.g. `"[Select] model.obj | Fill Line"`.
    #[must_use]
    pub fn title(&self) -> String {
        let Some(loaded) = &self.loaded else {
            return "No Model Loaded".to_owned();
        };
        let mut title = String::new();
        if self.mode.select {
            title.push_str("[Select] ");
        }
        if self.mode.camera {
            title.push_str("[Camera] ");
        }
        title.push_str(&loaded.name);
        title.push_str(" |");
        for (on, label) in [
            (self.mode.fill, " Fill"),
            (self.mode.line, " Line"),
            (self.mode.point, " Point"),
        ] {
            if on {
                title.push_str(label);
            }
        }
        title
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::engine::frame::recording::{FrameCall, RecordingFrame};
    use crate::engine::ViewerCommand;
    use crate::geometry::{primitives, MeshHandle};
    use crate::highlight::DrawMode;
    use crate::options::{ColorOptions, Options};

    fn cube_viewer() -> ModelViewer {
        let mut viewer = ModelViewer::new(Options::default(), (600, 600));
        viewer
            .load_meshes(vec![primitives::unit_cube()], "cube.obj")
            .unwrap();
        viewer
    }

    #[test]
    fn title_reflects_modes() {
        let mut viewer = ModelViewer::new(Options::default(), (600, 600));
        assert_eq!(viewer.title(), "No Model Loaded");
        viewer
            .load_meshes(vec![primitives::unit_cube()], "cube.obj")
            .unwrap();
        assert_eq!(viewer.title(), "cube.obj | Fill");

        let _ = viewer.execute(ViewerCommand::SetSelectMode { enabled: true });
        let _ = viewer.execute(ViewerCommand::ToggleCameraMode);
        let _ = viewer.execute(ViewerCommand::ToggleLine);
        let _ = viewer.execute(ViewerCommand::ToggleFill);
        assert_eq!(viewer.title(), "[Select] [Camera] cube.obj | Line");
    }

    #[test]
    fn empty_viewer_draws_only_the_lamp() {
        let viewer = ModelViewer::new(Options::default(), (600, 600));
        let mut frame = RecordingFrame::default();
        viewer.render(&mut frame);
        assert_eq!(frame.calls, vec![FrameCall::Begin, FrameCall::Lamp]);
    }

    #[test]
    fn overlays_precede_base_passes() {
        let mut viewer = cube_viewer();
        let _ = viewer.execute(ViewerCommand::SetSelectMode { enabled: true });
        let _ = viewer.execute(ViewerCommand::PickAt { x: 300.0, y: 300.0 });
        let _ = viewer.execute(ViewerCommand::ConfirmHighlight);
        let _ = viewer.execute(ViewerCommand::ToggleLine);
        let face = *viewer.loaded().unwrap().last_pick().face().unwrap();

        let mut frame = RecordingFrame::default();
        viewer.render(&mut frame);

        let colors = ColorOptions::default();
        assert_eq!(
            frame.colored_draws(),
            vec![
                (
                    colors.highlight_triangle,
                    DrawMode::Triangles,
                    face.indices.to_vec()
                ),
                (
                    colors.select_triangle,
                    DrawMode::Triangles,
                    face.indices.to_vec()
                ),
            ]
        );
        assert_eq!(
            frame.meshes(),
            vec![
                (MeshHandle(0), BasePass::Fill, true),
                (
                    MeshHandle(0),
                    BasePass::Line {
                        width: 1.0,
                        offset: -1.0
                    },
                    false
                ),
            ]
        );

        let first_mesh = frame
            .calls
            .iter()
            .position(|c| matches!(c, FrameCall::Mesh(..)))
            .unwrap();
        let last_overlay = frame
            .calls
            .iter()
            .rposition(|c| matches!(c, FrameCall::Overlay(_)))
            .unwrap();
        assert!(last_overlay < first_mesh);
        assert_eq!(frame.calls.last(), Some(&FrameCall::Lamp));
        let uniforms = frame.uniforms.unwrap();
        assert_eq!(uniforms.eye, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn preview_hidden_outside_select_mode() {
        let mut viewer = cube_viewer();
        let _ = viewer.execute(ViewerCommand::SetSelectMode { enabled: true });
        let _ = viewer.execute(ViewerCommand::PickAt { x: 300.0, y: 300.0 });
        let _ = viewer.execute(ViewerCommand::SetSelectMode { enabled: false });
        let _ = viewer.execute(ViewerCommand::ToggleLamp);

        let mut frame = RecordingFrame::default();
        viewer.render(&mut frame);
        assert!(frame.colored_draws().is_empty());
        assert!(!frame.calls.contains(&FrameCall::Lamp));
    }
}
