//! The viewer root: one explicitly constructed context owning options,
//! camera, model placement, view mode and the loaded model with its
//! selection state.

pub mod command;
pub mod frame;
mod input;
mod options;
mod render;
pub mod transform;

use glam::{Mat4, Vec2};

pub use self::command::{CommandOutcome, ViewerCommand};
pub use self::frame::{BasePass, FrameSink, FrameUniforms};
pub use self::transform::ModelTransform;
use crate::camera::Camera;
use crate::error::ViewerError;
use crate::geometry::{Mesh, Model};
use crate::options::{DisplayOptions, Options};
use crate::picking::{PickResult, RayCaster, ViewState};
use crate::selection::{Confirmation, SelectionState};

/// Which passes are drawn and which interaction mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ViewMode {
    /// Shaded fill pass.
    pub fill: bool,
    /// Wireframe pass.
    pub line: bool,
    /// Vertex pass.
    pub point: bool,
    /// Lamp marker.
    pub lamp: bool,
    /// Cursor motion picks and clicks inspect or confirm.
    pub select: bool,
    /// Cursor motion turns the camera and the wheel zooms it.
    pub camera: bool,
}

impl ViewMode {
    /// Pass toggles from the display options, with both interaction modes
    /// off.
    #[must_use]
    pub fn from_display(display: &DisplayOptions) -> Self {
        Self {
            fill: display.show_fill,
            line: display.show_lines,
            point: display.show_points,
            lamp: display.show_lamp,
            select: false,
            camera: false,
        }
    }
}

/// A model together with everything that is only meaningful for it.
///
/// Replaced wholesale on reload, so stale indices can never reach the new
/// model's sets.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    model: Model,
    name: String,
    selection: SelectionState,
    last_pick: PickResult,
}

impl LoadedModel {
    fn new(model: Model, name: String) -> Self {
        Self {
            selection: SelectionState::new(&model),
            model,
            name,
            last_pick: PickResult::nothing(),
        }
    }

    /// The geometry.
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Display name (usually the file name).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Preview and highlight sets.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The most recent pick.
    #[must_use]
    pub fn last_pick(&self) -> &PickResult {
        &self.last_pick
    }
}

/// Interactive model viewer.
///
/// Feed it [`ViewerCommand`]s through [`execute`](Self::execute) and draw
/// it each frame with [`render`](Self::render).
#[derive(Debug, Clone)]
pub struct ModelViewer {
    options: Options,
    camera: Camera,
    transform: ModelTransform,
    mode: ViewMode,
    viewport: (u32, u32),
    caster: RayCaster,
    loaded: Option<LoadedModel>,
}

impl ModelViewer {
    /// Viewer with nothing loaded.
    #[must_use]
    pub fn new(options: Options, viewport: (u32, u32)) -> Self {
        let mut camera = Camera::from_options(&options.camera, 1.0);
        camera.resize(viewport.0, viewport.1);
        Self {
            camera,
            transform: ModelTransform::default(),
            mode: ViewMode::from_display(&options.display),
            viewport,
            caster: RayCaster::from_options(&options.picking),
            loaded: None,
            options,
        }
    }

    /// Replace the loaded model. Selection state starts empty and the
    /// camera and model placement go back to their start values.
    pub fn load_model(&mut self, model: Model, name: impl Into<String>) {
        let name = name.into();
        log::info!(
            "loaded model '{name}': {} meshes, {} faces",
            model.meshes().len(),
            model.face_count()
        );
        self.loaded = Some(LoadedModel::new(model, name));
        self.reset_view();
    }

    /// Build a model from `meshes` and load it.
    ///
    /// # Errors
    ///
    /// [`ViewerError::EmptyModel`] if `meshes` is empty; the current model
    /// stays loaded.
    pub fn load_meshes(
        &mut self,
        meshes: Vec<Mesh>,
        name: impl Into<String>,
    ) -> Result<(), ViewerError> {
        let model = Model::new(meshes).inspect_err(|e| {
            log::warn!("model rejected: {e}");
        })?;
        self.load_model(model, name);
        Ok(())
    }

    /// Drop the loaded model and all of its selection state.
    pub fn unload(&mut self) {
        if let Some(loaded) = self.loaded.take() {
            log::info!("unloaded model '{}'", loaded.name);
        }
    }

    /// The loaded model, if any.
    #[must_use]
    pub fn loaded(&self) -> Option<&LoadedModel> {
        self.loaded.as_ref()
    }

    /// Current view mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current model placement.
    #[must_use]
    pub fn transform(&self) -> &ModelTransform {
        &self.transform
    }

    /// Drawable area in pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Camera pose and matrices a pick or a frame is evaluated against.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        let basis = self
            .loaded
            .as_ref()
            .map_or(Mat4::IDENTITY, |l| l.model.basis_transform);
        ViewState {
            camera_position: self.camera.eye,
            model: self.transform.matrix(basis),
            view: self.camera.view_matrix(),
            projection: self.camera.build_projection(),
        }
    }

    /// Pick under the cursor, remember the result and refresh the preview.
    ///
    /// Runs regardless of select mode; [`ViewerCommand::PickAt`] is the
    /// gated entry point.
    ///
    /// # Errors
    ///
    /// [`ViewerError::NoModelLoaded`] without a model.
    pub fn pick_at(
        &mut self,
        x: f32,
        y: f32,
    ) -> Result<&PickResult, ViewerError> {
        let view = self.view_state();
        let loaded = self.loaded.as_mut().ok_or(ViewerError::NoModelLoaded)?;
        let pick = self.caster.pick(
            loaded.model.meshes(),
            &view,
            Vec2::new(x, y),
            self.viewport,
        );
        loaded.selection.preview(&pick)?;
        loaded.last_pick = pick;
        Ok(&loaded.last_pick)
    }

    /// Toggle the most recent pick in the persistent highlight sets.
    ///
    /// # Errors
    ///
    /// [`ViewerError::NoModelLoaded`] without a model.
    pub fn confirm_highlight(&mut self) -> Result<Confirmation, ViewerError> {
        let loaded = self.loaded.as_mut().ok_or(ViewerError::NoModelLoaded)?;
        let pick = loaded.last_pick;
        loaded.selection.confirm(&pick)
    }

    /// Select-panel text of the most recent pick.
    ///
    /// # Errors
    ///
    /// [`ViewerError::NoModelLoaded`] without a model.
    pub fn inspect_selection(&self) -> Result<String, ViewerError> {
        self.loaded
            .as_ref()
            .map(|l| l.last_pick.to_string())
            .ok_or(ViewerError::NoModelLoaded)
    }

    /// Persistent highlights as text: vertices, then triangles.
    #[must_use]
    pub fn highlight_text(&self) -> Option<(String, String)> {
        self.loaded.as_ref().map(|l| {
            (
                l.selection.points().indices_as_text(),
                l.selection.triangles().indices_as_text(),
            )
        })
    }

    /// Start camera pose and identity model placement.
    fn reset_view(&mut self) {
        self.transform = ModelTransform::default();
        self.camera =
            Camera::from_options(&self.options.camera, self.camera.aspect);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::geometry::primitives;
    use crate::highlight::{Point, Triangle};

    fn cube_viewer() -> ModelViewer {
        let mut viewer = ModelViewer::new(Options::default(), (600, 600));
        viewer
            .load_meshes(vec![primitives::unit_cube()], "cube.obj")
            .unwrap();
        viewer
    }

    /// Window pixel under the world-space point `p`.
    fn cursor_over(viewer: &ModelViewer, p: Vec3) -> (f32, f32) {
        let view = viewer.view_state();
        let ndc = (view.projection * view.view).project_point3(p);
        (ndc.x.mul_add(300.0, 300.0), (1.0 - ndc.y) * 300.0)
    }

    #[test]
    fn nothing_works_without_a_model() {
        let mut viewer = ModelViewer::new(Options::default(), (600, 600));
        assert!(matches!(
            viewer.pick_at(300.0, 300.0),
            Err(ViewerError::NoModelLoaded)
        ));
        assert!(matches!(
            viewer.confirm_highlight(),
            Err(ViewerError::NoModelLoaded)
        ));
        assert!(viewer.inspect_selection().is_err());
        assert!(viewer.highlight_text().is_none());
        assert!(matches!(
            viewer.load_meshes(Vec::new(), "empty"),
            Err(ViewerError::EmptyModel)
        ));
    }

    #[test]
    fn center_pick_confirmed_twice_toggles_off() {
        let mut viewer = cube_viewer();
        let pick = *viewer.pick_at(300.0, 300.0).unwrap();
        let face = pick.face().unwrap();
        assert!(pick.face_valid());
        assert!(face.face_index < 2);
        assert!((face.distance - 2.5).abs() < 1e-3);

        let first = viewer.confirm_highlight().unwrap();
        assert_eq!(
            first,
            Confirmation::Triangle {
                mesh_index: 0,
                triangle: Triangle(face.indices),
                highlighted: true
            }
        );
        let loaded = viewer.loaded().unwrap();
        assert_eq!(loaded.selection().triangles().len(), 1);
        assert_eq!(
            loaded.selection().preview_triangle().elements(0),
            &[Triangle(face.indices)]
        );

        let second = viewer.confirm_highlight().unwrap();
        assert!(matches!(
            second,
            Confirmation::Triangle {
                highlighted: false,
                ..
            }
        ));
        assert!(viewer.loaded().unwrap().selection().triangles().is_empty());
    }

    #[test]
    fn corner_pick_snaps_and_highlights_the_vertex() {
        let mut viewer = cube_viewer();
        let (x, y) = cursor_over(&viewer, Vec3::new(0.49, 0.49, 0.5));
        let pick = *viewer.pick_at(x, y).unwrap();
        assert!(pick.point_valid());
        assert_eq!(pick.point().unwrap().index, 7);

        let confirmed = viewer.confirm_highlight().unwrap();
        assert_eq!(
            confirmed,
            Confirmation::Point {
                mesh_index: 0,
                point: Point(7),
                highlighted: true
            }
        );
        let (points, triangles) = viewer.highlight_text().unwrap();
        assert_eq!(points, "mesh 0 point (7): 0.5000, 0.5000, 0.5000");
        assert_eq!(triangles, "None");
        assert!(viewer.inspect_selection().unwrap().starts_with("Point (7)"));
    }

    #[test]
    fn miss_clears_the_pick_but_keeps_the_preview() {
        let mut viewer = cube_viewer();
        let _ = viewer.pick_at(300.0, 300.0).unwrap();
        assert!(viewer.pick_at(5.0, 5.0).unwrap().is_nothing());
        assert_eq!(viewer.confirm_highlight().unwrap(), Confirmation::Nothing);
        assert_eq!(
            viewer.loaded().unwrap().selection().preview_triangle().len(),
            1
        );
        assert_eq!(viewer.inspect_selection().unwrap(), "Nothing");
    }

    #[test]
    fn reload_starts_with_empty_state() {
        let mut viewer = cube_viewer();
        let _ = viewer.pick_at(300.0, 300.0).unwrap();
        let _ = viewer.confirm_highlight().unwrap();
        viewer.transform.scroll(5.0);

        viewer
            .load_meshes(vec![primitives::quad(2.0)], "quad.obj")
            .unwrap();
        let loaded = viewer.loaded().unwrap();
        assert_eq!(loaded.name(), "quad.obj");
        assert!(loaded.selection().points().is_empty());
        assert!(loaded.selection().preview_point().is_empty());
        assert!(loaded.selection().triangles().is_empty());
        assert!(loaded.selection().preview_triangle().is_empty());
        assert!(loaded.last_pick().is_nothing());
        assert_eq!(viewer.transform(), &ModelTransform::default());

        viewer.unload();
        assert!(viewer.loaded().is_none());
    }

    #[test]
    fn model_transform_moves_the_pick() {
        let mut viewer = cube_viewer();
        viewer.transform.position = Vec3::new(10.0, 0.0, 0.0);
        assert!(viewer.pick_at(300.0, 300.0).unwrap().is_nothing());
    }
}
