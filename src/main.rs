//! Headless driver: loads a built-in model, replays a short scripted input
//! session through the viewer and logs what a renderer would receive.
//!
//! Usage: `model-viewer [options.toml]`

use std::path::Path;
use std::process::ExitCode;

use glam::Mat4;
use model_viewer::engine::{BasePass, FrameSink, FrameUniforms};
use model_viewer::geometry::{primitives, MeshHandle};
use model_viewer::highlight::{DrawMode, OverlaySink, OverlayStyle};
use model_viewer::input::{InputEvent, InputProcessor, MouseButton};
use model_viewer::options::{LightingOptions, Options};
use model_viewer::{CommandOutcome, ModelViewer, ViewerCommand};

const VIEWPORT: (u32, u32) = (800, 600);

/// Frame sink that only counts and logs draw calls.
#[derive(Default)]
struct LogSink {
    overlays: usize,
    meshes: usize,
}

impl OverlaySink for LogSink {
    fn begin_overlay(&mut self, style: OverlayStyle) {
        log::debug!("overlay offset={} size={}", style.offset, style.size);
    }

    fn draw_element(
        &mut self,
        mesh: MeshHandle,
        mode: DrawMode,
        indices: &[u32],
    ) {
        self.overlays += 1;
        log::debug!("  {mode:?} {indices:?} on mesh {}", mesh.0);
    }

    fn end_overlay(&mut self) {}
}

impl FrameSink for LogSink {
    fn begin_frame(&mut self, clear_color: [f32; 3], uniforms: &FrameUniforms) {
        log::debug!("frame clear={clear_color:?} eye={}", uniforms.eye);
    }

    fn set_color(&mut self, _rgb: [f32; 3]) {}

    fn draw_mesh(
        &mut self,
        mesh: MeshHandle,
        pass: BasePass,
        lighting: Option<&LightingOptions>,
    ) {
        self.meshes += 1;
        log::debug!("mesh {} {pass:?} lit={}", mesh.0, lighting.is_some());
    }

    fn draw_lamp(&mut self, transform: Mat4) {
        log::debug!("lamp at {}", transform.w_axis.truncate());
    }
}

fn load_options() -> Result<Options, model_viewer::ViewerError> {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path)),
        None => Ok(Options::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut viewer = ModelViewer::new(options, VIEWPORT);
    if let Err(e) = viewer.load_meshes(vec![primitives::unit_cube()], "cube") {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }

    let mut input = InputProcessor::new();
    let (cx, cy) = (VIEWPORT.0 as f32 / 2.0, VIEWPORT.1 as f32 / 2.0);
    let script = [
        InputEvent::ModifiersChanged { ctrl: true },
        InputEvent::CursorMoved { x: cx, y: cy },
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        },
        InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        },
        InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        },
    ];

    for event in script {
        let Some(command) = input.handle_event(event, viewer.mode()) else {
            continue;
        };
        match viewer.execute(command) {
            CommandOutcome::Inspected(text) => log::info!("selected: {text}"),
            CommandOutcome::Confirmed(confirmation) => {
                log::info!("{confirmation:?}");
            }
            CommandOutcome::CloseRequested => return ExitCode::SUCCESS,
            CommandOutcome::Ignored | CommandOutcome::Updated => {}
        }
    }
    let _ = viewer.execute(ViewerCommand::TogglePoint);

    let mut sink = LogSink::default();
    viewer.render(&mut sink);
    log::info!(
        "{}: {} base draws, {} overlay draws",
        viewer.title(),
        sink.meshes,
        sink.overlays
    );
    if let Some((points, triangles)) = viewer.highlight_text() {
        log::info!("highlighted points:\n{points}");
        log::info!("highlighted triangles:\n{triangles}");
    }

    ExitCode::SUCCESS
}
