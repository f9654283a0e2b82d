// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D model viewer core with CPU ray picking.
//!
//! The crate turns cursor positions into world-space rays, finds the
//! nearest triangle across a multi-mesh model, snaps the hit to a vertex
//! under a distance-scaled screen tolerance, and keeps toggleable sets of
//! highlighted vertices and triangles. Rendering is delegated to a host
//! through the [`engine::FrameSink`] seam.
//!
//! # Key entry points
//!
//! - [`ModelViewer`] - the viewer root driven by [`ViewerCommand`]s
//! - [`picking::RayCaster`] - nearest-face picking and vertex refinement
//! - [`highlight::HighlightSet`] - per-mesh toggle sets keyed by position
//! - [`input::InputProcessor`] - raw window events to commands
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Example
//!
//! ```
//! use model_viewer::geometry::primitives;
//! use model_viewer::options::Options;
//! use model_viewer::{ModelViewer, ViewerCommand};
//!
//! let mut viewer = ModelViewer::new(Options::default(), (640, 480));
//! viewer.load_meshes(vec![primitives::unit_cube()], "cube")?;
//! let _ = viewer.execute(ViewerCommand::SetSelectMode { enabled: true });
//! let _ = viewer.execute(ViewerCommand::PickAt { x: 320.0, y: 240.0 });
//! let _ = viewer.execute(ViewerCommand::ConfirmHighlight);
//! let highlighted = viewer.loaded().map(|l| l.selection().triangles().len());
//! assert_eq!(highlighted, Some(1));
//! # Ok::<(), model_viewer::error::ViewerError>(())
//! ```

pub mod camera;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod input;
pub mod options;
pub mod picking;
pub mod selection;

pub use engine::{CommandOutcome, ModelViewer, ViewerCommand};
pub use error::ViewerError;
