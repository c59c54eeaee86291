//! Hexgrid Viewer - harness around a hexgrid compute module
//!
//! Loads a module, reads its geometry straight out of linear memory, renders
//! it once to an offscreen surface and composites the module's viewport onto
//! the visible canvas every frame.
//!
//! Architecture:
//! - loader      - instantiate, `ptr` + `init`, log the exported buffers
//! - views       - typed views over `(pointer, count)` pairs
//! - canvas      - the 2D drawing contract shared by every backend
//! - raster/     - software RGBA surface (native snapshots and tests)
//! - render      - one-time offscreen geometry render
//! - compositor  - per-frame viewport copy
//! - input       - wheel / mouse forwarding to the module
//! - app         - the whole pipeline for one module instance
//! - web         - browser canvas + requestAnimationFrame (wasm32 only)

pub mod error;
pub mod config;
pub mod loader;
pub mod views;
pub mod canvas;
pub mod raster;
pub mod render;
pub mod compositor;
pub mod input;
pub mod app;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::Viewer;
pub use canvas::Canvas2d;
pub use compositor::{Blit, FrameSink, Rect};
pub use config::ViewerConfig;
pub use error::ViewerError;
pub use input::{CanvasRect, InputBridge, InputEvent, InputOutcome};
pub use loader::{load, load_grid, LoadedModule};
pub use raster::Surface;
pub use views::GeometryViews;
