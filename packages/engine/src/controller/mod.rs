//! Grid controller - the compute module behind the host's function table
//!
//! Owns one grid instance: its config, the hex layout, the geometry buffers in
//! linear memory and the viewport (origin + scale) the host composites with.
//!
//! - init/      - building hexes, centers and corners into linear memory
//! - viewport/  - zoom, pan and view -> layout mapping
//! - abi.rs     - the handle-checked `GridModule` function table
//! - facade.rs  - wasm-bindgen surface for JS hosts

use std::sync::atomic::{AtomicU32, Ordering};

use crate::core::{EngineError, LinearMemory, Region};
use crate::domain::GridConfig;
use crate::geometry::Hex;
use crate::screen::{point, Layout, Point};

#[path = "init/init.rs"]
mod init;
#[path = "viewport/viewport.rs"]
mod viewport;
mod abi;
mod facade;

pub use abi::GridModule;
pub use facade::{AbiLayout, BufferRef, HexGrid};

static NEXT_HANDLE: AtomicU32 = AtomicU32::new(1);

/// Opaque instance handle threaded through every module call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle(u32);

impl Handle {
    fn next() -> Self {
        Handle(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn from_raw(raw: u32) -> Self {
        Handle(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// Regions of the three geometry buffers of an initialized grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBuffers {
    pub hexes: Region,
    pub centers: Region,
    pub corners: Region,
}

pub struct GridCore {
    handle: Handle,
    config: GridConfig,
    layout: Layout,
    memory: LinearMemory,
    buffers: Option<GridBuffers>,

    view_origin: Point,
    view_scale: f32,
}

impl GridCore {
    /// Create an uninitialized grid; call [`GridCore::init_buffers`] before reading buffers.
    pub fn new(config: GridConfig) -> Self {
        let layout = config.layout();
        Self {
            handle: Handle::next(),
            config,
            layout,
            memory: LinearMemory::new(),
            buffers: None,
            view_origin: point(0., 0.),
            view_scale: 1.,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(Self::new(GridConfig::from_json(json)?))
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn memory(&self) -> &LinearMemory {
        &self.memory
    }

    pub fn is_initialized(&self) -> bool {
        self.buffers.is_some()
    }

    /// Build (or rebuild) the geometry buffers. Resets the viewport.
    pub fn init_buffers(&mut self) -> Result<GridBuffers, EngineError> {
        init::build_buffers(self)
    }

    pub fn buffers(&self) -> Result<GridBuffers, EngineError> {
        self.buffers.ok_or(EngineError::NotInitialized)
    }

    pub fn hexes(&self) -> Result<&[Hex], EngineError> {
        self.memory.view(self.buffers()?.hexes)
    }

    pub fn centers(&self) -> Result<&[Point], EngineError> {
        self.memory.view(self.buffers()?.centers)
    }

    pub fn corners(&self) -> Result<&[Point], EngineError> {
        self.memory.view(self.buffers()?.corners)
    }

    // === Viewport ===

    pub fn origin(&self) -> Point {
        self.view_origin
    }

    pub fn scale(&self) -> f32 {
        self.view_scale
    }

    /// Zoom by a wheel delta around the view position `(x, y)`.
    pub fn zoom_at(&mut self, dy: f32, x: f32, y: f32) {
        viewport::zoom(self, dy, x, y);
    }

    /// Shift the origin by a view-space offset.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        viewport::adj_origin(self, dx, dy);
    }

    /// Multiply the scale without moving the origin.
    pub fn scale_by(&mut self, factor: f32) {
        viewport::adj_size(self, factor);
    }

    /// Hex under the view position `(x, y)`.
    pub fn hex_at(&self, x: f32, y: f32) -> Hex {
        self.layout.point_to_hex(self.view_to_layout(x, y))
    }

    pub fn view_to_layout(&self, x: f32, y: f32) -> Point {
        viewport::view_to_layout(self, x, y)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
