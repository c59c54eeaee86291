//! Hexgrid Engine - hexagonal grid compute module for WASM hosts
//!
//! Architecture:
//! - core/        - errors, linear memory arena, timing
//! - geometry/    - axial hex math and shapes
//! - screen/      - pixel points and the hex <-> pixel layout
//! - domain/      - grid configuration
//! - controller/  - grid instances, viewport and the exported function table

pub mod core;
pub mod geometry;
pub mod screen;
pub mod domain;
pub mod controller;

use wasm_bindgen::prelude::*;

pub use controller::{GridBuffers, GridCore, GridModule, Handle, HexGrid};
pub use self::core::{EngineError, LinearMemory, Region};
pub use domain::GridConfig;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn boot() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // a second boot finds the logger already set
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Debug);

    web_sys::console::log_1(&"hexgrid engine ready".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
