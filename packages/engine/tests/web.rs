//! Browser-side checks, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use hexgrid_engine::HexGrid;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn buffers_are_readable_from_wasm_memory() {
    hexgrid_engine::boot();
    let mut grid = HexGrid::new();
    let h = grid.ptr();
    grid.init(h).unwrap();

    let buf = grid.hex_buf(h).unwrap();
    // the pointer is an absolute address into this instance's memory
    let hexes = unsafe { std::slice::from_raw_parts(buf.ptr() as *const i32, buf.len() as usize * 2) };
    assert_eq!(&[1, 1, 3, 3, 3, 2, 2, 3], hexes);
}

#[wasm_bindgen_test]
fn foreign_handle_is_an_error() {
    let mut a = HexGrid::new();
    let b = HexGrid::new();
    let err: JsValue = a.zoom(b.ptr(), -200., 0., 0.).unwrap_err();
    assert!(err.as_string().unwrap_or_default().contains("unknown instance handle"));
}

#[wasm_bindgen_test]
fn bad_config_is_an_error() {
    assert!(HexGrid::from_config("{ \"hex_size\": [0, 0] }".to_string()).is_err());
    let grid = HexGrid::from_config("{ \"orientation\": \"flat\" }".to_string()).unwrap();
    assert!(grid.config_json().contains("flat"));
}

#[wasm_bindgen_test]
fn boot_twice_keeps_console_logger() {
    hexgrid_engine::boot();
    hexgrid_engine::boot();
    assert_eq!(log::LevelFilter::Debug, log::max_level());
    log::debug!("console logger reachable");
}
