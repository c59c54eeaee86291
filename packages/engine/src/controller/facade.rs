use wasm_bindgen::prelude::*;

use crate::core::{EngineError, Region};

use super::{GridCore, GridModule, Handle};

fn js_err(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// `(pointer, count)` of one geometry buffer. `ptr` is an absolute address
/// in the wasm instance's memory, ready for `new Int32Array(memory.buffer, ptr, len * 2)`.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BufferRef {
    ptr: u32,
    len: u32,
}

#[wasm_bindgen]
impl BufferRef {
    #[wasm_bindgen(getter)]
    pub fn ptr(&self) -> u32 { self.ptr }
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> u32 { self.len }
}

#[wasm_bindgen]
pub struct AbiLayout {
    hexes_ptr: u32,
    hexes_len_elements: u32,
    hexes_len_bytes: u32,
    centers_ptr: u32,
    centers_len_elements: u32,
    centers_len_bytes: u32,
    corners_ptr: u32,
    corners_len_elements: u32,
    corners_len_bytes: u32,
    memory_reallocations: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn hexes_ptr(&self) -> u32 { self.hexes_ptr }
    #[wasm_bindgen(getter)]
    pub fn hexes_len_elements(&self) -> u32 { self.hexes_len_elements }
    #[wasm_bindgen(getter)]
    pub fn hexes_len_bytes(&self) -> u32 { self.hexes_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn centers_ptr(&self) -> u32 { self.centers_ptr }
    #[wasm_bindgen(getter)]
    pub fn centers_len_elements(&self) -> u32 { self.centers_len_elements }
    #[wasm_bindgen(getter)]
    pub fn centers_len_bytes(&self) -> u32 { self.centers_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn corners_ptr(&self) -> u32 { self.corners_ptr }
    #[wasm_bindgen(getter)]
    pub fn corners_len_elements(&self) -> u32 { self.corners_len_elements }
    #[wasm_bindgen(getter)]
    pub fn corners_len_bytes(&self) -> u32 { self.corners_len_bytes }

    /// Changes whenever the buffers moved; JS typed-array views must be rebuilt.
    #[wasm_bindgen(getter)]
    pub fn memory_reallocations(&self) -> u32 { self.memory_reallocations }
}

/// One grid instance as seen from JavaScript.
#[wasm_bindgen]
pub struct HexGrid {
    core: GridCore,
}

#[wasm_bindgen]
impl HexGrid {
    /// Create a grid with the default demo shapes
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: GridCore::new(Default::default()),
        }
    }

    /// Create a grid from a JSON config
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<HexGrid, JsValue> {
        let core = GridCore::from_json(&json).map_err(js_err)?;
        Ok(Self { core })
    }

    pub fn ptr(&self) -> u32 {
        GridModule::ptr(&self.core).raw()
    }

    pub fn init(&mut self, handle: u32) -> Result<(), JsValue> {
        GridModule::init(&mut self.core, Handle::from_raw(handle)).map_err(js_err)
    }

    pub fn hex_buf(&self, handle: u32) -> Result<BufferRef, JsValue> {
        let region = self.core.hex_buf(Handle::from_raw(handle)).map_err(js_err)?;
        Ok(self.buffer_ref(region))
    }

    pub fn centers_buf(&self, handle: u32) -> Result<BufferRef, JsValue> {
        let region = self.core.centers_buf(Handle::from_raw(handle)).map_err(js_err)?;
        Ok(self.buffer_ref(region))
    }

    pub fn corners_buf(&self, handle: u32) -> Result<BufferRef, JsValue> {
        let region = self.core.corners_buf(Handle::from_raw(handle)).map_err(js_err)?;
        Ok(self.buffer_ref(region))
    }

    pub fn zoom(&mut self, handle: u32, dy: f32, x: f32, y: f32) -> Result<(), JsValue> {
        GridModule::zoom(&mut self.core, Handle::from_raw(handle), dy, x, y).map_err(js_err)
    }

    /// `[q, r]` of the hex under the canvas position
    pub fn get_hex(&self, handle: u32, x: f32, y: f32) -> Result<Vec<i32>, JsValue> {
        let (q, r) = GridModule::get_hex(&self.core, Handle::from_raw(handle), x, y).map_err(js_err)?;
        Ok(vec![q, r])
    }

    /// `[x, y]` of the viewport origin
    pub fn get_origin(&self, handle: u32) -> Result<Vec<f32>, JsValue> {
        let (x, y) = self.core.get_origin(Handle::from_raw(handle)).map_err(js_err)?;
        Ok(vec![x, y])
    }

    pub fn adj_origin(&mut self, handle: u32, dx: f32, dy: f32) -> Result<(), JsValue> {
        GridModule::adj_origin(&mut self.core, Handle::from_raw(handle), dx, dy).map_err(js_err)
    }

    pub fn adj_size(&mut self, handle: u32, factor: f32) -> Result<(), JsValue> {
        GridModule::adj_size(&mut self.core, Handle::from_raw(handle), factor).map_err(js_err)
    }

    pub fn get_scale(&self, handle: u32) -> Result<f32, JsValue> {
        self.core.get_scale(Handle::from_raw(handle)).map_err(js_err)
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn abi_layout(&self) -> Result<AbiLayout, JsValue> {
        let buffers = self.core.buffers().map_err(js_err)?;
        let hexes = self.buffer_ref(buffers.hexes);
        let centers = self.buffer_ref(buffers.centers);
        let corners = self.buffer_ref(buffers.corners);
        let pair = 2 * std::mem::size_of::<f32>() as u32;
        Ok(AbiLayout {
            hexes_ptr: hexes.ptr,
            hexes_len_elements: hexes.len,
            hexes_len_bytes: hexes.len * pair,
            centers_ptr: centers.ptr,
            centers_len_elements: centers.len,
            centers_len_bytes: centers.len * pair,
            corners_ptr: corners.ptr,
            corners_len_elements: corners.len,
            corners_len_bytes: corners.len * pair,
            memory_reallocations: self.core.memory().reallocations(),
        })
    }
}

impl Default for HexGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl HexGrid {
    pub fn core(&self) -> &GridCore {
        &self.core
    }

    fn buffer_ref(&self, region: Region) -> BufferRef {
        let base = self.core.memory().base_ptr() as usize;
        BufferRef {
            ptr: (base + region.offset as usize) as u32,
            len: region.len,
        }
    }
}
