//! Browser wiring: the visible `<canvas>`, an `OffscreenCanvas` rendered once,
//! and a `requestAnimationFrame` loop that composites the viewport forever.

use std::cell::RefCell;
use std::rc::Rc;

use hexgrid_engine::{GridConfig, GridCore};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, OffscreenCanvas,
    OffscreenCanvasRenderingContext2d, WheelEvent,
};

use crate::canvas::Canvas2d;
use crate::compositor::{self, Blit, FrameSink};
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::input::{CanvasRect, InputBridge, InputEvent};
use crate::loader::{self, LoadedModule};
use crate::render;
use crate::views::GeometryViews;

const LABEL_FONT: &str = "8px serif";

fn js_err(e: ViewerError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

struct OffscreenContext(OffscreenCanvasRenderingContext2d);

impl Canvas2d for OffscreenContext {
    fn clear(&mut self) {
        let c = self.0.canvas();
        self.0.clear_rect(0., 0., c.width() as f64, c.height() as f64);
    }

    fn begin_path(&mut self) {
        self.0.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x as f64, y as f64);
    }

    fn stroke(&mut self) {
        self.0.stroke();
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        if let Err(e) = self.0.stroke_text(text, x as f64, y as f64) {
            log::warn!("stroke_text {text}: {e:?}");
        }
    }
}

struct CanvasTarget {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl FrameSink for CanvasTarget {
    type Source = OffscreenCanvas;

    fn frame_size(&self) -> [u32; 2] {
        [self.canvas.width(), self.canvas.height()]
    }

    fn clear_frame(&mut self) {
        let [w, h] = self.frame_size();
        self.ctx.clear_rect(0., 0., w as f64, h as f64);
    }

    fn draw_image(&mut self, source: &OffscreenCanvas, blit: &Blit) {
        let (s, d) = (blit.src, blit.dst);
        let res = self.ctx.draw_image_with_offscreen_canvas_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            source, s.x as f64, s.y as f64, s.w as f64, s.h as f64, d.x as f64, d.y as f64, d.w as f64, d.h as f64,
        );
        if let Err(e) = res {
            log::error!("drawImage: {e:?}");
        }
    }
}

struct WebViewer {
    loaded: LoadedModule<GridCore>,
    input: InputBridge,
    target: CanvasTarget,
    offscreen: OffscreenCanvas,
}

impl WebViewer {
    fn dispatch(&mut self, event: InputEvent) {
        self.input.set_rect(canvas_rect(&self.target.canvas));
        let (module, handle) = self.loaded.parts_mut();
        if let Err(e) = self.input.dispatch(module, handle, event) {
            log::error!("input {event:?}: {e}");
        }
    }

    fn frame(&mut self) {
        let size = [self.offscreen.width(), self.offscreen.height()];
        let res = compositor::composite(
            self.loaded.module(),
            self.loaded.handle(),
            &mut self.target,
            &self.offscreen,
            size,
        );
        if let Err(e) = res {
            log::error!("frame: {e}");
        }
    }
}

fn canvas_rect(canvas: &HtmlCanvasElement) -> CanvasRect {
    let r = canvas.get_bounding_client_rect();
    CanvasRect::new(r.left() as f32, r.top() as f32, canvas.width() as f32, canvas.height() as f32)
}

fn missing(what: &str) -> JsValue {
    JsValue::from_str(&format!("{what} is not available"))
}

/// Load a grid (the demo grid when `grid_json` is absent) and drive it on the
/// canvas with id `canvas_id` until the page goes away.
#[wasm_bindgen]
pub fn start_viewer(canvas_id: &str, grid_json: Option<String>) -> Result<(), JsValue> {
    hexgrid_engine::boot();

    let grid = match grid_json {
        Some(json) => GridConfig::from_json(&json).map_err(|e| js_err(e.into()))?,
        None => GridConfig::default(),
    };
    let loaded = loader::load_grid(grid).map_err(js_err)?;
    let config = ViewerConfig::default();

    let window = web_sys::window().ok_or_else(|| missing("window"))?;
    let document = window.document().ok_or_else(|| missing("document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| missing(canvas_id))?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| missing("2d context"))?
        .dyn_into()?;

    let [ow, oh] = config.offscreen_size;
    let offscreen = OffscreenCanvas::new(ow, oh)?;
    let off_ctx: OffscreenCanvasRenderingContext2d = offscreen
        .get_context("2d")?
        .ok_or_else(|| missing("offscreen 2d context"))?
        .dyn_into()?;
    off_ctx.set_font(LABEL_FONT);
    {
        let views = GeometryViews::build(loaded.module(), loaded.handle()).map_err(js_err)?;
        render::render_offscreen(&mut OffscreenContext(off_ctx), &views);
    }

    let state = Rc::new(RefCell::new(WebViewer {
        loaded,
        input: InputBridge::new(canvas_rect(&canvas)),
        target: CanvasTarget {
            canvas: canvas.clone(),
            ctx,
        },
        offscreen,
    }));

    let wheel_cb = {
        let state = state.clone();
        Closure::wrap(Box::new(move |e: WheelEvent| {
            let event = InputEvent::Wheel {
                delta_y: e.delta_y() as f32,
                x: e.client_x() as f32,
                y: e.client_y() as f32,
            };
            state.borrow_mut().dispatch(event);
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())?;
    wheel_cb.forget();

    let mousedown_cb = {
        let state = state.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            let event = InputEvent::MouseDown {
                button: e.button(),
                x: e.client_x() as f32,
                y: e.client_y() as f32,
            };
            state.borrow_mut().dispatch(event);
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())?;
    mousedown_cb.forget();

    // right button pans; keep the context menu out of the way
    let contextmenu_cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
        e.prevent_default();
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("contextmenu", contextmenu_cb.as_ref().unchecked_ref())?;
    contextmenu_cb.forget();

    // RAF loop
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let tick_loop = tick.clone();
        let window_loop = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            state.borrow_mut().frame();
            if let Some(cb) = tick_loop.borrow().as_ref() {
                if let Err(e) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    log::error!("requestAnimationFrame: {e:?}");
                }
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(cb) = tick.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }

    log::info!("viewer started on #{canvas_id}");
    Ok(())
}
