//! Input bridge
//!
//! Events arrive in page coordinates and are made canvas-relative before
//! anything reaches the module:
//! - wheel            -> `zoom(handle, delta_y, x, y)`
//! - left button      -> `get_hex(handle, x, y)`, logged as `hex=q:r`
//! - any other button -> `adj_origin(handle, x - w/2, y - h/2)`, logged as
//!   `adj origin x:a->b, y:c->d`

use hexgrid_engine::{GridModule, Handle};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

pub const BUTTON_LEFT: i16 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Wheel { delta_y: f32, x: f32, y: f32 },
    MouseDown { button: i16, x: f32, y: f32 },
}

impl InputEvent {
    /// Parse a JSON array of events.
    pub fn parse_script(json: &str) -> Result<Vec<InputEvent>, ViewerError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Placement of the canvas on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn to_canvas(&self, page_x: f32, page_y: f32) -> (f32, f32) {
        (page_x - self.left, page_y - self.top)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2., self.height / 2.)
    }
}

/// What an event did to the module.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputOutcome {
    Zoomed { scale: f32 },
    Picked { q: i32, r: i32 },
    Panned { from: (f32, f32), to: (f32, f32) },
}

#[derive(Clone, Copy, Debug)]
pub struct InputBridge {
    rect: CanvasRect,
}

impl InputBridge {
    pub fn new(rect: CanvasRect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> CanvasRect {
        self.rect
    }

    /// The canvas can move on the page between events.
    pub fn set_rect(&mut self, rect: CanvasRect) {
        self.rect = rect;
    }

    pub fn dispatch<M: GridModule + ?Sized>(
        &self,
        module: &mut M,
        handle: Handle,
        event: InputEvent,
    ) -> Result<InputOutcome, ViewerError> {
        match event {
            InputEvent::Wheel { delta_y, x, y } => {
                let (x, y) = self.rect.to_canvas(x, y);
                module.zoom(handle, delta_y, x, y)?;
                Ok(InputOutcome::Zoomed {
                    scale: module.get_scale(handle)?,
                })
            }
            InputEvent::MouseDown { button, x, y } => {
                let (x, y) = self.rect.to_canvas(x, y);
                if button == BUTTON_LEFT {
                    let (q, r) = module.get_hex(handle, x, y)?;
                    info!("hex={}:{}", q, r);
                    Ok(InputOutcome::Picked { q, r })
                } else {
                    let (cx, cy) = self.rect.center();
                    let from = module.get_origin(handle)?;
                    module.adj_origin(handle, x - cx, y - cy)?;
                    let to = module.get_origin(handle)?;
                    info!("adj origin x:{}->{}, y:{}->{}", from.0, to.0, from.1, to.1);
                    Ok(InputOutcome::Panned { from, to })
                }
            }
        }
    }
}
