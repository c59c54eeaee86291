//! Viewport compositor
//!
//! Every frame the module's viewport picks the source rectangle
//! `(origin.x, origin.y, canvas_w / scale, canvas_h / scale)` of the offscreen
//! surface, which is copied onto the whole visible canvas. The rectangle is
//! clipped to the surface first and the destination shrinks with it, so the
//! copy never reads outside the surface.

use hexgrid_engine::{GridModule, Handle};

use crate::error::ViewerError;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        !(self.w > 0. && self.h > 0.)
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.bottom() <= self.bottom()
    }
}

/// One scaled copy: `src` in offscreen pixels onto `dst` in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blit {
    pub src: Rect,
    pub dst: Rect,
}

/// Where a frame is composited to.
pub trait FrameSink {
    type Source: ?Sized;

    fn frame_size(&self) -> [u32; 2];
    fn clear_frame(&mut self);
    fn draw_image(&mut self, source: &Self::Source, blit: &Blit);
}

/// The unclipped source rectangle for a viewport; `None` for a scale that
/// cannot produce a finite, non-empty rectangle.
pub fn source_rect(origin: (f32, f32), scale: f32, canvas: [u32; 2]) -> Option<Rect> {
    if !(scale.is_finite() && scale > 0.) || !(origin.0.is_finite() && origin.1.is_finite()) {
        return None;
    }
    let r = Rect::new(origin.0, origin.1, canvas[0] as f32 / scale, canvas[1] as f32 / scale);
    (r.w.is_finite() && r.h.is_finite() && !r.is_empty()).then_some(r)
}

/// The copy for one frame, or `None` when nothing of the surface is visible.
pub fn plan(origin: (f32, f32), scale: f32, canvas: [u32; 2], surface: [u32; 2]) -> Option<Blit> {
    let full = source_rect(origin, scale, canvas)?;
    let (sx0, sx1) = clip(full.x, full.right(), surface[0] as f32)?;
    let (sy0, sy1) = clip(full.y, full.bottom(), surface[1] as f32)?;
    Some(Blit {
        src: Rect::new(sx0, sy0, sx1 - sx0, sy1 - sy0),
        dst: Rect::new(
            (sx0 - full.x) * scale,
            (sy0 - full.y) * scale,
            (sx1 - sx0) * scale,
            (sy1 - sy0) * scale,
        ),
    })
}

fn clip(from: f32, to: f32, limit: f32) -> Option<(f32, f32)> {
    let lo = from.max(0.);
    let hi = to.min(limit);
    (hi > lo).then_some((lo, hi))
}

/// Clear the sink, read the viewport from the module and copy the visible
/// part of `source`. Returns the copy that was made.
pub fn composite<M, S>(
    module: &M,
    handle: Handle,
    sink: &mut S,
    source: &S::Source,
    source_size: [u32; 2],
) -> Result<Option<Blit>, ViewerError>
where
    M: GridModule + ?Sized,
    S: FrameSink + ?Sized,
{
    sink.clear_frame();
    let origin = module.get_origin(handle)?;
    let scale = module.get_scale(handle)?;
    let blit = plan(origin, scale, sink.frame_size(), source_size);
    match &blit {
        Some(b) => sink.draw_image(source, b),
        None => log::trace!("empty frame: origin {:?}, scale {}", origin, scale),
    }
    Ok(blit)
}
