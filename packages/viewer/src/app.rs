//! The whole harness pipeline for one module instance.

use hexgrid_engine::{GridConfig, GridCore, GridModule, Handle};
use log::{debug, warn};

use crate::compositor::{self, Blit};
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::input::{CanvasRect, InputBridge, InputEvent, InputOutcome};
use crate::loader::{self, LoadedModule};
use crate::raster::Surface;
use crate::render;
use crate::views::GeometryViews;

/// Loaded module, its one-time offscreen render and the visible canvas.
pub struct Viewer<M: GridModule = GridCore> {
    loaded: LoadedModule<M>,
    config: ViewerConfig,
    input: InputBridge,
    offscreen: Surface,
    canvas: Surface,
    frames: u64,
}

impl Viewer<GridCore> {
    pub fn from_configs(grid: GridConfig, config: ViewerConfig) -> Result<Self, ViewerError> {
        Self::new(loader::load_grid(grid)?, config)
    }
}

impl<M: GridModule> Viewer<M> {
    /// Build both surfaces and render the module's geometry offscreen.
    pub fn new(loaded: LoadedModule<M>, config: ViewerConfig) -> Result<Self, ViewerError> {
        config.validate()?;
        let [cw, ch] = config.canvas_size;
        let [ow, oh] = config.offscreen_size;
        let mut offscreen = Surface::new(ow, oh)?
            .with_colors(config.background, config.stroke)
            .with_glyph_scale(config.glyph_scale);
        let canvas = Surface::new(cw, ch)?.with_colors(config.background, config.stroke);

        let views = GeometryViews::build(loaded.module(), loaded.handle())?;
        if views.is_empty() {
            warn!("grid module exported no hexes");
        }
        render::render_offscreen(&mut offscreen, &views);

        let [left, top] = config.canvas_offset;
        let input = InputBridge::new(CanvasRect::new(left, top, cw as f32, ch as f32));
        Ok(Self {
            loaded,
            config,
            input,
            offscreen,
            canvas,
            frames: 0,
        })
    }

    pub fn module(&self) -> &M {
        self.loaded.module()
    }

    pub fn handle(&self) -> Handle {
        self.loaded.handle()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn offscreen(&self) -> &Surface {
        &self.offscreen
    }

    pub fn canvas(&self) -> &Surface {
        &self.canvas
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn dispatch(&mut self, event: InputEvent) -> Result<InputOutcome, ViewerError> {
        let (module, handle) = self.loaded.parts_mut();
        self.input.dispatch(module, handle, event)
    }

    /// Composite one frame onto the visible canvas.
    pub fn frame(&mut self) -> Result<Option<Blit>, ViewerError> {
        let blit = compositor::composite(
            self.loaded.module(),
            self.loaded.handle(),
            &mut self.canvas,
            &self.offscreen,
            self.offscreen.size(),
        )?;
        self.frames += 1;
        Ok(blit)
    }

    /// Run `frames` frames, feeding one scripted event before each frame
    /// while events remain. Leftover events are applied before the last frame.
    pub fn run(&mut self, events: &[InputEvent], frames: u32) -> Result<Option<Blit>, ViewerError> {
        let frames = frames.max(1) as usize;
        let mut last = None;
        let mut pending = events.iter();
        for i in 0..frames {
            let take = if i + 1 == frames { usize::MAX } else { 1 };
            for event in pending.by_ref().take(take) {
                self.dispatch(*event)?;
            }
            last = self.frame()?;
        }
        debug!("ran {} frames, {} events", frames, events.len());
        Ok(last)
    }

    /// Redraw the offscreen surface, e.g. after the module was re-initialized.
    pub fn rerender(&mut self) -> Result<(), ViewerError> {
        let views = GeometryViews::build(self.loaded.module(), self.loaded.handle())?;
        render::render_offscreen(&mut self.offscreen, &views);
        Ok(())
    }

    pub fn into_module(self) -> M {
        self.loaded.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> Viewer {
        Viewer::from_configs(GridConfig::default(), ViewerConfig::default()).unwrap()
    }

    #[test]
    fn offscreen_render_is_deterministic() {
        let a = viewer();
        let b = viewer();
        assert_eq!(a.offscreen().fingerprint(), b.offscreen().fingerprint());

        let ink = a.config().stroke;
        let bg = a.config().background;
        // hex (1, 1) is centered at (16 + 1.5 * 16 * sqrt3, 40) on the default pointy layout
        let (cx, cy) = (16. + 1.5 * 16. * 1.732_050_8_f32, 40.);
        // top corner of that hex, and its label's bottom-left pixel
        assert_eq!(Some(ink), a.offscreen().pixel(cx.round() as i32, (cy - 16.) as i32));
        assert_eq!(Some(ink), a.offscreen().pixel((cx - 2.).round() as i32, (cy + 1.) as i32));
        // far corner of the surface stays untouched
        assert_eq!(Some(bg), a.offscreen().pixel(799, 599));
    }

    #[test]
    fn frame_copies_viewport() {
        let mut v = viewer();
        let blit = v.frame().unwrap().unwrap();
        assert_eq!(compositor::Rect::new(0., 0., 640., 480.), blit.src);
        assert_eq!(v.offscreen().pixel(40, 40), v.canvas().pixel(40, 40));
        assert_eq!(1, v.frames());
    }

    #[test]
    fn scripted_run_zooms_and_pans() {
        let mut v = viewer();
        let events = [
            InputEvent::Wheel { delta_y: -200., x: 0., y: 0. },
            InputEvent::MouseDown { button: 2, x: 420., y: 240. },
        ];
        let blit = v.run(&events, 3).unwrap().unwrap();
        let h = v.handle();
        assert!((v.module().get_scale(h).unwrap() - 2.).abs() < 1e-6);
        // (420 - 320, 0) in canvas pixels is 50 offscreen pixels at scale 2
        assert_eq!((50., 0.), v.module().get_origin(h).unwrap());
        assert_eq!(compositor::Rect::new(50., 0., 320., 240.), blit.src);
        assert_eq!(3, v.frames());
    }

    #[test]
    fn rerender_after_reinit_matches_first_render() {
        let mut v = viewer();
        let first = v.offscreen().fingerprint();
        let h = v.handle();
        v.loaded.module_mut().init(h).unwrap();
        v.rerender().unwrap();
        assert_eq!(first, v.offscreen().fingerprint());

        let module = v.into_module();
        assert_eq!(h, module.ptr());
        assert!(module.is_initialized());
    }

    #[test]
    fn viewport_off_the_surface_clears_the_frame() {
        let mut v = viewer();
        for _ in 0..4 {
            v.dispatch(InputEvent::MouseDown { button: 1, x: 640., y: 480. }).unwrap();
        }
        assert_eq!(None, v.frame().unwrap());
        let bg = v.config().background;
        assert_eq!(640 * 480, v.canvas().count(bg));
    }
}
