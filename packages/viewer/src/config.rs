use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::raster::{Rgba, MAX_SURFACE_SIDE};

/// Harness settings, read from JSON. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Visible canvas, in pixels.
    pub canvas_size: [u32; 2],
    /// Backing surface the geometry is rendered to once.
    pub offscreen_size: [u32; 2],
    /// Page position of the canvas' top-left corner. Input events carry page
    /// coordinates and are shifted by this before reaching the module.
    pub canvas_offset: [f32; 2],
    pub background: Rgba,
    pub stroke: Rgba,
    /// Integer upscale of the built-in label glyphs.
    pub glyph_scale: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            canvas_size: [640, 480],
            offscreen_size: [800, 600],
            canvas_offset: [0., 0.],
            background: [255, 255, 255, 255],
            stroke: [0, 0, 0, 255],
            glyph_scale: 1,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        let config: ViewerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        for (name, [w, h]) in [("canvas_size", self.canvas_size), ("offscreen_size", self.offscreen_size)] {
            if w == 0 || h == 0 {
                return Err(ViewerError::Config(format!("{name} must be non-zero, got {w}x{h}")));
            }
            if w > MAX_SURFACE_SIDE || h > MAX_SURFACE_SIDE {
                return Err(ViewerError::Config(format!(
                    "{name} {w}x{h} exceeds {MAX_SURFACE_SIDE} pixels per side"
                )));
            }
        }
        if !self.canvas_offset.iter().all(|v| v.is_finite()) {
            return Err(ViewerError::Config("canvas_offset must be finite".into()));
        }
        if self.glyph_scale == 0 {
            return Err(ViewerError::Config("glyph_scale must be at least 1".into()));
        }
        Ok(())
    }
}
