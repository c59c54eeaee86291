//! Software rasterizer behind [`Canvas2d`](crate::canvas::Canvas2d).
//!
//! - surface.rs - RGBA pixel surface, paths, blits, PNG output
//! - line.rs    - integer line stepping
//! - glyphs.rs  - 3x5 bitmap digits for hex labels

mod glyphs;
mod line;
mod surface;

pub use glyphs::{glyph, text_width, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use line::line_pixels;
pub use surface::{Surface, MAX_SURFACE_SIDE};

/// One pixel, `[r, g, b, a]`.
pub type Rgba = [u8; 4];
