use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder};

use crate::canvas::Canvas2d;
use crate::compositor::{Blit, FrameSink};
use crate::error::ViewerError;

use super::{glyph, line_pixels, Rgba, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Largest side a surface may have, the common browser canvas limit.
pub const MAX_SURFACE_SIDE: u32 = 16384;

/// RGBA pixel surface standing in for an HTML canvas.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,

    background: Rgba,
    stroke: Rgba,
    glyph_scale: u32,

    path: Vec<Vec<(f32, f32)>>,
}

impl Surface {
    /// Create a surface filled with the background color. Both sides must be
    /// in `1..=MAX_SURFACE_SIDE`.
    pub fn new(width: u32, height: u32) -> Result<Self, ViewerError> {
        if width > MAX_SURFACE_SIDE || height > MAX_SURFACE_SIDE {
            return Err(ViewerError::Surface { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|n| *n > 0)
            .ok_or(ViewerError::Surface { width, height })?;
        let background = [255, 255, 255, 255];
        Ok(Self {
            width,
            height,
            pixels: vec![background; len],
            background,
            stroke: [0, 0, 0, 255],
            glyph_scale: 1,
            path: Vec::new(),
        })
    }

    /// Set the colors used by `clear` and `stroke`; the surface is cleared.
    pub fn with_colors(mut self, background: Rgba, stroke: Rgba) -> Self {
        self.background = background;
        self.stroke = stroke;
        self.pixels.fill(background);
        self
    }

    pub fn with_glyph_scale(mut self, scale: u32) -> Self {
        self.glyph_scale = scale.max(1);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width, self.height]
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn stroke_color(&self) -> Rgba {
        self.stroke
    }

    /// Raw RGBA bytes, row-major, ready for `ImageData` or a PNG encoder.
    pub fn as_rgba(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes are clipped to the surface.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn count(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// Stable hash of size and content, for snapshot comparisons.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.as_rgba().hash(&mut hasher);
        hasher.finish()
    }

    /// Nearest-neighbour copy of `blit.src` in `source` onto `blit.dst` here.
    /// A destination pixel is covered when its center lies inside `blit.dst`.
    pub fn draw_scaled(&mut self, source: &Surface, blit: &Blit) {
        let (src, dst) = (blit.src, blit.dst);
        if dst.is_empty() || src.is_empty() {
            return;
        }
        let kx = src.w / dst.w;
        let ky = src.h / dst.h;
        let (x0, x1) = pixel_span(dst.x, dst.right(), self.width);
        let (y0, y1) = pixel_span(dst.y, dst.bottom(), self.height);
        for py in y0..y1 {
            let v = src.y + (py as f32 + 0.5 - dst.y) * ky;
            let sy = (v.floor() as i32).clamp(0, source.height as i32 - 1);
            for px in x0..x1 {
                let u = src.x + (px as f32 + 0.5 - dst.x) * kx;
                let sx = (u.floor() as i32).clamp(0, source.width as i32 - 1);
                if let Some(c) = source.pixel(sx, sy) {
                    self.set_pixel(px as i32, py as i32, c);
                }
            }
        }
    }

    /// Write the surface as an RGBA8 PNG.
    pub fn write_png<W: Write>(&self, out: W) -> Result<(), ViewerError> {
        let encoder = PngEncoder::new_with_quality(out, CompressionType::Fast, FilterType::NoFilter);
        encoder.write_image(self.as_rgba(), self.width, self.height, ColorType::Rgba8.into())?;
        Ok(())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn fill_block(&mut self, x: i32, y: i32, size: u32) {
        let color = self.stroke;
        for dy in 0..size as i32 {
            for dx in 0..size as i32 {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }
}

// Pixels whose centers fall in [from, to), clamped to 0..limit.
fn pixel_span(from: f32, to: f32, limit: u32) -> (u32, u32) {
    let lo = (from - 0.5).ceil().clamp(0., limit as f32) as u32;
    let hi = (to - 0.5).ceil().clamp(0., limit as f32) as u32;
    (lo, hi.max(lo))
}

impl Canvas2d for Surface {
    fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        match self.path.last_mut() {
            Some(sub) => sub.push((x, y)),
            None => self.path.push(vec![(x, y)]),
        }
    }

    fn stroke(&mut self) {
        let color = self.stroke;
        let path = std::mem::take(&mut self.path);
        for sub in &path {
            if let [only] = sub.as_slice() {
                for (x, y) in line_pixels(*only, *only) {
                    self.set_pixel(x, y, color);
                }
            }
            for seg in sub.windows(2) {
                for (x, y) in line_pixels(seg[0], seg[1]) {
                    self.set_pixel(x, y, color);
                }
            }
        }
        self.path = path;
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        let s = self.glyph_scale;
        let left = x.round() as i32;
        let top = y.round() as i32 - (GLYPH_HEIGHT * s) as i32;
        for (i, c) in text.chars().enumerate() {
            let Some(rows) = glyph(c) else { continue };
            let gx = left + (i as u32 * GLYPH_ADVANCE * s) as i32;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        self.fill_block(gx + (col * s) as i32, top + (row as u32 * s) as i32, s);
                    }
                }
            }
        }
    }
}

impl FrameSink for Surface {
    type Source = Surface;

    fn frame_size(&self) -> [u32; 2] {
        self.size()
    }

    fn clear_frame(&mut self) {
        Canvas2d::clear(self);
    }

    fn draw_image(&mut self, source: &Surface, blit: &Blit) {
        self.draw_scaled(source, blit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::Rect;

    const BLACK: Rgba = [0, 0, 0, 255];
    const WHITE: Rgba = [255, 255, 255, 255];

    #[test]
    fn empty_or_oversized_surface_is_rejected() {
        assert!(matches!(Surface::new(0, 10), Err(ViewerError::Surface { width: 0, height: 10 })));
        assert!(matches!(
            Surface::new(100_000, 100_000),
            Err(ViewerError::Surface { width: 100_000, .. })
        ));
        assert!(Surface::new(MAX_SURFACE_SIDE, 1).is_ok());
    }

    #[test]
    fn stroke_draws_closed_square() {
        let mut s = Surface::new(8, 8).unwrap();
        s.begin_path();
        s.move_to(1., 1.);
        s.line_to(5., 1.);
        s.line_to(5., 5.);
        s.line_to(1., 5.);
        s.line_to(1., 1.);
        s.stroke();
        assert_eq!(16, s.count(BLACK));
        assert_eq!(Some(BLACK), s.pixel(5, 3));
        assert_eq!(Some(WHITE), s.pixel(3, 3));

        // path survives stroke, begin_path drops it
        s.clear();
        s.stroke();
        assert_eq!(16, s.count(BLACK));
        s.clear();
        s.begin_path();
        s.stroke();
        assert_eq!(0, s.count(BLACK));
    }

    #[test]
    fn strokes_outside_are_clipped() {
        let mut s = Surface::new(4, 4).unwrap();
        s.begin_path();
        s.move_to(-10., 2.);
        s.line_to(10., 2.);
        s.stroke();
        assert_eq!(4, s.count(BLACK));
    }

    #[test]
    fn text_sits_on_baseline() {
        let mut s = Surface::new(16, 16).unwrap();
        s.stroke_text("1", 2., 10.);
        // "1" has a full bottom row at y = 9 and nothing below the baseline
        assert_eq!(Some(BLACK), s.pixel(2, 9));
        assert_eq!(Some(BLACK), s.pixel(4, 9));
        assert!((0..16).all(|x| s.pixel(x, 10) == Some(WHITE)));
        assert_eq!(Some(BLACK), s.pixel(3, 5));
    }

    #[test]
    fn scaled_copy_doubles_pixels() {
        let mut src = Surface::new(4, 4).unwrap();
        src.set_pixel(1, 1, BLACK);
        let mut dst = Surface::new(8, 8).unwrap();
        let blit = Blit {
            src: Rect::new(0., 0., 4., 4.),
            dst: Rect::new(0., 0., 8., 8.),
        };
        dst.draw_scaled(&src, &blit);
        assert_eq!(4, dst.count(BLACK));
        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            assert_eq!(Some(BLACK), dst.pixel(x, y));
        }
    }

    #[test]
    fn png_output_has_signature() {
        let s = Surface::new(3, 2).unwrap();
        let mut out = Vec::new();
        s.write_png(&mut out).unwrap();
        assert_eq!(&[0x89, b'P', b'N', b'G'], &out[..4]);
    }
}
