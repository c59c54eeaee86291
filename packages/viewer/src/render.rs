//! One-time offscreen render of the module's geometry.

use hexgrid_engine::core::Stopwatch;

use crate::canvas::Canvas2d;
use crate::views::{GeometryViews, CORNERS_PER_HEX, HEX_SIZE, POINT_SIZE};

/// Label anchor relative to the hex center: left edge, baseline.
pub const LABEL_DX: f32 = -2.;
pub const LABEL_DY: f32 = 2.;

/// Outline every polygon in a single path, stroked once. Each polygon is
/// `move_to(c0)`, `line_to(c0..c5)`, `line_to(c0)`.
pub fn draw_corners<C: Canvas2d + ?Sized>(ctx: &mut C, corners: &[f32]) {
    ctx.begin_path();
    for poly in corners.chunks_exact(CORNERS_PER_HEX * POINT_SIZE) {
        let (mx, my) = (poly[0], poly[1]);
        ctx.move_to(mx, my);
        for p in poly.chunks_exact(POINT_SIZE) {
            ctx.line_to(p[0], p[1]);
        }
        ctx.line_to(mx, my);
    }
    ctx.stroke();
}

/// Stroke `"q:r"` next to every center.
pub fn draw_hex<C: Canvas2d + ?Sized>(ctx: &mut C, centers: &[f32], hexes: &[i32]) {
    for (c, h) in centers.chunks_exact(POINT_SIZE).zip(hexes.chunks_exact(HEX_SIZE)) {
        ctx.stroke_text(&format!("{}:{}", h[0], h[1]), c[0] + LABEL_DX, c[1] + LABEL_DY);
    }
}

pub fn render_offscreen<C: Canvas2d + ?Sized>(ctx: &mut C, views: &GeometryViews<'_>) {
    let sw = Stopwatch::start("offscreen render");
    ctx.clear();
    draw_corners(ctx, views.corners());
    draw_hex(ctx, views.centers(), views.hexes());
    let ms = sw.finish();
    log::debug!("rendered {} hexes offscreen ({:.2} ms)", views.len(), ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CallLog, CanvasCall};

    #[test]
    fn corners_are_one_path_per_stroke() {
        let corners: Vec<f32> = (0..24).map(|i| i as f32).collect();
        let mut log = CallLog::default();
        draw_corners(&mut log, &corners);

        let calls = &log.calls;
        assert_eq!(CanvasCall::BeginPath, calls[0]);
        assert_eq!(CanvasCall::MoveTo(0., 1.), calls[1]);
        assert_eq!(CanvasCall::LineTo(0., 1.), calls[2]);
        assert_eq!(CanvasCall::LineTo(10., 11.), calls[7]);
        assert_eq!(CanvasCall::LineTo(0., 1.), calls[8]);
        assert_eq!(CanvasCall::MoveTo(12., 13.), calls[9]);
        assert_eq!(CanvasCall::LineTo(12., 13.), calls[16]);
        assert_eq!(Some(&CanvasCall::Stroke), calls.last());
        assert_eq!(1 + 2 * 8 + 1, calls.len());
    }

    #[test]
    fn labels_are_offset_from_centers() {
        let mut log = CallLog::default();
        draw_hex(&mut log, &[10., 20., 30.5, 40.], &[1, -1, 3, 2]);
        assert_eq!(
            vec![
                CanvasCall::StrokeText("1:-1".into(), 8., 22.),
                CanvasCall::StrokeText("3:2".into(), 28.5, 42.),
            ],
            log.calls
        );
    }
}
