use std::fmt::Debug;

use crate::geometry::{fhex, FHex, Hex};

use super::{point, Point, POINT0};

const SQRT_3: f32 = 1.732_050_8;

/// Forward (`f*`) and inverse (`b*`) matrices between axial and pixel space.
#[derive(Clone, Copy, PartialEq)]
pub struct Orientation {
    f0: f32,
    f1: f32,
    f2: f32,
    f3: f32,
    b0: f32,
    b1: f32,
    b2: f32,
    b3: f32,
    start_angle: f32, // in multiples of 60°
}

impl Debug for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start_angle == 0.0 {
            f.write_str("flat")
        } else {
            f.write_str("pointy")
        }
    }
}

pub const ORIENTATION_FLAT: Orientation = Orientation {
    f0: 3.0 / 2.0,
    f1: 0.0,
    f2: SQRT_3 / 2.0,
    f3: SQRT_3,
    b0: 2.0 / 3.0,
    b1: 0.0,
    b2: -1.0 / 3.0,
    b3: SQRT_3 / 3.0,
    start_angle: 0.0,
};

pub const ORIENTATION_POINTY: Orientation = Orientation {
    f0: SQRT_3,
    f1: SQRT_3 / 2.0,
    f2: 0.0,
    f3: 3.0 / 2.0,
    b0: SQRT_3 / 3.0,
    b1: -1.0 / 3.0,
    b2: 0.0,
    b3: 2.0 / 3.0,
    start_angle: 0.5,
};

#[derive(Debug, Clone, Copy)]
pub struct Layout {
    orientation: Orientation,
    size: Point,
    origin: Point,

    corner_offsets: [Point; 6],
}

impl Layout {
    pub fn new(orientation: Orientation, size: Point, origin: Point) -> Self {
        Self {
            orientation,
            size,
            origin,
            corner_offsets: corner_offsets(&orientation, size),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn get_origin(&self) -> Point {
        self.origin
    }

    pub fn get_size(&self) -> Point {
        self.size
    }

    pub fn set_size(&mut self, size: Point) {
        self.size = size;
        self.corner_offsets = corner_offsets(&self.orientation, size);
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn hex_to_point(&self, h: Hex) -> Point {
        self.fhex_to_point(h.tof())
    }

    pub fn fhex_to_point(&self, h: FHex) -> Point {
        let m = &self.orientation;
        let x = (m.f0 * h.q() + m.f1 * h.r()) * self.size.x();
        let y = (m.f2 * h.q() + m.f3 * h.r()) * self.size.y();
        point(x, y) + self.origin
    }

    pub fn point_to_fhex(&self, p: Point) -> FHex {
        let m = &self.orientation;
        let pt = (p - self.origin) / self.size;
        let q = m.b0 * pt.x() + m.b1 * pt.y();
        let r = m.b2 * pt.x() + m.b3 * pt.y();
        fhex(q, r)
    }

    pub fn point_to_hex(&self, p: Point) -> Hex {
        self.point_to_fhex(p).round()
    }

    /// Offset of corner `corner % 6` from a hex center.
    pub fn corner_offset(&self, corner: usize) -> Point {
        self.corner_offsets[corner % 6]
    }

    pub fn hex_corners(&self, center: Point) -> [Point; 6] {
        self.corner_offsets.map(|off| center + off)
    }

    pub fn grid_centers(&self, hexes: &[Hex]) -> Vec<Point> {
        hexes.iter().map(|h| self.hex_to_point(*h)).collect()
    }

    /// Six corners per center, in corner order, flattened.
    pub fn grid_corners(&self, centers: &[Point]) -> Vec<Point> {
        centers.iter().flat_map(|c| self.hex_corners(*c)).collect()
    }
}

fn corner_offsets(orientation: &Orientation, size: Point) -> [Point; 6] {
    let mut out = [POINT0; 6];
    for (corner, slot) in out.iter_mut().enumerate() {
        let angle = 2.0 * std::f32::consts::PI * (orientation.start_angle + corner as f32) / 6.0;
        let (s, c) = angle.sin_cos();
        *slot = point(size.x() * c, size.y() * s);
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::hex;

    fn pointy() -> Layout {
        Layout::new(ORIENTATION_POINTY, point(16., 16.), point(16., 16.))
    }

    #[test]
    fn origin_hex_sits_on_origin() {
        assert_eq!(point(16., 16.), pointy().hex_to_point(hex(0, 0)));
    }

    #[test]
    fn pointy_steps() {
        let l = pointy();
        let p = l.hex_to_point(hex(1, 0));
        assert!((p.x() - (16. + 16. * SQRT_3)).abs() < 1e-4);
        assert!((p.y() - 16.).abs() < 1e-4);
        let p = l.hex_to_point(hex(0, 1));
        assert!((p.y() - (16. + 24.)).abs() < 1e-4);
    }

    #[test]
    fn point_round_trip() {
        for l in [pointy(), Layout::new(ORIENTATION_FLAT, point(10., 12.), point(-3., 7.))] {
            for q in -4..5 {
                for r in -4..5 {
                    let h = hex(q, r);
                    assert_eq!(h, l.point_to_hex(l.hex_to_point(h)), "{:?}", l.orientation());
                }
            }
        }
    }

    #[test]
    fn corners_are_on_circle() {
        let l = pointy();
        let c = l.hex_to_point(hex(2, 1));
        for p in l.hex_corners(c) {
            assert!((p.distance(c) - 16.).abs() < 1e-3);
        }
        // pointy top: corner 4 points straight up
        let up = l.corner_offset(4);
        assert!(up.x().abs() < 1e-3 && (up.y() + 16.).abs() < 1e-3);
    }

    #[test]
    fn grid_buffers_have_matching_lengths() {
        let l = pointy();
        let hexes = [hex(0, 0), hex(1, 1), hex(3, 2)];
        let centers = l.grid_centers(&hexes);
        let corners = l.grid_corners(&centers);
        assert_eq!(3, centers.len());
        assert_eq!(18, corners.len());
        assert_eq!(l.hex_corners(centers[1])[0], corners[6]);
    }

    #[test]
    fn set_origin_shifts_every_point() {
        let mut l = pointy();
        assert_eq!(point(16., 16.), l.get_size());
        let before = l.hex_to_point(hex(2, -1));
        l.set_origin(point(0., 0.));
        assert_eq!(point(0., 0.), l.get_origin());
        let after = l.hex_to_point(hex(2, -1));
        assert!((before - after).distance(point(16., 16.)) < 1e-4);
        assert_eq!(hex(2, -1), l.point_to_hex(after));
    }

    #[test]
    fn set_size_refreshes_corners() {
        let mut l = pointy();
        l.set_size(point(32., 32.));
        assert!((l.corner_offset(0).distance(POINT0) - 32.).abs() < 1e-3);
    }
}
