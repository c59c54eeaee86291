use super::{hex, FHex, Hex, Shape};

/// A rectangle of pointy-top hexes in offset layout: `h` rows of `w` hexes,
/// each row shifted so the block stays rectangular on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    h0: Hex,
    w: i32,
    h: i32,
}

impl Rect {
    /// `h0` is the top-left hex. Negative sizes are treated as empty.
    pub fn new(h0: Hex, w: i32, h: i32) -> Self {
        Rect {
            h0,
            w: w.max(0),
            h: h.max(0),
        }
    }

    pub fn top_left(&self) -> Hex {
        self.h0
    }

    pub fn width(&self) -> i32 {
        self.w
    }

    pub fn height(&self) -> i32 {
        self.h
    }

    // offset of the center hex from the top-left one
    fn center_offset(&self) -> Hex {
        let row = self.h / 2;
        hex(self.w / 2 - row / 2, row)
    }
}

impl Shape for Rect {
    fn center(&self) -> Hex {
        self.h0 + self.center_offset()
    }

    fn nearest_center(&self, hex: FHex) -> Hex {
        hex.round()
    }

    fn area(&self) -> usize {
        self.w as usize * self.h as usize
    }

    fn hex_by_ind(&self, ind: usize) -> Option<Hex> {
        if ind >= self.area() {
            return None;
        }
        let r = ind as i32 / self.w;
        let q = ind as i32 % self.w - r / 2;
        Some(self.h0 + hex(q, r))
    }

    fn ind_by_hex(&self, hex: Hex) -> Option<usize> {
        let off = hex - self.h0;
        let r_off = off.r();
        let q_off = off.q() + r_off / 2;
        if (0..self.w).contains(&q_off) && (0..self.h).contains(&r_off) {
            Some((q_off + r_off * self.w) as usize)
        } else {
            None
        }
    }

    fn move_to(&self, hex: Hex) -> Self {
        Rect::new(hex - self.center_offset(), self.w, self.h)
    }
}
