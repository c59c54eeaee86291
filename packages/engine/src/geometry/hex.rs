use std::ops::{Add, AddAssign, Mul, Sub};

use bytemuck::{Pod, Zeroable};

// https://www.redblobgames.com/grids/hexagons/

/// Axial hex coordinate. `s` is implied as `-q - r`.
///
/// `#[repr(C)]` so a slice of hexes is a flat run of `i32` pairs in linear memory.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Pod, Zeroable)]
pub struct Hex {
    q: i32,
    r: i32,
}

/// Index into [`HEX_DIRECTIONS`], 0..6
pub type Direction = usize;

pub const HEX0: Hex = hex(0, 0);

// counter-clockwise, starting at +q
pub const HEX_DIRECTIONS: [Hex; 6] = [
    hex(1, 0),
    hex(1, -1),
    hex(0, -1),
    hex(-1, 0),
    hex(-1, 1),
    hex(0, 1),
];

pub const fn hex(q: i32, r: i32) -> Hex {
    Hex { q, r }
}

impl Hex {
    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    pub fn length(&self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s().abs()) / 2
    }

    pub fn distance(self, other: Hex) -> i32 {
        (self - other).length()
    }

    /// Unit step for a direction. Directions wrap, so 6 is 0 again.
    pub fn direction(d: Direction) -> Hex {
        HEX_DIRECTIONS[d % 6]
    }

    pub fn tof(&self) -> FHex {
        fhex(self.q as f32, self.r as f32)
    }

    pub fn neighbor(self, d: Direction) -> Hex {
        self + Hex::direction(d)
    }

    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        (0..6).map(move |d| self.neighbor(d))
    }

    pub fn lerp(self, other: Hex, t: f32) -> FHex {
        fhex(
            lerp(self.q as f32, other.q as f32, t),
            lerp(self.r as f32, other.r as f32, t),
        )
    }

    /// Hexes on the straight line from `self` to `other`, both ends included.
    pub fn line(self, other: Hex) -> impl Iterator<Item = Hex> {
        let dist = self.distance(other);
        let step = 1.0 / (dist.max(1) as f32);
        (0..=dist).map(move |i| self.lerp(other, step * i as f32).round())
    }

    /// Writes [`Hex::line`] into `out` and returns how many hexes were written,
    /// or `None` when `out` cannot hold `distance + 1` hexes.
    pub fn line_into(self, other: Hex, out: &mut [Hex]) -> Option<usize> {
        let n = self.distance(other) as usize + 1;
        let slots = out.get_mut(..n)?;
        for (slot, h) in slots.iter_mut().zip(self.line(other)) {
            *slot = h;
        }
        Some(n)
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Self) -> Self::Output {
        hex(self.q + rhs.q, self.r + rhs.r)
    }
}

impl AddAssign for Hex {
    fn add_assign(&mut self, rhs: Self) {
        self.q += rhs.q;
        self.r += rhs.r;
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Self) -> Self::Output {
        hex(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, rhs: i32) -> Self::Output {
        hex(self.q * rhs, self.r * rhs)
    }
}

/// Fractional axial coordinate, the result of pixel -> hex conversion.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct FHex {
    q: f32,
    r: f32,
}

pub const fn fhex(q: f32, r: f32) -> FHex {
    FHex { q, r }
}

impl FHex {
    pub fn q(&self) -> f32 {
        self.q
    }

    pub fn r(&self) -> f32 {
        self.r
    }

    pub fn s(&self) -> f32 {
        -self.q - self.r
    }

    /// Cube rounding: round all three components, then recompute the one
    /// that moved the most so that `q + r + s == 0` still holds.
    pub fn round(&self) -> Hex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s().round();
        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (s - self.s()).abs();
        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        }
        hex(q as i32, r as i32)
    }
}

impl Add for FHex {
    type Output = FHex;

    fn add(self, rhs: Self) -> Self::Output {
        fhex(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for FHex {
    type Output = FHex;

    fn sub(self, rhs: Self) -> Self::Output {
        fhex(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Mul<f32> for FHex {
    type Output = FHex;

    fn mul(self, rhs: f32) -> Self::Output {
        fhex(self.q * rhs, self.r * rhs)
    }
}

impl From<Hex> for FHex {
    fn from(h: Hex) -> Self {
        h.tof()
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1. - t) + b * t
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_add() {
        assert_eq!(hex(5, 3), hex(2, 1) + hex(3, 2))
    }

    #[test]
    fn hex_add_assign() {
        let mut h = hex(2, 1);
        h += hex(3, -4);
        assert_eq!(hex(5, -3), h);
    }

    #[test]
    fn hex_sub() {
        assert_eq!(hex(5, 3), hex(-1, -2) - hex(-6, -5))
    }

    #[test]
    fn hex_mul() {
        assert_eq!(hex(20, 30), hex(2, 3) * 10);
    }

    #[test]
    fn fhex_add() {
        assert_eq!(fhex(2.1 + 3.1, 1.3 + 2.3), fhex(2.1, 1.3) + fhex(3.1, 2.3))
    }

    #[test]
    fn fhex_mul() {
        assert_eq!(fhex(2.1 * 5., 1.3 * 5.), fhex(2.1, 1.3) * 5.)
    }

    #[test]
    fn hex_len() {
        assert_eq!(5, hex(2, 3).length())
    }

    #[test]
    fn hex_dist() {
        assert_eq!(5, hex(-3, 1).distance(hex(2, -1)));
    }

    #[test]
    fn directions_are_unit_and_distinct() {
        for (i, d) in HEX_DIRECTIONS.iter().enumerate() {
            assert_eq!(1, d.length());
            assert!(!HEX_DIRECTIONS[i + 1..].contains(d));
        }
        assert_eq!(Hex::direction(0), Hex::direction(6));
    }

    #[test]
    fn neighbors_are_adjacent() {
        let c = hex(4, -2);
        let all: Vec<Hex> = c.neighbors().collect();
        assert_eq!(6, all.len());
        assert!(all.iter().all(|n| c.distance(*n) == 1));
    }

    #[test]
    fn hex_line() {
        let want = [hex(-2, -1), hex(-2, 0), hex(-1, 0), hex(-1, 1)];
        let got: Vec<Hex> = hex(-2, -1).line(hex(-1, 1)).collect();
        assert_eq!(&want[..], &got[..]);
    }

    #[test]
    fn hex_line_into_rejects_short_buffer() {
        let mut out = [HEX0; 3];
        assert_eq!(None, hex(-2, -1).line_into(hex(-1, 1), &mut out));
        let mut out = [HEX0; 5];
        assert_eq!(Some(4), hex(-2, -1).line_into(hex(-1, 1), &mut out));
        assert_eq!(hex(-1, 1), out[3]);
    }

    #[test]
    fn line_to_self_is_single_hex() {
        let got: Vec<Hex> = hex(3, 3).line(hex(3, 3)).collect();
        assert_eq!(vec![hex(3, 3)], got);
    }

    #[test]
    fn round_keeps_cube_invariant() {
        assert_eq!(hex(0, 0), fhex(0.2, 0.2).round());
        assert_eq!(hex(1, 0), fhex(0.9, 0.05).round());
        assert_eq!(hex(-1, 1), fhex(-0.6, 0.7).round());
        let h = fhex(0.45, 0.45).round();
        assert_eq!(0, h.q() + h.r() + h.s());
    }
}
