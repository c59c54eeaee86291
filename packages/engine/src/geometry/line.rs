use super::{FHex, Hex, Shape};

/// Straight run of hexes between two endpoints, both included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    a: Hex,
    b: Hex,
}

impl Line {
    pub fn new(a: Hex, b: Hex) -> Self {
        Line { a, b }
    }

    pub fn ends(&self) -> (Hex, Hex) {
        (self.a, self.b)
    }
}

impl Shape for Line {
    fn center(&self) -> Hex {
        self.a
    }

    fn nearest_center(&self, hex: FHex) -> Hex {
        hex.round()
    }

    fn area(&self) -> usize {
        self.a.distance(self.b) as usize + 1
    }

    fn hex_by_ind(&self, ind: usize) -> Option<Hex> {
        self.a.line(self.b).nth(ind)
    }

    fn ind_by_hex(&self, hex: Hex) -> Option<usize> {
        self.a.line(self.b).position(|h| h == hex)
    }

    fn move_to(&self, hex: Hex) -> Self {
        Line {
            a: hex,
            b: self.b + hex - self.a,
        }
    }

    fn hex_iter(&self) -> impl Iterator<Item = Hex> {
        self.a.line(self.b)
    }
}
