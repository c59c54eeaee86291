use super::{fhex, hex, FHex, Hex, Shape};

/// Pointy-top triangle of three hexes, anchored at its bottom-right hex:
///
/// ```text
///    (1,0)
/// (0,1) (1,1)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tri {
    // anchor -> top -> left
    v: [Hex; 3],
}

impl Tri {
    pub fn new(h: Hex) -> Self {
        Self {
            v: [h, h - hex(0, 1), h - hex(1, 0)],
        }
    }
}

impl Shape for Tri {
    fn center(&self) -> Hex {
        self.v[0]
    }

    fn nearest_center(&self, hex: FHex) -> Hex {
        (hex + fhex(0.5, 0.5)).round()
    }

    fn area(&self) -> usize {
        3
    }

    fn hex_by_ind(&self, ind: usize) -> Option<Hex> {
        self.v.get(ind).copied()
    }

    fn ind_by_hex(&self, hex: Hex) -> Option<usize> {
        self.v.iter().position(|h| *h == hex)
    }

    fn move_to(&self, hex: Hex) -> Self {
        Tri::new(hex)
    }

    fn hex_iter(&self) -> impl Iterator<Item = Hex> {
        self.v.into_iter()
    }

    fn all_neighbors(&self) -> impl Iterator<Item = Hex> {
        TriRing::new(self.v[0])
    }
}

// steps walking the 9 perimeter hexes counter-clockwise, starting east of the anchor
const RING_STEPS: [Hex; 9] = [
    hex(1, 0),
    hex(0, -1),
    hex(0, -1),
    hex(-1, 0),
    hex(-1, 1),
    hex(-1, 1),
    hex(0, 1),
    hex(1, 0),
    hex(1, 0),
];

struct TriRing {
    i: usize,
    hex: Hex,
}

impl TriRing {
    fn new(anchor: Hex) -> Self {
        Self { i: 0, hex: anchor }
    }
}

impl Iterator for TriRing {
    type Item = Hex;

    fn next(&mut self) -> Option<Hex> {
        let step = RING_STEPS.get(self.i)?;
        self.hex += *step;
        self.i += 1;
        Some(self.hex)
    }
}
