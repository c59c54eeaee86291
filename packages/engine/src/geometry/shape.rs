use super::{Direction, FHex, Hex};

/// A geometrical shape of hexagonal tiles
pub trait Shape {
    /// an approximate center of the shape
    fn center(&self) -> Hex;

    /// given fractional hex position returns most relevant center hex
    fn nearest_center(&self, hex: FHex) -> Hex;

    /// number of tiles in the shape
    fn area(&self) -> usize;

    /// get hex by index using strong order
    fn hex_by_ind(&self, ind: usize) -> Option<Hex>;

    /// get index by hex using strong order
    fn ind_by_hex(&self, hex: Hex) -> Option<usize>;

    /// create copy of shape at given hex as a center
    fn move_to(&self, hex: Hex) -> Self
    where
        Self: Sized;

    /// iterator of hex tiles in the shape with guaranteed order
    fn hex_iter(&self) -> impl Iterator<Item = Hex> {
        (0..self.area()).filter_map(move |i| self.hex_by_ind(i))
    }

    /// checks if shape contains hex
    fn contains(&self, hex: Hex) -> bool {
        self.ind_by_hex(hex).is_some()
    }

    /// iterator of all neighboring hexes, the outer perimeter of the shape
    fn all_neighbors(&self) -> impl Iterator<Item = Hex> {
        let mut out: Vec<Hex> = Vec::new();
        for h in self.hex_iter() {
            for n in h.neighbors() {
                if !self.contains(n) && !out.contains(&n) {
                    out.push(n);
                }
            }
        }
        out.into_iter()
    }

    /// iterator of neighboring hexes in given direction
    fn direction_neighbors(&self, d: Direction) -> impl Iterator<Item = Hex> {
        self.hex_iter()
            .map(move |h| h.neighbor(d))
            .filter(move |n| !self.contains(*n))
    }
}

pub trait Overlap<S: Shape> {
    fn overlap_iter(&self, other: &S) -> impl Iterator<Item = Hex>;
    fn overlaps(&self, other: &S) -> bool;
}

impl<A: Shape, B: Shape> Overlap<B> for A {
    fn overlap_iter(&self, other: &B) -> impl Iterator<Item = Hex> {
        self.hex_iter().filter(move |h| other.contains(*h))
    }

    fn overlaps(&self, other: &B) -> bool {
        self.overlap_iter(other).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{hex, Cell, Hex, Line, Overlap, Rect, Tri};

    #[test]
    fn overlap_between_different_shapes() {
        let t = Tri::new(hex(1, 1));
        assert!(t.overlaps(&Cell::new(hex(1, 0))));
        assert!(!t.overlaps(&Cell::new(hex(5, 5))));

        let r = Rect::new(hex(0, 0), 3, 3);
        let l = Line::new(hex(0, 0), hex(4, 0));
        let got: Vec<Hex> = r.overlap_iter(&l).collect();
        assert_eq!(vec![hex(0, 0), hex(1, 0), hex(2, 0)], got);
    }
}
