use std::iter;

use super::{Direction, FHex, Hex, Shape};

/// A shape of exactly one hex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    hex: Hex,
}

impl Cell {
    pub fn new(hex: Hex) -> Cell {
        Cell { hex }
    }
}

impl Shape for Cell {
    fn center(&self) -> Hex {
        self.hex
    }

    fn nearest_center(&self, hex: FHex) -> Hex {
        hex.round()
    }

    fn area(&self) -> usize {
        1
    }

    fn hex_by_ind(&self, ind: usize) -> Option<Hex> {
        (ind == 0).then_some(self.hex)
    }

    fn ind_by_hex(&self, hex: Hex) -> Option<usize> {
        (self.hex == hex).then_some(0)
    }

    fn move_to(&self, hex: Hex) -> Self {
        Cell { hex }
    }

    fn hex_iter(&self) -> impl Iterator<Item = Hex> {
        iter::once(self.hex)
    }

    fn all_neighbors(&self) -> impl Iterator<Item = Hex> {
        self.hex.neighbors()
    }

    fn direction_neighbors(&self, d: Direction) -> impl Iterator<Item = Hex> {
        iter::once(self.hex.neighbor(d))
    }
}
