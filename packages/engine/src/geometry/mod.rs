//! Hex-space geometry: axial coordinates and shapes built from them.

pub mod hex;
mod shape;
mod cell;
mod tri;
mod rect;
mod line;

pub use cell::Cell;
pub use hex::{fhex, hex, Direction, FHex, Hex, HEX0, HEX_DIRECTIONS};
pub use line::Line;
pub use rect::Rect;
pub use shape::{Overlap, Shape};
pub use tri::Tri;
