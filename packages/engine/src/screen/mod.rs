//! Pixel space: points and the hex <-> pixel layout.

mod layout;
mod point;

pub use layout::{Layout, Orientation, ORIENTATION_FLAT, ORIENTATION_POINTY};
pub use point::{point, Point, POINT0};
