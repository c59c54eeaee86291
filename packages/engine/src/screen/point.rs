use std::ops::{Add, Div, Mul, Sub};

use bytemuck::{Pod, Zeroable};

pub const POINT0: Point = point(0., 0.);

pub const fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

/// Pixel-space point; laid out as an `f32` pair in linear memory.
#[repr(C)]
#[derive(Debug, PartialEq, Clone, Copy, Default, Pod, Zeroable)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn splat(v: f32) -> Point {
        point(v, v)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(self, other: Point) -> f32 {
        let d = self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Point {
    type Output = Point;

    fn mul(self, rhs: Self) -> Self::Output {
        point(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Self::Output {
        point(self.x * rhs, self.y * rhs)
    }
}

impl Div for Point {
    type Output = Point;

    fn div(self, rhs: Self) -> Self::Output {
        point(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f32> for Point {
    type Output = Point;

    fn div(self, rhs: f32) -> Self::Output {
        point(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(point(2.5, 2.5), Point::splat(2.5));
        assert_eq!(point(4., 1.), point(3., 3.) + point(1., -2.));
        assert_eq!(point(3., 2.), point(6., 8.) / point(2., 4.));
        assert_eq!(point(1.5, -1.), point(3., -2.) * 0.5);
        assert_eq!(5., POINT0.distance(point(3., 4.)));
        assert!(!point(f32::NAN, 0.).is_finite());
    }
}
