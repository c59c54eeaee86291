use serde::{Deserialize, Serialize};

use crate::core::EngineError;
use crate::geometry::{hex, Cell, Hex, Line, Rect, Shape, Tri};
use crate::screen::{point, Layout, Point, ORIENTATION_FLAT, ORIENTATION_POINTY};

/// Largest `|q|` or `|r|` a shape may reference.
pub const MAX_COORD: i32 = 1 << 20;
/// Most hexes all shapes of one grid may produce together.
pub const MAX_HEXES: u64 = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationKind {
    Pointy,
    Flat,
}

/// One shape contributing hexes to the grid, in config order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Cell { at: [i32; 2] },
    Tri { at: [i32; 2] },
    Rect { top_left: [i32; 2], width: i32, height: i32 },
    Line { from: [i32; 2], to: [i32; 2] },
}

impl ShapeSpec {
    pub fn hexes(&self) -> Vec<Hex> {
        let h = |[q, r]: [i32; 2]| hex(q, r);
        match *self {
            ShapeSpec::Cell { at } => Cell::new(h(at)).hex_iter().collect(),
            ShapeSpec::Tri { at } => Tri::new(h(at)).hex_iter().collect(),
            ShapeSpec::Rect { top_left, width, height } => {
                Rect::new(h(top_left), width, height).hex_iter().collect()
            }
            ShapeSpec::Line { from, to } => Line::new(h(from), h(to)).hex_iter().collect(),
        }
    }

    /// Hexes this shape produces, computed without building them.
    pub fn area(&self) -> u64 {
        match *self {
            ShapeSpec::Cell { .. } => 1,
            ShapeSpec::Tri { .. } => 3,
            ShapeSpec::Rect { width, height, .. } => width.max(0) as u64 * height.max(0) as u64,
            ShapeSpec::Line { from, to } => {
                let dq = to[0] as i64 - from[0] as i64;
                let dr = to[1] as i64 - from[1] as i64;
                ((dq.abs() + dr.abs() + (dq + dr).abs()) / 2) as u64 + 1
            }
        }
    }

    fn check_bounds(&self) -> Result<(), EngineError> {
        let (coords, sizes) = match *self {
            ShapeSpec::Cell { at } | ShapeSpec::Tri { at } => ([at, at], [0, 0]),
            ShapeSpec::Rect { top_left, width, height } => ([top_left, top_left], [width, height]),
            ShapeSpec::Line { from, to } => ([from, to], [0, 0]),
        };
        let in_range = |v: i32| (-MAX_COORD..=MAX_COORD).contains(&v);
        if let Some(c) = coords.iter().find(|c| !c.iter().all(|v| in_range(*v))) {
            return Err(EngineError::Config(format!(
                "shape coordinate {c:?} is outside +-{MAX_COORD}"
            )));
        }
        if sizes.iter().any(|v| *v > MAX_COORD) {
            return Err(EngineError::Config(format!(
                "shape size {}x{} exceeds {MAX_COORD}",
                sizes[0], sizes[1]
            )));
        }
        Ok(())
    }
}

/// Grid instance settings, read from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub orientation: OrientationKind,
    pub hex_size: [f32; 2],
    pub origin: [f32; 2],
    pub shapes: Vec<ShapeSpec>,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::Pointy,
            hex_size: [16., 16.],
            origin: [16., 16.],
            shapes: vec![ShapeSpec::Cell { at: [1, 1] }, ShapeSpec::Tri { at: [3, 3] }],
            min_scale: 0.125,
            max_scale: 16.0,
        }
    }
}

impl GridConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let [w, h] = self.hex_size;
        if !(w.is_finite() && h.is_finite() && w > 0. && h > 0.) {
            return Err(EngineError::Config(format!("hex_size must be positive, got {w}x{h}")));
        }
        if !(self.origin[0].is_finite() && self.origin[1].is_finite()) {
            return Err(EngineError::Config("origin must be finite".into()));
        }
        if !(self.min_scale.is_finite() && self.min_scale > 0.) || !(self.max_scale >= self.min_scale) {
            return Err(EngineError::Config(format!(
                "scale range must satisfy 0 < min <= max, got {}..{}",
                self.min_scale, self.max_scale
            )));
        }
        let mut total: u64 = 0;
        for shape in &self.shapes {
            shape.check_bounds()?;
            total = total.saturating_add(shape.area());
        }
        if total > MAX_HEXES {
            return Err(EngineError::Config(format!(
                "shapes produce {total} hexes, at most {MAX_HEXES} are allowed"
            )));
        }
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        let orientation = match self.orientation {
            OrientationKind::Pointy => ORIENTATION_POINTY,
            OrientationKind::Flat => ORIENTATION_FLAT,
        };
        Layout::new(orientation, self.size(), point(self.origin[0], self.origin[1]))
    }

    pub fn size(&self) -> Point {
        point(self.hex_size[0], self.hex_size[1])
    }

    /// All hexes of all shapes, in config order. Overlaps are kept.
    pub fn hexes(&self) -> Vec<Hex> {
        self.shapes.iter().flat_map(ShapeSpec::hexes).collect()
    }
}
