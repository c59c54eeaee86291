pub mod config;

pub use config::{GridConfig, OrientationKind, ShapeSpec};
