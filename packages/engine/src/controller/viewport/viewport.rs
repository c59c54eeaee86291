use crate::screen::{point, Point};

use super::GridCore;

/// Wheel delta that halves (or doubles) the scale.
const WHEEL_HALVING_DELTA: f32 = 200.0;

/// Scale multiplier for a wheel delta; negative deltas zoom in.
pub(super) fn wheel_factor(dy: f32) -> f32 {
    (-dy / WHEEL_HALVING_DELTA).exp2()
}

fn clamp_scale(core: &GridCore, scale: f32) -> f32 {
    scale.clamp(core.config.min_scale, core.config.max_scale)
}

/// Offscreen (layout) position shown at view position `(x, y)`.
pub(super) fn view_to_layout(core: &GridCore, x: f32, y: f32) -> Point {
    core.view_origin + point(x, y) / core.view_scale
}

/// Keeps the layout point under `(x, y)` fixed while changing scale.
pub(super) fn zoom(core: &mut GridCore, dy: f32, x: f32, y: f32) {
    if dy == 0. || !(dy.is_finite() && x.is_finite() && y.is_finite()) {
        return;
    }
    let s1 = core.view_scale;
    let s2 = clamp_scale(core, s1 * wheel_factor(dy));
    if s2 == s1 {
        return;
    }
    let ds = 1. / s1 - 1. / s2;
    core.view_scale = s2;
    core.view_origin = point(x, y) * ds + core.view_origin;
}

pub(super) fn adj_origin(core: &mut GridCore, dx: f32, dy: f32) {
    if !(dx.is_finite() && dy.is_finite()) {
        return;
    }
    core.view_origin = view_to_layout(core, dx, dy);
}

pub(super) fn adj_size(core: &mut GridCore, factor: f32) {
    if !(factor.is_finite() && factor > 0.) {
        return;
    }
    core.view_scale = clamp_scale(core, core.view_scale * factor);
}
