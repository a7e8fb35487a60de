//! Scalar helpers and incline force composition layered on top of `glam`.

use glam::DVec2;

/// Gravity resolved into the frame of an incline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclineGravity {
    /// Component along the slope, positive pointing down-slope.
    pub along: f64,
    /// Component pressing into the surface.
    pub normal: f64,
}

/// Resolves a gravity magnitude `g` onto an incline tilted by `angle` radians.
pub fn incline_gravity(g: f64, angle: f64) -> InclineGravity {
    let gravity = DVec2::new(0.0, -g);
    let (sin, cos) = angle.sin_cos();
    let downslope = DVec2::new(cos, -sin);
    let into_surface = DVec2::new(-sin, -cos);
    InclineGravity {
        along: gravity.dot(downslope),
        normal: gravity.dot(into_surface).max(0.0),
    }
}

/// Sign of `value` with an explicit zero, unlike `f64::signum`.
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// True when `after` reached or passed zero coming from a non-zero `before`.
pub fn crossed_zero(before: f64, after: f64) -> bool {
    let direction = sign(before);
    direction != 0.0 && after * direction <= 0.0
}

/// Velocity shared by two bodies that end up moving together, conserving momentum.
pub fn momentum_weighted(m1: f64, v1: f64, m2: f64, v2: f64) -> f64 {
    (m1 * v1 + m2 * v2) / (m1 + m2)
}
