use crate::math::{Spectrum, Vec2};

/// `1 / sqrt(2)`, scales the derivative magnitude into a half filter width.
const AA_WIDTH_SCALE: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Screen-space partial derivatives `(d/dx, d/dy)` of a scalar.
pub type ScreenDerivatives = Vec2<f32>;

/// Perceptual brightness of `color`, used as the hatching threshold.
#[inline]
pub fn luma(color: Spectrum<f32>) -> f32 {
    color.luma()
}

/// Hard step: `0` below `edge`, `1` at or above it.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Cubic Hermite step between `edge0` and `edge1`.
///
/// Falls back to [`step`] at `edge0` when the edges coincide.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let width = edge1 - edge0;
    if width == 0.0 || !width.is_finite() {
        return step(edge0, x);
    }
    let t = ((x - edge0) / width).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Anti-aliased coverage of `value` against `threshold`, in `[0, 1]`.
///
/// With derivatives the edge is smoothed over a half width derived from their magnitude
/// so it stays one pixel wide at any distance. Without derivatives, or when they are zero,
/// this is a hard step.
pub fn aastep(threshold: f32, value: f32, derivatives: Option<ScreenDerivatives>) -> f32 {
    let coverage = match derivatives {
        Some(d) if d.is_finite() => {
            let afwidth = d.len() * AA_WIDTH_SCALE;
            smoothstep(threshold - afwidth, threshold + afwidth, value)
        }
        _ => step(threshold, value),
    };
    // NaN value falls through both comparisons above
    if coverage.is_nan() {
        0.0
    } else {
        coverage.clamp(0.0, 1.0)
    }
}
