//! Per-fragment entry point of the hatch shading.
//!
//! [`shade`] is a pure function: it holds no state, never fails and can be called from
//! any number of threads at once.

use crate::{
    hatching::{aastep, blend_color_burn, luma, texcube},
    math::{Spectrum, Vec2, Vec3, Vec4},
    params::HatchParameters,
};

/// Smallest perspective divisor magnitude, smaller ones are pushed out to it.
pub const MIN_W: f32 = 1e-6;

const FALLBACK_NORMAL: Vec3<f32> = Vec3 {
    x: 0.0,
    y: 0.0,
    z: 1.0,
};

/// Screen-space partials of the homogeneous view position across one pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Differentials {
    /// Change in position to the next pixel in x.
    pub dpdx: Vec4<f32>,
    /// Change in position to the next pixel in y.
    pub dpdy: Vec4<f32>,
}

/// Everything the host supplies for a single fragment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceSample {
    /// Homogeneous view-space position, before the divide by w.
    pub position_view: Vec4<f32>,
    /// Surface normal, expected to be unit length.
    pub normal: Vec3<f32>,
    /// Color of the lit surface before hatching.
    pub base_color: Spectrum<f32>,
    /// Paper texture sample for this fragment.
    pub paper_color: Spectrum<f32>,
    /// Enables anti-aliasing when present.
    pub differentials: Option<Differentials>,
}

/// Result of [`shade`], replaces the host's base color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FragmentOutput {
    pub color: Spectrum<f32>,
}

/// Perspective divide with the divisor kept away from zero.
fn hatch_coords(position: Vec4<f32>, scale: f32) -> Vec3<f32> {
    let w = if position.w == 0.0 {
        MIN_W
    } else if position.w.abs() < MIN_W {
        MIN_W.copysign(position.w)
    } else {
        position.w
    };
    position.xyz() * (scale / w)
}

fn line_intensity(coords: Vec3<f32>, n: Vec3<f32>) -> f32 {
    let line = texcube(coords, n, 1.0);
    if line.is_finite() {
        line
    } else {
        0.0
    }
}

/// Shades one fragment with ink strokes over paper.
///
/// Strokes are thresholded against the luma of `sample.base_color`, so darker surfaces
/// receive denser hatching. Degenerate input (zero normal, zero w, non-positive scale)
/// is clamped and the output is always finite.
pub fn shade(sample: &SurfaceSample, params: &HatchParameters) -> FragmentOutput {
    let params = params.sanitized();
    let n = sample.normal.normalized_or(FALLBACK_NORMAL);

    let l = luma(sample.base_color);
    let coords = hatch_coords(sample.position_view, params.scale);
    let line = line_intensity(coords, n);

    let derivatives = sample.differentials.map(|d| {
        let line_at =
            |dp: Vec4<f32>| line_intensity(hatch_coords(sample.position_view + dp, params.scale), n);
        Vec2 {
            x: line_at(d.dpdx) - line,
            y: line_at(d.dpdy) - line,
        }
    });
    let coverage = aastep(l, line, derivatives);

    let color = blend_color_burn(sample.paper_color, params.ink_color, coverage);
    FragmentOutput {
        color: if color.is_finite() {
            color
        } else {
            sample.paper_color
        },
    }
}
