use serde::{Deserialize, Serialize};

use crate::math::Spectrum;

/// Smallest lattice scale the engine accepts, anything below is clamped up to it.
pub const MIN_SCALE: f32 = 1e-3;

/// The tunable state shared between the parameter binding and the shading engine.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HatchParameters {
    /// Roughness of the underlying surface, in `[0, 1]`.
    pub roughness: f32,
    /// Metalness of the underlying surface, in `[0, 1]`.
    pub metalness: f32,
    /// Color the paper is burned toward under a stroke.
    pub ink_color: Spectrum<f32>,
    /// View-space to lattice scale. Larger values give denser strokes.
    pub scale: f32,
}

impl Default for HatchParameters {
    fn default() -> Self {
        Self {
            roughness: 0.2,
            metalness: 0.1,
            ink_color: Spectrum::from_hex(0x12_6A_87),
            scale: 20.0,
        }
    }
}

impl HatchParameters {
    /// Returns a copy that is safe to shade with: finite, positive scale and
    /// surface terms and ink clamped to `[0, 1]`.
    pub fn sanitized(&self) -> Self {
        let unit = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        let scale = if self.scale.is_finite() {
            self.scale.max(MIN_SCALE)
        } else {
            MIN_SCALE
        };

        Self {
            roughness: unit(self.roughness),
            metalness: unit(self.metalness),
            ink_color: self.ink_color.map(unit),
            scale,
        }
    }
}
