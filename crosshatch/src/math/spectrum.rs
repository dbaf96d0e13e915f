use serde::{Deserialize, Serialize};

use super::common::{FloatValueType, ValueType};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A color stored as RGB.
///
/// Values used by the hatching pipeline are normalized to `[0, 1]` per channel.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Spectrum<T>
where
    T: ValueType,
{
    /// The r component of the spd
    pub r: T,
    /// The g component of the spd
    pub g: T,
    /// The b component of the spd
    pub b: T,
}

impl_vec_like!(Spectrum { r, g, b });

impl<T> Spectrum<T>
where
    T: FloatValueType,
{
    /// Perceptual brightness using the Rec. 601 channel weights.
    #[inline]
    pub fn luma(&self) -> T {
        let w = |v: f64| T::from_f64(v).unwrap_or_else(T::zero);
        self.r * w(0.299) + self.g * w(0.587) + self.b * w(0.114)
    }

    /// Returns `true` if this `Spectrum` is black.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }
}

impl Spectrum<f32> {
    /// Creates a `Spectrum` from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| (((hex >> shift) & 0xFF) as f32) / (u8::MAX as f32);
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Packs this `Spectrum` into `0xRRGGBB`, clamping channels to `[0, 1]`.
    pub fn to_hex(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * (u8::MAX as f32)).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}
