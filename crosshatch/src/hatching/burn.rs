use crate::math::Spectrum;

/// Per-channel color burn of `base` by `blend`.
///
/// A zero `blend` channel returns exactly zero instead of dividing by it.
#[inline]
pub fn burn(base: f32, blend: f32) -> f32 {
    if blend == 0.0 {
        blend
    } else {
        (1.0 - (1.0 - base) / blend).max(0.0)
    }
}

/// Color burn of `base` by `blend` applied per channel.
#[inline]
pub fn burn_color(base: Spectrum<f32>, blend: Spectrum<f32>) -> Spectrum<f32> {
    Spectrum {
        r: burn(base.r, blend.r),
        g: burn(base.g, blend.g),
        b: burn(base.b, blend.b),
    }
}

/// Burns `base` by `blend` and mixes the result back over `base` by `opacity`.
///
/// `opacity = 0` returns `base`, `opacity = 1` the full burn.
#[inline]
pub fn blend_color_burn(base: Spectrum<f32>, blend: Spectrum<f32>, opacity: f32) -> Spectrum<f32> {
    burn_color(base, blend) * opacity + base * (1.0 - opacity)
}
