mod constant;
mod paper;

pub use constant::ConstantTexture;
pub use paper::{PaperSettings, PaperTexture};

use crate::math::Vec2;

/// A 2D texture addressed by absolute pixel coordinate.
pub trait Texture<T>: Send + Sync {
    /// Returns the size of this `Texture` in texels.
    fn dimensions(&self) -> Vec2<u32>;

    /// Fetches the texel at `pixel`, which must be within [`Texture::dimensions`].
    fn texel(&self, pixel: Vec2<u32>) -> T;

    /// Samples this `Texture` at a fragment coordinate.
    ///
    /// The coordinate is normalized by the texture's own dimensions and wraps, so the
    /// texture tiles over the screen at one texel per pixel.
    fn sample_screen(&self, frag_coord: Vec2<f32>) -> T {
        let dims = self.dimensions();
        let (w, h) = (dims.x.max(1), dims.y.max(1));

        let mut st = Vec2 {
            x: frag_coord.x / (w as f32),
            y: frag_coord.y / (h as f32),
        };
        // Repeat
        st = st.fract();
        if !st.is_finite() {
            st = Vec2::zeros();
        }

        // Nearest
        let x = ((st.x * (w as f32)) as u32).min(w - 1);
        let y = ((st.y * (h as f32)) as u32).min(h - 1);
        self.texel(Vec2 { x, y })
    }
}
