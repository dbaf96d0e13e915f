use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::math::{Spectrum, Vec2};

/// The settings for a `Film`.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilmSettings {
    pub width: u16,
    pub height: u16,
}

impl Default for FilmSettings {
    /// 640x480
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl FilmSettings {
    pub fn res(&self) -> Vec2<u16> {
        Vec2 {
            x: self.width.max(1),
            y: self.height.max(1),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FilmError {
    #[error("Error writing image: {0}")]
    Image(#[from] image::ImageError),
}

/// Pixel buffer of a rendered frame.
#[derive(Debug, Clone)]
pub struct Film {
    // Resolution of the stored pixel buffer.
    res: Vec2<u16>,
    // Pixel values, row-major with the top row first.
    pixels: Vec<Spectrum<f32>>,
}

impl Film {
    /// Creates a black `Film` matching `settings`.
    pub fn new(settings: &FilmSettings) -> Self {
        let res = settings.res();
        Self {
            res,
            pixels: vec![Spectrum::zeros(); (res.x as usize) * (res.y as usize)],
        }
    }

    /// Returns the resolution of this `Film`.
    pub fn res(&self) -> Vec2<u16> {
        self.res
    }

    /// Returns a reference to the the pixels of this `Film`.
    pub fn pixels(&self) -> &[Spectrum<f32>] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Spectrum<f32>] {
        &mut self.pixels
    }

    /// Returns the pixel at `(x, y)` counted from the top left.
    pub fn pixel(&self, x: u16, y: u16) -> Spectrum<f32> {
        self.pixels[(y as usize) * (self.res.x as usize) + (x as usize)]
    }

    /// Writes this `Film` out as an 8-bit PNG, clamping to `[0, 1]`.
    pub fn write_png(&self, path: &Path) -> Result<(), FilmError> {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * (u8::MAX as f32)).round() as u8;

        let img = image::RgbImage::from_fn(self.res.x as u32, self.res.y as u32, |x, y| {
            let px = self.pixel(x as u16, y as u16);
            image::Rgb([to_u8(px.r), to_u8(px.g), to_u8(px.b)])
        });
        img.save_with_format(path, image::ImageFormat::Png)?;

        hatch_info!("PNG written to '{}'", path.to_string_lossy());
        Ok(())
    }
}
