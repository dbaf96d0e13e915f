use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::Texture;
use crate::math::{Spectrum, Vec2};

/// Parameters of the generated paper.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaperSettings {
    /// Mean paper color.
    pub color: Spectrum<f32>,
    /// Maximum brightness deviation of the grain.
    pub grain: f32,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
}

impl Default for PaperSettings {
    fn default() -> Self {
        Self {
            color: Spectrum::new(0.96, 0.94, 0.89),
            grain: 0.06,
            width: 256,
            height: 256,
            seed: 0x5EED,
        }
    }
}

/// Tileable paper with a fibrous grain, generated deterministically from a seed.
pub struct PaperTexture {
    data: Vec<Spectrum<f32>>,
    width: usize,
    height: usize,
}

impl PaperTexture {
    pub fn new(settings: &PaperSettings) -> Self {
        let width = settings.width.max(1) as usize;
        let height = settings.height.max(1) as usize;
        let mut rng = Pcg32::seed_from_u64(settings.seed);

        let white: Vec<f32> = (0..width * height)
            .map(|_| rng.gen_range(-1.0f32..=1.0))
            .collect();

        // Fibers run mostly horizontally so blur wider in x than in y, wrapping at the
        // edges to keep the texture tileable
        let grain = |x: usize, y: usize| {
            let mut sum = 0.0;
            let mut count = 0.0;
            for dy in 0..3 {
                for dx in 0..5 {
                    let sx = (x + 2 * width + dx - 2) % width;
                    let sy = (y + height + dy - 1) % height;
                    sum += white[sy * width + sx];
                    count += 1.0;
                }
            }
            sum / count
        };

        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let g = grain(x, y) * settings.grain;
                data.push((settings.color + g).clamped(0.0, 1.0));
            }
        }

        Self {
            data,
            width,
            height,
        }
    }
}

impl Texture<Spectrum<f32>> for PaperTexture {
    fn dimensions(&self) -> Vec2<u32> {
        Vec2 {
            x: self.width as u32,
            y: self.height as u32,
        }
    }

    fn texel(&self, pixel: Vec2<u32>) -> Spectrum<f32> {
        let x = (pixel.x as usize).min(self.width - 1);
        let y = (pixel.y as usize).min(self.height - 1);
        self.data[y * self.width + x]
    }
}
