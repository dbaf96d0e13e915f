use serde::{Deserialize, Serialize};

use crate::math::{Ray, Vec2, Vec3};

/// Placement-free camera parameters. The camera sits at the view-space origin looking
/// down -z with +y up.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraParameters {
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self { fov: 45.0 }
    }
}

/// Generates view-space primary rays for raster positions.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    res: Vec2<u16>,
    tan_half_fov: f32,
    aspect: f32,
}

impl Camera {
    pub fn new(params: CameraParameters, res: Vec2<u16>) -> Self {
        let res = Vec2 {
            x: res.x.max(1),
            y: res.y.max(1),
        };
        let fov = params.fov.clamp(1.0, 179.0).to_radians();
        Self {
            res,
            tan_half_fov: (fov * 0.5).tan(),
            aspect: (res.x as f32) / (res.y as f32),
        }
    }

    pub fn res(&self) -> Vec2<u16> {
        self.res
    }

    /// Returns the ray through `raster`, given in pixels from the top left corner.
    /// Pixel centers are at `+0.5`.
    pub fn ray(&self, raster: Vec2<f32>) -> Ray {
        let ndc_x = raster.x / (self.res.x as f32) * 2.0 - 1.0;
        let ndc_y = 1.0 - raster.y / (self.res.y as f32) * 2.0;
        let d = Vec3 {
            x: ndc_x * self.tan_half_fov * self.aspect,
            y: ndc_y * self.tan_half_fov,
            z: -1.0,
        };
        Ray::new(Vec3::zeros(), d.normalized(), f32::INFINITY)
    }
}
