use super::Vec3;

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays

/// A ray with a maximum parametric length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Origin.
    pub o: Vec3<f32>,
    /// Direction, not necessarily unit length.
    pub d: Vec3<f32>,
    /// Maximum `t` along `d`.
    pub t_max: f32,
}

impl Ray {
    pub fn new(o: Vec3<f32>, d: Vec3<f32>, t_max: f32) -> Self {
        Self { o, d, t_max }
    }

    /// Returns the point at `t` along this `Ray`.
    #[inline]
    pub fn point(&self, t: f32) -> Vec3<f32> {
        self.o + self.d * t
    }
}
