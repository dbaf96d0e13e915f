use serde::{Deserialize, Serialize};

use crate::{
    math::{Ray, Spectrum, Vec3},
    surface::DirectionalLight,
};

/// A sphere in view space.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Sphere {
    pub center: Vec3<f32>,
    pub radius: f32,
    pub albedo: Spectrum<f32>,
}

/// An infinite plane `dot(n, p) = offset` in view space.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Plane {
    pub n: Vec3<f32>,
    pub offset: f32,
    pub albedo: Spectrum<f32>,
}

/// Lighting of the scene, all directions in view space.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LightSettings {
    /// Direction toward the light, normalized on use.
    pub direction: Vec3<f32>,
    pub color: Spectrum<f32>,
    pub ambient: Spectrum<f32>,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            direction: Vec3::new(-0.5, 0.8, 0.6),
            color: Spectrum::ones(),
            ambient: Spectrum::splat(0.08),
        }
    }
}

impl LightSettings {
    pub fn light(&self) -> DirectionalLight {
        DirectionalLight {
            to_light: self.direction.normalized_or(Vec3::new(0.0, 0.0, 1.0)),
            color: self.color,
        }
    }
}

/// Info for a ray hit on a surface.
#[derive(Copy, Clone, Debug)]
pub struct Hit {
    pub t: f32,
    /// View-space position.
    pub p: Vec3<f32>,
    /// Unit surface normal.
    pub n: Vec3<f32>,
    pub albedo: Spectrum<f32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub planes: Vec<Plane>,
}

impl Default for Scene {
    /// A few spheres resting on a floor.
    fn default() -> Self {
        Self {
            spheres: vec![
                Sphere {
                    center: Vec3::new(0.0, 0.0, -4.0),
                    radius: 1.0,
                    albedo: Spectrum::new(0.9, 0.9, 0.9),
                },
                Sphere {
                    center: Vec3::new(-1.6, -0.5, -5.0),
                    radius: 0.5,
                    albedo: Spectrum::new(0.8, 0.6, 0.5),
                },
                Sphere {
                    center: Vec3::new(1.5, -0.3, -3.5),
                    radius: 0.7,
                    albedo: Spectrum::new(0.5, 0.7, 0.8),
                },
            ],
            planes: vec![Plane {
                n: Vec3::new(0.0, 1.0, 0.0),
                offset: -1.0,
                albedo: Spectrum::splat(0.7),
            }],
        }
    }
}

/// Something a ray can hit.
pub trait Shape: Send + Sync {
    /// Returns the hit along `ray` closer than its `t_max`, if any.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}

impl Shape for Sphere {
    // Based on Physically Based Rendering 3rd ed.
    // https://www.pbr-book.org/3ed-2018/Shapes/Spheres
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.o - self.center;
        let a = ray.d.len_sqr();
        let half_b = oc.dot(ray.d);
        let c = oc.len_sqr() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 || a == 0.0 {
            return None;
        }
        let root = discriminant.sqrt();

        let t = [(-half_b - root) / a, (-half_b + root) / a]
            .into_iter()
            .find(|&t| t > 1e-4 && t < ray.t_max)?;
        let p = ray.point(t);
        Some(Hit {
            t,
            p,
            n: (p - self.center).normalized_or(Vec3::new(0.0, 0.0, 1.0)),
            albedo: self.albedo,
        })
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let n = self.n.normalized_or(Vec3::new(0.0, 1.0, 0.0));
        let denom = n.dot(ray.d);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (self.offset - n.dot(ray.o)) / denom;
        if t <= 1e-4 || t >= ray.t_max {
            return None;
        }
        Some(Hit {
            t,
            p: ray.point(t),
            n: if denom < 0.0 { n } else { -n },
            albedo: self.albedo,
        })
    }
}

impl Scene {
    /// Returns the closest hit along `ray`.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut ray = *ray;
        let mut closest = None;

        let shapes = self
            .spheres
            .iter()
            .map(|s| s as &dyn Shape)
            .chain(self.planes.iter().map(|p| p as &dyn Shape));
        for shape in shapes {
            if let Some(hit) = shape.intersect(&ray) {
                ray.t_max = hit.t;
                closest = Some(hit);
            }
        }

        closest
    }
}
