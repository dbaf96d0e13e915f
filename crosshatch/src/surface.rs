use std::f32::consts::PI;

use crate::math::{Spectrum, Vec3};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Reflection_Models/Microfacet_Models#MicrofacetDistributionFunctions
// https://www.pbr-book.org/3ed-2018/Reflection_Models/Fresnel_Incidence_Effects

/// Reflectance of dielectrics at normal incidence.
const DIELECTRIC_F0: f32 = 0.04;

/// The lit base color under the hatching, a metalness/roughness surface in the spirit of
/// a standard real-time material.
#[derive(Copy, Clone, Debug)]
pub struct StandardSurface {
    pub albedo: Spectrum<f32>,
    pub roughness: f32,
    pub metalness: f32,
}

/// A light arriving from a single direction.
#[derive(Copy, Clone, Debug)]
pub struct DirectionalLight {
    /// Unit vector toward the light.
    pub to_light: Vec3<f32>,
    pub color: Spectrum<f32>,
}

impl StandardSurface {
    pub fn new(albedo: Spectrum<f32>, roughness: f32, metalness: f32) -> Self {
        Self {
            albedo,
            roughness: roughness.clamp(0.0, 1.0),
            metalness: metalness.clamp(0.0, 1.0),
        }
    }

    /// Trowbridge-Reitz normal distribution with `alpha = roughness^2`.
    fn d(&self, cos_theta_h: f32) -> f32 {
        let alpha = (self.roughness * self.roughness).max(0.001);
        let alpha_2 = alpha * alpha;
        let c2 = cos_theta_h * cos_theta_h;
        let denom = c2 * (alpha_2 - 1.0) + 1.0;
        alpha_2 / (PI * denom * denom)
    }

    /// Smith masking-shadowing, Schlick-GGX form.
    fn g(&self, n_dot_v: f32, n_dot_l: f32) -> f32 {
        let k = {
            let r = self.roughness + 1.0;
            r * r / 8.0
        };
        let g1 = |c: f32| c / (c * (1.0 - k) + k);
        g1(n_dot_v) * g1(n_dot_l)
    }

    fn fresnel(&self, cos_theta: f32) -> Spectrum<f32> {
        let f0 = Spectrum::splat(DIELECTRIC_F0).lerp(self.albedo, self.metalness);
        let m = (1.0 - cos_theta).clamp(0.0, 1.0).powi(5);
        f0 + (Spectrum::ones() - f0) * m
    }

    /// Returns the shaded color at a point with unit normal `n` seen from unit direction
    /// `wo`, clamped to `[0, 1]`.
    pub fn shade(
        &self,
        n: Vec3<f32>,
        wo: Vec3<f32>,
        light: &DirectionalLight,
        ambient: Spectrum<f32>,
    ) -> Spectrum<f32> {
        let diffuse_albedo = self.albedo * (1.0 - self.metalness);
        let mut color = diffuse_albedo.mul_element(ambient);

        let n_dot_l = n.dot(light.to_light);
        let n_dot_v = n.dot(wo).max(1e-4);
        if n_dot_l > 0.0 {
            let wh = (light.to_light + wo).normalized_or(n);
            let f = self.fresnel(wh.dot(wo).max(0.0));
            let specular = f * (self.d(n.dot(wh).max(0.0)) * self.g(n_dot_v, n_dot_l)
                / (4.0 * n_dot_v * n_dot_l).max(1e-4));
            let kd = (Spectrum::ones() - f) * (1.0 - self.metalness);
            let diffuse = kd.mul_element(self.albedo) / PI;

            color += (diffuse + specular).mul_element(light.color) * (n_dot_l * PI);
        }

        color.clamped(0.0, 1.0)
    }
}
