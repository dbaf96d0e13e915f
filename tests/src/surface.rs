#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crosshatch::{
        math::{Spectrum, Vec3},
        surface::{DirectionalLight, StandardSurface},
    };

    fn light(to_light: Vec3<f32>) -> DirectionalLight {
        DirectionalLight {
            to_light: to_light.normalized(),
            color: Spectrum::ones(),
        }
    }

    #[test]
    fn stays_in_unit_range() {
        let n = Vec3::new(0.0, 0.0, 1.0);
        let ambient = Spectrum::splat(0.1);
        let directions = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.1),
            Vec3::new(-0.3, 0.7, 0.4),
            Vec3::new(0.0, 0.0, -1.0),
        ];
        for roughness in [0.0, 0.2, 0.5, 1.0] {
            for metalness in [0.0, 0.5, 1.0] {
                let surface = StandardSurface::new(Spectrum::new(0.9, 0.5, 0.1), roughness, metalness);
                for to_light in directions {
                    for wo in directions {
                        let c = surface.shade(n, wo.normalized(), &light(to_light), ambient);
                        assert!(c.is_finite());
                        for v in [c.r, c.g, c.b] {
                            assert!((0.0..=1.0).contains(&v), "{:?}", c);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn unlit_side_gets_ambient() {
        let albedo = Spectrum::new(0.8, 0.4, 0.2);
        let ambient = Spectrum::splat(0.1);
        let surface = StandardSurface::new(albedo, 0.3, 0.25);

        let n = Vec3::new(0.0, 1.0, 0.0);
        let c = surface.shade(n, n, &light(-n), ambient);
        assert_abs_diff_eq!(c, albedo.mul_element(ambient) * 0.75, epsilon = 1e-6);
    }

    #[test]
    fn facing_light_is_brighter() {
        let surface = StandardSurface::new(Spectrum::splat(0.5), 0.5, 0.0);
        let n = Vec3::new(0.0, 0.0, 1.0);
        let ambient = Spectrum::zeros();

        let head_on = surface.shade(n, n, &light(n), ambient);
        let grazing = surface.shade(n, n, &light(Vec3::new(1.0, 0.0, 0.2)), ambient);
        assert!(head_on.luma() > grazing.luma());
        assert!(grazing.luma() > 0.0);
    }

    #[test]
    fn parameters_are_clamped() {
        let surface = StandardSurface::new(Spectrum::ones(), 2.0, -1.0);
        assert_eq!(surface.roughness, 1.0);
        assert_eq!(surface.metalness, 0.0);
    }
}
