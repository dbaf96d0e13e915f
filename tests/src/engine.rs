#[cfg(test)]
mod tests {
    use crosshatch::{
        binding::ParameterBinding,
        engine::{shade, Differentials, SurfaceSample},
        hatching::burn_color,
        math::{Spectrum, Vec3, Vec4},
        params::HatchParameters,
    };

    const PAPER: Spectrum<f32> = Spectrum {
        r: 0.96,
        g: 0.94,
        b: 0.89,
    };

    fn sample(position_view: Vec4<f32>, base: f32) -> SurfaceSample {
        SurfaceSample {
            position_view,
            normal: Vec3::new(0.3, 0.5, 0.8).normalized(),
            base_color: Spectrum::splat(base),
            paper_color: PAPER,
            differentials: None,
        }
    }

    fn positions() -> impl Iterator<Item = Vec4<f32>> {
        (0..40).flat_map(|y| {
            (0..40).map(move |x| {
                Vec4::new(
                    -1.0 + (x as f32) * 0.05,
                    -1.0 + (y as f32) * 0.05,
                    -3.0 - (x as f32) * 0.01,
                    1.0,
                )
            })
        })
    }

    fn pixel_differentials() -> Differentials {
        Differentials {
            dpdx: Vec4::new(0.004, 0.0, 0.0, 0.0),
            dpdy: Vec4::new(0.0, 0.004, 0.0, 0.0),
        }
    }

    #[test]
    fn binary_without_differentials() {
        let params = HatchParameters::default();
        let ink = burn_color(PAPER, params.ink_color);

        let (mut inked, mut bare) = (0, 0);
        for p in positions() {
            let color = shade(&sample(p, 0.5), &params).color;
            if color == PAPER {
                bare += 1;
            } else {
                assert_eq!(color, ink);
                inked += 1;
            }
        }
        assert!(inked > 0);
        assert!(bare > 0);
    }

    #[test]
    fn antialiased_stays_between_paper_and_ink() {
        let params = HatchParameters::default();
        let ink = burn_color(PAPER, params.ink_color);
        let within = |v: f32, a: f32, b: f32| v >= a.min(b) - 1e-5 && v <= a.max(b) + 1e-5;

        let mut partial = 0;
        for p in positions() {
            let mut s = sample(p, 0.5);
            s.differentials = Some(pixel_differentials());
            let color = shade(&s, &params).color;
            assert!(color.is_finite());
            assert!(within(color.r, PAPER.r, ink.r));
            assert!(within(color.g, PAPER.g, ink.g));
            assert!(within(color.b, PAPER.b, ink.b));
            if color != PAPER && color != ink {
                partial += 1;
            }
        }
        assert!(partial > 0);
    }

    #[test]
    fn facing_camera_at_default_scale() {
        let params = HatchParameters {
            scale: 20.0,
            ..HatchParameters::default()
        };
        let ink = burn_color(PAPER, params.ink_color);
        let base: Spectrum<f32> = Spectrum::new(0.5, 0.5, 0.5);
        assert!((base.luma() - 0.5).abs() < 1e-6);

        for differentials in [None, Some(pixel_differentials())] {
            let s = SurfaceSample {
                position_view: Vec4::new(0.37, -0.21, -2.5, 1.0),
                normal: Vec3::new(0.0, 0.0, 1.0),
                base_color: base,
                paper_color: PAPER,
                differentials,
            };
            let color = shade(&s, &params).color;
            for (v, (p, i)) in [color.r, color.g, color.b]
                .into_iter()
                .zip([PAPER.r, PAPER.g, PAPER.b].into_iter().zip([ink.r, ink.g, ink.b]))
            {
                assert!(v >= p.min(i) - 1e-5 && v <= p.max(i) + 1e-5);
            }
        }
    }

    #[test]
    fn zero_differentials_match_none() {
        let params = HatchParameters::default();
        let zero = Differentials {
            dpdx: Vec4::zeros(),
            dpdy: Vec4::zeros(),
        };
        for p in positions() {
            let without = shade(&sample(p, 0.4), &params);
            let mut s = sample(p, 0.4);
            s.differentials = Some(zero);
            assert_eq!(shade(&s, &params), without);
        }
    }

    #[test]
    fn darker_base_is_hatched_more() {
        let params = HatchParameters::default();
        let inked = |base: f32| {
            positions()
                .filter(|&p| shade(&sample(p, base), &params).color != PAPER)
                .count()
        };
        let dark = inked(0.05);
        let mid = inked(0.5);
        let light = inked(0.95);
        assert!(dark >= mid);
        assert!(mid >= light);
        assert!(dark > light);
    }

    #[test]
    fn degenerate_input_is_finite() {
        let mut s = sample(Vec4::new(0.2, -0.4, -2.0, 1.0), 0.3);
        s.differentials = Some(pixel_differentials());

        let check = |s: &SurfaceSample, params: &HatchParameters| {
            let color = shade(s, params).color;
            assert!(color.is_finite(), "{:?} {:?} -> {:?}", s, params, color);
            assert!(color.r >= 0.0 && color.g >= 0.0 && color.b >= 0.0);
        };

        let params = HatchParameters::default();
        for w in [0.0, -0.0, 1e-12, -1e-12, -1.0, 1e30] {
            let mut s = s;
            s.position_view.w = w;
            check(&s, &params);
        }

        let mut zero_normal = s;
        zero_normal.normal = Vec3::zeros();
        check(&zero_normal, &params);

        for scale in [0.0, -5.0, 1e-9, f32::INFINITY, f32::NAN] {
            let params = HatchParameters {
                scale,
                ..HatchParameters::default()
            };
            check(&s, &params);
        }

        let wild = HatchParameters {
            roughness: f32::NAN,
            metalness: -3.0,
            ink_color: Spectrum {
                r: f32::NAN,
                g: 2.0,
                b: -1.0,
            },
            scale: 20.0,
        };
        check(&s, &wild);
    }

    #[test]
    fn ink_follows_binding() {
        let binding = ParameterBinding::default();
        let red = Spectrum::new(1.0, 0.0, 0.0);
        let blue = Spectrum::new(0.0, 0.0, 1.0);

        let frame = |binding: &ParameterBinding| {
            let params = binding.snapshot();
            positions()
                .map(|p| shade(&sample(p, 0.0), &params).color)
                .collect::<Vec<_>>()
        };

        binding.set_ink_color(red);
        let reds = frame(&binding);
        binding.set_ink_color(blue);
        let blues = frame(&binding);

        let mut changed = 0;
        for (r, b) in reds.iter().zip(blues.iter()) {
            if *r != PAPER {
                assert_eq!(*r, burn_color(PAPER, red));
                assert_eq!(*b, burn_color(PAPER, blue));
                changed += 1;
            }
        }
        assert!(changed > 0);
    }
}
