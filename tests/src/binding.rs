#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::{str::FromStr, thread};

    use crosshatch::{
        binding::{BindingError, ParameterBinding, Tunable, TunableDescriptor, TunableValue},
        math::Spectrum,
        params::HatchParameters,
    };

    #[test]
    fn defaults() {
        let params = ParameterBinding::default().snapshot();
        assert_eq!(params, HatchParameters::default());
        assert_abs_diff_eq!(params.roughness, 0.2);
        assert_abs_diff_eq!(params.metalness, 0.1);
        assert_abs_diff_eq!(params.scale, 20.0);
        assert_eq!(params.ink_color.to_hex(), 0x12_6A_87);
    }

    #[test]
    fn names() {
        assert_eq!(Tunable::from_str("roughness").ok(), Some(Tunable::Roughness));
        assert_eq!(Tunable::from_str("metalness").ok(), Some(Tunable::Metalness));
        assert_eq!(Tunable::from_str("inkColor").ok(), Some(Tunable::InkColor));
        assert_eq!(Tunable::from_str("scale").ok(), Some(Tunable::Scale));
        assert!(Tunable::from_str("Scale").is_err());
        assert_eq!(Tunable::InkColor.to_string(), "inkColor");
    }

    #[test]
    fn descriptors() {
        let descriptors = ParameterBinding::descriptors();
        assert_eq!(descriptors.len(), 4);

        let scale = descriptors
            .iter()
            .find(|d| d.tunable() == Tunable::Scale)
            .copied();
        match scale {
            Some(TunableDescriptor::Float { range, .. }) => {
                assert_eq!(range.min, 10.0);
                assert_eq!(range.max, 30.0);
                assert_eq!(range.step, Some(0.01));
            }
            other => panic!("Unexpected scale descriptor {:?}", other),
        }
        assert!(matches!(
            Tunable::InkColor.descriptor(),
            TunableDescriptor::Color { .. }
        ));
    }

    #[test]
    fn scale_is_clamped_and_snapped() {
        let binding = ParameterBinding::default();

        binding.set_scale(12.5);
        assert_abs_diff_eq!(binding.snapshot().scale, 12.5, epsilon = 1e-4);

        binding.set_scale(50.0);
        assert_eq!(binding.snapshot().scale, 30.0);

        binding.set_scale(5.0);
        assert_eq!(binding.snapshot().scale, 10.0);

        binding.set_scale(12.347);
        assert_abs_diff_eq!(binding.snapshot().scale, 12.35, epsilon = 1e-4);

        binding.set_scale(f32::NAN);
        assert_eq!(binding.snapshot().scale, 10.0);
    }

    #[test]
    fn unit_terms_are_clamped() {
        let binding = ParameterBinding::default();

        binding.set_roughness(-1.0);
        binding.set_metalness(0.75);
        let params = binding.snapshot();
        assert_eq!(params.roughness, 0.0);
        assert_eq!(params.metalness, 0.75);

        binding.set_metalness(3.0);
        assert_eq!(binding.snapshot().metalness, 1.0);
    }

    #[test]
    fn set_by_name() {
        let binding = ParameterBinding::default();

        binding
            .set("inkColor", TunableValue::Color(Spectrum::new(1.0, 0.5, 0.0)))
            .unwrap();
        assert_eq!(binding.snapshot().ink_color, Spectrum::new(1.0, 0.5, 0.0));

        binding.set("roughness", TunableValue::Float(0.6)).unwrap();
        assert_eq!(binding.snapshot().roughness, 0.6);

        // Out of range color channels are clamped
        binding
            .set("inkColor", TunableValue::Color(Spectrum::new(2.0, -1.0, 0.5)))
            .unwrap();
        assert_eq!(binding.snapshot().ink_color, Spectrum::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn rejected_writes_leave_state() {
        let binding = ParameterBinding::default();
        let before = binding.snapshot();

        assert!(matches!(
            binding.set("thickness", TunableValue::Float(1.0)),
            Err(BindingError::UnknownTunable(name)) if name == "thickness"
        ));
        assert!(matches!(
            binding.set("scale", TunableValue::Color(Spectrum::ones())),
            Err(BindingError::WrongValueKind {
                tunable: Tunable::Scale,
                ..
            })
        ));
        assert!(matches!(
            binding.set_tunable(Tunable::InkColor, TunableValue::Float(0.5)),
            Err(BindingError::WrongValueKind {
                tunable: Tunable::InkColor,
                ..
            })
        ));

        assert_eq!(binding.snapshot(), before);
    }

    #[test]
    fn clones_share_state() {
        let binding = ParameterBinding::default();
        let handle = binding.clone();
        handle.set_scale(25.0);
        assert_abs_diff_eq!(binding.snapshot().scale, 25.0, epsilon = 1e-4);
    }

    #[test]
    fn readers_see_whole_updates() {
        let red = Spectrum::new(1.0, 0.0, 0.0);
        let blue = Spectrum::new(0.0, 0.0, 1.0);

        let binding = ParameterBinding::default();
        binding.set_ink_color(red);

        let writer = {
            let binding = binding.clone();
            thread::spawn(move || {
                for i in 0..2000 {
                    binding.set_ink_color(if i % 2 == 0 { blue } else { red });
                    binding.set_scale(10.0 + (i % 20) as f32);
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let binding = binding.clone();
                thread::spawn(move || {
                    for _ in 0..2000 {
                        let params = binding.snapshot();
                        assert!(params.ink_color == red || params.ink_color == blue);
                        assert!((10.0..=30.0).contains(&params.scale));
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
