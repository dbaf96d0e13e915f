#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crosshatch::math::Spectrum;

    #[test]
    fn luma() {
        assert_abs_diff_eq!(Spectrum::<f32>::ones().luma(), 1.0, epsilon = 1e-6);
        assert_eq!(Spectrum::<f32>::zeros().luma(), 0.0);
        assert_abs_diff_eq!(Spectrum::new(1.0, 0.0, 0.0).luma(), 0.299, epsilon = 1e-6);
        assert_abs_diff_eq!(Spectrum::new(0.0, 1.0, 0.0).luma(), 0.587, epsilon = 1e-6);
        assert_abs_diff_eq!(Spectrum::new(0.0, 0.0, 1.0).luma(), 0.114, epsilon = 1e-6);
        assert_abs_diff_eq!(Spectrum::splat(0.5f32).luma(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn hex() {
        let c = Spectrum::from_hex(0x12_6A_87);
        assert_abs_diff_eq!(c, Spectrum::new(18.0 / 255.0, 106.0 / 255.0, 135.0 / 255.0));
        assert_eq!(c.to_hex(), 0x12_6A_87);
        assert_eq!(Spectrum::from_hex(0xFF_FF_FF), Spectrum::ones());
        assert_eq!(Spectrum::new(2.0, -1.0, 0.0).to_hex(), 0xFF_00_00);
    }

    #[test]
    fn is_black() {
        assert!(Spectrum::<f32>::zeros().is_black());
        assert!(!Spectrum::new(0.0, 0.0, 0.1f32).is_black());
    }
}
