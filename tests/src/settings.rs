#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crosshatch::{
        film::FilmSettings,
        math::Spectrum,
        params::HatchParameters,
        settings::{LogLevel, Settings, SettingsError},
    };

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "
film:
  width: 320
hatch:
  scale: 12.5
  ink_color: { r: 1.0, g: 0.0, b: 0.0 }
log_level: Debug
output: out/frame.png
";
        let settings = Settings::from_yaml(yaml).unwrap();
        let defaults = Settings::default();

        assert_eq!(settings.film.width, 320);
        assert_eq!(settings.film.height, FilmSettings::default().height);
        assert_eq!(settings.hatch.scale, 12.5);
        assert_eq!(settings.hatch.ink_color, Spectrum::new(1.0, 0.0, 0.0));
        assert_eq!(settings.hatch.roughness, HatchParameters::default().roughness);
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.output, PathBuf::from("out/frame.png"));
        assert_eq!(settings.paper, defaults.paper);
        assert_eq!(settings.scene, defaults.scene);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Settings::from_yaml("{}").unwrap(), Settings::default());
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let yaml = serde_yaml::to_string(&Settings::default()).unwrap();
        assert_eq!(Settings::from_yaml(&yaml).unwrap(), Settings::default());
    }

    #[test]
    fn log_level_filter() {
        assert_eq!(log::LevelFilter::from(LogLevel::default()), log::LevelFilter::Info);
        assert_eq!(log::LevelFilter::from(LogLevel::Off), log::LevelFilter::Off);
        assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
    }

    #[test]
    fn errors() {
        assert!(matches!(
            Settings::from_yaml("film: ["),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_yaml("film:\n  width: wide\n"),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::load(Path::new("definitely/not/here.yaml")),
            Err(SettingsError::Io(_))
        ));
    }
}
