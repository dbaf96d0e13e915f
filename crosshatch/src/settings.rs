use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    camera::CameraParameters, film::FilmSettings, params::HatchParameters,
    renderer::RenderSettings, scene::LightSettings, scene::Scene, textures::PaperSettings,
};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Error reading settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error parsing settings: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Everything the headless renderer reads on startup. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub film: FilmSettings,
    pub output: PathBuf,
    pub log_level: LogLevel,
    pub hatch: HatchParameters,
    pub paper: PaperSettings,
    pub light: LightSettings,
    pub camera: CameraParameters,
    pub scene: Scene,
    pub render: RenderSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            film: FilmSettings::default(),
            output: PathBuf::from("crosshatch.png"),
            log_level: LogLevel::default(),
            hatch: HatchParameters::default(),
            paper: PaperSettings::default(),
            light: LightSettings::default(),
            camera: CameraParameters::default(),
            scene: Scene::default(),
            render: RenderSettings::default(),
        }
    }
}

impl Settings {
    /// Parses `Settings` from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads `Settings` from the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let yaml = std::fs::read_to_string(path)?;
        let settings = Self::from_yaml(&yaml)?;
        hatch_info!("Settings loaded from '{}'", path.to_string_lossy());
        Ok(settings)
    }
}
