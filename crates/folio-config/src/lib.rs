//! Configuration file support for folio.
//!
//! The config lives in `config.toml` under the platform config directory
//! (for example `~/.config/folio/config.toml` on Linux). A missing file means
//! defaults; a malformed one is an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_core::Theme;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Upper bound on the particle count; link detection is quadratic in it.
pub const MAX_PARTICLES: usize = 400;

/// Upper bound on the animation frame rate.
pub const MAX_FPS: u32 = 120;

/// Errors raised while loading or saving the config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write config file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
    #[error("could not determine the config directory")]
    NoConfigDir,
}

/// Typewriter timing and phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypewriterConfig {
    /// Milliseconds per typed character.
    pub speed_ms: u64,
    /// Milliseconds per deleted character.
    pub delete_speed_ms: u64,
    /// Pause after a phrase is fully typed.
    pub delay_ms: u64,
    /// Phrases to cycle through; empty means the profile's own.
    pub phrases: Vec<String>,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            speed_ms: 80,
            delete_speed_ms: 40,
            delay_ms: 1200,
            phrases: Vec::new(),
        }
    }
}

/// Particle background tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    pub count: usize,
    /// Pairs closer than this many surface units are linked.
    pub link_distance: f64,
    /// Opacity of the strongest link, in [0, 1].
    pub max_line_opacity: f64,
    pub fps: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 80,
            link_distance: 120.0,
            max_line_opacity: 0.35,
            fps: 60,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: Theme,
    pub typewriter: TypewriterConfig,
    pub particles: ParticleConfig,
    /// Resume file offered for download.
    pub resume_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            typewriter: TypewriterConfig::default(),
            particles: ParticleConfig::default(),
            resume_path: PathBuf::from("resume.pdf"),
        }
    }
}

impl Config {
    /// Path of the config file in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::parse(&contents, path)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    /// Write to the default path, creating the directory. Returns the path.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Reject unusable values and clamp out-of-range ones.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let tw = &self.typewriter;
        if tw.speed_ms == 0 || tw.delete_speed_ms == 0 || tw.delay_ms == 0 {
            return Err(ConfigError::Invalid(
                "typewriter speed_ms, delete_speed_ms and delay_ms must be at least 1".into(),
            ));
        }

        let particles = &mut self.particles;
        if !(particles.link_distance.is_finite() && particles.link_distance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "particles.link_distance must be a positive number, got {}",
                particles.link_distance
            )));
        }
        if particles.fps == 0 {
            return Err(ConfigError::Invalid("particles.fps must be at least 1".into()));
        }
        if particles.fps > MAX_FPS {
            warn!(fps = particles.fps, max = MAX_FPS, "clamping particle frame rate");
            particles.fps = MAX_FPS;
        }
        if particles.count > MAX_PARTICLES {
            warn!(
                count = particles.count,
                max = MAX_PARTICLES,
                "clamping particle count; link detection is quadratic"
            );
            particles.count = MAX_PARTICLES;
        }
        if particles.max_line_opacity.is_nan() {
            particles.max_line_opacity = ParticleConfig::default().max_line_opacity;
        }
        particles.max_line_opacity = particles.max_line_opacity.clamp(0.0, 1.0);
        Ok(())
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config =
            toml::from_str(contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.typewriter.speed_ms, 80);
        assert_eq!(config.typewriter.delete_speed_ms, 40);
        assert_eq!(config.typewriter.delay_ms, 1200);
        assert_eq!(config.particles.count, 80);
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml(
            r#"
            theme = "light"

            [typewriter]
            speed_ms = 50
            phrases = ["one", "two"]
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.typewriter.speed_ms, 50);
        assert_eq!(config.typewriter.delete_speed_ms, 40);
        assert_eq!(config.typewriter.phrases, vec!["one", "two"]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_zero_speed_rejected() {
        let err = Config::from_toml("[typewriter]\nspeed_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_delay_rejected() {
        let err = Config::from_toml("[typewriter]\ndelay_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_link_distance_rejected() {
        let err = Config::from_toml("[particles]\nlink_distance = -3.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_particle_count_clamped() {
        let config = Config::from_toml("[particles]\ncount = 5000\nfps = 500").unwrap();
        assert_eq!(config.particles.count, MAX_PARTICLES);
        assert_eq!(config.particles.fps, MAX_FPS);
    }

    #[test]
    fn test_line_opacity_clamped() {
        let config = Config::from_toml("[particles]\nmax_line_opacity = 4.0").unwrap();
        assert_eq!(config.particles.max_line_opacity, 1.0);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let mut config = Config::default();
        config.theme = Theme::Light;
        config.typewriter.phrases = vec!["Rustacean".into()];
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "theme = ").unwrap();
        match Config::load_from(&path).unwrap_err() {
            ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
