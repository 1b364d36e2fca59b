use mixdown_engine::{Speaker, SpeakerRegistry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum SpeakersError {
    #[error("Failed to read speakers file at {path}: {source}")]
    SpeakersReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse speakers file at {path}: {source}")]
    SpeakersParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding article text files.
    pub articles_path: PathBuf,
    /// Default speakers file used when a command names none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers_path: Option<PathBuf>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.articles_path = Self::expand_path(&config.articles_path).unwrap_or(config.articles_path);
        config.speakers_path = config
            .speakers_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mixdown");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// On-disk shape of a speakers file: a list of `[[speakers]]` tables.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeakersFile {
    pub speakers: Vec<Speaker>,
}

/// Loads a speakers file and builds the registry the engine consumes.
pub fn load_speakers<P: AsRef<Path>>(path: P) -> Result<SpeakerRegistry, SpeakersError> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|source| SpeakersError::SpeakersReadError {
            path: path.to_path_buf(),
            source,
        })?;

    let file: SpeakersFile =
        toml::from_str(&content).map_err(|source| SpeakersError::SpeakersParseError {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(SpeakerRegistry::new(file.speakers))
}
