use crate::error::{PhraseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration, read from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum similarity ratio for a fuzzy match
    #[serde(default = "default_fuzzy_cutoff")]
    pub fuzzy_cutoff: f64,
    /// How many fuzzy candidates are ranked
    #[serde(default = "default_fuzzy_candidates")]
    pub fuzzy_candidates: usize,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Reject tables whose normalized strings collide across keys
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// JSON or TOML phrase table; the bundled table when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_audio_root")]
    pub root: PathBuf,
    /// Searched in order
    #[serde(default = "default_audio_folders")]
    pub folders: Vec<String>,
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
}

fn default_fuzzy_cutoff() -> f64 {
    0.6
}
fn default_fuzzy_candidates() -> usize {
    5
}
fn default_max_suggestions() -> usize {
    5
}
fn default_audio_root() -> PathBuf {
    PathBuf::from("audio_datasets")
}
fn default_audio_folders() -> Vec<String> {
    ["Family_Members", "Greetings", "Animals", "Words"]
        .iter()
        .map(|folder| folder.to_string())
        .collect()
}
fn default_url_prefix() -> String {
    "/audio".to_string()
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: default_fuzzy_cutoff(),
            fuzzy_candidates: default_fuzzy_candidates(),
            max_suggestions: default_max_suggestions(),
            strict: false,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            root: default_audio_root(),
            folders: default_audio_folders(),
            url_prefix: default_url_prefix(),
        }
    }
}

/// Default config location, e.g. `~/.config/phrase-bot/config.toml`.
pub fn config_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("phrase-bot");
    config_dir.join("config.toml")
}

/// Reads and parses a config file.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path).map_err(|source| PhraseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// An explicit path must exist. Without one, the default location is used
/// if present and built-in defaults otherwise.
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let path = config_path();
            if path.exists() {
                load_config(&path)
            } else {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(AppConfig::default())
            }
        }
    }
}
