//! Settings of the quill editor, persisted as a JSON blob.
//!
//! The settings are loaded once by the host and passed down explicitly; the
//! text analysis engines only ever see the sections they need, such as
//! [`WordCountDisplayOptions`].

use directories::ProjectDirs;
use quill_core::WordCountDisplayOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file name inside the config directory.
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// Default location of the settings file.
///
/// Linux: ~/.config/quill/settings.json
/// macOS: ~/Library/Application Support/org.quill.Quill/settings.json
/// Windows: ~\AppData\Roaming\quill\Quill\config\settings.json
pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("org", "quill", "Quill")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LogConfig {
    /// Specify the log file path.
    ///
    /// Logs go to stderr when unset.
    pub log_file: Option<String>,

    /// Specify the max log level.
    pub max_level: String,

    /// Extra filter directives for more detailed logging.
    ///
    /// ```json
    /// { "log": { "logTarget": "quill_core::render=trace" } }
    /// ```
    pub log_target: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            max_level: "info".into(),
            log_target: "".into(),
        }
    }
}

/// Markdown preview pane.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewConfig {
    /// Whether to render markdown documents.
    pub enable: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Segments of the word-count status line.
    pub word_count: WordCountDisplayOptions,

    /// Log configuration.
    pub log: LogConfig,

    /// Preview configuration.
    pub preview: PreviewConfig,
}

impl Settings {
    /// Reads the settings at `path`.
    ///
    /// A missing file yields the default settings; malformed JSON is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file found");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Settings::load`], but falls back to the defaults on error.
    ///
    /// The error is handed back so that the host can report it.
    pub fn load_or_default(path: &Path) -> (Self, Option<ConfigError>) {
        match Self::load(path) {
            Ok(settings) => (settings, None),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load settings, using defaults");
                (Self::default(), Some(err))
            }
        }
    }

    /// Writes the settings to `path` as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(io_err)?;

        tracing::debug!(path = %path.display(), "Saved settings");

        Ok(())
    }
}
