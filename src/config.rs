//! Configuration file handling.
//!
//! Settings come from an optional `flixlens.toml`; every field has a default
//! so a missing file or a partial one is fine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analytics::dashboard::DashboardOptions;
use crate::data::clean::CleanOptions;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "flixlens.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Window and table presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows of the raw upload shown in the preview table.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Banner image shown above the filters. Failure to load it is only a
    /// warning.
    #[serde(default = "default_banner")]
    pub banner: Option<PathBuf>,

    #[serde(default = "default_window_width")]
    pub window_width: f32,

    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_rows: default_preview_rows(),
            banner: default_banner(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

fn default_preview_rows() -> usize {
    5
}

fn default_banner() -> Option<PathBuf> {
    Some(PathBuf::from("netflix_banner.jpeg"))
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    900.0
}

/// Cleaning settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Separator between genres in the Genre column.
    #[serde(default = "default_genre_separator")]
    pub genre_separator: String,

    /// Genre assigned to records that list none.
    #[serde(default = "default_unknown_genre")]
    pub unknown_genre: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            genre_separator: default_genre_separator(),
            unknown_genre: default_unknown_genre(),
        }
    }
}

fn default_genre_separator() -> String {
    ", ".to_string()
}

fn default_unknown_genre() -> String {
    "Unknown".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Load from an explicit path, else from [`DEFAULT_CONFIG_FILE`] when it
    /// exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            log::debug!("Using {}", default_path.display());
            return Self::from_file(default_path);
        }
        Ok(Self::default())
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            preview_rows: self.display.preview_rows,
            clean: CleanOptions {
                genre_separator: self.analysis.genre_separator.clone(),
                unknown_genre: self.analysis.unknown_genre.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.display.preview_rows, 5);
        assert_eq!(config.analysis.genre_separator, ", ");
        assert_eq!(config.dashboard_options(), DashboardOptions::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [display]
            preview_rows = 10

            [analysis]
            unknown_genre = "Uncategorised"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.preview_rows, 10);
        assert_eq!(config.display.window_width, 1280.0);
        assert_eq!(config.analysis.genre_separator, ", ");
        assert_eq!(config.analysis.unknown_genre, "Uncategorised");
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\ngenre_separator = \"|\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.dashboard_options().clean.genre_separator, "|");
    }

    #[test]
    fn bad_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\npreview_rows = \"many\"").unwrap();
        assert!(Config::load(Some(file.path())).is_err());

        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
