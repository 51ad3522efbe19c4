use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result, SnapError};
use crate::export::OutputFormat;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when none is given on the command line: "text" or "pdf"
    pub default_format: String,
    /// Where saved listings go (default: platform document area + "dirsnap")
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: ExportConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Load configuration. An explicit path must exist and parse; with
    /// no path, `<config dir>/dirsnap/config.toml` is used if present,
    /// otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dirsnap").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if OutputFormat::parse(&self.export.default_format).is_none() {
            return Err(ConfigError::Invalid(format!(
                "unknown default_format '{}', expected 'text' or 'pdf'",
                self.export.default_format
            ))
            .into());
        }
        Ok(())
    }

    /// Directory where exports land when no explicit output path is
    /// given: the configured override, else the platform document area
    /// plus a `dirsnap` subdirectory.
    pub fn resolve_output_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.export.output_dir {
            return Ok(dir.clone());
        }
        let documents = dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join("Documents")))
            .ok_or_else(|| {
                SnapError::InvalidPath("cannot determine a documents directory".to_string())
            })?;
        Ok(documents.join("dirsnap"))
    }
}
