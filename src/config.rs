use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Which pair of delimiter lines bounds a diagram region. Exactly one
/// dialect is active per processor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Cd,
    Diagram,
}

impl Dialect {
    /// The begin-delimiter line, compared after trimming surrounding
    /// whitespace.
    pub fn begin(self) -> &'static str {
        match self {
            Dialect::Cd => "# CD_BEGIN",
            Dialect::Diagram => "# DIAGRAM_BEGIN",
        }
    }

    /// The end-delimiter line.
    pub fn end(self) -> &'static str {
        match self {
            Dialect::Cd => "# CD_END",
            Dialect::Diagram => "# DIAGRAM_END",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub dialect: Dialect,
    pub styles: StylesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct StylesConfig {
    /// Optional on-disk CSS overriding the section rule's default styles.
    pub section_css: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Title of the standalone HTML page.
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            title: "Diagram Preview".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load config from a TOML file, or return defaults if missing or
    /// malformed.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
