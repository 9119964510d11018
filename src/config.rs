use std::fs;
use std::path::{Path, PathBuf};

use commit_graph::{Charset, Commit, Style};
use crossterm::style::Color;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("palette must not be empty")]
    EmptyPalette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharsetName {
    Rounded,
    Ascii,
}

/// On-disk shape of the config file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    workers: Option<usize>,
    charset: Option<CharsetName>,
    palette: Option<Vec<String>>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub workers: Option<usize>,
    pub charset: Charset,
    pub palette: Vec<Color>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: None,
            charset: Charset::Rounded,
            palette: vec![
                Color::Cyan,
                Color::Green,
                Color::Yellow,
                Color::Magenta,
                Color::Blue,
                Color::Red,
                Color::DarkCyan,
                Color::DarkGreen,
                Color::DarkYellow,
                Color::DarkMagenta,
            ],
        }
    }
}

impl Config {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        let mut config = Self::default();

        config.workers = raw.workers;
        if let Some(charset) = raw.charset {
            config.charset = match charset {
                CharsetName::Rounded => Charset::Rounded,
                CharsetName::Ascii => Charset::Ascii,
            };
        }
        if let Some(names) = raw.palette {
            if names.is_empty() {
                return Err(ConfigError::EmptyPalette);
            }
            config.palette = names
                .iter()
                .map(|name| {
                    Color::try_from(name.as_str())
                        .map_err(|_| ConfigError::UnknownColor(name.clone()))
                })
                .collect::<Result<_, _>>()?;
        }

        Ok(config)
    }

    /// Style for a commit's pipes, stable across runs
    pub fn style_of(&self, commit: &Commit) -> Style {
        let key = if commit.author.is_empty() {
            &commit.hash
        } else {
            &commit.author
        };
        let color = self.palette[stable_color_index(key, self.palette.len())];
        Style {
            foreground_color: Some(color),
            ..Style::default()
        }
    }
}

/// FNV-1a over the name, reduced to a palette index
fn stable_color_index(name: &str, modulo: usize) -> usize {
    let mut hash: u64 = 1469598103934665603;
    for b in name.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211);
    }
    (hash % modulo as u64) as usize
}
