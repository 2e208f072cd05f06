//! Tunable game constants, optionally loaded from a JSON file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable consulted when no config path is passed on the
/// command line
pub const CONFIG_ENV_VAR: &str = "SIERPINSKI_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config file is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Each zoom-in step multiplies the scale by `1 + zoom_factor`
    pub zoom_factor: f64,
    /// Points awarded per zoom-in step
    pub score_increment: u64,
    /// Scale at which the LOD boost kicks in
    pub zoom_threshold: f64,
    /// Recursion depth at scale 1
    pub initial_depth: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            zoom_factor: 0.1,
            score_increment: 10,
            zoom_threshold: 2.0,
            initial_depth: 5,
            canvas_width: 800,
            canvas_height: 600,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "zoom_factor",
                reason: "must be a positive number",
            });
        }
        if !self.zoom_threshold.is_finite() || self.zoom_threshold <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "zoom_threshold",
                reason: "must be a positive number",
            });
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid {
                field: "canvas_width/canvas_height",
                reason: "canvas must not be empty",
            });
        }
        Ok(())
    }

    /// Config path from the first CLI argument, then the environment
    pub fn locate(mut args: impl Iterator<Item = String>) -> Option<PathBuf> {
        args.next()
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
            .map(PathBuf::from)
    }
}
