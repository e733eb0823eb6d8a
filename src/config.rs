// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Optional `curvepad.toml` configuration.
//!
//! Every field has a default, so an empty or partial file is valid. A
//! missing file is not an error; a malformed one is logged and ignored.
//!
//! ```toml
//! initial_mode = "bezier3"
//!
//! [canvas]
//! width = 1200.0
//! height = 700.0
//! ```

use crate::curve::CurveMode;
use crate::settings;
use kurbo::Size;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The drawing surface cannot be used
#[derive(Debug, Error, PartialEq)]
pub enum CanvasError {
    #[error("no usable drawing surface: canvas size {width}x{height}")]
    UnusableSurface { width: f64, height: f64 },
}

/// Canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: settings::canvas::WIDTH,
            height: settings::canvas::HEIGHT,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    /// Mode key selected at startup
    pub initial_mode: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            initial_mode: CurveMode::default().key(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("No config file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::from_path(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config: {}: {}", e, source_message(&e));
                Self::default()
            }
        }
    }

    /// Default config location in the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(settings::config::FILE_NAME)
    }

    /// The curve mode to start in
    pub fn initial_mode(&self) -> CurveMode {
        CurveMode::from_key(&self.initial_mode)
    }

    /// Validated canvas size
    pub fn canvas_size(&self) -> Result<Size, CanvasError> {
        let CanvasConfig { width, height } = self.canvas;
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(width) && usable(height) {
            Ok(Size::new(width, height))
        } else {
            Err(CanvasError::UnusableSurface { width, height })
        }
    }
}

fn source_message(e: &ConfigError) -> String {
    match e {
        ConfigError::Read { source, .. } => source.to_string(),
        ConfigError::Parse { source, .. } => source.to_string(),
    }
}
