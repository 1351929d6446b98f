//! Configuration loading
//!
//! Check options can be stored in TOML:
//!
//! ```toml
//! [length]
//! min_words = 5
//! max_words = 200
//! ```
//!
//! Every key is optional. Lookup order is an explicit path, then
//! `./.arabic-quality.toml`, then `~/.arabic-quality/config.toml`, then
//! built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{BoundsError, CheckOptions};
use crate::paths;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`CheckOptions`]
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Bounds in the file are inconsistent
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}

/// Parse check options from TOML text
pub fn parse_options(content: &str) -> Result<CheckOptions, toml::de::Error> {
    toml::from_str(content)
}

/// Load check options from a specific file
pub fn load(path: &Path) -> Result<CheckOptions, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    options.length.validate()?;
    log::debug!("loaded config from {}", path.display());
    Ok(options)
}

/// Resolve options using the lookup order
///
/// An explicit path must exist. Discovered files are only used if present.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<CheckOptions, ConfigError> {
    if let Some(path) = explicit {
        return load(path);
    }

    for candidate in [paths::local_config(cwd), paths::global_config()] {
        if candidate.is_file() {
            return load(&candidate);
        }
    }

    log::debug!("no config file found, using defaults");
    Ok(CheckOptions::default())
}
