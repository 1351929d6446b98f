//! Centralized path definitions for arabic-quality
//!
//! ## Layout
//!
//! ```text
//! project/
//! └── .arabic-quality.toml      # Local config, checked first
//!
//! ~/.arabic-quality/
//! └── config.toml               # Global config, used when no local file exists
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const LOCAL_CONFIG: &str = ".arabic-quality.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".arabic-quality";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the local config file inside `dir`.
#[must_use]
pub fn local_config(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG)
}

/// Get the global arabic-quality directory.
///
/// Returns `~/.arabic-quality/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.arabic-quality/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
