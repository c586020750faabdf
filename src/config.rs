//! Output and diagnostics configuration
//!
//! An optional `flagfetch/config.toml` under the user config directory can
//! override the separator, the flag line prefix and the debug toggle. The
//! file is never created or written by the tool; a missing or malformed
//! file falls back to the defaults.

use dirs::config_dir;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::{FlagfetchError, Result};

pub const DEFAULT_SEPARATOR: &str = " > ";
pub const DEFAULT_FLAG_PREFIX: &str = " + ";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Separator placed between flags on a line.
    pub separator: String,
    /// Marker every flag line begins with.
    pub flag_prefix: String,
    /// Route detector traces to stderr.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            separator: DEFAULT_SEPARATOR.to_string(),
            flag_prefix: DEFAULT_FLAG_PREFIX.to_string(),
            debug: false,
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("flagfetch/config.toml"))
}

/// Load the user config, defaulting when no usable file is present.
pub fn load_config() -> Config {
    match read_user_config() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(err) => {
            eprintln!("flagfetch: ignoring config: {}", err);
            Config::default()
        }
    }
}

fn read_user_config() -> Result<Option<Config>> {
    let path = match user_config_path() {
        Some(path) if path.exists() => path,
        _ => return Ok(None),
    };

    let data = fs::read_to_string(&path)?;
    let config =
        toml::de::from_str(&data).map_err(|err| FlagfetchError::Config(err.to_string()))?;
    Ok(Some(config))
}
