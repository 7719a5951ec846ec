//! # Configuration Loader
//!
//! Reads `KEY=value` pairs from a dotenv file and hands them to
//! [`AppConfig::from_lookup`]. Keys absent from the file are looked up in the
//! process environment. Validation lives in `cs-core`, not here.

use anyhow::Context;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cs_core::AppConfig;

pub const APP_DIR_NAME: &str = "clipstash";
const ENV_FILE_NAME: &str = ".env";

/// `<config dir>/clipstash/.env`, if the platform has a config directory.
pub fn default_env_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(ENV_FILE_NAME))
}

/// Load configuration from `env_file`, falling back to the process environment.
pub fn load_config(env_file: Option<&Path>) -> anyhow::Result<AppConfig> {
    load_config_with(env_file, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an injectable environment lookup.
///
/// A missing file is not an error; an unreadable or malformed one is.
pub fn load_config_with<F>(env_file: Option<&Path>, env_lookup: F) -> anyhow::Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let file_values = match env_file {
        Some(path) if path.exists() => read_env_file(path)?,
        Some(path) => {
            tracing::debug!(path = %path.display(), "Env file not found, using process environment");
            HashMap::new()
        }
        None => HashMap::new(),
    };

    let config = AppConfig::from_lookup(|key| {
        file_values.get(key).cloned().or_else(|| env_lookup(key))
    })?;

    tracing::debug!(config = ?config, "Configuration loaded");
    Ok(config)
}

fn read_env_file(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    let iter = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to open env file: {}", path.display()))?;

    let mut values = HashMap::new();
    for item in iter {
        let (key, value) =
            item.with_context(|| format!("Failed to parse env file: {}", path.display()))?;
        values.insert(key, value);
    }
    Ok(values)
}
