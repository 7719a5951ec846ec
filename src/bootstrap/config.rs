use std::path::{Path, PathBuf};

use cs_core::AppConfig;
use cs_infra::config::{default_env_file, load_config};

/// `--env-file` if given, else the per-user default location.
pub fn resolve_env_file(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_env_file)
}

pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let env_file = resolve_env_file(explicit);
    tracing::debug!(env_file = ?env_file, "Loading configuration");
    load_config(env_file.as_deref())
}
