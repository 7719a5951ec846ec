//! Configuration loading from a dotenv file with process-environment fallback.

mod env_file;

pub use env_file::{default_env_file, load_config, load_config_with, APP_DIR_NAME};
