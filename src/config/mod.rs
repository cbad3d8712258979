//! Configuration module for Dockcraft
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (DOCKCRAFT_*)
//! 3. Project config (`dockcraft.toml` in the working directory)
//! 4. User config (`<config dir>/dockcraft/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_for_workspace, load_with_warnings, user_config_path, ConfigWarning,
    LoadedConfig, CONFIG_HOME_VAR, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, DocumentConfig, OutputConfig, RuntimeConfig};
