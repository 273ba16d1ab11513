//! Configuration module.
//!
//! Settings resolve through a precedence chain:
//! defaults → config file → environment variables → CLI arguments.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_with_precedence, merge_config, ConfigError, ConfigFile, ResolvedConfig,
};
