//! Configuration loading from TOML files and environment variables.
//!
//! Config is resolved in this order of precedence (highest wins):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables (`SCHEMESET_ALPHA`, `SCHEMESET_PTS_DIR`,
//!    `SCHEMESET_XRDB_COMMAND`, `SCHEMESET_WM_COMMAND`)
//! 3. TOML file given with `--config`
//! 4. `./schemeset.toml` in the current directory
//! 5. `$XDG_CONFIG_HOME/schemeset/schemeset.toml`
//!    (or `~/.config/schemeset/schemeset.toml`)
//! 6. Built-in defaults

use std::path::PathBuf;

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use defaults::DEFAULT_CONFIG_TEMPLATE;
pub use loader::load_config;
pub use types::{
    ColourSource, Config, ConfigSource, LoadedConfig, TerminalConfig, WmConfig, XrdbConfig,
};

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
