//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_env_overrides;
use super::sources::read_config_text_with_sources;
use super::{config_root_dir, Config, LoadedConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&Path>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&text)?;
    apply_env_overrides(&mut config, &env_lookup);
    validate(&config)?;
    Ok(LoadedConfig { config, source })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.xrdb.enabled && config.xrdb.command.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "xrdb.command must not be empty while xrdb is enabled".to_string(),
        ));
    }
    if config.wm.enabled && config.wm.command.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "wm.command must not be empty while wm is enabled".to_string(),
        ));
    }
    if config.terminal.pts && config.terminal.pts_dir.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "terminal.pts_dir must not be empty while pts is enabled".to_string(),
        ));
    }
    Ok(())
}
