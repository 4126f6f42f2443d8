//! Environment overrides, applied after the config file is parsed.
//!
//! Blank values are ignored so an exported-but-empty variable does not wipe a
//! configured command.

use std::path::PathBuf;

use super::Config;

pub(super) const ENV_ALPHA: &str = "SCHEMESET_ALPHA";
pub(super) const ENV_PTS_DIR: &str = "SCHEMESET_PTS_DIR";
pub(super) const ENV_XRDB_COMMAND: &str = "SCHEMESET_XRDB_COMMAND";
pub(super) const ENV_WM_COMMAND: &str = "SCHEMESET_WM_COMMAND";

pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(alpha) = non_blank(env_lookup, ENV_ALPHA) {
        config.terminal.alpha = alpha;
    }
    if let Some(dir) = non_blank(env_lookup, ENV_PTS_DIR) {
        config.terminal.pts_dir = PathBuf::from(dir);
    }
    if let Some(command) = non_blank(env_lookup, ENV_XRDB_COMMAND) {
        config.xrdb.command = command;
    }
    if let Some(command) = non_blank(env_lookup, ENV_WM_COMMAND) {
        config.wm.command = command;
    }
}

fn non_blank<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
