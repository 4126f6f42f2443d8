//! Default configuration constants.

use crate::palette::Slot;

/// Bundled `schemeset.toml`, printed by `--default-config`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/schemeset.toml");
/// File name looked up in the working directory and the config root.
pub(super) const CONFIG_FILE_NAME: &str = "schemeset.toml";
/// Directory under the config root holding [`CONFIG_FILE_NAME`].
pub(super) const CONFIG_DIR_NAME: &str = "schemeset";
/// Pseudo-terminal device directory.
pub(super) const DEFAULT_PTS_DIR: &str = "/dev/pts";
pub(super) const DEFAULT_XRDB_COMMAND: &str = "xrdb";
pub(super) const DEFAULT_XRDB_ARGS: &[&str] = &["-merge"];
/// bspwm's control client.
pub(super) const DEFAULT_WM_COMMAND: &str = "bspc";
pub(super) const DEFAULT_FOCUSED_BORDER: Slot = Slot::Base0B;
pub(super) const DEFAULT_PRESEL_FEEDBACK: Slot = Slot::Base0A;
pub(super) const DEFAULT_NORMAL_BORDER: &str = "#333333";
