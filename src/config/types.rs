//! Configuration data model.
//!
//! Struct/enum definitions plus their defaults. Source discovery and
//! environment overrides live in sibling modules.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use crate::dialect::DEFAULT_ALPHA;
use crate::palette::{Colour, ResolvedPalette, Slot};

use super::defaults::{
    DEFAULT_FOCUSED_BORDER, DEFAULT_NORMAL_BORDER, DEFAULT_PRESEL_FEEDBACK, DEFAULT_PTS_DIR,
    DEFAULT_WM_COMMAND, DEFAULT_XRDB_ARGS, DEFAULT_XRDB_COMMAND,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub terminal: TerminalConfig,
    pub xrdb: XrdbConfig,
    pub wm: WmConfig,
}

/// Live terminal sinks: our own stdout and every other pts device.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// Background opacity prefix; the `ALPHA` argument wins over this.
    pub alpha: String,
    pub stdout: bool,
    pub pts: bool,
    pub pts_dir: PathBuf,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA.to_string(),
            stdout: true,
            pts: true,
            pts_dir: PathBuf::from(DEFAULT_PTS_DIR),
        }
    }
}

/// Resource-database merge for terminals started later.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct XrdbConfig {
    pub enabled: bool,
    pub command: String,
    pub args: Vec<String>,
}

impl Default for XrdbConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: DEFAULT_XRDB_COMMAND.to_string(),
            args: DEFAULT_XRDB_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Window-manager border colours, set with `<command> config <name> <colour>`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WmConfig {
    pub enabled: bool,
    pub command: String,
    pub focused_border: ColourSource,
    pub presel_feedback: ColourSource,
    /// Defaults to a fixed grey rather than `base01`.
    pub normal_border: ColourSource,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: DEFAULT_WM_COMMAND.to_string(),
            focused_border: ColourSource::Slot(DEFAULT_FOCUSED_BORDER),
            presel_feedback: ColourSource::Slot(DEFAULT_PRESEL_FEEDBACK),
            normal_border: DEFAULT_NORMAL_BORDER
                .parse()
                .map(ColourSource::Literal)
                .unwrap_or(ColourSource::Slot(Slot::Base01)),
        }
    }
}

/// Where a configured colour comes from: a scheme slot or a fixed literal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ColourSource {
    Slot(Slot),
    Literal(Colour),
}

impl ColourSource {
    pub fn pick(&self, palette: &ResolvedPalette) -> Colour {
        match self {
            Self::Slot(slot) => palette.get(*slot).clone(),
            Self::Literal(colour) => colour.clone(),
        }
    }
}

impl TryFrom<String> for ColourSource {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.starts_with('#') {
            return value.parse().map(Self::Literal);
        }
        value
            .parse()
            .map(Self::Slot)
            .map_err(|_| format!("`{value}` is neither a base16 slot nor a #rrggbb colour"))
    }
}

impl fmt::Display for ColourSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slot(slot) => write!(f, "{slot}"),
            Self::Literal(colour) => write!(f, "{colour}"),
        }
    }
}

/// Where the active configuration was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path.
    Explicit(PathBuf),
    /// `./schemeset.toml`.
    Local,
    /// `$XDG_CONFIG_HOME/schemeset/schemeset.toml`.
    Global(PathBuf),
    /// No file found; built-in defaults.
    BuiltInDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::Global(path) => write!(f, "{}", path.display()),
            Self::Local => f.write_str("./schemeset.toml"),
            Self::BuiltInDefaults => f.write_str("built-in defaults"),
        }
    }
}

/// Configuration together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
