//! Error types for scheme loading, validation and configuration.
//!
//! Every variant here is fatal and is raised before any output is written.
//! Failures of individual output sinks are not errors; they are reported as
//! values (see [`crate::sink::SinkReport`]).

use std::fmt;
use std::path::PathBuf;

use crate::palette::Slot;

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// The scheme file could not be turned into a key/value mapping.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid YAML.
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    /// The document parsed, but its top level is not a mapping.
    NotMapping { path: PathBuf },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read scheme `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid scheme YAML in `{}`: {source}", path.display())
            }
            Self::NotMapping { path } => write!(
                f,
                "scheme `{}` is not a mapping of base00..base0F colours",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::NotMapping { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// UnmappedColourError
// ---------------------------------------------------------------------------

/// A required slot is missing or does not hold six hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedColourError {
    pub slot: Slot,
    /// Raw value found in the scheme; `None` when the key is absent.
    pub value: Option<String>,
}

impl fmt::Display for UnmappedColourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_deref().unwrap_or("undefined");
        write!(f, "{} not mapped to a valid colour: {value}", self.slot)
    }
}

impl std::error::Error for UnmappedColourError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// RunError: top-level
// ---------------------------------------------------------------------------

/// Any failure that aborts a run with a non-zero exit status.
#[derive(Debug)]
pub enum RunError {
    Config(ConfigError),
    Load(LoadError),
    Unmapped(UnmappedColourError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Load(e) => write!(f, "{e}"),
            Self::Unmapped(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<UnmappedColourError> for RunError {
    fn from(e: UnmappedColourError) -> Self {
        Self::Unmapped(e)
    }
}
