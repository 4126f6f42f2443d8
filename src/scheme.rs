//! Scheme file loading.
//!
//! A scheme is a YAML mapping from slot names (`base00`..`base0F`) to six hex
//! digits. Loading only checks that the document is a mapping; slot values are
//! validated later by [`crate::palette::resolve`], so unknown keys such as
//! `scheme:` or `author:` are carried along and ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::LoadError;

/// Raw key/value content of a scheme file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColourScheme {
    entries: BTreeMap<String, Entry>,
}

/// A mapping value. Only YAML strings can hold a colour; anything else
/// (numbers, booleans, nested values) is kept as rendered text for error
/// messages only.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Text(String),
    Other(String),
}

impl Entry {
    fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Number(n) => Self::Other(n.to_string()),
            Value::Bool(b) => Self::Other(b.to_string()),
            Value::Null => Self::Other("null".into()),
            other => Self::Other(
                serde_yaml::to_string(&other)
                    .map(|s| s.trim_end().to_string())
                    .unwrap_or_default(),
            ),
        }
    }

    fn display(&self) -> &str {
        match self {
            Self::Text(s) | Self::Other(s) => s,
        }
    }
}

impl ColourScheme {
    /// Read and parse the scheme at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text, path)
    }

    /// Parse scheme text; `origin` is only used in error messages.
    pub fn from_yaml_str(text: &str, origin: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let origin = origin.into();
        if text.trim().is_empty() {
            return Err(LoadError::NotMapping { path: origin });
        }
        let document: Value = serde_yaml::from_str(text).map_err(|source| LoadError::Parse {
            path: origin.clone(),
            source,
        })?;
        let Value::Mapping(mapping) = document else {
            return Err(LoadError::NotMapping { path: origin });
        };

        let entries = mapping
            .into_iter()
            .filter_map(|(key, value)| match key {
                Value::String(key) => Some((key, Entry::from_value(value))),
                _ => None,
            })
            .collect();
        Ok(Self { entries })
    }

    /// String value stored under `key`. Non-string values yield `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.entries.get(key)? {
            Entry::Text(s) => Some(s.as_str()),
            Entry::Other(_) => None,
        }
    }

    /// Any value stored under `key`, rendered as text.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(Entry::display)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for ColourScheme {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key, Entry::Text(value)))
                .collect(),
        }
    }
}
