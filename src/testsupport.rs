//! Shared test fixtures: temp directories and a complete reference scheme.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::palette::ResolvedPalette;
use crate::scheme::ColourScheme;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Gruvbox dark (hard), with `base05` lifted to the light foreground.
pub const GRUVBOX: [(&str, &str); 16] = [
    ("base00", "1d2021"),
    ("base01", "3c3836"),
    ("base02", "504945"),
    ("base03", "665c54"),
    ("base04", "bdae93"),
    ("base05", "ebdbb2"),
    ("base06", "d5c4a1"),
    ("base07", "fbf1c7"),
    ("base08", "fb4934"),
    ("base09", "fe8019"),
    ("base0A", "fabd2f"),
    ("base0B", "b8bb26"),
    ("base0C", "8ec07c"),
    ("base0D", "83a598"),
    ("base0E", "d3869b"),
    ("base0F", "d65d0e"),
];

/// Temporary directory removed on drop.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "schemeset-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// [`GRUVBOX`] as a scheme file, with the usual metadata keys.
pub fn gruvbox_scheme_yaml() -> String {
    let mut yaml = String::from("scheme: \"Gruvbox dark, hard\"\nauthor: \"Dawid Kurek\"\n");
    for (key, value) in GRUVBOX {
        yaml.push_str(&format!("{key}: \"{value}\"\n"));
    }
    yaml
}

pub fn gruvbox_scheme() -> ColourScheme {
    GRUVBOX
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn gruvbox_palette() -> ResolvedPalette {
    ResolvedPalette::resolve(&gruvbox_scheme()).expect("fixture scheme is complete")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.path().is_dir());
    }

    #[test]
    fn scheme_yaml_fixture_lists_every_slot() {
        let yaml = gruvbox_scheme_yaml();
        for (key, _) in GRUVBOX {
            assert!(yaml.contains(&format!("{key}: ")), "missing {key}");
        }
    }
}
