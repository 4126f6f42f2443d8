//! Fan-out of a resolved palette to every output sink.
//!
//! Sinks run one after another in a fixed order (stdout, pts devices, xrdb,
//! window manager) and never abort each other. Each returns a [`SinkReport`];
//! problems are logged here and summarised by the caller, but never turn into
//! errors.

mod terminal;
mod wm;
mod xrdb;

use std::fmt;
use std::io::Write;

use tracing::{info, warn};

use crate::config::Config;
use crate::dialect::{osc_sequence, xresources_text};
use crate::palette::ResolvedPalette;

pub use terminal::{write_pts_devices, write_stdout};
pub use wm::{border_commands, set_borders, BorderCommand};
pub use xrdb::merge_resources;

/// The four output destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    Pts,
    Xrdb,
    Wm,
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stdout => "stdout",
            Self::Pts => "pts",
            Self::Xrdb => "xrdb",
            Self::Wm => "wm",
        })
    }
}

/// Result of one sink: how many targets it tried and what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkReport {
    pub sink: Sink,
    pub skipped: bool,
    pub attempted: usize,
    pub problems: Vec<String>,
}

impl SinkReport {
    pub fn new(sink: Sink) -> Self {
        Self {
            sink,
            skipped: false,
            attempted: 0,
            problems: Vec::new(),
        }
    }

    pub fn skipped(sink: Sink) -> Self {
        Self {
            skipped: true,
            ..Self::new(sink)
        }
    }

    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }

    /// Record a problem and log it.
    pub(crate) fn problem(&mut self, message: String) {
        warn!(sink = %self.sink, "{message}");
        self.problems.push(message);
    }
}

/// Reports for every sink, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub sinks: Vec<SinkReport>,
}

impl ApplyReport {
    pub fn get(&self, sink: Sink) -> Option<&SinkReport> {
        self.sinks.iter().find(|report| report.sink == sink)
    }

    pub fn problem_count(&self) -> usize {
        self.sinks.iter().map(|report| report.problems.len()).sum()
    }
}

/// Apply `palette` to every sink enabled in `config`.
///
/// `stdout` is the stream for the invoking terminal; the binary passes the
/// process stdout, tests pass a buffer.
pub async fn apply(
    config: &Config,
    palette: &ResolvedPalette,
    alpha: &str,
    stdout: &mut dyn Write,
) -> ApplyReport {
    let escapes = osc_sequence(palette, alpha);
    let mut report = ApplyReport::default();

    report.sinks.push(if config.terminal.stdout {
        write_stdout(stdout, &escapes)
    } else {
        SinkReport::skipped(Sink::Stdout)
    });

    report.sinks.push(if config.terminal.pts {
        write_pts_devices(&config.terminal.pts_dir, &escapes)
    } else {
        SinkReport::skipped(Sink::Pts)
    });

    report.sinks.push(if config.xrdb.enabled {
        merge_resources(&config.xrdb, &xresources_text(palette, alpha)).await
    } else {
        SinkReport::skipped(Sink::Xrdb)
    });

    report.sinks.push(if config.wm.enabled {
        set_borders(&config.wm, palette).await
    } else {
        SinkReport::skipped(Sink::Wm)
    });

    for sink in &report.sinks {
        if sink.skipped {
            info!(sink = %sink.sink, "skipped");
        } else {
            info!(
                sink = %sink.sink,
                attempted = sink.attempted,
                problems = sink.problems.len(),
                "applied"
            );
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{gruvbox_palette, TestTempDir};

    fn offline_config(pts_dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.terminal.pts_dir = pts_dir.to_path_buf();
        config.xrdb.command = "cat".into();
        config.xrdb.args = Vec::new();
        config.wm.command = "true".into();
        config
    }

    #[tokio::test]
    async fn apply_runs_all_sinks_in_order() {
        let tmp = TestTempDir::new("apply-all");
        tmp.write_text("0", "");
        let mut out = Vec::new();
        let report = apply(
            &offline_config(tmp.path()),
            &gruvbox_palette(),
            "100",
            &mut out,
        )
        .await;

        let order: Vec<Sink> = report.sinks.iter().map(|r| r.sink).collect();
        assert_eq!(order, vec![Sink::Stdout, Sink::Pts, Sink::Xrdb, Sink::Wm]);
        assert_eq!(out, osc_sequence(&gruvbox_palette(), "100").into_bytes());
        assert_eq!(
            std::fs::read_to_string(tmp.child("0")).unwrap(),
            osc_sequence(&gruvbox_palette(), "100")
        );
        // `cat` echoes the resources back, which counts as reported output.
        assert_eq!(report.get(Sink::Xrdb).unwrap().problems.len(), 1);
        assert!(report.get(Sink::Wm).unwrap().is_clean());
        assert_eq!(report.get(Sink::Wm).unwrap().attempted, 3);
    }

    #[tokio::test]
    async fn failing_sinks_do_not_stop_later_ones() {
        let tmp = TestTempDir::new("apply-failing");
        let mut config = offline_config(&tmp.child("no-such-dir"));
        config.xrdb.command = "schemeset-missing-xrdb".into();
        let mut out = Vec::new();
        let report = apply(&config, &gruvbox_palette(), "100", &mut out).await;

        assert!(!report.get(Sink::Pts).unwrap().is_clean());
        assert!(!report.get(Sink::Xrdb).unwrap().is_clean());
        assert!(report.get(Sink::Wm).unwrap().is_clean());
        assert!(!out.is_empty());
        assert_eq!(report.problem_count(), 2);
    }

    #[tokio::test]
    async fn disabled_sinks_are_skipped() {
        let tmp = TestTempDir::new("apply-skip");
        let mut config = offline_config(tmp.path());
        config.terminal.stdout = false;
        config.terminal.pts = false;
        config.xrdb.enabled = false;
        config.wm.enabled = false;
        let mut out = Vec::new();
        let report = apply(&config, &gruvbox_palette(), "100", &mut out).await;
        assert!(report.sinks.iter().all(|r| r.skipped));
        assert!(out.is_empty());
    }
}
