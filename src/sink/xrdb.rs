//! X resource database merge, so terminals started later pick up the palette.

use tracing::debug;

use crate::config::XrdbConfig;
use crate::process::{display_command, run_best_effort};

use super::{Sink, SinkReport};

/// Pipe `resources` into `xrdb -merge` (or the configured equivalent).
pub async fn merge_resources(xrdb: &XrdbConfig, resources: &str) -> SinkReport {
    let mut report = SinkReport::new(Sink::Xrdb);
    let command_line = display_command(&xrdb.command, &xrdb.args);
    debug!(command = %command_line, lines = resources.lines().count(), "merging resources");

    report.attempted = 1;
    let outcome = run_best_effort(&xrdb.command, &xrdb.args, Some(resources.as_bytes())).await;
    if !outcome.is_clean() {
        report.problem(format!("{command_line}: {outcome}"));
    }
    report
}
