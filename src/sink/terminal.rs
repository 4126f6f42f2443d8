//! Live terminals: our own stdout and every pseudo-terminal device.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::{Sink, SinkReport};

/// The pts multiplexer; opening it allocates a new terminal pair.
const PTMX: &str = "ptmx";

/// Write the escape sequence to the invoking terminal.
pub fn write_stdout(out: &mut dyn Write, escapes: &str) -> SinkReport {
    let mut report = SinkReport::new(Sink::Stdout);
    report.attempted = 1;
    if let Err(e) = out.write_all(escapes.as_bytes()).and_then(|()| out.flush()) {
        report.problem(format!("writing to stdout: {e}"));
    }
    report
}

/// Write the escape sequence to every device in `dir`, in listing order.
///
/// A device that cannot be opened or written is reported and skipped.
pub fn write_pts_devices(dir: &Path, escapes: &str) -> SinkReport {
    let mut report = SinkReport::new(Sink::Pts);
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            report.problem(format!("{}: {e}", dir.display()));
            return report;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.problem(format!("{}: {e}", dir.display()));
                continue;
            }
        };
        if entry.file_name() == PTMX {
            continue;
        }
        let path = entry.path();
        report.attempted += 1;
        match write_device(&path, escapes) {
            Ok(()) => debug!(device = %path.display(), "recoloured"),
            Err(e) => report.problem(format!("{}: {e}", path.display())),
        }
    }
    report
}

// No create/truncate: these are existing character devices.
fn write_device(path: &Path, escapes: &str) -> std::io::Result<()> {
    let mut device = OpenOptions::new().write(true).open(path)?;
    device.write_all(escapes.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;
    use std::fs;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn stdout_receives_escapes() {
        let mut out = Vec::new();
        let report = write_stdout(&mut out, "\u{1b}]10;#ffffff\u{7}");
        assert!(report.is_clean());
        assert_eq!(out, b"\x1b]10;#ffffff\x07");
    }

    #[test]
    fn stdout_failure_is_reported() {
        let report = write_stdout(&mut BrokenPipe, "x");
        assert_eq!(report.problems.len(), 1);
        assert!(report.problems[0].contains("closed"));
    }

    #[test]
    fn every_device_gets_the_sequence() {
        let tmp = TestTempDir::new("pts-all");
        tmp.write_text("0", "");
        tmp.write_text("3", "");
        let report = write_pts_devices(tmp.path(), "ESC");
        assert!(report.is_clean(), "{:?}", report.problems);
        assert_eq!(report.attempted, 2);
        assert_eq!(fs::read_to_string(tmp.child("0")).unwrap(), "ESC");
        assert_eq!(fs::read_to_string(tmp.child("3")).unwrap(), "ESC");
    }

    #[test]
    fn ptmx_is_skipped() {
        let tmp = TestTempDir::new("pts-ptmx");
        tmp.write_text("ptmx", "");
        tmp.write_text("1", "");
        let report = write_pts_devices(tmp.path(), "ESC");
        assert_eq!(report.attempted, 1);
        assert_eq!(fs::read_to_string(tmp.child("ptmx")).unwrap(), "");
    }

    #[test]
    fn unwritable_entry_does_not_stop_the_rest() {
        let tmp = TestTempDir::new("pts-partial");
        fs::create_dir_all(tmp.child("a-directory")).unwrap();
        tmp.write_text("2", "");
        tmp.write_text("5", "");
        let report = write_pts_devices(tmp.path(), "ESC");
        assert_eq!(report.attempted, 3);
        assert_eq!(report.problems.len(), 1);
        assert!(report.problems[0].contains("a-directory"));
        assert_eq!(fs::read_to_string(tmp.child("2")).unwrap(), "ESC");
        assert_eq!(fs::read_to_string(tmp.child("5")).unwrap(), "ESC");
    }

    #[test]
    fn missing_directory_is_one_problem() {
        let tmp = TestTempDir::new("pts-missing");
        let report = write_pts_devices(&tmp.child("absent"), "ESC");
        assert_eq!(report.attempted, 0);
        assert_eq!(report.problems.len(), 1);
    }
}
