//! Best-effort external command execution.
//!
//! [`run_best_effort`] never returns an error: spawn failures, non-zero exits
//! and stray output all come back as a [`ProcessOutcome`] for the caller to
//! log. Commands run one at a time and are awaited to completion.

use std::fmt;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Captured result of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// True when the command exited 0 and printed nothing.
    pub fn is_clean(&self) -> bool {
        self.exit_code == 0 && self.stdout.trim().is_empty() && self.stderr.trim().is_empty()
    }
}

/// What happened when a command was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Finished(ExecOutput),
    /// The command could not be spawned or its pipes failed.
    Failed(String),
}

impl ProcessOutcome {
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Finished(output) if output.is_clean())
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished(output) => {
                write!(f, "exit {}", output.exit_code)?;
                let stdout = output.stdout.trim();
                if !stdout.is_empty() {
                    write!(f, ", stdout: {stdout}")?;
                }
                let stderr = output.stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ", stderr: {stderr}")?;
                }
                Ok(())
            }
            Self::Failed(msg) => f.write_str(msg),
        }
    }
}

/// Human-readable command line for logs.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spawn `program`, optionally feed `stdin`, and wait for it to exit.
pub async fn run_best_effort(
    program: &str,
    args: &[String],
    stdin: Option<&[u8]>,
) -> ProcessOutcome {
    match run_process(program, args, stdin).await {
        Ok(output) => ProcessOutcome::Finished(output),
        Err(msg) => ProcessOutcome::Failed(msg),
    }
}

async fn run_process(
    program: &str,
    args: &[String],
    stdin: Option<&[u8]>,
) -> Result<ExecOutput, String> {
    let mut cmd = Command::new(program);
    cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
    if stdin.is_some() {
        cmd.stdin(Stdio::piped());
    } else {
        cmd.stdin(Stdio::null());
    }

    let mut child = cmd.spawn().map_err(|e| format!("{program}: {e}"))?;

    if let Some(input) = stdin {
        if let Some(mut child_stdin) = child.stdin.take() {
            child_stdin
                .write_all(input)
                .await
                .map_err(|e| format!("{program}: writing stdin: {e}"))?;
            // Dropping the handle closes the pipe so the child sees EOF.
            drop(child_stdin);
        }
    }

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| format!("{program}: {e}"))?;

    Ok(ExecOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}
