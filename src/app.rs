//! The load → validate → format → fan-out pipeline behind the binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{load_config, Config, LoadedConfig};
use crate::error::RunError;
use crate::palette::ResolvedPalette;
use crate::preview::render_dry_run;
use crate::scheme::ColourScheme;
use crate::sink::{apply, ApplyReport};

/// One invocation, after CLI flags have been folded into the config.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub scheme: PathBuf,
    /// `ALPHA` argument; falls back to `terminal.alpha` from config.
    pub alpha: Option<String>,
    pub dry_run: bool,
    /// Draw colour swatches in dry-run output.
    pub styled: bool,
}

impl Invocation {
    pub fn alpha<'a>(&'a self, config: &'a Config) -> &'a str {
        self.alpha.as_deref().unwrap_or(&config.terminal.alpha)
    }
}

/// What a successful run did.
#[derive(Debug)]
pub enum RunOutcome {
    Applied(ApplyReport),
    /// Dry-run text that was written to `stdout`.
    Previewed(String),
}

/// Resolve and load configuration; `path` is the `--config` argument.
pub fn load_settings(path: Option<&Path>) -> Result<LoadedConfig, RunError> {
    let loaded = load_config(path)?;
    debug!(source = %loaded.source, "config loaded");
    Ok(loaded)
}

/// Load and validate the scheme named by `invocation`.
///
/// Nothing has been written anywhere when this returns an error.
pub fn load_palette(invocation: &Invocation) -> Result<ResolvedPalette, RunError> {
    let scheme = ColourScheme::load(&invocation.scheme)?;
    debug!(path = %invocation.scheme.display(), keys = scheme.len(), "scheme loaded");
    Ok(ResolvedPalette::resolve(&scheme)?)
}

/// Run the whole pipeline. Only scheme errors fail; sink problems are in
/// the returned report.
pub async fn run(
    invocation: &Invocation,
    config: &Config,
    stdout: &mut dyn Write,
) -> Result<RunOutcome, RunError> {
    let palette = load_palette(invocation)?;
    let alpha = invocation.alpha(config);

    if invocation.dry_run {
        let text = render_dry_run(config, &palette, alpha, invocation.styled);
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
            warn!("writing preview: {e}");
        }
        return Ok(RunOutcome::Previewed(text));
    }

    Ok(RunOutcome::Applied(apply(config, &palette, alpha, stdout).await))
}
