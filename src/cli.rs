//! CLI argument parsing via clap.

use clap::{ArgAction, Parser};
use schemeset::build_info;
use schemeset::config::Config;
use std::path::PathBuf;

/// Apply a base16 colour scheme to this terminal, every other open terminal,
/// the X resource database and bspwm's borders.
#[derive(Debug, Parser)]
#[command(name = "schemeset", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Scheme file: a YAML mapping of base00..base0F to six hex digits.
    #[arg(required_unless_present = "default_config", value_name = "SCHEME")]
    pub scheme: Option<PathBuf>,

    /// Background opacity written as `[ALPHA]#rrggbb` (default: 100).
    #[arg(value_name = "ALPHA")]
    pub alpha: Option<String>,

    /// Path to config file (default: ./schemeset.toml or
    /// ~/.config/schemeset/schemeset.toml).
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory of terminal devices to recolour.
    #[arg(long = "pts-dir", value_name = "DIR")]
    pub pts_dir: Option<PathBuf>,

    /// Do not write to this terminal.
    #[arg(long = "no-stdout")]
    pub no_stdout: bool,

    /// Do not recolour other open terminals.
    #[arg(long = "no-pts")]
    pub no_pts: bool,

    /// Do not merge into the X resource database.
    #[arg(long = "no-xrdb")]
    pub no_xrdb: bool,

    /// Do not set window-manager border colours.
    #[arg(long = "no-wm")]
    pub no_wm: bool,

    /// Show the palette and planned actions without changing anything.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// More log output (-v info, -vv debug). `RUST_LOG` overrides this.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print the bundled default config file and exit.
    #[arg(long = "default-config")]
    pub default_config: bool,
}

impl Args {
    /// Fold sink flags into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.pts_dir {
            config.terminal.pts_dir = dir.clone();
        }
        if self.no_stdout {
            config.terminal.stdout = false;
        }
        if self.no_pts {
            config.terminal.pts = false;
        }
        if self.no_xrdb {
            config.xrdb.enabled = false;
        }
        if self.no_wm {
            config.wm.enabled = false;
        }
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
