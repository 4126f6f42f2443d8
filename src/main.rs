//! CLI entry point for schemeset.

mod cli;

use std::io::IsTerminal;

use clap::Parser;
use schemeset::app::{load_settings, run, Invocation, RunOutcome};
use schemeset::build_info;
use schemeset::config::DEFAULT_CONFIG_TEMPLATE;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::Args::parse();

    // stdout carries escape sequences; logs go to stderr.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
    debug!("{}", build_info::summary_line());

    if args.default_config {
        print!("{DEFAULT_CONFIG_TEMPLATE}");
        return;
    }
    let Some(scheme) = args.scheme.clone() else {
        eprintln!("error: need one argument: the scheme file");
        std::process::exit(2);
    };

    let loaded = match load_settings(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let mut config = loaded.config;
    args.apply_overrides(&mut config);

    let invocation = Invocation {
        scheme,
        alpha: args.alpha.clone(),
        dry_run: args.dry_run,
        styled: std::io::stdout().is_terminal(),
    };

    let mut stdout = std::io::stdout();
    match run(&invocation, &config, &mut stdout).await {
        Ok(RunOutcome::Applied(report)) => {
            let problems = report.problem_count();
            if problems > 0 {
                warn!("{problems} sink problem(s); the scheme was applied everywhere else");
            }
        }
        Ok(RunOutcome::Previewed(_)) => {}
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
