//! Build metadata captured by `build.rs`.

/// Package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short commit hash, or `unknown` outside a git checkout.
pub const GIT_COMMIT: &str = env!("SCHEMESET_BUILD_GIT_HASH");

/// UTC build time.
pub const BUILD_TIMESTAMP: &str = env!("SCHEMESET_BUILD_TIMESTAMP");

/// Long version block for `schemeset --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("SCHEMESET_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("SCHEMESET_BUILD_TIMESTAMP")
);

/// One-line summary logged at debug level on startup.
pub fn summary_line() -> String {
    format!("schemeset v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}
