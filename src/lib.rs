//! schemeset: apply a base16 colour scheme to every terminal at once.
//!
//! A scheme file (YAML, keys `base00`..`base0F`) is validated in full, then
//! written as OSC escape sequences to the current terminal and every
//! `/dev/pts` device, merged into the X resource database for new terminals,
//! and pushed to bspwm's border colours.
//!
//! # Quick start
//!
//! ```no_run
//! use schemeset::dialect::{osc_sequence, DEFAULT_ALPHA};
//! use schemeset::palette::ResolvedPalette;
//! use schemeset::scheme::ColourScheme;
//!
//! let scheme = ColourScheme::load("gruvbox-dark-hard.yaml").unwrap();
//! let palette = ResolvedPalette::resolve(&scheme).unwrap();
//! print!("{}", osc_sequence(&palette, DEFAULT_ALPHA));
//! ```

pub mod app;
pub mod build_info;
pub mod config;
pub mod dialect;
pub mod error;
pub mod palette;
pub mod preview;
pub mod process;
pub mod scheme;
pub mod sink;
#[cfg(test)]
pub mod testsupport;
