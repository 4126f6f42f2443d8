//! Output dialects for a resolved palette.
//!
//! Both dialects are driven by [`render_sequence`], which fixes the order of
//! directives: foreground, background, cursor, border, then ANSI colours 0-15.

mod osc;
mod xresources;

use crate::palette::{ResolvedPalette, Slot, ANSI_ORDER};

pub use osc::Osc;
pub use xresources::Xresources;

/// Default background opacity, as understood by urxvt's `[alpha]` prefix.
pub const DEFAULT_ALPHA: &str = "100";

/// Formatting for one terminal-colour directive syntax.
pub trait Dialect {
    fn foreground(&self, colour: &str) -> String;
    /// `alpha` is passed through as-is.
    fn background(&self, alpha: &str, colour: &str) -> String;
    fn cursor_colour(&self, colour: &str) -> String;
    fn border_colour(&self, colour: &str) -> String;
    fn palette_slot(&self, index: usize, colour: &str) -> String;
}

/// The twenty directives for `palette`, in application order.
pub fn render_sequence(
    dialect: &dyn Dialect,
    palette: &ResolvedPalette,
    alpha: &str,
) -> Vec<String> {
    let foreground = palette.get(Slot::Base05).as_str();
    let background = palette.get(Slot::Base00).as_str();

    let mut out = Vec::with_capacity(4 + ANSI_ORDER.len());
    out.push(dialect.foreground(foreground));
    out.push(dialect.background(alpha, background));
    out.push(dialect.cursor_colour(foreground));
    out.push(dialect.border_colour(background));
    for (index, slot) in ANSI_ORDER.iter().enumerate() {
        out.push(dialect.palette_slot(index, palette.get(*slot).as_str()));
    }
    out
}

/// Escape sequences for a live terminal, concatenated without separators.
pub fn osc_sequence(palette: &ResolvedPalette, alpha: &str) -> String {
    render_sequence(&Osc, palette, alpha).concat()
}

/// X resource directives, one per line, for `xrdb -merge`.
pub fn xresources_text(palette: &ResolvedPalette, alpha: &str) -> String {
    render_sequence(&Xresources, palette, alpha).join("\n")
}
