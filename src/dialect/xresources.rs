//! X resource directives for new terminals.

use super::Dialect;

#[derive(Debug, Clone, Copy, Default)]
pub struct Xresources;

impl Dialect for Xresources {
    fn foreground(&self, colour: &str) -> String {
        format!("*foreground: {colour}")
    }

    fn background(&self, alpha: &str, colour: &str) -> String {
        format!("*background: [{alpha}]{colour}")
    }

    fn cursor_colour(&self, colour: &str) -> String {
        format!("*cursorColor: {colour}")
    }

    fn border_colour(&self, colour: &str) -> String {
        format!("*borderColor: {colour}")
    }

    fn palette_slot(&self, index: usize, colour: &str) -> String {
        format!("*color{index}: {colour}")
    }
}
