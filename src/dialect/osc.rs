//! Operating System Command escapes (`ESC ] code ; payload BEL`).

use super::Dialect;

/// xterm/urxvt OSC colour sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct Osc;

const ESC: char = '\u{1b}';
const BEL: char = '\u{7}';

fn osc(code: &str, payload: &str) -> String {
    format!("{ESC}]{code};{payload}{BEL}")
}

impl Dialect for Osc {
    fn foreground(&self, colour: &str) -> String {
        osc("10", colour)
    }

    fn background(&self, alpha: &str, colour: &str) -> String {
        osc("11", &format!("[{alpha}]{colour}"))
    }

    fn cursor_colour(&self, colour: &str) -> String {
        osc("12", colour)
    }

    // 708 is urxvt's internal border colour.
    fn border_colour(&self, colour: &str) -> String {
        osc("708", colour)
    }

    fn palette_slot(&self, index: usize, colour: &str) -> String {
        osc(&format!("4;{index}"), colour)
    }
}
