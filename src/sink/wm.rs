//! bspwm border colours via `bspc config <setting> <colour>`.

use tracing::debug;

use crate::config::WmConfig;
use crate::palette::{Colour, ResolvedPalette};
use crate::process::{display_command, run_best_effort};

use super::{Sink, SinkReport};

/// One `config <setting> <colour>` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderCommand {
    pub setting: &'static str,
    pub colour: Colour,
}

impl BorderCommand {
    pub fn args(&self) -> Vec<String> {
        vec![
            "config".to_string(),
            self.setting.to_string(),
            self.colour.to_string(),
        ]
    }
}

/// The three border settings, in the order they are applied.
pub fn border_commands(wm: &WmConfig, palette: &ResolvedPalette) -> [BorderCommand; 3] {
    [
        BorderCommand {
            setting: "focused_border_color",
            colour: wm.focused_border.pick(palette),
        },
        BorderCommand {
            setting: "presel_feedback_color",
            colour: wm.presel_feedback.pick(palette),
        },
        BorderCommand {
            setting: "normal_border_color",
            colour: wm.normal_border.pick(palette),
        },
    ]
}

/// Run every border command; a failing one does not stop the others.
pub async fn set_borders(wm: &WmConfig, palette: &ResolvedPalette) -> SinkReport {
    let mut report = SinkReport::new(Sink::Wm);
    for command in border_commands(wm, palette) {
        let args = command.args();
        let command_line = display_command(&wm.command, &args);
        debug!(command = %command_line, "setting border colour");

        report.attempted += 1;
        let outcome = run_best_effort(&wm.command, &args, None).await;
        if !outcome.is_clean() {
            report.problem(format!("{command_line}: {outcome}"));
        }
    }
    report
}
