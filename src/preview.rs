//! Dry-run output: palette swatches and the actions a real run would take.

use crossterm::style::{Color, Stylize};

use crate::config::Config;
use crate::dialect::xresources_text;
use crate::palette::{Colour, ResolvedPalette, ANSI_ORDER};
use crate::process::display_command;
use crate::sink::border_commands;

const SWATCH: &str = "      ";

fn to_crossterm(colour: &Colour) -> Color {
    let (r, g, b) = colour.rgb();
    Color::Rgb { r, g, b }
}

/// One line per ANSI index: `color1  base08  #fb4934  <swatch>`.
///
/// Swatches are truecolor backgrounds and only drawn when `styled` is set.
pub fn render_palette(palette: &ResolvedPalette, styled: bool) -> String {
    let mut out = String::new();
    for (index, slot) in ANSI_ORDER.iter().enumerate() {
        let colour = palette.get(*slot);
        let label = format!("color{index:<2} {slot}  {colour}");
        if styled {
            let swatch = SWATCH.on(to_crossterm(colour));
            out.push_str(&format!("{label}  {swatch}\n"));
        } else {
            out.push_str(&label);
            out.push('\n');
        }
    }
    out
}

/// Human-readable list of every side effect `config` enables.
pub fn describe_plan(config: &Config, palette: &ResolvedPalette, alpha: &str) -> Vec<String> {
    let mut plan = Vec::new();
    if config.terminal.stdout {
        plan.push("write 20 OSC sequences to this terminal".to_string());
    }
    if config.terminal.pts {
        plan.push(format!(
            "write 20 OSC sequences to every device in {}",
            config.terminal.pts_dir.display()
        ));
    }
    if config.xrdb.enabled {
        let resources = xresources_text(palette, alpha);
        plan.push(format!(
            "pipe {} resource lines into `{}`",
            resources.lines().count(),
            display_command(&config.xrdb.command, &config.xrdb.args)
        ));
    }
    if config.wm.enabled {
        for command in border_commands(&config.wm, palette) {
            plan.push(format!(
                "run `{}`",
                display_command(&config.wm.command, &command.args())
            ));
        }
    }
    plan
}

/// Full dry-run report: palette, resources and plan.
pub fn render_dry_run(
    config: &Config,
    palette: &ResolvedPalette,
    alpha: &str,
    styled: bool,
) -> String {
    let mut out = render_palette(palette, styled);
    out.push('\n');
    out.push_str(&xresources_text(palette, alpha));
    out.push_str("\n\n");
    let plan = describe_plan(config, palette, alpha);
    if plan.is_empty() {
        out.push_str("nothing to do: every sink is disabled\n");
    }
    for step in plan {
        out.push_str(&format!("- {step}\n"));
    }
    out
}
