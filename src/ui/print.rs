//! Non-interactive output: writes a step's classified transcript to a stream
//!
//! Used by `--print`. Colors come from the same theme as the TUI, emitted as
//! ANSI escapes through crossterm; with `color` off the output is the step
//! text exactly as written.

use crate::classify::Segment;
use crate::ui::theme::DEFAULT_THEME;
use crate::viewer::StepView;
use crossterm::style::{self, Stylize};
use ratatui::style::Color;
use std::io::{self, Write};

fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Rgb(r, g, b) => style::Color::Rgb { r, g, b },
        _ => style::Color::Reset,
    }
}

fn write_segments<W: Write>(out: &mut W, segments: &[Segment], color: bool) -> io::Result<()> {
    for segment in segments {
        if color {
            let fg = to_crossterm(DEFAULT_THEME.color_for(segment.tag));
            write!(out, "{}", style::style(segment.text.as_str()).with(fg))?;
        } else {
            out.write_all(segment.text.as_bytes())?;
        }
    }
    Ok(())
}

/// Write one step: heading, description, code title, then every code line
/// in reveal order.
pub fn write_step<W: Write>(
    out: &mut W,
    view: &StepView<'_>,
    total_steps: usize,
    color: bool,
) -> io::Result<()> {
    let heading = format!("Step {}/{}: {}", view.index + 1, total_steps, view.active_title);
    let rule = format!("── {} ──", view.code_title);

    if color {
        writeln!(out, "{}", style::style(&heading).bold())?;
        writeln!(
            out,
            "{}",
            style::style(view.active_description).with(to_crossterm(DEFAULT_THEME.muted))
        )?;
        writeln!(out, "{}", style::style(&rule).with(to_crossterm(DEFAULT_THEME.comment)))?;
    } else {
        writeln!(out, "{}", heading)?;
        writeln!(out, "{}", view.active_description)?;
        writeln!(out, "{}", rule)?;
    }

    for line in &view.lines {
        write_segments(out, &line.segments, color)?;
        writeln!(out)?;
    }
    Ok(())
}
