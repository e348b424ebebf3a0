//! Step list pane
//!
//! Numbered list of every step in the catalog. The active step is badged in
//! the primary color and expands to show its description; inactive steps show
//! only their title.

use crate::catalog::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Split a description into `(text, is_code)` runs on backtick pairs.
/// An unmatched backtick is kept as plain text.
pub(crate) fn split_inline_code(text: &str) -> Vec<(&str, bool)> {
    let mut runs = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('`') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('`') else {
            break;
        };
        if open > 0 {
            runs.push((&rest[..open], false));
        }
        runs.push((&after[..close], true));
        rest = &after[close + 1..];
    }

    if !rest.is_empty() {
        runs.push((rest, false));
    }
    runs
}

fn description_line(description: &str) -> Line<'_> {
    let mut spans = vec![Span::raw("     ")];
    for (text, is_code) in split_inline_code(description) {
        let style = if is_code {
            Style::default()
                .fg(DEFAULT_THEME.inline_code)
                .bg(DEFAULT_THEME.current_line_bg)
        } else {
            Style::default().fg(DEFAULT_THEME.muted)
        };
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

/// Render the step list
pub fn render_steps_pane(frame: &mut Frame, area: Rect, steps: &[Step], selected: usize) {
    let block = Block::default()
        .title(" Steps ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines: Vec<Line> = Vec::new();

    for (idx, step) in steps.iter().enumerate() {
        let is_active = idx == selected;

        let (badge_style, title_style) = if is_active {
            (
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.muted),
                Style::default().fg(DEFAULT_THEME.muted),
            )
        };

        let marker = if is_active { "▸" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(format!(" {} ", idx + 1), badge_style),
            Span::raw(" "),
            Span::styled(step.title.as_str(), title_style),
        ]));

        if is_active {
            lines.push(description_line(&step.description));
        }

        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_text() {
        assert_eq!(split_inline_code("no code here"), vec![("no code here", false)]);
    }

    #[test]
    fn test_split_inline_code() {
        assert_eq!(
            split_inline_code("Same `docker run`, same CLI."),
            vec![("Same ", false), ("docker run", true), (", same CLI.", false)]
        );
    }

    #[test]
    fn test_split_leading_code_and_unmatched_tick() {
        assert_eq!(
            split_inline_code("`ls` then `oops"),
            vec![("ls", true), (" then `oops", false)]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(split_inline_code("").is_empty());
    }
}
