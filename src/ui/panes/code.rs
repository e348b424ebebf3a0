//! Code panel rendering
//!
//! Draws the active step's transcript inside a window-style frame (three
//! traffic-light dots and the code title). Each line is already classified by
//! the viewer; this module only maps tags to colors and decides how many
//! lines are revealed and which slice is scrolled into view.

use crate::classify::Segment;
use crate::ui::theme::DEFAULT_THEME;
use crate::viewer::{RevealedLine, StepView};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

fn title_line(code_title: &str) -> Line<'_> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled("●", Style::default().fg(DEFAULT_THEME.error)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(DEFAULT_THEME.success)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(DEFAULT_THEME.warning)),
        Span::raw("  "),
        Span::styled(code_title, Style::default().fg(DEFAULT_THEME.muted)),
        Span::raw(" "),
    ])
}

fn styled_segments(segments: &[Segment]) -> impl Iterator<Item = Span<'_>> {
    segments
        .iter()
        .map(|segment| Span::styled(segment.text.as_str(), DEFAULT_THEME.style_for(segment.tag)))
}

fn code_line(line: &RevealedLine) -> Line<'_> {
    let gutter = Span::styled(
        format!("{:3} ", line.reveal_index + 1),
        Style::default().fg(DEFAULT_THEME.border_normal),
    );
    let mut spans = vec![gutter];
    spans.extend(styled_segments(&line.segments));
    Line::from(spans)
}

/// Render the code panel.
///
/// Only the first `visible` lines are drawn. `scroll_offset` is clamped to the
/// revealed content.
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    view: &StepView<'_>,
    visible: usize,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(title_line(view.code_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .style(Style::default().bg(DEFAULT_THEME.bg))
        .padding(Padding::new(1, 1, 1, 0));

    let revealed = visible.min(view.lines.len());
    let visible_height = area.height.saturating_sub(3).max(1) as usize; // Borders and top padding

    // Clamp scroll offset only if content exceeds visible area
    if revealed > visible_height {
        let max_scroll = revealed - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let lines: Vec<Line> = view
        .lines
        .iter()
        .take(revealed)
        .skip(*scroll_offset)
        .take(visible_height)
        .map(code_line)
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, StyleTag};

    #[test]
    fn test_code_line_keeps_text_and_numbers_from_one() {
        let line = RevealedLine {
            reveal_index: 4,
            segments: classify("$ ls"),
        };
        let rendered = code_line(&line);
        let text: String = rendered.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "  5 $ ls");
        assert_eq!(
            rendered.spans[1].style,
            DEFAULT_THEME.style_for(StyleTag::PromptMarker)
        );
    }
}
