use crate::classify::StyleTag;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub warning: Color,   // Yellow
    pub accent: Color,    // Mauve
    pub muted: Color,     // Subtext, inactive step titles
    pub inline_code: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(249, 226, 175),
    accent: Color::Rgb(203, 166, 247),
    muted: Color::Rgb(166, 173, 200),
    inline_code: Color::Rgb(180, 190, 254),    // Lavender
    border_focused: Color::Rgb(137, 180, 250), // Blue border on the step list
    border_normal: Color::Rgb(49, 50, 68),
    current_line_bg: Color::Rgb(50, 50, 70),
};

impl Theme {
    /// Foreground color for a classified segment
    pub fn color_for(&self, tag: StyleTag) -> Color {
        match tag {
            StyleTag::Comment | StyleTag::KeySeparator => self.comment,
            StyleTag::PromptMarker | StyleTag::KeyValue | StyleTag::SuccessMarker => self.success,
            StyleTag::KeyName | StyleTag::StatusLabel => self.primary,
            StyleTag::StructuredData => self.warning,
            StyleTag::SectionHeader => self.accent,
            StyleTag::PromptBody | StyleTag::StatusValue | StyleTag::Plain => self.fg,
        }
    }

    pub fn style_for(&self, tag: StyleTag) -> Style {
        let style = Style::default().fg(self.color_for(tag));
        match tag {
            StyleTag::PromptMarker | StyleTag::SectionHeader => style.add_modifier(Modifier::BOLD),
            StyleTag::Comment => style.add_modifier(Modifier::ITALIC),
            _ => style,
        }
    }
}
