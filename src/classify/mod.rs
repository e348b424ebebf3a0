//! Line classification for demo transcripts
//!
//! A transcript line (shell session, config file, command output) is split
//! into an ordered list of [`Segment`]s, each carrying a [`StyleTag`]. The
//! segments always concatenate back to the exact input line, so a display
//! surface can color them without ever re-deriving the text.
//!
//! # Rules
//!
//! Classification is first-match-wins over [`RULES`]. The rules overlap on
//! purpose (a `# key: value` line is a comment, not a key/value pair), so the
//! table order is part of the contract:
//!
//! 1. `comment`: first non-blank character is `#`
//! 2. `prompt`: line starts with `$`
//! 3. `status`: `Writers:`, `Readers:`, `Storage:`, `Lag:` or `Scaling:`
//! 4. `key-value`: `key: value` or `key = value`
//! 5. `success`: line contains `✓`
//! 6. `section-header`: `[name]` at the start of the line
//! 7. `structured-data`: first non-blank character is `{` or `[`
//!
//! Status labels would also pass as keys, and every section header also
//! starts with `[`, so each of those narrower rules sits directly ahead of the
//! broader one that would swallow it.
//!
//! A line no rule accepts becomes a single [`StyleTag::Plain`] segment.
//!
//! There is no state carried between lines: [`classify`] is a pure function of
//! its input and can be called from anywhere in any order.

mod rules;

pub use rules::{Rule, RULES};

/// Classification attached to a run of transcript text.
///
/// The tag says what the text *is*; mapping it to a color or weight is up to
/// the display surface (see [`crate::ui::theme`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Comment,
    PromptMarker,
    PromptBody,
    KeyName,
    KeySeparator,
    KeyValue,
    SuccessMarker,
    StructuredData,
    StatusLabel,
    StatusValue,
    SectionHeader,
    Plain,
}

impl StyleTag {
    /// Every tag, in declaration order
    pub const ALL: [StyleTag; 12] = [
        StyleTag::Comment,
        StyleTag::PromptMarker,
        StyleTag::PromptBody,
        StyleTag::KeyName,
        StyleTag::KeySeparator,
        StyleTag::KeyValue,
        StyleTag::SuccessMarker,
        StyleTag::StructuredData,
        StyleTag::StatusLabel,
        StyleTag::StatusValue,
        StyleTag::SectionHeader,
        StyleTag::Plain,
    ];

    /// Stable kebab-case name, used in logs
    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Comment => "comment",
            StyleTag::PromptMarker => "prompt-marker",
            StyleTag::PromptBody => "prompt-body",
            StyleTag::KeyName => "key-name",
            StyleTag::KeySeparator => "key-separator",
            StyleTag::KeyValue => "key-value",
            StyleTag::SuccessMarker => "success-marker",
            StyleTag::StructuredData => "structured-data",
            StyleTag::StatusLabel => "status-label",
            StyleTag::StatusValue => "status-value",
            StyleTag::SectionHeader => "section-header",
            StyleTag::Plain => "plain",
        }
    }
}

/// A contiguous run of one line's text with a single classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tag: StyleTag,
}

impl Segment {
    pub fn new(text: impl Into<String>, tag: StyleTag) -> Self {
        Segment {
            text: text.into(),
            tag,
        }
    }
}

/// Classify a single line.
///
/// Never fails and never returns an empty list: a line that no rule accepts
/// (including `""`) comes back as one `Plain` segment holding the line as is.
pub fn classify(line: &str) -> Vec<Segment> {
    for rule in RULES {
        if let Some(segments) = (rule.apply)(line) {
            tracing::trace!(rule = rule.name, segments = segments.len(), "line classified");
            return segments;
        }
    }
    vec![Segment::new(line, StyleTag::Plain)]
}

/// Split a code block on `\n` and classify every line independently.
///
/// Empty lines are kept, so the result has exactly `code.split('\n').count()`
/// entries.
pub fn classify_block(code: &str) -> Vec<Vec<Segment>> {
    code.split('\n').map(classify).collect()
}

/// Concatenate segment texts back into the line they came from
pub fn join(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(line: &str) -> Vec<StyleTag> {
        classify(line).into_iter().map(|s| s.tag).collect()
    }

    #[test]
    fn test_empty_line_is_one_plain_segment() {
        assert_eq!(classify(""), vec![Segment::new("", StyleTag::Plain)]);
    }

    #[test]
    fn test_comment_wins_over_key_value() {
        assert_eq!(tags("# key: value"), vec![StyleTag::Comment]);
        assert_eq!(tags("    # TODO: Add resource limits"), vec![StyleTag::Comment]);
    }

    #[test]
    fn test_prompt_split() {
        let segments = classify("$ opendata status log");
        assert_eq!(
            segments,
            vec![
                Segment::new("$", StyleTag::PromptMarker),
                Segment::new(" opendata status log", StyleTag::PromptBody),
            ]
        );
    }

    #[test]
    fn test_bare_prompt_keeps_empty_body() {
        assert_eq!(
            classify("$"),
            vec![
                Segment::new("$", StyleTag::PromptMarker),
                Segment::new("", StyleTag::PromptBody),
            ]
        );
    }

    #[test]
    fn test_indented_yaml_key() {
        let segments = classify("    image: opendata/log:latest");
        assert_eq!(
            segments,
            vec![
                Segment::new("    ", StyleTag::Plain),
                Segment::new("image", StyleTag::KeyName),
                Segment::new(": ", StyleTag::KeySeparator),
                Segment::new("opendata/log:latest", StyleTag::KeyValue),
            ]
        );
    }

    #[test]
    fn test_success_marker() {
        assert_eq!(tags("  ✓ Reader replica 2 started"), vec![StyleTag::SuccessMarker]);
    }

    #[test]
    fn test_json_output() {
        assert_eq!(
            tags(r#"{"offset": 0, "topic": "events"}"#),
            vec![StyleTag::StructuredData]
        );
        assert_eq!(tags("  [1, 2, 3]"), vec![StyleTag::StructuredData]);
    }

    #[test]
    fn test_status_label_beats_key_value() {
        assert_eq!(
            classify("  Readers:  3 (healthy)"),
            vec![
                Segment::new("  Readers:", StyleTag::StatusLabel),
                Segment::new("  3 (healthy)", StyleTag::StatusValue),
            ]
        );
        // Not a status label, so it is an ordinary key.
        assert_eq!(tags("Replicas: 3")[1], StyleTag::KeyName);
    }

    #[test]
    fn test_key_value_beats_success_marker() {
        assert_eq!(tags("ready: ✓")[3], StyleTag::KeyValue);
    }

    #[test]
    fn test_join_restores_line() {
        for line in ["", "$ ls", "a = b", "  Lag:      < 100ms", "[storage]", "héllo ✓"] {
            assert_eq!(join(&classify(line)), line);
        }
    }

    #[test]
    fn test_classify_block_keeps_blank_lines() {
        let lines = classify_block("# one\n\n$ two\n");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], vec![Segment::new("", StyleTag::Plain)]);
        assert_eq!(lines[3], vec![Segment::new("", StyleTag::Plain)]);
    }

    #[test]
    fn test_tag_names_are_unique() {
        let mut names: Vec<&str> = StyleTag::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StyleTag::ALL.len());
    }
}
