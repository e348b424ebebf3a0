//! The ordered rule table behind [`classify`](super::classify)

use super::{Segment, StyleTag};
use once_cell::sync::Lazy;
use regex::Regex;

/// One classification rule.
///
/// `apply` returns `None` when the rule does not accept the line; the next
/// rule in [`RULES`] is tried in that case.
pub struct Rule {
    pub name: &'static str,
    pub(super) apply: fn(&str) -> Option<Vec<Segment>>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Rules in evaluation order. The first rule that accepts a line wins.
pub static RULES: &[Rule] = &[
    Rule {
        name: "comment",
        apply: comment,
    },
    Rule {
        name: "prompt",
        apply: prompt,
    },
    Rule {
        name: "status",
        apply: status,
    },
    Rule {
        name: "key-value",
        apply: key_value,
    },
    Rule {
        name: "success",
        apply: success,
    },
    Rule {
        name: "section-header",
        apply: section_header,
    },
    Rule {
        name: "structured-data",
        apply: structured_data,
    },
];

// Word characters are ASCII; `\s` is Unicode White_Space, the same set
// `str::trim_start` strips.
static KEY_VALUE_PROBE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[A-Za-z0-9_][A-Za-z0-9_.-]*\s*[:=]").expect("key/value probe pattern")
});

static KEY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)([A-Za-z0-9_][A-Za-z0-9_.-]*)(\s*[:=]\s*)(.*)$")
        .expect("key/value capture pattern")
});

static STATUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*(?:Writers|Readers|Storage|Lag|Scaling):)(.*)$").expect("status pattern")
});

static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[[A-Za-z0-9_.-]+\]").expect("section header pattern"));

fn whole(line: &str, tag: StyleTag) -> Option<Vec<Segment>> {
    Some(vec![Segment::new(line, tag)])
}

fn comment(line: &str) -> Option<Vec<Segment>> {
    if line.trim_start().starts_with('#') {
        whole(line, StyleTag::Comment)
    } else {
        None
    }
}

fn prompt(line: &str) -> Option<Vec<Segment>> {
    let body = line.strip_prefix('$')?;
    Some(vec![
        Segment::new("$", StyleTag::PromptMarker),
        Segment::new(body, StyleTag::PromptBody),
    ])
}

fn status(line: &str) -> Option<Vec<Segment>> {
    let caps = STATUS.captures(line)?;
    Some(vec![
        Segment::new(&caps[1], StyleTag::StatusLabel),
        Segment::new(&caps[2], StyleTag::StatusValue),
    ])
}

fn key_value(line: &str) -> Option<Vec<Segment>> {
    if !KEY_VALUE_PROBE.is_match(line) {
        return None;
    }
    let Some(caps) = KEY_VALUE.captures(line) else {
        tracing::trace!("key/value probe matched but capture failed, falling through");
        return None;
    };
    Some(vec![
        Segment::new(&caps[1], StyleTag::Plain),
        Segment::new(&caps[2], StyleTag::KeyName),
        Segment::new(&caps[3], StyleTag::KeySeparator),
        Segment::new(&caps[4], StyleTag::KeyValue),
    ])
}

fn success(line: &str) -> Option<Vec<Segment>> {
    if line.contains('✓') {
        whole(line, StyleTag::SuccessMarker)
    } else {
        None
    }
}

fn section_header(line: &str) -> Option<Vec<Segment>> {
    if SECTION_HEADER.is_match(line) {
        whole(line, StyleTag::SectionHeader)
    } else {
        None
    }
}

fn structured_data(line: &str) -> Option<Vec<Segment>> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        whole(line, StyleTag::StructuredData)
    } else {
        None
    }
}
