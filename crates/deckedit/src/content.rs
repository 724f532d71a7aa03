//! Classification of `content` slide lines.
//!
//! Lines are stored as plain strings. Their role on a content slide is inferred
//! from leading indentation and marker characters each time the slide is drawn.

use std::sync::LazyLock;

use regex::Regex;

use crate::links::{self, LinkLabels, Segment};

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*[•◦]|\s*\d+\.)\s*").expect("marker pattern is valid"));

const MAIN_BULLET_PREFIXES: &[&str] = &[
    "  •", "  1.", "  2.", "  3.", "  4.", "  5.", "  6.",
];
const SUB_BULLET_PREFIXES: &[&str] = &["    •", "    ◦"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Vertical spacing only.
    Blank,
    /// Unindented section heading.
    Heading,
    /// Two-space indent with a bullet or `1.`..`6.` marker.
    Bullet,
    /// Four-space indent with a filled or hollow bullet.
    SubBullet,
    /// Anything else.
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub kind: LineKind,
    /// Code lines are shown verbatim in monospace and never link-annotated.
    pub code: bool,
    /// Text to display, with the list marker removed for non-code lines.
    pub text: &'a str,
}

pub fn is_code(line: &str) -> bool {
    line.contains(['{', '}', '"'])
}

pub fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line {
            kind: LineKind::Blank,
            code: false,
            text: "",
        };
    }

    let code = is_code(line);
    let kind = if !line.starts_with("  ") && !code {
        LineKind::Heading
    } else if MAIN_BULLET_PREFIXES.iter().any(|p| line.starts_with(p)) {
        LineKind::Bullet
    } else if SUB_BULLET_PREFIXES.iter().any(|p| line.starts_with(p)) {
        LineKind::SubBullet
    } else {
        LineKind::Plain
    };

    let text = if code { line } else { strip_marker(line) };
    Line { kind, code, text }
}

/// What a classified line puts on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body<'a> {
    /// Monospace text exactly as written.
    Verbatim(&'a str),
    /// Text with URLs and emails replaced by labeled links.
    Annotated(Vec<Segment<'a>>),
}

pub fn body<'a>(line: &Line<'a>, labels: &LinkLabels) -> Body<'a> {
    if line.code {
        Body::Verbatim(line.text)
    } else {
        Body::Annotated(links::annotate(line.text, labels))
    }
}

/// Remove a leading bullet or `N.` marker and the whitespace after it.
pub fn strip_marker(line: &str) -> &str {
    match MARKER_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_bullet_is_stripped() {
        let line = classify("  • Item one");
        assert_eq!(line.kind, LineKind::Bullet);
        assert!(!line.code);
        assert_eq!(line.text, "Item one");
    }

    #[test]
    fn test_numbered_bullet() {
        let line = classify("  3. Third step");
        assert_eq!(line.kind, LineKind::Bullet);
        assert_eq!(line.text, "Third step");

        // Only 1. through 6. count as main bullet markers
        let line = classify("  7. Seventh");
        assert_eq!(line.kind, LineKind::Plain);
        assert_eq!(line.text, "Seventh");
    }

    #[test]
    fn test_sub_bullets() {
        let filled = classify("    • Nested");
        assert_eq!(filled.kind, LineKind::SubBullet);
        assert_eq!(filled.text, "Nested");

        let hollow = classify("    ◦ Hollow");
        assert_eq!(hollow.kind, LineKind::SubBullet);
        assert_eq!(hollow.text, "Hollow");
    }

    #[test]
    fn test_heading() {
        let line = classify("Triggers");
        assert_eq!(line.kind, LineKind::Heading);
        assert_eq!(line.text, "Triggers");
    }

    #[test]
    fn test_blank() {
        assert_eq!(classify("").kind, LineKind::Blank);
        assert_eq!(classify("   ").kind, LineKind::Blank);
    }

    #[test]
    fn test_code_is_verbatim() {
        let raw = "  • { \"url\": \"https://api.example.com\" }";
        let line = classify(raw);
        assert!(line.code);
        assert_eq!(line.kind, LineKind::Bullet);
        assert_eq!(line.text, raw);
    }

    #[test]
    fn test_code_line_links_are_not_annotated() {
        let mut labels = LinkLabels::new();
        labels.set("https://api.example.com", "Custom");
        let raw = r#"  curl "https://api.example.com" -d '{}'"#;
        assert_eq!(body(&classify(raw), &labels), Body::Verbatim(raw));
    }

    #[test]
    fn test_plain_line_links_are_annotated() {
        let labels = LinkLabels::new();
        let line = classify("  • Ask team@example.com");
        match body(&line, &labels) {
            Body::Annotated(segments) => {
                assert_eq!(segments.len(), 2);
                assert_eq!(segments[0], Segment::Text("Ask "));
                assert!(
                    matches!(&segments[1], Segment::Link(link) if link.label == "Team Email")
                );
            }
            other => panic!("expected annotated body, got {other:?}"),
        }
    }

    #[test]
    fn test_unindented_code_is_not_a_heading() {
        let line = classify("say \"hello\"");
        assert!(line.code);
        assert_eq!(line.kind, LineKind::Plain);
    }
}
