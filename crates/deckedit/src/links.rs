//! Link detection and labeling for slide text.
//!
//! Slide lines may contain bare URLs and email addresses. Each matched literal is
//! shown under a short human-readable label instead of the raw text. Labels come
//! from a deck-wide override map keyed by the literal, falling back to a default
//! derived from the literal itself.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::deck::Presentation;

const URL_PATTERN: &str = r"https?://\S+";
const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Matches either a URL or an email. The URL alternative comes first so an
/// address embedded in a URL stays part of that URL.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?P<url>{URL_PATTERN})|(?P<email>{EMAIL_PATTERN})"))
        .expect("link pattern is valid")
});

/// Domain markers checked in order for non-email links.
const URL_LABELS: &[(&str, &str)] = &[
    ("api.example.com", "API Docs"),
    ("wiki.example.com", "Wiki"),
    ("github.com", "GitHub"),
    ("gitlab.com", "GitLab"),
    ("docs", "Documentation"),
];

/// Mailbox prefixes checked in order for email links.
const EMAIL_LABELS: &[(&str, &str)] = &[
    ("team@", "Team Email"),
    ("support@", "Support Email"),
    ("alerts@", "Alerts"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Url,
    Email,
}

/// A piece of annotated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link(Link<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    /// The matched text, verbatim.
    pub literal: &'a str,
    pub kind: LinkKind,
    pub label: String,
}

impl Link<'_> {
    /// Where activating the link should go.
    pub fn target(&self) -> String {
        match self.kind {
            LinkKind::Email => format!("mailto:{}", self.literal),
            LinkKind::Url => self.literal.to_string(),
        }
    }

    /// URLs open in a separate browsing context; mail links do not.
    pub fn opens_new_tab(&self) -> bool {
        self.kind == LinkKind::Url
    }
}

/// User-chosen display labels, keyed by link literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkLabels {
    overrides: HashMap<String, String>,
}

impl LinkLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, literal: &str) -> Option<&str> {
        self.overrides.get(literal).map(String::as_str)
    }

    pub fn set(&mut self, literal: impl Into<String>, label: impl Into<String>) {
        self.overrides.insert(literal.into(), label.into());
    }

    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Label shown for `literal`. An empty override counts as unset.
    pub fn label_for(&self, literal: &str, kind: LinkKind) -> String {
        match self.get(literal) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => default_label(literal, kind),
        }
    }
}

/// Label derived from the literal alone.
pub fn default_label(literal: &str, kind: LinkKind) -> String {
    let (table, fallback) = match kind {
        LinkKind::Email => (EMAIL_LABELS, "Email"),
        LinkKind::Url => (URL_LABELS, "Link"),
    };
    table
        .iter()
        .find(|(marker, _)| literal.contains(marker))
        .map_or(fallback, |(_, label)| *label)
        .to_string()
}

/// Classify a literal the way the scanner would.
pub fn kind_of(literal: &str) -> LinkKind {
    match LINK_RE.captures(literal) {
        Some(caps) if caps.name("email").is_some() => LinkKind::Email,
        _ => LinkKind::Url,
    }
}

/// Split `text` into plain runs and labeled links.
pub fn annotate<'a>(text: &'a str, labels: &LinkLabels) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in LINK_RE.captures_iter(text) {
        let (m, kind) = match (caps.name("url"), caps.name("email")) {
            (Some(m), _) => (m, LinkKind::Url),
            (None, Some(m)) => (m, LinkKind::Email),
            (None, None) => continue,
        };
        if m.start() > last {
            segments.push(Segment::Text(&text[last..m.start()]));
        }
        segments.push(Segment::Link(Link {
            literal: m.as_str(),
            kind,
            label: labels.label_for(m.as_str(), kind),
        }));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }
    segments
}

/// Every distinct link literal in the deck, in order of first appearance.
pub fn collect_links(presentation: &Presentation) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for line in presentation.slides.iter().flat_map(|s| s.content.iter()) {
        for m in LINK_RE.find_iter(line) {
            if seen.insert(m.as_str()) {
                links.push(m.as_str().to_string());
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Slide, SlideKind};

    fn links_of<'a>(segments: &'a [Segment<'a>]) -> Vec<&'a Link<'a>> {
        segments
            .iter()
            .filter_map(|s| match s {
                Segment::Link(link) => Some(link),
                Segment::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_default_label_priority() {
        assert_eq!(default_label("alerts@ops.example.com", LinkKind::Email), "Alerts");
        assert_eq!(default_label("team@example.com", LinkKind::Email), "Team Email");
        assert_eq!(default_label("support@example.com", LinkKind::Email), "Support Email");
        assert_eq!(default_label("jane@example.com", LinkKind::Email), "Email");
        assert_eq!(
            default_label("https://github.com/example/repo", LinkKind::Url),
            "GitHub"
        );
        assert_eq!(default_label("https://wiki.example.com/x", LinkKind::Url), "Wiki");
        assert_eq!(
            default_label("https://api.example.com/docs", LinkKind::Url),
            "API Docs"
        );
        assert_eq!(
            default_label("https://docs.rs/regex", LinkKind::Url),
            "Documentation"
        );
        assert_eq!(default_label("http://example.org", LinkKind::Url), "Link");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let labels = LinkLabels::new();
        assert_eq!(
            annotate("nothing to see here", &labels),
            vec![Segment::Text("nothing to see here")]
        );
        assert!(annotate("", &labels).is_empty());
    }

    #[test]
    fn test_annotate_url_and_email() {
        let labels = LinkLabels::new();
        let segments = annotate(
            "See https://wiki.example.com/x or mail team@example.com today",
            &labels,
        );
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0], Segment::Text("See "));
        assert_eq!(segments[2], Segment::Text(" or mail "));
        assert_eq!(segments[4], Segment::Text(" today"));

        let links = links_of(&segments);
        assert_eq!(links[0].literal, "https://wiki.example.com/x");
        assert_eq!(links[0].label, "Wiki");
        assert_eq!(links[0].target(), "https://wiki.example.com/x");
        assert!(links[0].opens_new_tab());

        assert_eq!(links[1].literal, "team@example.com");
        assert_eq!(links[1].kind, LinkKind::Email);
        assert_eq!(links[1].target(), "mailto:team@example.com");
        assert!(!links[1].opens_new_tab());
    }

    #[test]
    fn test_url_consumes_embedded_address() {
        let labels = LinkLabels::new();
        let segments = annotate("https://example.com/?to=team@example.com", &labels);
        let links = links_of(&segments);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, LinkKind::Url);
    }

    #[test]
    fn test_override_takes_precedence() {
        let mut labels = LinkLabels::new();
        labels.set("alerts@ops.example.com", "Pager");
        let segments = annotate("a alerts@ops.example.com b alerts@ops.example.com", &labels);
        let links = links_of(&segments);
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.label == "Pager"));
    }

    #[test]
    fn test_empty_override_falls_back_to_default() {
        let mut labels = LinkLabels::new();
        labels.set("https://github.com/example/repo", "");
        assert_eq!(
            labels.label_for("https://github.com/example/repo", LinkKind::Url),
            "GitHub"
        );
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of("team@example.com"), LinkKind::Email);
        assert_eq!(kind_of("https://example.com"), LinkKind::Url);
    }

    #[test]
    fn test_collect_links_in_order_of_first_appearance() {
        let slide = |id, content: &[&str]| Slide {
            id,
            title: format!("Slide {id}"),
            content: content.iter().map(|s| s.to_string()).collect(),
            kind: SlideKind::Content,
        };
        let pres = Presentation {
            title: String::new(),
            subtitle: String::new(),
            slides: vec![
                slide(1, &["mail support@example.com", "https://a.example.com/x"]),
                slide(2, &["again support@example.com and https://b.example.com"]),
            ],
        };
        assert_eq!(
            collect_links(&pres),
            vec![
                "support@example.com",
                "https://a.example.com/x",
                "https://b.example.com",
            ]
        );
    }
}
