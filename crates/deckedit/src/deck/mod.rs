mod default;

use serde::{Deserialize, Serialize};

pub use default::default_presentation;

pub type SlideId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub title: String,
    pub subtitle: String,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub content: Vec<String>,
    #[serde(rename = "type")]
    pub kind: SlideKind,
}

/// Rendering template for a slide. Has no effect on data validity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Title,
    #[default]
    Content,
    Agenda,
    Qa,
}

impl SlideKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Content => "Content",
            Self::Agenda => "Agenda",
            Self::Qa => "Q&A",
        }
    }
}

impl std::fmt::Display for SlideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Slide {
    /// A fresh slide as created by the editor's "add slide" action.
    pub fn placeholder(id: SlideId) -> Self {
        Self {
            id,
            title: "New Slide".to_string(),
            content: vec!["Add your content here".to_string()],
            kind: SlideKind::Content,
        }
    }
}

impl Presentation {
    /// Next id to hand out: one past the largest id in the deck. `None` once
    /// the largest id is `SlideId::MAX`.
    pub fn next_id(&self) -> Option<SlideId> {
        match self.slides.iter().map(|s| s.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub fn position_of(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    /// First id that occurs more than once, if any.
    pub fn duplicate_id(&self) -> Option<SlideId> {
        let mut seen = std::collections::HashSet::new();
        self.slides.iter().map(|s| s.id).find(|id| !seen.insert(*id))
    }
}
