//! State of one open presentation: the deck, navigation position, edit state,
//! link label overrides and the auto-advance timer.
//!
//! All mutation goes through `Session` methods so the invariants hold after
//! every call: the deck is never empty, slide ids are unique and the current
//! index always points at a slide.

mod edit;
mod navigation;

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::deck::{Presentation, Slide, default_presentation};
use crate::document;
use crate::links::LinkLabels;
use crate::timer::AutoAdvance;

pub use navigation::NavKey;

#[derive(Debug)]
pub struct Session {
    presentation: Presentation,
    current: usize,
    autoplay: bool,
    timer: AutoAdvance,
    edit_mode: bool,
    /// Working copy of the slide being edited. Never aliases the deck.
    editing: Option<Slide>,
    unsaved_changes: bool,
    link_labels: LinkLabels,
    link_editor_open: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(default_presentation())
    }
}

impl Session {
    pub fn new(presentation: Presentation) -> Self {
        debug_assert!(!presentation.slides.is_empty());
        Self {
            presentation,
            current: 0,
            autoplay: false,
            timer: AutoAdvance::default(),
            edit_mode: false,
            editing: None,
            unsaved_changes: false,
            link_labels: LinkLabels::new(),
            link_editor_open: false,
        }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn slides(&self) -> &[Slide] {
        &self.presentation.slides
    }

    pub fn slide_count(&self) -> usize {
        self.presentation.slides.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.presentation.slides[self.current]
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn editing(&self) -> Option<&Slide> {
        self.editing.as_ref()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub fn link_labels(&self) -> &LinkLabels {
        &self.link_labels
    }

    pub fn is_link_editor_open(&self) -> bool {
        self.link_editor_open
    }

    pub fn open_link_editor(&mut self) {
        self.link_editor_open = true;
    }

    pub fn close_link_editor(&mut self) {
        self.link_editor_open = false;
    }

    /// Override the label shown for every occurrence of `literal`.
    pub fn set_link_label(&mut self, literal: &str, label: &str) {
        self.link_labels.set(literal, label);
        self.unsaved_changes = true;
    }

    pub fn reset_link_labels(&mut self) {
        if !self.link_labels.is_empty() {
            log::debug!("Clearing {} link label override(s)", self.link_labels.len());
        }
        self.link_labels.clear();
        self.unsaved_changes = true;
    }

    /// Replace the deck with a parsed document. On error nothing changes.
    pub fn import_document(&mut self, text: &str) -> Result<()> {
        let presentation = document::parse(text)?;
        self.replace_presentation(presentation);
        Ok(())
    }

    /// Swap in a validated deck wholesale.
    pub fn replace_presentation(&mut self, presentation: Presentation) {
        debug_assert!(!presentation.slides.is_empty());
        log::info!(
            "Loaded presentation \"{}\" with {} slide(s)",
            presentation.title,
            presentation.slides.len()
        );
        self.presentation = presentation;
        self.current = 0;
        self.editing = None;
        self.unsaved_changes = false;
    }

    fn timer_should_run(&self) -> bool {
        self.autoplay && !self.edit_mode
    }

    /// Drive the auto-advance timer. Returns true if the slide advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.timer_should_run() {
            self.timer.disarm();
            return false;
        }
        self.timer.arm(now);
        if self.timer.poll(now) {
            log::trace!("Auto-advance from slide {}", self.current + 1);
            self.next();
            return true;
        }
        false
    }

    /// How long until the timer fires, for scheduling the next repaint.
    pub fn time_until_advance(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }
}
