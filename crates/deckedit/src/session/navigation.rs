use super::Session;

/// Keys the presentation responds to outside of edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Right,
    Left,
    Space,
    Escape,
}

impl Session {
    /// Advance one slide, wrapping past the end.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.slide_count();
    }

    /// Go back one slide, wrapping before the start.
    pub fn previous(&mut self) {
        let count = self.slide_count();
        self.current = (self.current + count - 1) % count;
    }

    /// Whether a non-wrapping step back is possible.
    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.slide_count()
    }

    /// Jump straight to `index`. Callers pass a valid index.
    pub fn go_to(&mut self, index: usize) {
        debug_assert!(index < self.slide_count(), "slide index {index} out of range");
        self.current = index.min(self.slide_count() - 1);
    }

    pub fn toggle_autoplay(&mut self) {
        self.set_autoplay(!self.autoplay);
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay = enabled;
        if !enabled {
            self.timer.disarm();
        }
    }

    /// Keyboard navigation is suspended while editing or relabeling links.
    pub fn keys_enabled(&self) -> bool {
        !self.edit_mode && !self.link_editor_open
    }

    /// Apply a navigation key. Returns false if the key was ignored.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if !self.keys_enabled() {
            return false;
        }
        match key {
            NavKey::Right | NavKey::Space => self.next(),
            NavKey::Left => self.previous(),
            NavKey::Escape => self.set_autoplay(false),
        }
        true
    }
}
