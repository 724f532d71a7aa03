use crate::deck::{Slide, SlideId};

use super::Session;

impl Session {
    /// Enter or leave edit mode. Any working copy is discarded and autoplay stops.
    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
        self.editing = None;
        self.set_autoplay(false);
        log::debug!("Edit mode {}", if self.edit_mode { "on" } else { "off" });
    }

    /// Start editing a copy of the slide with `id`. Only valid in edit mode.
    pub fn begin_edit(&mut self, id: SlideId) {
        if !self.edit_mode {
            log::debug!("Ignoring edit of slide {id} outside edit mode");
            return;
        }
        self.editing = self.presentation.slide(id).cloned();
    }

    pub fn update_title(&mut self, title: String) {
        if let Some(slide) = self.editing.as_mut() {
            slide.title = title;
        }
    }

    pub fn update_content(&mut self, content: Vec<String>) {
        if let Some(slide) = self.editing.as_mut() {
            slide.content = content;
        }
    }

    /// Write the working copy back over the slide with the same id.
    pub fn commit_edit(&mut self) {
        let Some(edited) = self.editing.take() else {
            return;
        };
        match self.presentation.position_of(edited.id) {
            Some(pos) => {
                log::debug!("Saved changes to slide {}", edited.id);
                self.presentation.slides[pos] = edited;
                self.unsaved_changes = true;
            }
            None => log::warn!("Slide {} no longer exists; edit dropped", edited.id),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Insert a placeholder slide after the current one and move to it.
    pub fn add_slide(&mut self) {
        let Some(id) = self.presentation.next_id() else {
            log::debug!("No slide id left above {}", SlideId::MAX);
            return;
        };
        let slide = Slide::placeholder(id);
        log::debug!("Adding slide {} at position {}", slide.id, self.current + 2);
        self.presentation.slides.insert(self.current + 1, slide);
        self.current += 1;
        self.unsaved_changes = true;
    }

    /// Remove the slide with `id`. The last remaining slide cannot be deleted.
    pub fn delete_slide(&mut self, id: SlideId) {
        if self.slide_count() <= 1 {
            log::debug!("Refusing to delete the only slide");
            return;
        }
        let Some(pos) = self.presentation.position_of(id) else {
            return;
        };
        self.presentation.slides.remove(pos);
        if self.editing.as_ref().is_some_and(|s| s.id == id) {
            self.editing = None;
        }
        let last = self.slide_count() - 1;
        if self.current > last {
            self.current = last;
        }
        self.unsaved_changes = true;
    }

    /// Swap the slide at `index` with the one before it.
    pub fn move_up(&mut self, index: usize) {
        if index == 0 || index >= self.slide_count() {
            return;
        }
        self.swap_adjacent(index - 1);
    }

    /// Swap the slide at `index` with the one after it.
    pub fn move_down(&mut self, index: usize) {
        if index + 1 >= self.slide_count() {
            return;
        }
        self.swap_adjacent(index);
    }

    /// Swap slots `upper` and `upper + 1`. The current position follows the
    /// slide it pointed at.
    fn swap_adjacent(&mut self, upper: usize) {
        let lower = upper + 1;
        self.presentation.slides.swap(upper, lower);
        if self.current == upper {
            self.current = lower;
        } else if self.current == lower {
            self.current = upper;
        }
        self.unsaved_changes = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::deck;

    fn ids(session: &Session) -> Vec<SlideId> {
        session.slides().iter().map(|s| s.id).collect()
    }

    fn edit_session(len: i64) -> Session {
        let mut session = Session::new(deck(len));
        session.toggle_edit_mode();
        session
    }

    #[test]
    fn test_toggle_edit_mode_clears_working_copy() {
        let mut session = edit_session(2);
        session.begin_edit(1);
        assert!(session.editing().is_some());
        session.toggle_edit_mode();
        assert!(!session.is_edit_mode());
        assert!(session.editing().is_none());
    }

    #[test]
    fn test_begin_edit_requires_edit_mode() {
        let mut session = Session::new(deck(2));
        session.begin_edit(1);
        assert!(session.editing().is_none());
    }

    #[test]
    fn test_cancel_discards_changes() {
        let mut session = edit_session(2);
        let before = session.presentation().clone();
        session.begin_edit(2);
        session.update_title("Changed".to_string());
        session.update_content(vec!["new".to_string()]);
        assert_eq!(session.editing().unwrap().title, "Changed");
        assert_eq!(session.presentation(), &before);

        session.cancel_edit();
        assert!(session.editing().is_none());
        assert_eq!(session.presentation(), &before);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_commit_replaces_by_id() {
        let mut session = edit_session(3);
        session.begin_edit(2);
        session.update_title("Renamed".to_string());
        session.update_content(vec!["a".to_string(), "  • b".to_string()]);
        // Reordering while editing must not misplace the commit
        session.move_up(1);
        session.commit_edit();

        assert!(session.editing().is_none());
        assert!(session.has_unsaved_changes());
        let slide = session.presentation().slide(2).unwrap();
        assert_eq!(slide.title, "Renamed");
        assert_eq!(slide.content, vec!["a", "  • b"]);
        assert_eq!(ids(&session), vec![2, 1, 3]);
    }

    #[test]
    fn test_commit_and_updates_without_working_copy_are_noops() {
        let mut session = edit_session(2);
        let before = session.presentation().clone();
        session.update_title("x".to_string());
        session.commit_edit();
        assert_eq!(session.presentation(), &before);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_add_slide_inserts_after_current() {
        let mut session = Session::new(deck(3));
        session.go_to(1);
        let prior: Vec<SlideId> = ids(&session);
        session.add_slide();

        assert_eq!(session.slide_count(), 4);
        assert_eq!(session.current_index(), 2);
        let added = session.current_slide();
        assert!(prior.iter().all(|&id| added.id > id));
        assert_eq!(added.title, "New Slide");
        assert_eq!(added.content, vec!["Add your content here"]);
        assert_eq!(ids(&session), vec![1, 2, 4, 3]);
        assert!(session.has_unsaved_changes());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut session = Session::new(deck(3));
        session.go_to(2);
        session.add_slide();
        assert_eq!(session.current_slide().id, 4);
        session.delete_slide(2);
        session.add_slide();
        assert_eq!(session.current_slide().id, 5);
    }

    #[test]
    fn test_add_slide_refused_when_ids_exhausted() {
        let mut session = edit_session(1);
        let json = r#"{ "title": "T", "subtitle": "S", "slides": [
            { "id": 9223372036854775807, "title": "Last", "content": [], "type": "content" }
        ] }"#;
        session.import_document(json).unwrap();
        session.add_slide();
        assert_eq!(ids(&session), vec![SlideId::MAX]);
        assert_eq!(session.presentation().duplicate_id(), None);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_add_slide_after_largest_u32_id() {
        let mut session = edit_session(1);
        let json = r#"{ "title": "T", "subtitle": "S", "slides": [
            { "id": 4294967295, "title": "Big", "content": [], "type": "content" }
        ] }"#;
        session.import_document(json).unwrap();
        session.add_slide();
        assert_eq!(ids(&session), vec![4_294_967_295, 4_294_967_296]);
        assert_eq!(session.presentation().duplicate_id(), None);
    }

    #[test]
    fn test_commit_after_slide_deleted_keeps_saved_state() {
        let mut session = edit_session(2);
        session.begin_edit(2);
        session.update_title("Lost".to_string());
        // Remove the slide behind the working copy's back
        session.presentation.slides.retain(|s| s.id != 2);
        session.current = 0;
        session.commit_edit();
        assert!(session.editing().is_none());
        assert!(!session.has_unsaved_changes());
        assert_eq!(ids(&session), vec![1]);
    }

    #[test]
    fn test_delete_only_slide_is_refused() {
        let mut session = edit_session(1);
        session.delete_slide(1);
        assert_eq!(ids(&session), vec![1]);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_delete_clamps_current_index() {
        let mut session = edit_session(3);
        session.go_to(2);
        session.delete_slide(3);
        assert_eq!(ids(&session), vec![1, 2]);
        assert_eq!(session.current_index(), 1);
        assert!(session.has_unsaved_changes());
    }

    #[test]
    fn test_delete_before_current_keeps_index() {
        let mut session = edit_session(4);
        session.go_to(2);
        session.delete_slide(1);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.current_slide().id, 4);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut session = edit_session(2);
        session.delete_slide(99);
        assert_eq!(ids(&session), vec![1, 2]);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_delete_edited_slide_drops_working_copy() {
        let mut session = edit_session(2);
        session.begin_edit(2);
        session.delete_slide(2);
        assert!(session.editing().is_none());
    }

    #[test]
    fn test_move_boundaries_are_noops() {
        let mut session = edit_session(3);
        session.move_up(0);
        session.move_down(2);
        assert_eq!(ids(&session), vec![1, 2, 3]);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_adjacent_swap_involution() {
        for i in 1..4 {
            let mut session = edit_session(4);
            session.move_up(i);
            session.move_down(i - 1);
            assert_eq!(ids(&session), vec![1, 2, 3, 4]);
        }
        for i in 0..3 {
            let mut session = edit_session(4);
            session.move_down(i);
            session.move_up(i + 1);
            assert_eq!(ids(&session), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_current_follows_moved_slide() {
        let mut session = edit_session(4);
        session.go_to(2);
        session.move_up(2);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current_slide().id, 3);

        session.move_down(1);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.current_slide().id, 3);
    }

    #[test]
    fn test_current_follows_displaced_slide() {
        let mut session = edit_session(4);
        session.go_to(1);
        session.move_up(2);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.current_slide().id, 2);

        session.move_down(1);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current_slide().id, 2);
    }

    #[test]
    fn test_unrelated_swap_leaves_current() {
        let mut session = edit_session(4);
        session.go_to(0);
        session.move_down(2);
        assert_eq!(session.current_index(), 0);
        assert_eq!(ids(&session), vec![1, 2, 4, 3]);
    }
}
