pub mod layouts;
pub mod text;

use eframe::egui;

use crate::deck::{Slide, SlideKind};
use crate::links::LinkLabels;
use crate::theme::Theme;

/// Render a single slide using the template for its type.
pub fn render_slide(ui: &mut egui::Ui, slide: &Slide, labels: &LinkLabels, theme: &Theme) {
    match slide.kind {
        SlideKind::Title => layouts::title::render(ui, slide, labels, theme),
        SlideKind::Qa => layouts::qa::render(ui, slide, labels, theme),
        SlideKind::Agenda => layouts::agenda::render(ui, slide, labels, theme),
        SlideKind::Content => layouts::content::render(ui, slide, labels, theme),
    }
}
