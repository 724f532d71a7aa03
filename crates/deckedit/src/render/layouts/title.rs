use eframe::egui::{self, RichText};

use crate::deck::Slide;
use crate::links::LinkLabels;
use crate::render::text::{self, TextStyle};
use crate::theme::Theme;

/// Styling applied to a title slide line, by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleLine {
    Subtitle,
    Body,
    Callout,
    Footnote,
}

pub fn line_role(index: usize) -> TitleLine {
    match index {
        0 => TitleLine::Subtitle,
        2 => TitleLine::Callout,
        3 => TitleLine::Footnote,
        _ => TitleLine::Body,
    }
}

fn line_style(role: TitleLine, theme: &Theme) -> TextStyle {
    match role {
        TitleLine::Subtitle => TextStyle::new(theme.subheading_size, theme.foreground).strong(),
        TitleLine::Body => TextStyle::new(theme.body_size, theme.foreground),
        TitleLine::Callout => TextStyle::new(theme.subheading_size * 0.85, theme.accent),
        TitleLine::Footnote => TextStyle::new(theme.small_size * 1.2, theme.muted),
    }
}

pub fn render(ui: &mut egui::Ui, slide: &Slide, labels: &LinkLabels, theme: &Theme) {
    text::centered_column(ui, 900.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(
                RichText::new(&slide.title)
                    .size(theme.title_size)
                    .strong()
                    .color(theme.accent),
            );
            ui.add_space(16.0);
            text::accent_bar(ui, 128.0, theme.secondary_accent);
            ui.add_space(40.0);

            for (index, line) in slide.content.iter().enumerate() {
                let role = line_role(index);
                if role == TitleLine::Callout {
                    ui.add_space(36.0);
                }
                text::annotated_line(ui, line, labels, line_style(role, theme), true);
                ui.add_space(18.0);
            }
        });
    });
}
