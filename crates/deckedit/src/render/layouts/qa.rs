use eframe::egui::{self, RichText};

use crate::deck::Slide;
use crate::links::LinkLabels;
use crate::render::text::{self, TextStyle};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QaLine {
    Headline,
    /// Separator line, never drawn.
    Hidden,
    Subheading,
    Body,
}

pub fn line_role(index: usize) -> QaLine {
    match index {
        0 => QaLine::Headline,
        1 => QaLine::Hidden,
        2 => QaLine::Subheading,
        _ => QaLine::Body,
    }
}

pub fn render(ui: &mut egui::Ui, slide: &Slide, labels: &LinkLabels, theme: &Theme) {
    text::centered_column(ui, 760.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new(&slide.title)
                    .size(theme.title_size * 0.85)
                    .strong()
                    .color(theme.accent),
            );
            ui.add_space(16.0);
            text::accent_bar(ui, 96.0, theme.secondary_accent);
            ui.add_space(40.0);
        });

        text::card(theme).fill(theme.heading_band).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                for (index, line) in slide.content.iter().enumerate() {
                    let style = match line_role(index) {
                        QaLine::Hidden => continue,
                        QaLine::Headline => {
                            TextStyle::new(theme.subheading_size * 1.1, theme.heading_color)
                                .strong()
                        }
                        QaLine::Subheading => {
                            TextStyle::new(theme.subheading_size * 0.85, theme.accent).strong()
                        }
                        QaLine::Body => TextStyle::new(theme.body_size, theme.foreground),
                    };
                    text::annotated_line(ui, line, labels, style, true);
                    ui.add_space(20.0);
                }
            });
        });
    });
}
