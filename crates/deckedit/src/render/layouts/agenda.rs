use eframe::egui::{self, RichText, Sense};

use crate::deck::Slide;
use crate::links::LinkLabels;
use crate::render::text::{self, TextStyle};
use crate::theme::Theme;

const COLUMNS: usize = 2;

pub fn render(ui: &mut egui::Ui, slide: &Slide, labels: &LinkLabels, theme: &Theme) {
    text::centered_column(ui, 1000.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.label(
                RichText::new(&slide.title)
                    .size(theme.title_size * 0.85)
                    .strong()
                    .color(theme.accent),
            );
            ui.add_space(16.0);
            text::accent_bar(ui, 80.0, theme.accent);
            ui.add_space(40.0);
        });

        ui.columns(COLUMNS, |columns| {
            for (index, item) in slide.content.iter().enumerate() {
                let column = &mut columns[index % COLUMNS];
                agenda_card(column, index + 1, item, labels, theme);
                column.add_space(20.0);
            }
        });
    });
}

fn agenda_card(ui: &mut egui::Ui, number: usize, item: &str, labels: &LinkLabels, theme: &Theme) {
    text::card(theme).inner_margin(20.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            number_badge(ui, number, theme);
            ui.add_space(14.0);
            ui.vertical(|ui| {
                let style = TextStyle::new(theme.body_size, theme.heading_color).strong();
                text::annotated_line(ui, item, labels, style, false);
            });
        });
    });
}

fn number_badge(ui: &mut egui::Ui, number: usize, theme: &Theme) {
    let size = 32.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), size / 2.0, theme.accent);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        number.to_string(),
        egui::FontId::proportional(theme.small_size),
        egui::Color32::WHITE,
    );
}
