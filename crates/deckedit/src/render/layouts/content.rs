use eframe::egui::{self, RichText, Stroke};

use crate::content::{self, Body, LineKind};
use crate::deck::Slide;
use crate::links::{LinkLabels, Segment};
use crate::render::text::{self, TextStyle};
use crate::theme::Theme;

const BULLET_INDENT: f32 = 24.0;
const SUB_BULLET_INDENT: f32 = 48.0;
const CODE_INDENT: f32 = 32.0;

pub fn render(ui: &mut egui::Ui, slide: &Slide, labels: &LinkLabels, theme: &Theme) {
    text::centered_column(ui, 1100.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.label(
                RichText::new(&slide.title)
                    .size(theme.heading_size)
                    .strong()
                    .color(theme.accent),
            );
            ui.add_space(12.0);
            text::accent_bar(ui, 64.0, theme.accent);
            ui.add_space(36.0);
        });

        text::card(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            for (index, raw) in slide.content.iter().enumerate() {
                draw_line(ui, index, raw, labels, theme);
            }
        });
    });
}

fn draw_line(ui: &mut egui::Ui, index: usize, raw: &str, labels: &LinkLabels, theme: &Theme) {
    let line = content::classify(raw);

    let segments = match content::body(&line, labels) {
        Body::Verbatim(code) => {
            ui.horizontal_top(|ui| {
                ui.add_space(CODE_INDENT);
                ui.vertical(|ui| text::code_line(ui, code, theme));
            });
            ui.add_space(12.0);
            return;
        }
        Body::Annotated(segments) => segments,
    };

    match line.kind {
        LineKind::Blank => ui.add_space(24.0),
        LineKind::Heading => {
            if index > 0 {
                ui.add_space(20.0);
            }
            heading_band(ui, segments, theme);
            ui.add_space(16.0);
        }
        LineKind::Bullet => {
            let style = TextStyle::new(theme.body_size, theme.foreground);
            bulleted(ui, BULLET_INDENT, 4.0, theme.accent, segments, style);
        }
        LineKind::SubBullet => {
            let style = TextStyle::new(theme.body_size * 0.85, theme.muted);
            bulleted(ui, SUB_BULLET_INDENT, 3.0, theme.muted, segments, style);
        }
        LineKind::Plain => {
            let style = TextStyle::new(theme.body_size, theme.foreground);
            text::segment_line(ui, segments, style, false);
            ui.add_space(12.0);
        }
    }
}

/// Section heading with an accent stripe on the left.
fn heading_band(ui: &mut egui::Ui, segments: Vec<Segment<'_>>, theme: &Theme) {
    let response = egui::Frame::new()
        .fill(theme.heading_band)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(18, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let style = TextStyle::new(theme.subheading_size, theme.heading_color).strong();
            text::segment_line(ui, segments, style, false);
        })
        .response;
    let rect = response.rect;
    ui.painter().line_segment(
        [rect.left_top(), rect.left_bottom()],
        Stroke::new(4.0, theme.accent),
    );
}

fn bulleted(
    ui: &mut egui::Ui,
    indent: f32,
    radius: f32,
    dot_color: egui::Color32,
    segments: Vec<Segment<'_>>,
    style: TextStyle,
) {
    ui.horizontal_top(|ui| {
        ui.add_space(indent);
        text::bullet_dot(ui, style.size * 1.3, radius, dot_color);
        ui.vertical(|ui| {
            text::segment_line(ui, segments, style, false);
        });
    });
    ui.add_space(10.0);
}
