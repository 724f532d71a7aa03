use eframe::egui::{self, Color32, RichText, Sense, Stroke};

use crate::links::{self, Link, LinkLabels, Segment};
use crate::theme::Theme;

/// Glyph appended to link labels to mark them as leaving the app.
const EXTERNAL_LINK_GLYPH: &str = "\u{2197}";

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color32,
    pub strong: bool,
}

impl TextStyle {
    pub fn new(size: f32, color: Color32) -> Self {
        Self {
            size,
            color,
            strong: false,
        }
    }

    pub fn strong(mut self) -> Self {
        self.strong = true;
        self
    }

    fn rich(&self, text: &str) -> RichText {
        let rich = RichText::new(text).size(self.size).color(self.color);
        if self.strong { rich.strong() } else { rich }
    }
}

/// Draw a line of slide text with URLs and emails replaced by labeled links.
pub fn annotated_line(
    ui: &mut egui::Ui,
    text: &str,
    labels: &LinkLabels,
    style: TextStyle,
    centered: bool,
) {
    segment_line(ui, links::annotate(text, labels), style, centered);
}

/// Draw already-annotated segments as one wrapping line.
pub fn segment_line(
    ui: &mut egui::Ui,
    segments: Vec<Segment<'_>>,
    style: TextStyle,
    centered: bool,
) {
    let mut layout = egui::Layout::left_to_right(egui::Align::Center).with_main_wrap(true);
    if centered {
        layout = layout.with_main_align(egui::Align::Center);
    }
    ui.with_layout(layout, |ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for segment in segments {
            match segment {
                Segment::Text(run) => {
                    ui.label(style.rich(run));
                }
                Segment::Link(link) => {
                    link_widget(ui, &link, style);
                }
            }
        }
    });
}

/// A clickable label for one link, with the raw literal as tooltip.
pub fn link_widget(ui: &mut egui::Ui, link: &Link<'_>, style: TextStyle) -> egui::Response {
    let mut text = RichText::new(format!("{} {EXTERNAL_LINK_GLYPH}", link.label))
        .size(style.size)
        .underline();
    if style.strong {
        text = text.strong();
    }
    ui.add(
        egui::Hyperlink::from_label_and_url(text, link.target())
            .open_in_new_tab(link.opens_new_tab()),
    )
    .on_hover_text(link.literal)
}

/// Plain monospace text on a dark block, never link-annotated.
pub fn code_line(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    egui::Frame::new()
        .fill(theme.code_background)
        .corner_radius(8.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(text)
                    .monospace()
                    .size(theme.code_size)
                    .color(theme.code_foreground),
            );
        });
}

/// Short rounded bar drawn under slide headings.
pub fn accent_bar(ui: &mut egui::Ui, width: f32, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 4.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
}

/// Filled dot used as a list marker.
pub fn bullet_dot(ui: &mut egui::Ui, line_height: f32, radius: f32, color: Color32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(radius * 2.0 + 12.0, line_height), Sense::hover());
    let center = egui::pos2(rect.left() + radius, rect.center().y);
    ui.painter().circle_filled(center, radius, color);
}

/// Card frame shared by slide templates.
pub fn card(theme: &Theme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.card_background)
        .stroke(Stroke::new(1.0, theme.card_border))
        .corner_radius(16.0)
        .inner_margin(28.0)
}

/// Lay out `add` in a column no wider than `max_width`, centered horizontally.
pub fn centered_column<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let available = ui.available_width();
    let width = available.min(max_width);
    let margin = ((available - width) / 2.0).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add(ui)
        })
        .inner
    })
    .inner
}
