use eframe::egui::{self, Color32};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub panel: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub secondary_accent: Color32,
    pub muted: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub heading_band: Color32,
    pub code_background: Color32,
    pub code_foreground: Color32,
    pub link: Color32,
    pub unsaved_marker: Color32,
    pub editor_background: Color32,
    pub title_size: f32,
    pub heading_size: f32,
    pub subheading_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub code_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            panel: Color32::from_rgb(0x25, 0x25, 0x26),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x52, 0x94, 0xE2),
            secondary_accent: Color32::from_rgb(0xC0, 0x7E, 0xF1),
            muted: Color32::from_rgb(0x8A, 0x8A, 0x8A),
            card_background: Color32::from_rgb(0x2A, 0x2D, 0x33),
            card_border: Color32::from_rgb(0x3A, 0x3F, 0x47),
            heading_band: Color32::from_rgb(0x22, 0x30, 0x44),
            code_background: Color32::from_rgb(0x11, 0x11, 0x11),
            code_foreground: Color32::from_rgb(0x5C, 0xDB, 0x95),
            link: Color32::from_rgb(0x5C, 0xB8, 0xFF),
            unsaved_marker: Color32::from_rgb(0xE8, 0xA8, 0x38),
            editor_background: Color32::from_rgb(0x33, 0x2E, 0x1C),
            title_size: 64.0,
            heading_size: 44.0,
            subheading_size: 28.0,
            body_size: 20.0,
            small_size: 15.0,
            code_size: 15.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF1, 0xF5, 0xFB),
            panel: Color32::WHITE,
            foreground: Color32::from_rgb(0x37, 0x41, 0x51),
            heading_color: Color32::from_rgb(0x1F, 0x29, 0x37),
            accent: Color32::from_rgb(0x25, 0x63, 0xEB),
            secondary_accent: Color32::from_rgb(0x7C, 0x3A, 0xED),
            muted: Color32::from_rgb(0x6B, 0x72, 0x80),
            card_background: Color32::WHITE,
            card_border: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            heading_band: Color32::from_rgb(0xEF, 0xF6, 0xFF),
            code_background: Color32::from_rgb(0x11, 0x18, 0x27),
            code_foreground: Color32::from_rgb(0x4A, 0xDE, 0x80),
            link: Color32::from_rgb(0x25, 0x63, 0xEB),
            unsaved_marker: Color32::from_rgb(0xEA, 0x58, 0x0C),
            editor_background: Color32::from_rgb(0xFE, 0xFC, 0xE8),
            title_size: 64.0,
            heading_size: 44.0,
            subheading_size: 28.0,
            body_size: 20.0,
            small_size: 15.0,
            code_size: 15.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "dark"
    }

    /// Install matching egui visuals so stock widgets blend in.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.panel;
        visuals.window_fill = self.panel;
        visuals.hyperlink_color = self.link;
        ctx.set_visuals(visuals);
    }
}
