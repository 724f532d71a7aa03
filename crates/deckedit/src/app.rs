use eframe::egui::{self, RichText};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::deck::{SlideId, default_presentation};
use crate::document;
use crate::links;
use crate::render;
use crate::render::text::{self, TextStyle};
use crate::session::{NavKey, Session};
use crate::theme::Theme;

const TOAST_DURATION: f32 = 2.5;
const TOAST_FADE_START: f32 = 2.0;
const NAVIGATION_WIDTH: f32 = 300.0;
const EDITOR_TIP: &str = "Tip: start a line with two spaces and \u{2022} for a bullet, four spaces \
    and \u{25E6} for a sub-bullet. URLs and emails are linked automatically.";

/// User actions collected while drawing and applied once the frame's panels
/// are done, so the deck is never mutated while it is being iterated.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    Previous,
    Next,
    GoTo(usize),
    MoveUp(usize),
    MoveDown(usize),
    Delete(SlideId),
    BeginEdit(SlideId),
    AddSlide,
    ToggleEditMode,
    ToggleAutoplay,
    OpenLinkEditor,
    Export,
    Import,
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        if elapsed < TOAST_FADE_START {
            1.0
        } else if elapsed < TOAST_DURATION {
            1.0 - (elapsed - TOAST_FADE_START) / (TOAST_DURATION - TOAST_FADE_START)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TOAST_DURATION
    }
}

/// A blocking notice the user has to dismiss.
struct ErrorNotice {
    title: &'static str,
    message: String,
}

struct PresentationApp {
    session: Session,
    theme: Theme,
    /// Last directory exported to; seeds the export dialog.
    export_dir: Option<PathBuf>,
    toast: Option<Toast>,
    error: Option<ErrorNotice>,
}

impl PresentationApp {
    fn new(session: Session, theme: Theme, export_dir: Option<PathBuf>) -> Self {
        Self {
            session,
            theme,
            export_dir,
            toast: None,
            error: None,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Previous => self.session.previous(),
            Action::Next => self.session.next(),
            Action::GoTo(index) => self.session.go_to(index),
            Action::MoveUp(index) => self.session.move_up(index),
            Action::MoveDown(index) => self.session.move_down(index),
            Action::Delete(id) => self.session.delete_slide(id),
            Action::BeginEdit(id) => self.session.begin_edit(id),
            Action::AddSlide => self.session.add_slide(),
            Action::ToggleEditMode => self.session.toggle_edit_mode(),
            Action::ToggleAutoplay => self.session.toggle_autoplay(),
            Action::OpenLinkEditor => self.session.open_link_editor(),
            Action::Export => self.export(),
            Action::Import => self.import(),
        }
    }

    fn export(&mut self) {
        let mut dialog = rfd::FileDialog::new().set_title("Export Presentation");
        if let Some(dir) = &self.export_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(dir) = dialog.pick_folder() else {
            return;
        };
        match document::export_to_dir(self.session.presentation(), &dir) {
            Ok(path) => {
                self.toast = Some(Toast::new(format!("Exported to {}", path.display())));
                self.export_dir = Some(dir);
            }
            Err(e) => {
                log::warn!("Export failed: {e:#}");
                self.error = Some(ErrorNotice {
                    title: "Export failed",
                    message: format!("{e:#}"),
                });
            }
        }
    }

    fn import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Import Presentation")
            .add_filter("JSON Files", &["json"])
            .pick_file()
        else {
            return;
        };
        let result = std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|text| self.session.import_document(&text));
        match result {
            Ok(()) => {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                self.toast = Some(Toast::new(format!("Imported {name}")));
            }
            Err(e) => {
                log::warn!("Import of {} failed: {e:#}", path.display());
                self.error = Some(ErrorNotice {
                    title: "Import failed",
                    message: format!(
                        "Error importing presentation. Please check the file format.\n\n{e:#}"
                    ),
                });
            }
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if !self.session.keys_enabled() || self.error.is_some() {
            return;
        }
        let keys = ctx.input_mut(take_nav_keys);
        for key in keys {
            self.session.handle_key(key);
        }
    }

    fn draw_header(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let theme = &self.theme;
        let session = &self.session;
        let edit_mode = session.is_edit_mode();

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(theme.panel)
                    .inner_margin(egui::Margin::symmetric(20, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("\u{1F5B5}").size(26.0).color(theme.accent));
                    ui.add_space(8.0);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(&session.presentation().title)
                                    .size(20.0)
                                    .strong()
                                    .color(theme.heading_color),
                            );
                            if session.has_unsaved_changes() {
                                ui.label(
                                    RichText::new("*")
                                        .size(20.0)
                                        .strong()
                                        .color(theme.unsaved_marker),
                                )
                                .on_hover_text("Unsaved changes");
                            }
                        });
                        let mode = if edit_mode {
                            "Edit Mode - Click slides to modify"
                        } else {
                            session.presentation().subtitle.as_str()
                        };
                        ui.label(RichText::new(mode).size(theme.small_size).color(theme.muted));
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if !edit_mode {
                            let (icon, hint) = if session.is_autoplay() {
                                ("\u{23F8}", "Pause auto-play")
                            } else {
                                ("\u{25B6}", "Start auto-play")
                            };
                            let response = ui
                                .button(RichText::new(icon).size(18.0))
                                .on_hover_text(hint);
                            if response.clicked() {
                                response.surrender_focus();
                                actions.push(Action::ToggleAutoplay);
                            }
                        }

                        ui.label(
                            RichText::new(format!(
                                "{} / {}",
                                session.current_index() + 1,
                                session.slide_count()
                            ))
                            .size(theme.small_size)
                            .strong(),
                        );

                        let hint = if edit_mode {
                            "Exit edit mode"
                        } else {
                            "Enter edit mode"
                        };
                        let response = ui
                            .selectable_label(edit_mode, RichText::new("\u{270F}").size(18.0))
                            .on_hover_text(hint);
                        if response.clicked() {
                            response.surrender_focus();
                            actions.push(Action::ToggleEditMode);
                        }

                        if edit_mode {
                            let buttons = [
                                ("\u{2B06}", "Import presentation", Action::Import),
                                ("\u{2B07}", "Export presentation", Action::Export),
                                ("\u{2795}", "Add new slide", Action::AddSlide),
                                ("\u{1F517}", "Customize link labels", Action::OpenLinkEditor),
                            ];
                            for (icon, hint, action) in buttons {
                                let response = ui.button(icon).on_hover_text(hint);
                                if response.clicked() {
                                    response.surrender_focus();
                                    actions.push(action);
                                }
                            }
                        }
                    });
                });
            });
    }

    fn draw_navigation(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let theme = &self.theme;
        let session = &self.session;
        let count = session.slide_count();

        egui::SidePanel::left("navigation")
            .resizable(false)
            .exact_width(NAVIGATION_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new("\u{2699} Navigation")
                        .size(18.0)
                        .strong()
                        .color(theme.heading_color),
                );
                ui.add_space(8.0);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (index, slide) in session.slides().iter().enumerate() {
                        let selected = index == session.current_index();
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                let label = RichText::new(format!("{}. {}", index + 1, slide.title))
                                    .strong();
                                if ui.selectable_label(selected, label).clicked() {
                                    actions.push(Action::GoTo(index));
                                }
                                ui.label(
                                    RichText::new(slide.kind.display_name())
                                        .size(theme.small_size * 0.85)
                                        .color(theme.muted),
                                );
                            });

                            if session.is_edit_mode() {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui
                                            .add_enabled(index + 1 < count, egui::Button::new("\u{23F7}"))
                                            .on_hover_text("Move down")
                                            .clicked()
                                        {
                                            actions.push(Action::MoveDown(index));
                                        }
                                        if ui
                                            .add_enabled(index > 0, egui::Button::new("\u{23F6}"))
                                            .on_hover_text("Move up")
                                            .clicked()
                                        {
                                            actions.push(Action::MoveUp(index));
                                        }
                                    },
                                );
                            }
                        });
                        ui.separator();
                    }
                });
            });
    }

    /// Previous/next buttons, one dot per slide and a keyboard hint.
    fn draw_footer(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let theme = &self.theme;
        let session = &self.session;
        let current = session.current_index();
        let last = session.slide_count() - 1;

        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::new()
                    .fill(theme.panel)
                    .inner_margin(egui::Margin::symmetric(20, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let previous = ui.add_enabled(
                        session.has_previous(),
                        egui::Button::new("\u{2190} Previous"),
                    );
                    if previous.clicked() {
                        previous.surrender_focus();
                        actions.push(Action::Previous);
                    }

                    ui.add_space(16.0);
                    for index in 0..=last {
                        let color = if index == current {
                            theme.accent
                        } else {
                            theme.card_border
                        };
                        let radius = if index == current { 6.0 } else { 4.0 };
                        let (rect, response) =
                            ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::click());
                        ui.painter().circle_filled(rect.center(), radius, color);
                        if response
                            .on_hover_text(format!("Go to slide {}", index + 1))
                            .clicked()
                        {
                            actions.push(Action::GoTo(index));
                        }
                    }
                    ui.add_space(16.0);

                    let next =
                        ui.add_enabled(session.has_next(), egui::Button::new("Next \u{2192}"));
                    if next.clicked() {
                        next.surrender_focus();
                        actions.push(Action::Next);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let hint = if session.is_edit_mode() {
                            "Edit Mode Active"
                        } else {
                            "Use \u{2190} \u{2192} keys or spacebar to navigate"
                        };
                        ui.label(RichText::new(hint).size(theme.small_size).color(theme.muted));
                    });
                });
            });
    }

    fn draw_slide_area(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let frame = egui::Frame::new()
            .fill(self.theme.background)
            .inner_margin(24.0);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let current_id = self.session.current_slide().id;
            let editing_current = self.session.editing().is_some_and(|w| w.id == current_id);

            if editing_current {
                egui::ScrollArea::vertical()
                    .auto_shrink(false)
                    .show(ui, |ui| self.draw_editor(ui));
                return;
            }

            if self.session.is_edit_mode() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if self.session.slide_count() > 1
                        && ui
                            .button(RichText::new("\u{1F5D1}").size(16.0))
                            .on_hover_text("Delete this slide")
                            .clicked()
                    {
                        actions.push(Action::Delete(current_id));
                    }
                    if ui
                        .button(RichText::new("\u{270F}").size(16.0))
                        .on_hover_text("Edit this slide")
                        .clicked()
                    {
                        actions.push(Action::BeginEdit(current_id));
                    }
                });
            }

            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    render::render_slide(
                        ui,
                        self.session.current_slide(),
                        self.session.link_labels(),
                        &self.theme,
                    );
                    ui.add_space(32.0);
                });
        });
    }

    /// Inline editor for the working copy. Edits never touch the deck until saved.
    fn draw_editor(&mut self, ui: &mut egui::Ui) {
        let (mut title, mut body) = match self.session.editing() {
            Some(working) => (working.title.clone(), working.content.join("\n")),
            None => return,
        };
        let mut title_changed = false;
        let mut body_changed = false;
        let mut save = false;
        let mut cancel = false;

        text::centered_column(ui, 1100.0, |ui| {
            egui::Frame::new()
                .fill(self.theme.editor_background)
                .stroke(egui::Stroke::new(2.0, self.theme.unsaved_marker))
                .corner_radius(16.0)
                .inner_margin(28.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("Slide Title").strong());
                    title_changed = ui
                        .add(
                            egui::TextEdit::singleline(&mut title)
                                .font(egui::TextStyle::Heading)
                                .desired_width(f32::INFINITY),
                        )
                        .changed();
                    ui.add_space(16.0);

                    ui.label(RichText::new("Content (one line per item)").strong());
                    body_changed = ui
                        .add(
                            egui::TextEdit::multiline(&mut body)
                                .code_editor()
                                .desired_rows(12)
                                .desired_width(f32::INFINITY),
                        )
                        .changed();
                    ui.label(
                        RichText::new(EDITOR_TIP)
                            .size(self.theme.small_size * 0.85)
                            .color(self.theme.muted),
                    );
                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        save = ui.button("\u{1F4BE} Save Changes").clicked();
                        cancel = ui.button("Cancel").clicked();
                    });
                });
        });

        if title_changed {
            self.session.update_title(title);
        }
        if body_changed {
            self.session
                .update_content(body.split('\n').map(String::from).collect());
        }
        if save {
            self.session.commit_edit();
        } else if cancel {
            self.session.cancel_edit();
        }
    }

    fn draw_link_editor(&mut self, ctx: &egui::Context) {
        if !self.session.is_link_editor_open() {
            return;
        }

        let literals = links::collect_links(self.session.presentation());
        let labels = self.session.link_labels();
        let theme = &self.theme;
        let mut open = true;
        let mut done = false;
        let mut reset = false;
        let mut edits: Vec<(String, String)> = Vec::new();

        egui::Window::new("Customize Link Labels")
            .open(&mut open)
            .collapsible(false)
            .default_width(600.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(460.0)
                    .show(ui, |ui| {
                        if literals.is_empty() {
                            ui.label("No links found in this presentation.");
                        }
                        for literal in &literals {
                            let default = links::default_label(literal, links::kind_of(literal));
                            let mut value = labels
                                .get(literal)
                                .filter(|label| !label.is_empty())
                                .map_or_else(|| default.clone(), str::to_string);

                            egui::Frame::group(ui.style()).show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    ui.label("Link:");
                                    ui.label(
                                        RichText::new(literal.as_str())
                                            .monospace()
                                            .color(theme.link),
                                    );
                                });
                                let response = ui.add(
                                    egui::TextEdit::singleline(&mut value)
                                        .hint_text(default.as_str())
                                        .desired_width(f32::INFINITY),
                                );
                                if response.changed() {
                                    edits.push((literal.clone(), value.clone()));
                                }
                                ui.horizontal(|ui| {
                                    ui.label(
                                        RichText::new("Preview: ")
                                            .size(theme.small_size * 0.85)
                                            .color(theme.muted),
                                    );
                                    let preview = format!("Check out {literal}");
                                    let style =
                                        TextStyle::new(theme.small_size * 0.85, theme.muted);
                                    text::annotated_line(ui, &preview, labels, style, false);
                                });
                            });
                            ui.add_space(8.0);
                        }
                    });

                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    done = ui.button("Done").clicked();
                    reset = ui.button("Reset All").clicked();
                });
            });

        for (literal, label) in edits {
            self.session.set_link_label(&literal, &label);
        }
        if reset {
            self.session.reset_link_labels();
        }
        if done || !open {
            self.session.close_link_editor();
        }
    }

    fn draw_error(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.error else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(notice.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&notice.message);
                ui.add_space(8.0);
                dismissed = ui.button("OK").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Enter));
            });
        if dismissed {
            self.error = None;
        }
    }

    fn draw_toast(&mut self, ctx: &egui::Context) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
        let Some(toast) = &self.toast else {
            return;
        };
        let opacity = toast.opacity();
        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -40.0])
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(&toast.message).size(self.theme.small_size));
                });
            });
        ctx.request_repaint();
    }
}

/// Remove navigation key presses from this frame's input, so a focused button
/// does not also react to Space.
fn take_nav_keys(input: &mut egui::InputState) -> Vec<NavKey> {
    let bindings = [
        (egui::Key::ArrowRight, NavKey::Right),
        (egui::Key::Space, NavKey::Space),
        (egui::Key::ArrowLeft, NavKey::Left),
        (egui::Key::Escape, NavKey::Escape),
    ];
    bindings
        .into_iter()
        .filter(|(key, _)| input.consume_key(egui::Modifiers::NONE, *key))
        .map(|(_, nav)| nav)
        .collect()
}

impl eframe::App for PresentationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        let now = Instant::now();
        self.session.tick(now);
        if let Some(remaining) = self.session.time_until_advance(now) {
            ctx.request_repaint_after(remaining);
        }

        // Collect actions during drawing, apply them afterwards
        let mut actions: Vec<Action> = Vec::new();
        self.draw_header(ctx, &mut actions);
        self.draw_footer(ctx, &mut actions);
        self.draw_navigation(ctx, &mut actions);
        self.draw_slide_area(ctx, &mut actions);
        self.draw_link_editor(ctx);
        self.draw_error(ctx);
        self.draw_toast(ctx);

        if !actions.is_empty() {
            for action in actions {
                log::trace!("Applying {action:?}");
                self.apply(action);
            }
            ctx.request_repaint();
        }
    }
}

pub fn run(
    file: Option<PathBuf>,
    windowed: bool,
    start_slide: Option<usize>,
    autoplay: bool,
) -> anyhow::Result<()> {
    let config = Config::load_or_default();

    let presentation = match &file {
        Some(path) => document::read(path)?,
        None => default_presentation(),
    };
    let mut session = Session::new(presentation);

    // CLI flag overrides config; both are 1-indexed
    if let Some(slide) = start_slide.or(config.start_slide()) {
        let index = slide.saturating_sub(1).min(session.slide_count() - 1);
        session.go_to(index);
    }
    if autoplay {
        session.set_autoplay(true);
    }

    let theme = Theme::from_name(config.theme_name());
    let export_dir = config.export_dir().map(PathBuf::from);
    let title = format!("deckedit \u{2014} {}", session.presentation().title);

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1440.0, 900.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    log::info!(
        "Starting with {} slide(s){}",
        session.slide_count(),
        if autoplay { ", auto-play on" } else { "" }
    );

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(PresentationApp::new(session, theme, export_dir)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
