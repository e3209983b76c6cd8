use crate::colors;
use crate::lessons::{self, EBOOK_KEY, Section};
use crate::state::StudioApp;
use crate::ui::playground::PlaygroundAction;
use crate::ui_constants::UiConstants;
use eframe::egui;
use egui::RichText;
use rust_i18n::t;

impl StudioApp {
    pub fn render_central_panel(&mut self, ctx: &egui::Context) {
        let palette = colors::for_theme(self.settings.theme);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(palette.page_background)
                    .inner_margin(16.0),
            )
            .show(ctx, |ui| {
                if self.current_lesson.key == EBOOK_KEY {
                    self.render_ebook(ui);
                } else {
                    self.render_lesson_page(ui);
                }
            });
    }

    fn render_lesson_page(&mut self, ui: &mut egui::Ui) {
        let palette = colors::for_theme(self.settings.theme);
        let dark_theme = self.settings.theme.is_dark();
        let lesson = self.current_lesson;

        egui::ScrollArea::vertical()
            .id_salt(lesson.key)
            .show(ui, |ui| {
                ui.set_max_width(UiConstants::LESSON_MAX_WIDTH);

                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(t!(lesson.title_key).as_ref())
                            .color(palette.heading)
                            .size(self.settings.font_size * 1.5),
                    );
                    if self.progress.is_completed(lesson.key) {
                        ui.colored_label(
                            palette.solution_badge,
                            format!("✓ {}", t!("lesson.completed_badge")),
                        );
                    }
                });
                ui.add_space(8.0);

                if let Some(error) = &self.toolchain_error {
                    egui::Frame::new()
                        .fill(palette.error_background)
                        .stroke(egui::Stroke::new(1.0, palette.error_border))
                        .corner_radius(4.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.colored_label(
                                palette.error_text,
                                t!("playground.toolchain_missing", error = error).as_ref(),
                            );
                        });
                    ui.add_space(8.0);
                }

                let sandbox = self.sandbox.clone();
                let mut widget_index = 0;
                let mut actions: Vec<PlaygroundAction> = Vec::new();

                for section in lessons::lesson_sections(lesson.key) {
                    match section {
                        Section::Heading(text) => {
                            ui.add_space(12.0);
                            ui.heading(RichText::new(*text).color(palette.heading));
                            ui.add_space(4.0);
                        }
                        Section::Text(text) => {
                            ui.label(RichText::new(*text).color(palette.body_text));
                            ui.add_space(4.0);
                        }
                        Section::Code(code) => {
                            ui.add_space(4.0);
                            egui::Frame::new()
                                .fill(palette.code_background)
                                .corner_radius(4.0)
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    ui.set_width(ui.available_width());
                                    ui.label(
                                        RichText::new(*code)
                                            .monospace()
                                            .color(palette.body_text),
                                    );
                                });
                            ui.add_space(4.0);
                        }
                        Section::Playground(_) => {
                            if let Some(widget) = self.widgets.get_mut(widget_index) {
                                ui.add_space(8.0);
                                actions.push(widget.ui(
                                    ui,
                                    sandbox.as_ref(),
                                    palette,
                                    dark_theme,
                                    self.settings.max_output_lines,
                                ));
                                ui.add_space(8.0);
                            }
                            widget_index += 1;
                        }
                    }
                }

                for action in actions {
                    match action {
                        PlaygroundAction::SaveDraft { title, code } => {
                            self.save_widget_draft(title, code);
                        }
                        PlaygroundAction::ClearDraft { title } => {
                            self.clear_widget_draft(title);
                        }
                        PlaygroundAction::None => {}
                    }
                }

                ui.add_space(16.0);
                ui.separator();
                self.render_lesson_footer(ui);
                ui.add_space(24.0);
            });
    }

    fn render_lesson_footer(&mut self, ui: &mut egui::Ui) {
        let lesson = self.current_lesson;

        ui.horizontal(|ui| {
            let complete_label = if self.progress.is_completed(lesson.key) {
                t!("lesson.mark_incomplete")
            } else {
                t!("lesson.mark_complete")
            };
            if ui.button(complete_label.as_ref()).clicked() {
                self.toggle_lesson_complete();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(next) = lessons::next_lesson(lesson.key)
                    && ui
                        .button(format!("{} ▶", t!("lesson.next")))
                        .clicked()
                {
                    self.open_lesson(next);
                }
                if let Some(prev) = lessons::prev_lesson(lesson.key)
                    && ui
                        .button(format!("◀ {}", t!("lesson.prev")))
                        .clicked()
                {
                    self.open_lesson(prev);
                }
            });
        });
    }
}
