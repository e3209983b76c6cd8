use crate::colors::ColorPalette;
use crate::outcome_ext::RunStateExt;
use crate::state::PlaygroundWidget;
use crate::ui::syntax;
use crate::ui_constants::UiConstants;
use eframe::egui;
use egui::RichText;
use egui_code_editor::{CodeEditor, ColorTheme};
use rust_i18n::t;
use std::sync::Arc;
use tslab_core::ExecutionSandbox;

/// Caps the displayed result at the configured line budget; the full
/// capture still lives in the controller.
fn clipped_output(output: &str, max_lines: usize) -> String {
    let mut lines = output.lines();
    let mut shown: Vec<&str> = lines.by_ref().take(max_lines).collect();
    if lines.next().is_some() {
        shown.push("…");
    }
    shown.join("\n")
}

/// Side effects a widget cannot apply itself because they touch
/// app-level state (the progress store).
pub enum PlaygroundAction {
    None,
    SaveDraft { title: &'static str, code: String },
    /// Reset also forgets the stored draft; otherwise it would resurrect
    /// on the next mount and undo the reset.
    ClearDraft { title: &'static str },
}

impl PlaygroundWidget {
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        sandbox: Option<&Arc<ExecutionSandbox>>,
        palette: &ColorPalette,
        dark_theme: bool,
        max_output_lines: usize,
    ) -> PlaygroundAction {
        let mut action = PlaygroundAction::None;

        egui::Frame::group(ui.style())
            .fill(palette.panel_background)
            .show(ui, |ui| {
                self.header_row(ui, sandbox, palette, &mut action);
                ui.add_space(4.0);
                self.editor(ui, dark_theme);
                self.result_panels(ui, palette, max_output_lines);
            });

        action
    }

    fn header_row(
        &mut self,
        ui: &mut egui::Ui,
        sandbox: Option<&Arc<ExecutionSandbox>>,
        palette: &ColorPalette,
        action: &mut PlaygroundAction,
    ) {
        ui.horizontal(|ui| {
            ui.strong(self.spec.title);
            ui.add_space(4.0);
            let status = self.controller.state();
            ui.colored_label(status.status_color(palette), "●");

            if self.controller.session().is_viewing_reference() {
                ui.colored_label(
                    palette.solution_badge,
                    format!("✅ {}", t!("playground.solution_badge")),
                );
            }
            if self.draft_notice > 0.0 {
                ui.colored_label(palette.muted, t!("playground.draft_saved").as_ref());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let run_clicked = ui
                    .add_enabled(
                        sandbox.is_some() && !self.controller.state().is_running(),
                        egui::Button::new(
                            RichText::new(format!("▶ {}", t!("playground.run")))
                                .color(egui::Color32::WHITE),
                        )
                        .fill(palette.accent),
                    )
                    .clicked();
                if run_clicked && let Some(sandbox) = sandbox {
                    self.controller.run(sandbox);
                }

                if self.controller.session().has_reference() {
                    let (label, color) = if self.controller.session().is_viewing_reference() {
                        (t!("playground.hide_solution"), palette.danger)
                    } else {
                        (t!("playground.show_solution"), palette.warning)
                    };
                    if ui
                        .button(RichText::new(label.as_ref()).color(color))
                        .clicked()
                    {
                        self.controller.toggle_reference();
                    }
                }

                if ui.button(t!("playground.save_draft").as_ref()).clicked() {
                    *action = PlaygroundAction::SaveDraft {
                        title: self.spec.title,
                        code: self.controller.session().draft_source().to_string(),
                    };
                    self.draft_notice = UiConstants::DRAFT_NOTICE_SECONDS;
                }

                if ui.button(t!("playground.reset").as_ref()).clicked() {
                    self.controller.reset();
                    *action = PlaygroundAction::ClearDraft {
                        title: self.spec.title,
                    };
                }
            });
        });
    }

    fn editor(&mut self, ui: &mut egui::Ui, dark_theme: bool) {
        let theme = if dark_theme {
            ColorTheme::GITHUB_DARK
        } else {
            ColorTheme::GITHUB_LIGHT
        };

        let mut buffer = self.controller.session().current_source().to_string();
        CodeEditor::default()
            .id_source(self.controller.session().id().as_str())
            .with_rows(self.spec.editor_rows)
            .with_fontsize(UiConstants::EDITOR_FONT_SIZE)
            .with_theme(theme)
            .with_syntax(syntax::typescript())
            .with_numlines(true)
            .show(ui, &mut buffer);

        if buffer != self.controller.session().current_source() {
            self.controller.edit(buffer);
        }
    }

    fn result_panels(&self, ui: &mut egui::Ui, palette: &ColorPalette, max_output_lines: usize) {
        if self.controller.state().is_running() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.colored_label(palette.muted, t!("playground.running").as_ref());
            });
            return;
        }

        if !self.controller.output().is_empty() {
            ui.add_space(6.0);
            egui::Frame::new()
                .fill(palette.success_background)
                .stroke(egui::Stroke::new(1.0, palette.success_border))
                .corner_radius(4.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.colored_label(
                        palette.success_text,
                        RichText::new(t!("playground.result").as_ref()).strong(),
                    );
                    ui.colored_label(
                        palette.success_text,
                        RichText::new(clipped_output(self.controller.output(), max_output_lines))
                            .monospace(),
                    );
                });
        }

        if !self.controller.error().is_empty() {
            ui.add_space(6.0);
            egui::Frame::new()
                .fill(palette.error_background)
                .stroke(egui::Stroke::new(1.0, palette.error_border))
                .corner_radius(4.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.colored_label(
                        palette.error_text,
                        RichText::new(t!("playground.error").as_ref()).strong(),
                    );
                    ui.colored_label(
                        palette.error_text,
                        RichText::new(self.controller.error()).monospace(),
                    );
                });
        }
    }
}
