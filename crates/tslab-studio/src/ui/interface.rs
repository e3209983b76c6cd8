use crate::colors;
use crate::lessons::LESSONS;
use crate::settings::Theme;
use crate::state::StudioApp;
use crate::ui_constants::UiConstants;
use eframe::egui;
use egui::RichText;
use rust_i18n::t;

impl StudioApp {
    pub fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button(t!("menu.file").as_ref(), |ui| {
                    if ui.button(t!("menu.export_progress").as_ref()).clicked() {
                        self.export_progress();
                        ui.close();
                    }
                    if ui.button(t!("menu.import_progress").as_ref()).clicked() {
                        self.import_progress();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button(t!("menu.settings").as_ref()).clicked() {
                        self.dialogs.settings.show = true;
                        ui.close();
                    }
                });

                ui.menu_button(t!("menu.view").as_ref(), |ui| {
                    if ui.button(t!("menu.toggle_theme").as_ref()).clicked() {
                        self.settings.theme = self.settings.theme.toggled();
                        let _ = self.settings.save();
                        ui.close();
                    }
                });

                ui.separator();

                if let Some(status) = &self.status_line {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(status.clone());
                    });
                }
            });
        });
    }

    pub fn render_lesson_sidebar(&mut self, ctx: &egui::Context) {
        let palette = colors::for_theme(self.settings.theme);

        egui::SidePanel::left("lesson_panel")
            .default_width(UiConstants::LEFT_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading(t!("sidebar.lessons").as_ref());

                let done = self.progress.completed_count();
                let total = LESSONS.len();
                ui.small(t!("sidebar.progress", done = done, total = total).as_ref());
                #[allow(clippy::cast_precision_loss)]
                ui.add(egui::ProgressBar::new(done as f32 / total as f32).desired_height(6.0));
                ui.separator();

                let mut clicked_lesson = None;
                for lesson in LESSONS {
                    let selected = lesson.key == self.current_lesson.key;
                    let mut label = format!("{}. {}", lesson.order, t!(lesson.title_key));
                    if self.progress.is_completed(lesson.key) {
                        label.push_str(" ✓");
                    }
                    let text = if selected {
                        RichText::new(label).color(palette.accent)
                    } else {
                        RichText::new(label)
                    };
                    if ui.selectable_label(selected, text).clicked() && !selected {
                        clicked_lesson = Some(lesson);
                    }
                }
                if let Some(lesson) = clicked_lesson {
                    self.open_lesson(lesson);
                }
            });
    }

    pub fn render_settings_dialog(&mut self, ctx: &egui::Context) {
        if !self.dialogs.settings.show {
            return;
        }

        if self.dialogs.settings.temp_settings.is_none() {
            self.dialogs.settings.temp_settings = Some(self.settings.clone());
        }

        let mut close_dialog = false;
        let mut apply = false;

        egui::Window::new(t!("settings.title").as_ref())
            .id(egui::Id::new("settings_window"))
            .open(&mut self.dialogs.settings.show)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(temp) = &mut self.dialogs.settings.temp_settings {
                    ui.label(t!("settings.font_size").as_ref());
                    ui.add(egui::Slider::new(&mut temp.font_size, 10.0..=28.0).text("pt"));
                    ui.separator();

                    ui.label(t!("settings.language").as_ref());
                    ui.horizontal(|ui| {
                        for (code, name) in [("en", "English"), ("ko", "한국어")] {
                            if ui
                                .selectable_label(temp.language == code, name)
                                .clicked()
                            {
                                temp.language = code.to_string();
                            }
                        }
                    });
                    ui.separator();

                    ui.label(t!("settings.theme").as_ref());
                    ui.horizontal(|ui| {
                        if ui
                            .selectable_label(
                                temp.theme == Theme::Light,
                                t!("settings.theme_light").as_ref(),
                            )
                            .clicked()
                        {
                            temp.theme = Theme::Light;
                        }
                        if ui
                            .selectable_label(
                                temp.theme == Theme::Dark,
                                t!("settings.theme_dark").as_ref(),
                            )
                            .clicked()
                        {
                            temp.theme = Theme::Dark;
                        }
                    });
                    ui.separator();

                    ui.label(t!("settings.max_output_lines").as_ref());
                    ui.add(egui::Slider::new(
                        &mut temp.max_output_lines,
                        10..=UiConstants::MAX_OUTPUT_LINES,
                    ));
                    ui.separator();

                    ui.horizontal(|ui| {
                        if ui.button(t!("settings.save").as_ref()).clicked() {
                            apply = true;
                            close_dialog = true;
                        }
                        if ui.button(t!("settings.cancel").as_ref()).clicked() {
                            close_dialog = true;
                        }
                    });
                }
            });

        if apply && let Some(temp) = self.dialogs.settings.temp_settings.take() {
            rust_i18n::set_locale(&temp.language);
            self.settings = temp;
            let _ = self.settings.save();
        }
        if close_dialog {
            self.dialogs.settings.show = false;
            self.dialogs.settings.temp_settings = None;
        }

        // Re-open next frame resets the temp copy.
        if !self.dialogs.settings.show {
            self.dialogs.settings.temp_settings = None;
        }
    }

    pub fn render_ebook(&mut self, ui: &mut egui::Ui) {
        crate::ui::ebook::render(self, ui);
    }
}
