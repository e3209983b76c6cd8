use crate::state::StudioApp;
use crate::ui_constants::UiConstants;
use eframe::egui;
use std::time::Duration;

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_style(ctx);
        self.process_playground_events();

        let dt = ctx.input(|i| i.stable_dt);
        for widget in &mut self.widgets {
            if widget.draft_notice > 0.0 {
                widget.draft_notice -= dt;
            }
        }

        self.render_menu_bar(ctx);
        self.render_lesson_sidebar(ctx);
        self.render_central_panel(ctx);
        self.render_settings_dialog(ctx);
        self.handle_keyboard_shortcuts(ctx);

        // Run outcomes arrive on worker channels; keep polling while any
        // playground is in flight.
        if self
            .widgets
            .iter()
            .any(|widget| widget.controller.state().is_running())
        {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl StudioApp {
    pub fn process_playground_events(&mut self) {
        for widget in &mut self.widgets {
            widget.controller.poll();
        }
    }

    fn apply_style(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals = if self.settings.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(self.settings.font_size),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(self.settings.font_size),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::proportional(
                self.settings.font_size * UiConstants::SMALL_FONT_MULTIPLIER,
            ),
        );
        ctx.set_style(style);
    }
}
