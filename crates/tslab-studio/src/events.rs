use crate::lessons::{self, EBOOK_KEY};
use crate::state::StudioApp;
use eframe::egui;

impl StudioApp {
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let ctrl_next =
            ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::ArrowRight));
        let ctrl_prev =
            ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::ArrowLeft));

        if ctrl_next {
            self.open_next_lesson();
            return;
        }
        if ctrl_prev {
            self.open_prev_lesson();
            return;
        }

        // On the e-book page bare arrows flip pages, like clicking the
        // page edges in the original viewer.
        if self.current_lesson.key == EBOOK_KEY {
            let total = lessons::ebook::EBOOK_PAGES.len() + 2;
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight))
                && self.ebook.page + 1 < total
            {
                self.ebook.page += 1;
            }
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) && self.ebook.page > 0 {
                self.ebook.page -= 1;
            }
        }
    }
}
