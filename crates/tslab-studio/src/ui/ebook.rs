use crate::colors;
use crate::lessons::ebook::EBOOK_PAGES;
use crate::state::StudioApp;
use crate::ui_constants::UiConstants;
use eframe::egui;
use egui::{Color32, RichText, Sense, Stroke, vec2};
use rust_i18n::t;

/// Paginated e-book: cover, content pages, back cover, with prev/next
/// buttons and an indicator-dot row.
pub fn render(app: &mut StudioApp, ui: &mut egui::Ui) {
    let palette = colors::for_theme(app.settings.theme);
    let total = EBOOK_PAGES.len() + 2;
    let page = app.ebook.page.min(total - 1);

    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(t!("ebook.title").as_ref()).color(palette.heading));
        ui.label(RichText::new(t!("ebook.subtitle").as_ref()).color(palette.muted));
        ui.add_space(12.0);

        let size = vec2(UiConstants::EBOOK_PAGE_WIDTH, UiConstants::EBOOK_PAGE_HEIGHT);
        let is_cover = page == 0 || page == total - 1;
        let fill = if is_cover {
            if page == 0 {
                palette.cover_top
            } else {
                palette.cover_bottom
            }
        } else {
            palette.panel_background
        };

        egui::Frame::new()
            .fill(fill)
            .corner_radius(8.0)
            .inner_margin(32.0)
            .stroke(Stroke::new(1.0, palette.muted))
            .show(ui, |ui| {
                ui.set_min_size(size - vec2(64.0, 64.0));
                ui.set_max_size(size - vec2(64.0, 64.0));
                render_page(ui, page, total, palette);
            });

        ui.add_space(16.0);

        ui.horizontal(|ui| {
            // Center the control row under the page.
            let controls_width = 420.0;
            let pad = (ui.available_width() - controls_width).max(0.0) / 2.0;
            ui.add_space(pad);

            if ui
                .add_enabled(page > 0, egui::Button::new(format!("◀ {}", t!("lesson.prev"))))
                .clicked()
            {
                app.ebook.page = page - 1;
            }

            ui.vertical(|ui| {
                ui.label(
                    RichText::new(
                        t!("ebook.page_label", current = page + 1, total = total).as_ref(),
                    )
                    .color(palette.heading)
                    .strong(),
                );
                dot_row(ui, page, total, palette.accent, palette.muted);
            });

            if ui
                .add_enabled(
                    page + 1 < total,
                    egui::Button::new(format!("{} ▶", t!("lesson.next"))),
                )
                .clicked()
            {
                app.ebook.page = page + 1;
            }
        });
    });
}

fn render_page(ui: &mut egui::Ui, page: usize, total: usize, palette: &colors::ColorPalette) {
    if page == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(140.0);
            ui.label(RichText::new("📘").size(64.0));
            ui.heading(
                RichText::new(t!("ebook.cover_title").as_ref())
                    .color(Color32::WHITE)
                    .size(36.0),
            );
            ui.heading(
                RichText::new(t!("ebook.cover_subtitle").as_ref())
                    .color(Color32::from_white_alpha(230))
                    .size(24.0),
            );
            ui.add_space(40.0);
            ui.label(
                RichText::new(t!("ebook.cover_hint").as_ref())
                    .color(Color32::from_white_alpha(180)),
            );
        });
        return;
    }

    if page == total - 1 {
        ui.vertical_centered(|ui| {
            ui.add_space(220.0);
            ui.heading(
                RichText::new(t!("ebook.back_cover").as_ref())
                    .color(Color32::WHITE)
                    .size(28.0),
            );
            ui.add_space(16.0);
            ui.label(
                RichText::new(t!("ebook.back_cover_hint").as_ref())
                    .color(Color32::from_white_alpha(200)),
            );
        });
        return;
    }

    let content = &EBOOK_PAGES[page - 1];
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.heading(RichText::new(content.title).color(palette.heading).size(20.0));
    });
    ui.add_space(16.0);
    ui.label(RichText::new(content.body).color(palette.body_text));
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.label(RichText::new(format!("Page {page}")).color(palette.muted).small());
    });
}

fn dot_row(ui: &mut egui::Ui, page: usize, total: usize, active: Color32, inactive: Color32) {
    ui.horizontal(|ui| {
        for index in 0..total {
            let width = if index == page {
                UiConstants::EBOOK_ACTIVE_DOT_WIDTH
            } else {
                UiConstants::EBOOK_DOT_WIDTH
            };
            let (rect, _) = ui.allocate_exact_size(vec2(width, 5.0), Sense::hover());
            let color = if index == page { active } else { inactive };
            ui.painter().rect_filled(rect, 3.0, color);
        }
    });
}
