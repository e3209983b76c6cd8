pub struct UiConstants;

impl UiConstants {
    pub const LEFT_PANEL_WIDTH: f32 = 240.0;
    pub const LESSON_MAX_WIDTH: f32 = 900.0;

    pub const DEFAULT_FONT_SIZE: f32 = 16.0;
    pub const SMALL_FONT_MULTIPLIER: f32 = 0.85;
    pub const EDITOR_FONT_SIZE: f32 = 14.0;

    pub const DEFAULT_OUTPUT_LINES: usize = 100;
    pub const MAX_OUTPUT_LINES: usize = 10_000;

    pub const EBOOK_PAGE_WIDTH: f32 = 450.0;
    pub const EBOOK_PAGE_HEIGHT: f32 = 600.0;
    pub const EBOOK_DOT_WIDTH: f32 = 20.0;
    pub const EBOOK_ACTIVE_DOT_WIDTH: f32 = 30.0;

    pub const DRAFT_NOTICE_SECONDS: f32 = 2.0;

    pub const SETTINGS_FILE: &'static str = "settings.json";
    pub const PROGRESS_FILE: &'static str = "progress.json";
}
