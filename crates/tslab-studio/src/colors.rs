use crate::settings::Theme;
use egui::Color32;

/// Paired light/dark palette; values follow the original course styling
/// (indigo accent, green solution badge, antd-style result panels).
pub struct ColorPalette {
    pub page_background: Color32,
    pub panel_background: Color32,
    pub heading: Color32,
    pub body_text: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub code_background: Color32,
    pub success_background: Color32,
    pub success_border: Color32,
    pub success_text: Color32,
    pub error_background: Color32,
    pub error_border: Color32,
    pub error_text: Color32,
    pub solution_badge: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub cover_top: Color32,
    pub cover_bottom: Color32,
}

pub const LIGHT: ColorPalette = ColorPalette {
    page_background: Color32::from_rgb(0xf3, 0xf4, 0xf6),
    panel_background: Color32::WHITE,
    heading: Color32::from_rgb(0x1f, 0x29, 0x37),
    body_text: Color32::from_rgb(0x4b, 0x55, 0x63),
    muted: Color32::from_rgb(0x99, 0x99, 0x99),
    accent: Color32::from_rgb(0x63, 0x66, 0xf1),
    code_background: Color32::from_rgb(0xf6, 0xf8, 0xfa),
    success_background: Color32::from_rgb(0xf6, 0xff, 0xed),
    success_border: Color32::from_rgb(0xb7, 0xeb, 0x8f),
    success_text: Color32::from_rgb(0x13, 0x52, 0x12),
    error_background: Color32::from_rgb(0xff, 0xf2, 0xf0),
    error_border: Color32::from_rgb(0xff, 0xcc, 0xc7),
    error_text: Color32::from_rgb(0x5c, 0x1e, 0x1e),
    solution_badge: Color32::from_rgb(0x52, 0xc4, 0x1a),
    warning: Color32::from_rgb(0xfa, 0xad, 0x14),
    danger: Color32::from_rgb(0xff, 0x4d, 0x4f),
    cover_top: Color32::from_rgb(0x63, 0x66, 0xf1),
    cover_bottom: Color32::from_rgb(0x8b, 0x5c, 0xf6),
};

pub const DARK: ColorPalette = ColorPalette {
    page_background: Color32::from_rgb(0x17, 0x17, 0x17),
    panel_background: Color32::from_rgb(0x26, 0x26, 0x26),
    heading: Color32::from_rgb(0xe5, 0xe5, 0xe5),
    body_text: Color32::from_rgb(0xbf, 0xbf, 0xbf),
    muted: Color32::from_rgb(0x66, 0x66, 0x66),
    accent: Color32::from_rgb(0x63, 0x66, 0xf1),
    code_background: Color32::from_rgb(0x1e, 0x1e, 0x1e),
    success_background: Color32::from_rgb(0x16, 0x23, 0x12),
    success_border: Color32::from_rgb(0x27, 0x49, 0x16),
    success_text: Color32::from_rgb(0xb7, 0xeb, 0x8f),
    error_background: Color32::from_rgb(0x2c, 0x16, 0x18),
    error_border: Color32::from_rgb(0x5b, 0x25, 0x26),
    error_text: Color32::from_rgb(0xff, 0xcc, 0xc7),
    solution_badge: Color32::from_rgb(0x52, 0xc4, 0x1a),
    warning: Color32::from_rgb(0xfa, 0xad, 0x14),
    danger: Color32::from_rgb(0xff, 0x4d, 0x4f),
    cover_top: Color32::from_rgb(0x1e, 0x29, 0x3b),
    cover_bottom: Color32::from_rgb(0x0f, 0x17, 0x2a),
};

pub fn for_theme(theme: Theme) -> &'static ColorPalette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}
