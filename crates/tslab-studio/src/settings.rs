use crate::ui_constants::UiConstants;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub font_size: f32,
    pub language: String,
    pub theme: Theme,
    pub max_output_lines: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_size: UiConstants::DEFAULT_FONT_SIZE,
            language: "en".to_string(),
            theme: Theme::Light,
            max_output_lines: UiConstants::DEFAULT_OUTPUT_LINES,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        let path = crate::progress::data_file(UiConstants::SETTINGS_FILE);
        std::fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), String> {
        let path = crate::progress::data_file(UiConstants::SETTINGS_FILE);
        let json = serde_json::to_string_pretty(self).map_err(|err| err.to_string())?;
        std::fs::write(path, json).map_err(|err| err.to_string())
    }
}
