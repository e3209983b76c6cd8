use crate::settings::AppSettings;

#[derive(Default)]
pub struct SettingsDialog {
    pub show: bool,
    pub temp_settings: Option<AppSettings>,
}

#[derive(Default)]
pub struct DialogState {
    pub settings: SettingsDialog,
}
