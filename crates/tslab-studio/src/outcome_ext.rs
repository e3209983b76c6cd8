use crate::colors::ColorPalette;
use tslab_core::RunState;

pub trait RunStateExt {
    fn status_color(&self, palette: &ColorPalette) -> egui::Color32;
}

impl RunStateExt for RunState {
    fn status_color(&self, palette: &ColorPalette) -> egui::Color32 {
        match self {
            RunState::Idle => palette.muted,
            RunState::Running => palette.warning,
            RunState::Succeeded => palette.solution_badge,
            RunState::TypeFailed | RunState::RuntimeFailed => palette.danger,
        }
    }
}
