use crate::progress::ProgressStore;
use crate::state::StudioApp;
use rust_i18n::t;

impl StudioApp {
    pub fn export_progress(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("tslab-progress.json")
            .save_file()
        {
            self.status_line = Some(match self.progress.save(&path) {
                Ok(()) => {
                    t!("system_messages.progress_saved", path = path.display()).to_string()
                }
                Err(error) => t!("system_messages.failed_save", error = error).to_string(),
            });
        }
    }

    pub fn import_progress(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        match std::fs::read_to_string(&path)
            .map_err(|err| err.to_string())
            .and_then(|json| {
                serde_json::from_str::<ProgressStore>(&json).map_err(|err| err.to_string())
            }) {
            Ok(imported) => {
                self.progress = imported;
                self.persist_progress_silently();
                // Re-open the current lesson so imported drafts mount.
                self.open_lesson(self.current_lesson);
                self.status_line = Some(
                    t!("system_messages.progress_loaded", path = path.display()).to_string(),
                );
            }
            Err(error) => {
                self.status_line =
                    Some(t!("system_messages.failed_load", error = error).to_string());
            }
        }
    }
}
