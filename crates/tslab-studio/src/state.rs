use crate::dialogs::DialogState;
use crate::lessons::{self, LessonInfo, PlaygroundSpec};
use crate::progress::{self, ProgressStore};
use crate::settings::AppSettings;
use crate::ui_constants::UiConstants;
use std::sync::Arc;
use tslab_core::{ExecutionSandbox, PlaygroundController, SnippetSession};

/// One mounted playground: the authored spec plus its live controller.
/// Widgets are created when a lesson opens and dropped when it closes;
/// only explicitly saved drafts outlive the visit.
pub struct PlaygroundWidget {
    pub spec: &'static PlaygroundSpec,
    pub controller: PlaygroundController,
    pub draft_notice: f32,
}

impl PlaygroundWidget {
    pub fn new(spec: &'static PlaygroundSpec, saved_draft: Option<&str>) -> Self {
        let session = SnippetSession::new(spec.default_code, spec.solution.map(str::to_string));
        let mut controller = PlaygroundController::new(session);
        if let Some(draft) = saved_draft {
            controller.restore_draft(draft);
        }
        Self {
            spec,
            controller,
            draft_notice: 0.0,
        }
    }
}

#[derive(Default)]
pub struct EbookState {
    pub page: usize,
}

pub struct StudioApp {
    pub settings: AppSettings,
    pub progress: ProgressStore,
    pub current_lesson: &'static LessonInfo,
    pub widgets: Vec<PlaygroundWidget>,
    pub sandbox: Option<Arc<ExecutionSandbox>>,
    pub toolchain_error: Option<String>,
    pub dialogs: DialogState,
    pub ebook: EbookState,
    pub status_line: Option<String>,
}

impl StudioApp {
    pub fn new(sandbox: Result<Arc<ExecutionSandbox>, String>) -> Self {
        let settings = AppSettings::load();
        let progress =
            ProgressStore::load(&progress::data_file(UiConstants::PROGRESS_FILE));
        let (sandbox, toolchain_error) = match sandbox {
            Ok(sandbox) => (Some(sandbox), None),
            Err(error) => (None, Some(error)),
        };

        let mut app = Self {
            settings,
            progress,
            current_lesson: &lessons::LESSONS[0],
            widgets: Vec::new(),
            sandbox,
            toolchain_error,
            dialogs: DialogState::default(),
            ebook: EbookState::default(),
            status_line: None,
        };
        app.open_lesson(&lessons::LESSONS[0]);
        app
    }

    pub fn open_lesson(&mut self, info: &'static LessonInfo) {
        self.current_lesson = info;
        self.progress.visit(info.key);
        self.persist_progress_silently();

        self.widgets = lessons::playground_specs(info.key)
            .into_iter()
            .map(|spec| {
                PlaygroundWidget::new(spec, self.progress.saved_code(info.key, spec.title))
            })
            .collect();
        self.ebook.page = 0;
    }

    pub fn open_next_lesson(&mut self) {
        if let Some(next) = lessons::next_lesson(self.current_lesson.key) {
            self.open_lesson(next);
        }
    }

    pub fn open_prev_lesson(&mut self) {
        if let Some(prev) = lessons::prev_lesson(self.current_lesson.key) {
            self.open_lesson(prev);
        }
    }

    pub fn toggle_lesson_complete(&mut self) {
        let key = self.current_lesson.key;
        if self.progress.is_completed(key) {
            self.progress.mark_incomplete(key);
        } else {
            self.progress.mark_complete(key);
        }
        self.persist_progress_silently();
    }

    pub fn save_widget_draft(&mut self, playground_title: &str, code: String) {
        self.progress
            .save_code(self.current_lesson.key, playground_title, code);
        self.persist_progress_silently();
    }

    pub fn clear_widget_draft(&mut self, playground_title: &str) {
        self.progress
            .clear_saved_code(self.current_lesson.key, playground_title);
        self.persist_progress_silently();
    }

    pub fn persist_progress_silently(&self) {
        let _ = self
            .progress
            .save(&progress::data_file(UiConstants::PROGRESS_FILE));
    }
}
