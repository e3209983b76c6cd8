use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-lesson bookkeeping plus the learner's explicitly saved drafts.
/// Persisted as JSON; playground output is never stored.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProgressStore {
    pub lessons: IndexMap<String, LessonProgress>,
    pub saved_code: IndexMap<String, IndexMap<String, String>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub completed: bool,
    pub last_visited: Option<u64>,
}

impl ProgressStore {
    pub fn mark_complete(&mut self, lesson_key: &str) {
        let entry = self.lessons.entry(lesson_key.to_string()).or_default();
        entry.completed = true;
        entry.last_visited = Some(unix_timestamp());
    }

    pub fn mark_incomplete(&mut self, lesson_key: &str) {
        self.lessons.entry(lesson_key.to_string()).or_default().completed = false;
    }

    pub fn visit(&mut self, lesson_key: &str) {
        self.lessons
            .entry(lesson_key.to_string())
            .or_default()
            .last_visited = Some(unix_timestamp());
    }

    pub fn is_completed(&self, lesson_key: &str) -> bool {
        self.lessons
            .get(lesson_key)
            .is_some_and(|progress| progress.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.lessons.values().filter(|p| p.completed).count()
    }

    pub fn save_code(&mut self, lesson_key: &str, playground_title: &str, code: String) {
        self.saved_code
            .entry(lesson_key.to_string())
            .or_default()
            .insert(playground_title.to_string(), code);
    }

    pub fn saved_code(&self, lesson_key: &str, playground_title: &str) -> Option<&str> {
        self.saved_code
            .get(lesson_key)
            .and_then(|per_lesson| per_lesson.get(playground_title))
            .map(String::as_str)
    }

    pub fn clear_saved_code(&mut self, lesson_key: &str, playground_title: &str) {
        if let Some(per_lesson) = self.saved_code.get_mut(lesson_key) {
            per_lesson.shift_remove(playground_title);
        }
    }

    pub fn load(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|err| err.to_string())?;
        std::fs::write(path, json).map_err(|err| err.to_string())
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Application data directory, created on first use. Overridable for
/// tests and portable installs via TSLAB_DATA_DIR.
pub fn data_dir() -> PathBuf {
    let dir = std::env::var_os("TSLAB_DATA_DIR").map_or_else(
        || {
            std::env::var_os("HOME").map_or_else(
                || PathBuf::from("."),
                |home| PathBuf::from(home).join(".tslab"),
            )
        },
        PathBuf::from,
    );
    let _ = std::fs::create_dir_all(&dir);
    dir
}

pub fn data_file(name: &str) -> PathBuf {
    data_dir().join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_count() {
        let mut store = ProgressStore::default();
        assert_eq!(store.completed_count(), 0);

        store.visit("step1-1");
        assert!(!store.is_completed("step1-1"));

        store.mark_complete("step1-1");
        store.mark_complete("step1-2");
        assert_eq!(store.completed_count(), 2);

        store.mark_incomplete("step1-1");
        assert_eq!(store.completed_count(), 1);
        assert!(!store.is_completed("step1-1"));
    }

    #[test]
    fn test_saved_code_round_trip() {
        let mut store = ProgressStore::default();
        store.save_code("step1-1", "Exercises: basic types", "let x = 1;".to_string());
        assert_eq!(
            store.saved_code("step1-1", "Exercises: basic types"),
            Some("let x = 1;")
        );
        assert_eq!(store.saved_code("step1-1", "other"), None);

        store.clear_saved_code("step1-1", "Exercises: basic types");
        assert_eq!(store.saved_code("step1-1", "Exercises: basic types"), None);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("progress.json");

        let mut store = ProgressStore::default();
        store.mark_complete("step3");
        store.save_code("step3", "Generics", "function id<T>(x: T) { return x; }".to_string());
        store.save(&path).expect("save progress");

        let loaded = ProgressStore::load(&path);
        assert!(loaded.is_completed("step3"));
        assert_eq!(
            loaded.saved_code("step3", "Generics"),
            Some("function id<T>(x: T) { return x; }")
        );
    }

    #[test]
    fn test_load_missing_file_yields_default() {
        let loaded = ProgressStore::load(Path::new("/nonexistent/progress.json"));
        assert_eq!(loaded.completed_count(), 0);
        assert!(loaded.saved_code.is_empty());
    }
}
