pub mod ebook;
pub mod step1_basic_types;
pub mod step1_interface;
pub mod step1_type_alias;
pub mod step2_ui_basics;
pub mod step3_advanced_types;
pub mod step4_hooks;
pub mod step5_api;
pub mod step5_todo;

/// One entry in the lesson menu. `title_key` resolves through the locale
/// files; `order` is 1-based across the whole course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonInfo {
    pub key: &'static str,
    pub title_key: &'static str,
    pub order: usize,
}

/// Course order as authored: the advanced-types step is deliberately
/// scheduled before the UI-framework step.
pub const LESSONS: &[LessonInfo] = &[
    LessonInfo {
        key: "step1-1",
        title_key: "lessons.step1_1",
        order: 1,
    },
    LessonInfo {
        key: "step1-2",
        title_key: "lessons.step1_2",
        order: 2,
    },
    LessonInfo {
        key: "step1-3",
        title_key: "lessons.step1_3",
        order: 3,
    },
    LessonInfo {
        key: "step3",
        title_key: "lessons.step3",
        order: 4,
    },
    LessonInfo {
        key: "step2",
        title_key: "lessons.step2",
        order: 5,
    },
    LessonInfo {
        key: "step4",
        title_key: "lessons.step4",
        order: 6,
    },
    LessonInfo {
        key: "step5-todo",
        title_key: "lessons.step5_todo",
        order: 7,
    },
    LessonInfo {
        key: "step5-api",
        title_key: "lessons.step5_api",
        order: 8,
    },
    LessonInfo {
        key: "ebook",
        title_key: "lessons.ebook",
        order: 9,
    },
];

pub const EBOOK_KEY: &str = "ebook";

pub fn lesson_by_key(key: &str) -> Option<&'static LessonInfo> {
    LESSONS.iter().find(|lesson| lesson.key == key)
}

pub fn next_lesson(current_key: &str) -> Option<&'static LessonInfo> {
    let current = lesson_by_key(current_key)?;
    LESSONS.iter().find(|lesson| lesson.order == current.order + 1)
}

pub fn prev_lesson(current_key: &str) -> Option<&'static LessonInfo> {
    let current = lesson_by_key(current_key)?;
    let target = current.order.checked_sub(1)?;
    LESSONS.iter().find(|lesson| lesson.order == target)
}

/// A runnable snippet slot inside a lesson page.
#[derive(Debug, PartialEq, Eq)]
pub struct PlaygroundSpec {
    pub title: &'static str,
    pub default_code: &'static str,
    pub solution: Option<&'static str>,
    pub editor_rows: usize,
}

/// One block of a lesson page, rendered top to bottom.
#[derive(Debug, PartialEq, Eq)]
pub enum Section {
    Heading(&'static str),
    Text(&'static str),
    /// Read-only listing; shown but not executable.
    Code(&'static str),
    Playground(PlaygroundSpec),
}

/// Content lookup for every non-ebook lesson.
pub fn lesson_sections(key: &str) -> &'static [Section] {
    match key {
        "step1-1" => step1_basic_types::SECTIONS,
        "step1-2" => step1_interface::SECTIONS,
        "step1-3" => step1_type_alias::SECTIONS,
        "step3" => step3_advanced_types::SECTIONS,
        "step2" => step2_ui_basics::SECTIONS,
        "step4" => step4_hooks::SECTIONS,
        "step5-todo" => step5_todo::SECTIONS,
        "step5-api" => step5_api::SECTIONS,
        _ => &[],
    }
}

pub fn playground_specs(key: &str) -> Vec<&'static PlaygroundSpec> {
    lesson_sections(key)
        .iter()
        .filter_map(|section| match section {
            Section::Playground(spec) => Some(spec),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_are_contiguous() {
        let mut orders: Vec<usize> = LESSONS.iter().map(|l| l.order).collect();
        orders.sort_unstable();
        assert_eq!(orders, (1..=LESSONS.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in LESSONS.iter().enumerate() {
            for b in &LESSONS[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_navigation_chain() {
        assert_eq!(next_lesson("step1-1").map(|l| l.key), Some("step1-2"));
        assert_eq!(prev_lesson("step1-2").map(|l| l.key), Some("step1-1"));
        assert_eq!(next_lesson("ebook"), None);
        assert_eq!(prev_lesson("step1-1"), None);
        assert_eq!(next_lesson("nope"), None);
    }

    #[test]
    fn test_advanced_types_precede_ui_basics() {
        let step3 = lesson_by_key("step3").expect("step3 exists");
        let step2 = lesson_by_key("step2").expect("step2 exists");
        assert!(step3.order < step2.order);
    }

    #[test]
    fn test_every_content_lesson_has_sections() {
        for lesson in LESSONS.iter().filter(|l| l.key != EBOOK_KEY) {
            assert!(
                !lesson_sections(lesson.key).is_empty(),
                "lesson {} has no content",
                lesson.key
            );
        }
    }

    #[test]
    fn test_playground_titles_unique_within_lesson() {
        for lesson in LESSONS {
            let specs = playground_specs(lesson.key);
            for (i, a) in specs.iter().enumerate() {
                for b in &specs[i + 1..] {
                    assert_ne!(a.title, b.title, "duplicate title in {}", lesson.key);
                }
            }
        }
    }
}
