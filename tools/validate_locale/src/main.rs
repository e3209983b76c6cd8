use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

fn main() {
    let used_keys = collect_used_keys();
    let locale_dir = "crates/tslab-studio/locales";
    let mut locale_keys_map: HashMap<String, HashSet<String>> = HashMap::new();

    for entry in fs::read_dir(locale_dir).expect("Failed to read locales directory") {
        let entry = entry.expect("Failed to read entry");
        let path = entry.path();

        if path.is_file() && path.extension().map(|e| e == "yml").unwrap_or(false) {
            let filename = path.file_name().unwrap().to_string_lossy().to_string();
            let lang = filename
                .strip_suffix(".yml")
                .unwrap_or(&filename)
                .to_string();
            let keys = load_locale_keys(&path);
            locale_keys_map.insert(lang, keys);
        }
    }

    println!("=== Localization Validation Report ===\n");

    let mut missing_any = false;

    for (lang, keys) in &locale_keys_map {
        let missing: Vec<_> = used_keys.difference(keys).collect();
        if !missing.is_empty() {
            missing_any = true;
            println!("✗ Missing keys in {}.yml:", lang);
            for key in &missing {
                println!("  - {}", key);
            }
            println!();
        }
    }

    if !missing_any {
        println!("✓ All required localization keys are present in all locale files.");
    }

    println!("\nSummary:");
    println!("  Used keys: {}", used_keys.len());
    for (lang, keys) in &locale_keys_map {
        println!("  {}.yml keys: {}", lang, keys.len());
    }
}

/// Collects every key that the studio can ask the locale table for:
/// `t!("...")` call sites plus the lesson catalog's `title_key` entries.
fn collect_used_keys() -> HashSet<String> {
    let mut keys = HashSet::new();
    collect_from_dir(Path::new("crates/tslab-studio/src"), &mut keys);
    keys
}

fn collect_from_dir(dir: &Path, keys: &mut HashSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.is_dir() {
            collect_from_dir(&path, keys);
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            if let Ok(content) = fs::read_to_string(&path) {
                collect_from_source(&content, keys);
            }
        }
    }
}

fn collect_from_source(content: &str, keys: &mut HashSet<String>) {
    for (pattern, offset) in [("t!(\"", 4), ("title_key: \"", 12)] {
        let mut rest = content;
        while let Some(start) = rest.find(pattern) {
            rest = &rest[start + offset..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if key.contains('.') {
                    keys.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }
}

/// Flattens a two-space-indented YAML file into dotted keys. Only the
/// simple subset rust-i18n uses is understood; `_version` and other
/// underscore keys are skipped.
fn load_locale_keys(path: &Path) -> HashSet<String> {
    let mut keys = HashSet::new();
    let Ok(content) = fs::read_to_string(path) else {
        return keys;
    };

    let mut stack: Vec<String> = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim_end();
        if trimmed.trim_start().is_empty() || trimmed.trim_start().starts_with('#') {
            continue;
        }
        let Some(colon) = trimmed.find(':') else {
            continue;
        };

        let indent = trimmed.len() - trimmed.trim_start().len();
        let depth = indent / 2;
        let key = trimmed[..colon].trim().to_string();
        let value = trimmed[colon + 1..].trim();

        if key.starts_with('_') {
            continue;
        }

        stack.truncate(depth);
        if value.is_empty() {
            stack.push(key);
        } else {
            let mut full = stack.clone();
            full.push(key);
            keys.insert(full.join("."));
        }
    }

    keys
}
