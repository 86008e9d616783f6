use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "friday-meter-ui.ftl";
const FALLBACK: &str = "en-US";

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message ids defined in a Fluent file (`id = ...` lines; terms and comments skipped).
fn ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

/// Literal first arguments of every `t!("...")` call below `dir`.
fn referenced_keys(dir: &Path, found: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            referenced_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in source.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                if !key.is_empty() && key.chars().all(is_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
}

fn locale_dirs(root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(root)
        .map(|rd| {
            rd.flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn every_referenced_key_is_translated_everywhere() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join("i18n");

    let fallback_path = i18n_root.join(FALLBACK).join(FTL_FILENAME);
    let fallback = fs::read_to_string(&fallback_path).expect("fallback FTL file readable");
    let fallback_keys = ftl_keys(&fallback);
    assert!(!fallback_keys.is_empty(), "no keys in {fallback_path:?}");

    let mut used = BTreeSet::new();
    referenced_keys(&crate_root.join("src"), &mut used);
    assert!(used.contains("gauge-caption-average"));

    let missing: Vec<_> = used.difference(&fallback_keys).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used in code but missing from {FALLBACK}: {missing:?}"
    );

    let mut gaps: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("locale {locale} has no {FTL_FILENAME}"));
        let keys = ftl_keys(&content);
        let absent: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        if !absent.is_empty() {
            gaps.insert(locale, absent);
        }
    }
    assert!(gaps.is_empty(), "untranslated keys per locale: {gaps:#?}");

    let unused: Vec<_> = fallback_keys.difference(&used).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] fallback keys not referenced from code: {unused:?}");
    }
}
