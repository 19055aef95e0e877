//! Translation guards.
//!
//! - Every `t!("...")` key used under `src/` exists in the fallback (en-US).
//! - Every locale provides every fallback key.
//! - No file defines a key twice.
//!
//! The Fluent parsing here is a line heuristic: `id = value` lines are message
//! definitions; comments, terms (`-id`) and attribute lines (`.attr`) are skipped.
//!
//! To add a locale create `ui/i18n/<locale>/cointrek_ui.ftl` with all keys from
//! `en-US/cointrek_ui.ftl`, then run `cargo test -p cointrek-ui`.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "cointrek_ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        if let Some(id) = message_id(line) {
            keys.insert(id.to_string());
        }
    }
    keys
}

fn message_id(line: &str) -> Option<&str> {
    // Indented lines continue the previous message.
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('-') || line.starts_with('.') {
        return None;
    }
    let (id, _) = line.split_once('=')?;
    let id = id.trim();
    (!id.is_empty() && id.chars().all(valid_key_char)).then_some(id)
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Collect literal keys from `t!("...")` calls under `src_root`.
///
/// The macro name must not be the tail of a longer identifier, so
/// `format!("...")` and `print!("...")` are not mistaken for lookups.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let needle = "t!(\"";
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            let preceded_by_ident = rest[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            let after = &rest[pos + needle.len()..];
            if !preceded_by_ident {
                if let Some(end) = after.find('"') {
                    let key = &after[..end];
                    if !key.is_empty() && key.chars().all(valid_key_char) {
                        found.insert(key.to_string());
                    }
                }
            }
            rest = after;
        }
    }

    found
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs = Vec::new();
    if let Ok(read_dir) = fs::read_dir(i18n_root) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    if name.contains('-') {
                        dirs.push(name.to_string());
                    }
                }
            }
        }
    }
    dirs.sort();
    dirs
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn read_locale(locale: &str) -> String {
    let path = crate_root().join(I18N_DIR).join(locale).join(FTL_FILENAME);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback_keys = parse_ftl_keys(&read_locale("en-US"));
    assert!(!fallback_keys.is_empty(), "No message keys parsed from en-US");

    let referenced = extract_translation_keys_from_source(&crate_root().join("src"));
    assert!(
        referenced.contains("menu-browse-cryptos"),
        "source scan found no navbar keys; did the t! macro get renamed?"
    );

    let mut missing: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = parse_ftl_keys(&read_locale("en-US"));
    let locales = collect_locale_dirs(&crate_root().join(I18N_DIR));
    assert!(
        locales.iter().any(|l| l == "en-US"),
        "Missing fallback locale directory en-US"
    );

    let mut per_locale_missing: HashMap<String, Vec<String>> = HashMap::new();
    for locale in locales {
        let keys = parse_ftl_keys(&read_locale(&locale));
        let missing: Vec<_> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations relative to fallback:\n");
        for (loc, miss) in &per_locale_missing {
            report.push_str(&format!("  {loc} ({} missing)\n", miss.len()));
            for k in miss {
                report.push_str(&format!("    {k}\n"));
            }
        }
        panic!("{report}");
    }
}

#[test]
fn no_locale_defines_a_key_twice() {
    for locale in collect_locale_dirs(&crate_root().join(I18N_DIR)) {
        let src = read_locale(&locale);
        let mut seen = HashSet::new();
        let mut dups = BTreeSet::new();
        for line in src.lines() {
            if let Some(id) = message_id(line) {
                if !seen.insert(id) {
                    dups.insert(format!("{id}  (line: \"{line}\")"));
                }
            }
        }
        assert!(
            dups.is_empty(),
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

#[test]
fn source_scanner_ignores_longer_macro_names() {
    let dir = std::env::temp_dir().join(format!("cointrek-i18n-scan-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("sample.rs"),
        "let a = t!(\"menu-news\"); let b = format!(\"not-a-key\"); let c = crate::t!(\"menu-about\");",
    )
    .unwrap();

    let keys = extract_translation_keys_from_source(&dir);
    fs::remove_dir_all(&dir).ok();

    let mut keys: Vec<_> = keys.into_iter().collect();
    keys.sort();
    assert_eq!(keys, ["menu-about", "menu-news"]);
}

#[test]
fn every_fallback_key_is_used() {
    let referenced = extract_translation_keys_from_source(&crate_root().join("src"));
    let unused: Vec<_> = parse_ftl_keys(&read_locale("en-US"))
        .into_iter()
        .filter(|k| !referenced.contains(k))
        .collect();
    assert!(unused.is_empty(), "Fallback keys never looked up: {unused:?}");
}

#[test]
fn bundle_file_is_named_after_the_crate() {
    // `fl!` resolves `<locale>/<crate name with underscores>.ftl` at compile time.
    let expected = format!("{}.ftl", env!("CARGO_PKG_NAME").replace('-', "_"));
    assert_eq!(FTL_FILENAME, expected);
    for locale in collect_locale_dirs(&crate_root().join(I18N_DIR)) {
        let path = crate_root().join(I18N_DIR).join(&locale).join(&expected);
        assert!(path.is_file(), "{locale} has no {expected}");
    }
}
