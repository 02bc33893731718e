//! Cross-checks the `t!` calls in this crate against the Fluent bundles:
//! every key must exist in every locale, every argument a call passes must be
//! a placeholder of that message, and no message may go unused.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const LOCALES: [(&str, &str); 2] = [
    ("en-US", include_str!("../../i18n/en-US/berliner_grau_ui.ftl")),
    ("de-DE", include_str!("../../i18n/de-DE/berliner_grau_ui.ftl")),
];

/// One `t!` invocation: message key plus the names of its arguments.
#[derive(Debug)]
struct Lookup {
    file: PathBuf,
    key: String,
    args: BTreeSet<String>,
}

/// Message id to the `$variables` its value references.
fn messages(ftl: &str) -> BTreeMap<String, BTreeSet<String>> {
    ftl.lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_lowercase()))
        .filter_map(|line| line.split_once('='))
        .map(|(id, value)| (id.trim().to_string(), variables(value)))
        .collect()
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split("{ $")
        .skip(1)
        .filter_map(|rest| rest.split_once(" }"))
        .map(|(name, _)| name.to_string())
        .collect()
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        // This module quotes the macro in its own text.
        if path.ends_with("tests") {
            continue;
        }
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Finds `t!(` not preceded by an identifier character, so `format!(` and
/// friends are skipped, then reads the key literal and top-level `name =`
/// arguments up to the matching parenthesis.
fn lookups_in(file: &Path, source: &str) -> Vec<Lookup> {
    let mut found = Vec::new();
    let mut rest = source;
    while let Some(at) = rest.find("t!(") {
        let preceded_by_ident = rest[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
        let body = &rest[at + 3..];
        rest = body;
        if preceded_by_ident {
            continue;
        }
        let Some(body) = body.trim_start().strip_prefix('"') else {
            continue;
        };
        let Some((key, tail)) = body.split_once('"') else {
            continue;
        };
        found.push(Lookup {
            file: file.to_path_buf(),
            key: key.to_string(),
            args: argument_names(tail),
        });
    }
    found
}

fn argument_names(tail: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut segment = String::new();
    for c in tail.chars() {
        match c {
            '"' => in_string = !in_string,
            _ if in_string => {}
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' if depth == 0 => break,
            ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                names.extend(argument_name(&segment));
                segment.clear();
                continue;
            }
            _ => {}
        }
        segment.push(c);
    }
    names.extend(argument_name(&segment));
    names
}

fn argument_name(segment: &str) -> Option<String> {
    let (name, _) = segment.split_once('=')?;
    let name = name.trim();
    (!name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_'))
        .then(|| name.to_string())
}

fn all_lookups() -> Vec<Lookup> {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    rust_sources(&src, &mut files);
    files
        .iter()
        .flat_map(|file| {
            let source = fs::read_to_string(file).unwrap_or_default();
            lookups_in(file, &source)
        })
        .collect()
}

#[test]
fn scanner_reads_keys_and_argument_names() {
    let source = r#"
        let a = t!("nav-now");
        let b = format!("{}", 1);
        let c = t!(
            "export-saved",
            format = format.label(),
            path = path.display().to_string()
        );
    "#;
    let found = lookups_in(Path::new("inline.rs"), source);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].key, "nav-now");
    assert!(found[0].args.is_empty());
    assert_eq!(found[1].key, "export-saved");
    assert_eq!(
        found[1].args,
        BTreeSet::from(["format".to_string(), "path".to_string()])
    );
    assert_eq!(
        variables(" { $format } saved to { $path }"),
        found[1].args
    );
}

#[test]
fn used_keys_exist_in_every_locale() {
    let lookups = all_lookups();
    assert!(lookups.len() > 20, "scanner found only {} lookups", lookups.len());

    let mut missing = Vec::new();
    for (locale, ftl) in LOCALES {
        let defined = messages(ftl);
        for lookup in &lookups {
            if !defined.contains_key(&lookup.key) {
                missing.push(format!("{locale}: {} ({})", lookup.key, lookup.file.display()));
            }
        }
    }
    assert!(missing.is_empty(), "undefined message ids:\n{}", missing.join("\n"));
}

#[test]
fn arguments_match_placeholders() {
    let mut mismatched = Vec::new();
    for (locale, ftl) in LOCALES {
        let defined = messages(ftl);
        for lookup in all_lookups() {
            let Some(expected) = defined.get(&lookup.key) else {
                continue;
            };
            if &lookup.args != expected {
                mismatched.push(format!(
                    "{locale}: {} passes {:?} but the message uses {:?}",
                    lookup.key, lookup.args, expected
                ));
            }
        }
    }
    assert!(mismatched.is_empty(), "{}", mismatched.join("\n"));
}

#[test]
fn every_message_is_used() {
    let used: BTreeSet<String> = all_lookups().into_iter().map(|l| l.key).collect();
    let unused: Vec<String> = messages(LOCALES[0].1)
        .into_keys()
        .filter(|id| !used.contains(id))
        .collect();
    assert!(unused.is_empty(), "unused en-US messages: {}", unused.join(", "));
}
