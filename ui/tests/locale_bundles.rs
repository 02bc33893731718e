//! The shipped Fluent bundles load, carry the same messages and agree on
//! placeholders, so switching the dashboard to German never falls back to
//! English or drops an argument.

use fluent::{FluentArgs, FluentBundle, FluentResource};
use unic_langid::LanguageIdentifier;

const REFERENCE: (&str, &str) = ("en-US", include_str!("../i18n/en-US/berliner_grau_ui.ftl"));
const TRANSLATIONS: [(&str, &str); 1] =
    [("de-DE", include_str!("../i18n/de-DE/berliner_grau_ui.ftl"))];

fn bundle((locale, ftl): (&str, &str)) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(ftl.to_string())
        .unwrap_or_else(|(_, errors)| panic!("{locale} does not parse: {errors:?}"));
    let lang: LanguageIdentifier = locale.parse().unwrap();
    let mut bundle = FluentBundle::new(vec![lang]);
    bundle.set_use_isolating(false);
    // Re-defining an id is reported here.
    bundle
        .add_resource(resource)
        .unwrap_or_else(|errors| panic!("{locale} has conflicting messages: {errors:?}"));
    bundle
}

fn message_ids(ftl: &str) -> Vec<&str> {
    ftl.lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_lowercase()))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .collect()
}

/// `$variables` a message references, taken from the reference text.
fn variables(ftl: &str, id: &str) -> Vec<String> {
    ftl.lines()
        .find_map(|line| line.strip_prefix(id)?.trim_start().strip_prefix('='))
        .map(|value| {
            value
                .split("{ $")
                .skip(1)
                .filter_map(|rest| rest.split_once(" }").map(|(name, _)| name.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

fn render(bundle: &FluentBundle<FluentResource>, id: &str, args: Option<&FluentArgs>) -> (String, usize) {
    let message = bundle
        .get_message(id)
        .unwrap_or_else(|| panic!("missing message {id}"));
    let pattern = message
        .value()
        .unwrap_or_else(|| panic!("message {id} has no value"));
    let mut errors = Vec::new();
    let text = bundle.format_pattern(pattern, args, &mut errors).into_owned();
    (text, errors.len())
}

#[test]
fn translations_define_exactly_the_reference_messages() {
    let reference: Vec<&str> = message_ids(REFERENCE.1);
    assert!(!reference.is_empty());

    for (locale, ftl) in TRANSLATIONS {
        let mut ids = message_ids(ftl);
        let mut expected = reference.clone();
        ids.sort_unstable();
        expected.sort_unstable();
        assert_eq!(ids, expected, "{locale} message ids differ from en-US");
    }
}

#[test]
fn placeholders_agree_with_the_reference() {
    let reference = bundle(REFERENCE);
    for translation in TRANSLATIONS {
        let translated = bundle(translation);
        for id in message_ids(REFERENCE.1) {
            let names = variables(REFERENCE.1, id);

            let mut args = FluentArgs::new();
            for name in &names {
                args.set(name.clone(), format!("<{name}>"));
            }
            let (english, english_errors) = render(&reference, id, Some(&args));
            let (local, local_errors) = render(&translated, id, Some(&args));
            assert_eq!((english_errors, local_errors), (0, 0), "{id} references unknown variables");
            for name in &names {
                let marker = format!("<{name}>");
                assert!(english.contains(&marker), "en-US {id} drops ${name}");
                assert!(local.contains(&marker), "{} {id} drops ${name}", translation.0);
            }

            // Without arguments a message fails once per placeholder it uses.
            let (_, bare_english) = render(&reference, id, None);
            let (_, bare_local) = render(&translated, id, None);
            assert_eq!(bare_english, bare_local, "{id} uses different variables");
        }
    }
}

#[test]
fn metric_notes_and_navigation_are_translated() {
    let reference = bundle(REFERENCE);
    for translation in TRANSLATIONS {
        let translated = bundle(translation);
        for id in message_ids(REFERENCE.1)
            .into_iter()
            .filter(|id| id.starts_with("note-") || id.starts_with("nav-"))
        {
            assert_ne!(
                render(&reference, id, None).0,
                render(&translated, id, None).0,
                "{} {id} is still English",
                translation.0
            );
        }
    }
}
