//! Localization for the dashboard.
//!
//! - `i18n-embed` picks the language and loads the bundles,
//! - `fluent` formats messages,
//! - `rust-embed` embeds the `.ftl` files,
//! - `i18n-embed-fl` provides the compile-time checked `fl!` macro.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/berliner_grau_ui.ftl   (fallback/reference)
//!   de-DE/berliner_grau_ui.ftl
//! ```
//!
//! Call `init()` once (it is idempotent), then look strings up with `t!`:
//! ```ignore
//! use crate::t;
//! let label = t!("nav-now");
//! ```
//!
//! Desktop asks the OS for its locale list, web reads `navigator.languages`.
//! Bundles are always embedded on WASM (`debug-embed`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Shorthand for `fl!(&*LOADER, ...)`.
///
/// ```ignore
/// t!("nav-now");
/// t!("export-downloaded", format = "CSV");
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle lives at `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "berliner_grau_ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "language selection failed, using fallback");
        }
        plain_arguments();
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    plain_arguments();
    Ok(())
}

/// Arguments land in DOM text, so no bidi isolation marks around them.
/// Freshly selected bundles start with isolation on.
fn plain_arguments() {
    LOADER.set_use_isolating(false);
}

/// Tag of the language currently in use, e.g. `en-US`.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| "en-US".to_string())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
