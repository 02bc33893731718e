//! Routed pages. Shells map their `Route` variants onto these.

use dioxus::prelude::*;

mod archive;
pub use archive::Archive;

mod dashboard;
pub use dashboard::Dashboard;

mod status;
pub use status::{FooterNote, LoadError, Loading};

/// Subscribes the calling page to the shell's language signal (if any) so a
/// language switch re-renders its strings.
fn use_language_refresh() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}
