use dioxus::prelude::*;

use super::{use_language_refresh, FooterNote, LoadError, Loading};
use crate::components::SnapshotDetails;
use crate::data::use_sky_store;
use crate::export::ExportPanel;

/// The most recent capture.
#[component]
pub fn Dashboard() -> Element {
    let lang = use_language_refresh();
    let store = use_sky_store();
    let current = store.current.read().clone();
    let history = store.history.read().clone().unwrap_or_default();

    let body = match current {
        None => rsx! { Loading {} },
        Some(Err(_)) => rsx! { LoadError {} },
        Some(Ok(data)) => {
            let snapshot = data.clone();
            rsx! {
                SnapshotDetails { data, archived: false }
                ExportPanel { snapshot, history }
            }
        }
    };

    rsx! {
        section { class: "page page-now", lang: "{lang}",
            {body}
            FooterNote {}
        }
    }
}
