use dioxus::prelude::*;

use super::{use_language_refresh, FooterNote, LoadError, Loading};
use crate::components::history_timeline::{resolve_selection, HistoryTimeline, TimelineEntry};
use crate::components::SnapshotDetails;
use crate::data::{use_sky_store, SkyData};
use crate::export::ExportPanel;
use crate::t;

/// Browse earlier captures through the timeline.
#[component]
pub fn Archive() -> Element {
    let lang = use_language_refresh();
    let store = use_sky_store();

    let Some(history) = store.history.read().clone() else {
        return rsx! {
            section { class: "page page-archive", Loading {} }
        };
    };
    let current = store.current.read().clone();
    let current_pending = current.is_none();

    let selected = resolve_selection((store.selected)(), history.len());
    let active = choose_snapshot(&history, selected, current.and_then(Result::ok));
    let entries: Vec<TimelineEntry> = history.iter().map(TimelineEntry::from).collect();
    let len = entries.len();

    let body = match active {
        Some((data, archived)) => {
            let snapshot = data.clone();
            let history = history.clone();
            rsx! {
                SnapshotDetails { data, archived }
                ExportPanel { snapshot, history }
            }
        }
        None if current_pending => rsx! { Loading {} },
        None => rsx! { LoadError {} },
    };

    rsx! {
        section { class: "page page-archive", lang: "{lang}",
            if len == 0 {
                p { class: "page__note", {t!("archive-empty")} }
            } else {
                HistoryTimeline { key: "{len}", entries, selected: store.selected }
            }
            {body}
            FooterNote {}
        }
    }
}

/// The selected archive entry, or the current snapshot when the selection
/// does not resolve. The flag tells whether the result came from the archive.
fn choose_snapshot(
    history: &[SkyData],
    selected: Option<usize>,
    current: Option<SkyData>,
) -> Option<(SkyData, bool)> {
    selected
        .and_then(|index| history.get(index).cloned())
        .map(|data| (data, true))
        .or_else(|| current.map(|data| (data, false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SAMPLE_JSON;

    fn snapshot(timestamp: &str) -> SkyData {
        let mut data: SkyData = serde_json::from_str(SAMPLE_JSON).unwrap();
        data.timestamp = timestamp.to_string();
        data
    }

    #[test]
    fn selected_archive_entry_wins() {
        let history = vec![snapshot("a"), snapshot("b")];
        let (data, archived) = choose_snapshot(&history, Some(0), Some(snapshot("now"))).unwrap();
        assert_eq!(data.timestamp, "a");
        assert!(archived);
    }

    #[test]
    fn falls_back_to_current_snapshot() {
        let (data, archived) = choose_snapshot(&[], None, Some(snapshot("now"))).unwrap();
        assert_eq!(data.timestamp, "now");
        assert!(!archived);
        assert!(choose_snapshot(&[], None, None).is_none());
    }
}
