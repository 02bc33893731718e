//! Session-wide snapshot state shared by the pages.

use std::collections::HashSet;

use dioxus::prelude::*;

use super::{fetch_current, fetch_history, DataError, SkyData};
use crate::core::config::DataSource;

#[derive(Clone, Copy)]
pub struct SkyStore {
    pub current: Resource<Result<SkyData, DataError>>,
    /// A failed history fetch degrades to an empty archive.
    pub history: Resource<Vec<SkyData>>,
    /// Selected archive entry, indexed in published (oldest-first) order.
    /// `None` follows the newest snapshot.
    pub selected: Signal<Option<usize>>,
    /// Timestamps whose grid already finished its reveal this session.
    pub revealed: Signal<HashSet<String>>,
}

impl SkyStore {
    pub fn is_revealed(&self, timestamp: &str) -> bool {
        self.revealed.read().contains(timestamp)
    }

    pub fn mark_revealed(mut self, timestamp: String) {
        if !self.revealed.peek().contains(&timestamp) {
            self.revealed.write().insert(timestamp);
        }
    }
}

/// Starts both fetches and exposes them to every page below the caller.
/// Call once near the root of the app.
pub fn provide_sky_store() -> SkyStore {
    let source = use_hook(DataSource::resolve);

    let current_source = source.clone();
    let current = use_resource(move || {
        let source = current_source.clone();
        async move {
            let result = fetch_current(&source).await;
            match &result {
                Ok(data) => tracing::info!(timestamp = %data.timestamp, "loaded current snapshot"),
                Err(err) => tracing::warn!(%err, "current snapshot unavailable"),
            }
            result
        }
    });

    let history = use_resource(move || {
        let source = source.clone();
        async move {
            match fetch_history(&source).await {
                Ok(entries) => {
                    tracing::info!(entries = entries.len(), "loaded snapshot history");
                    entries
                }
                Err(err) => {
                    tracing::warn!(%err, "snapshot history unavailable");
                    Vec::new()
                }
            }
        }
    });

    let selected = use_signal(|| Option::<usize>::None);
    let revealed = use_signal(HashSet::new);

    use_context_provider(|| SkyStore {
        current,
        history,
        selected,
        revealed,
    })
}

pub fn use_sky_store() -> SkyStore {
    use_context::<SkyStore>()
}
