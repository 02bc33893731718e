use dioxus::prelude::*;

use crate::data::{timestamp, SkyData};
use crate::t;

/// Number of snapshots visible in the strip at once.
pub const MAX_VISIBLE: usize = 7;

/// Condensed view of one archived snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub timestamp: String,
    pub hex_color: String,
    pub dominant_color: String,
    pub berlin_grey_index: f64,
}

impl From<&SkyData> for TimelineEntry {
    fn from(data: &SkyData) -> Self {
        Self {
            timestamp: data.timestamp.clone(),
            hex_color: data.stats.hex_color.clone(),
            dominant_color: data.stats.dominant_color.clone(),
            berlin_grey_index: data.stats.greyness.berlin_grey_index,
        }
    }
}

/// Scroll state of the strip.
///
/// The archive is published oldest first but shown newest first, so there are
/// two index spaces: *published* indices (what selection uses) and *display*
/// positions (0 = newest). `start` is the first visible display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineWindow {
    len: usize,
    start: usize,
}

impl TimelineWindow {
    pub fn new(len: usize) -> Self {
        Self { len, start: 0 }
    }

    /// Window scrolled so that `selected` (published index) is visible.
    pub fn showing(len: usize, selected: usize) -> Self {
        let mut window = Self::new(len);
        window.reveal(selected);
        window
    }

    pub fn start(&self) -> usize {
        self.start
    }

    fn max_start(&self) -> usize {
        self.len.saturating_sub(MAX_VISIBLE)
    }

    pub fn display_position(&self, published: usize) -> usize {
        self.len.saturating_sub(1).saturating_sub(published)
    }

    pub fn published_index(&self, position: usize) -> usize {
        self.len.saturating_sub(1).saturating_sub(position)
    }

    pub fn can_scroll_newer(&self) -> bool {
        self.start > 0
    }

    pub fn can_scroll_older(&self) -> bool {
        self.start < self.max_start()
    }

    pub fn scroll_newer(&mut self) {
        if self.can_scroll_newer() {
            self.start -= 1;
        }
    }

    pub fn scroll_older(&mut self) {
        if self.can_scroll_older() {
            self.start += 1;
        }
    }

    /// Scroll the minimum amount needed to make `published` visible.
    pub fn reveal(&mut self, published: usize) {
        if self.len == 0 {
            return;
        }
        let position = self.display_position(published.min(self.len - 1));
        if position < self.start {
            self.start = position;
        } else if position >= self.start + MAX_VISIBLE {
            self.start = position + 1 - MAX_VISIBLE;
        }
    }

    /// Published indices of the visible entries, newest first.
    pub fn visible(&self) -> Vec<usize> {
        let end = (self.start + MAX_VISIBLE).min(self.len);
        (self.start..end).map(|p| self.published_index(p)).collect()
    }
}

/// Selected published index, defaulting to the newest snapshot.
pub fn resolve_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    let newest = len.checked_sub(1)?;
    Some(selected.unwrap_or(newest).min(newest))
}

pub fn older(selected: usize) -> Option<usize> {
    selected.checked_sub(1)
}

pub fn newer(selected: usize, len: usize) -> Option<usize> {
    (selected + 1 < len).then_some(selected + 1)
}

#[component]
pub fn HistoryTimeline(entries: Vec<TimelineEntry>, selected: Signal<Option<usize>>) -> Element {
    let len = entries.len();
    let current = resolve_selection(selected(), len).unwrap_or(0);
    // Callers key this component by archive length, so the window never outlives its archive.
    let mut window = use_signal(|| TimelineWindow::showing(len, current));

    let Some(selected_entry) = entries.get(current).cloned() else {
        return rsx! {};
    };

    let mut select = move |index: usize| {
        selected.set(Some(index));
        window.with_mut(|w| w.reveal(index));
    };

    let older_target = older(current);
    let newer_target = newer(current, len);
    let header = timestamp::format_date_time(&selected_entry.timestamp);
    let view = window();
    let visible: Vec<(usize, TimelineEntry, String, String)> = view
        .visible()
        .into_iter()
        .filter_map(|index| {
            entries.get(index).map(|e| {
                let time = timestamp::format_short_time(&e.timestamp);
                let bgi = format!("{:.0}%", e.berlin_grey_index);
                (index, e.clone(), time, bgi)
            })
        })
        .collect();

    rsx! {
        section { class: "sky-card timeline",
            div { class: "timeline__header",
                button {
                    r#type: "button",
                    class: "button button--ghost timeline__step",
                    disabled: older_target.is_none(),
                    onclick: move |_| {
                        if let Some(index) = older_target {
                            select(index);
                        }
                    },
                    "‹ "
                    {t!("timeline-older")}
                }
                span { class: "timeline__current", "{header}" }
                button {
                    r#type: "button",
                    class: "button button--ghost timeline__step",
                    disabled: newer_target.is_none(),
                    onclick: move |_| {
                        if let Some(index) = newer_target {
                            select(index);
                        }
                    },
                    {t!("timeline-newer")}
                    " ›"
                }
            }

            div { class: "timeline__strip",
                button {
                    r#type: "button",
                    class: "timeline__scroll",
                    aria_label: t!("timeline-scroll-newer"),
                    disabled: !view.can_scroll_newer(),
                    onclick: move |_| window.with_mut(|w| w.scroll_newer()),
                    "‹"
                }

                ul { class: "timeline__items",
                    for (index, entry, time, bgi) in visible.into_iter() {
                        li {
                            key: "{entry.timestamp}",
                            class: if index == current { "timeline__item timeline__item--active" } else { "timeline__item" },
                            onclick: move |_| select(index),
                            span {
                                class: "timeline__dot",
                                style: "background-color: {entry.hex_color};",
                            }
                            span { class: "timeline__time", "{time}" }
                            span { class: "timeline__meta",
                                span { class: "timeline__color", "{entry.dominant_color}" }
                                " • "
                                span { "{bgi}" }
                            }
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "timeline__scroll",
                    aria_label: t!("timeline-scroll-older"),
                    disabled: !view.can_scroll_older(),
                    onclick: move |_| window.with_mut(|w| w.scroll_older()),
                    "›"
                }
            }
        }
    }
}
