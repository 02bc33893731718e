use dioxus::prelude::*;

use crate::components::{ColorDistribution, Meter, MetricsPanel, PixelGrid};
use crate::core::format::{capitalize, format_number};
use crate::data::{timestamp, use_sky_store, SkyData};
use crate::t;

/// Headline card for one snapshot: date, average color, the magnified grid and
/// the Berlin Grey Index.
#[component]
pub fn SnapshotCard(data: SkyData, archived: bool) -> Element {
    let store = use_sky_store();
    let stats = &data.stats;
    let greyness = &stats.greyness;

    let title = if archived {
        t!("card-title-archive")
    } else {
        t!("card-title-current")
    };
    let date = timestamp::format_long_date(&data.timestamp);
    let time = timestamp::format_long_time(&data.timestamp);
    let bgi = greyness.berlin_grey_index;
    let bgi_label = format_number(bgi, 1);
    let dominant = capitalize(&stats.dominant_color);
    let already_revealed = store.is_revealed(&data.timestamp);
    let revealed_timestamp = data.timestamp.clone();

    rsx! {
        article {
            class: "sky-card snapshot",
            style: "border-color: {stats.hex_color};",
            header { class: "snapshot__header",
                div {
                    h2 { class: "snapshot__title", "{title}" }
                    p { class: "snapshot__when", "{date} @ {time}" }
                }
                span { class: "snapshot__badge",
                    span {
                        class: "snapshot__swatch",
                        style: "background-color: {stats.hex_color};",
                    }
                    code { "{stats.hex_color}" }
                }
            }

            PixelGrid {
                grid: data.grid.clone(),
                animation_complete: already_revealed,
                on_revealed: move |_| store.mark_revealed(revealed_timestamp.clone()),
            }

            section { class: "snapshot__bgi",
                div { class: "metric__row",
                    h3 { class: "sky-card__heading", {t!("bgi-title")} }
                    strong { class: "snapshot__bgi-value", "{bgi_label}" }
                }
                Meter { value: bgi, modifier: "grey" }
                p { class: "snapshot__quote", "“{greyness.description}”" }
            }

            div { class: "snapshot__tiles",
                div { class: "metrics__tile",
                    span { class: "metrics__tile-label", {t!("label-dominant-color")} }
                    strong { "{dominant}" }
                }
                div { class: "metrics__tile",
                    span { class: "metrics__tile-label", {t!("label-mood")} }
                    strong { "{stats.mood}" }
                }
            }

            div { class: "snapshot__badges",
                span { class: "badge", "{stats.time_of_day_feel}" }
                span { class: "badge", "{stats.temperature_feel}" }
            }
        }
    }
}

/// Card plus the distribution and metrics panels below it.
#[component]
pub fn SnapshotDetails(data: SkyData, archived: bool) -> Element {
    let distribution = data.stats.sorted_distribution();
    let stats = data.stats.clone();

    rsx! {
        div { class: "snapshot-details",
            SnapshotCard { data, archived }
            div { class: "snapshot-details__panels",
                ColorDistribution { entries: distribution }
                MetricsPanel { stats }
            }
        }
    }
}
