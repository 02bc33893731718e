use dioxus::prelude::*;

use crate::core::{
    color::named_swatch,
    format::{bar_width, capitalize, format_percent},
};
use crate::t;

struct Row {
    name: String,
    label: String,
    share: String,
    swatch: String,
    width: String,
}

/// Share of each named color bucket; `entries` arrive largest first.
#[component]
pub fn ColorDistribution(entries: Vec<(String, f64)>) -> Element {
    let rows: Vec<Row> = entries
        .into_iter()
        .map(|(name, share)| Row {
            label: capitalize(&name),
            share: format_percent(share),
            swatch: named_swatch(&name),
            width: bar_width(share),
            name,
        })
        .collect();

    rsx! {
        section { class: "sky-card distribution",
            h3 { class: "sky-card__heading", {t!("distribution-title")} }
            ul { class: "distribution__items",
                for row in rows.into_iter() {
                    li { key: "{row.name}", class: "distribution__item",
                        div { class: "distribution__row",
                            span { class: "distribution__label",
                                span {
                                    class: "distribution__swatch",
                                    style: "background-color: {row.swatch};",
                                }
                                span { class: "distribution__name", "{row.label}" }
                            }
                            span { class: "distribution__value", "{row.share}" }
                        }
                        div { class: "meter",
                            div {
                                class: "meter__fill",
                                style: "width: {row.width}; background-color: {row.swatch};",
                            }
                        }
                    }
                }
            }
        }
    }
}
