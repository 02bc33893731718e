use dioxus::prelude::*;

use crate::core::{
    color::{colorfulness_description, metric_description, MetricKind, MetricNote},
    format::{bar_width, format_number, format_percent},
};
use crate::data::Stats;
use crate::t;

/// Horizontal progress bar; `modifier` picks the fill color from the theme.
#[component]
pub fn Meter(value: f64, modifier: Option<&'static str>) -> Element {
    let class = match modifier {
        Some(m) => format!("meter__fill meter__fill--{m}"),
        None => "meter__fill".to_string(),
    };
    rsx! {
        div { class: "meter",
            div { class: "{class}", style: "width: {bar_width(value)};" }
        }
    }
}

/// Localized text of a metric tier.
pub fn note_text(note: MetricNote) -> String {
    match note {
        MetricNote::DarkAndMoody => t!("note-dark-and-moody"),
        MetricNote::DimLight => t!("note-dim-light"),
        MetricNote::ModeratelyBright => t!("note-moderately-bright"),
        MetricNote::VeryBright => t!("note-very-bright"),
        MetricNote::AlmostGreyscale => t!("note-almost-greyscale"),
        MetricNote::MutedColors => t!("note-muted-colors"),
        MetricNote::Balanced => t!("note-balanced"),
        MetricNote::Vibrant => t!("note-vibrant"),
        MetricNote::VerySaturated => t!("note-very-saturated"),
        MetricNote::Monochromatic => t!("note-monochromatic"),
        MetricNote::Subtle => t!("note-subtle"),
        MetricNote::HighlyColorful => t!("note-highly-colorful"),
    }
}

#[component]
fn MetricRow(label: String, display: String, value: f64, modifier: &'static str, note: Option<String>) -> Element {
    rsx! {
        div { class: "metric",
            div { class: "metric__row",
                span { class: "metric__label", "{label}" }
                span { class: "metric__value", "{display}" }
            }
            Meter { value, modifier }
            if let Some(note) = note {
                p { class: "metric__note", "{note}" }
            }
        }
    }
}

/// Brightness, saturation, colorfulness, chroma and the raw HSV triple.
#[component]
pub fn MetricsPanel(stats: Stats) -> Element {
    let brightness = stats.brightness_percent;
    let saturation = stats.saturation();
    let colorfulness = stats.colorfulness();
    let chroma = stats.chroma();
    let hue = format_number(stats.hue(), 0);
    let sat = format_number(saturation, 0);
    let value = format_number(stats.value(), 0);

    rsx! {
        section { class: "sky-card metrics",
            div { class: "metrics__group",
                MetricRow {
                    label: t!("label-brightness"),
                    display: format_percent(brightness),
                    value: brightness,
                    modifier: "brightness",
                    note: note_text(metric_description(brightness, MetricKind::Brightness)),
                }
                MetricRow {
                    label: t!("label-saturation"),
                    display: format_percent(saturation),
                    value: saturation,
                    modifier: "saturation",
                    note: note_text(metric_description(saturation, MetricKind::Saturation)),
                }
            }

            div { class: "metrics__group",
                MetricRow {
                    label: t!("label-colorfulness"),
                    display: format_number(colorfulness, 1),
                    value: colorfulness,
                    modifier: "colorfulness",
                    note: note_text(colorfulness_description(colorfulness)),
                }
                MetricRow {
                    label: t!("label-chroma"),
                    display: format_number(chroma, 1),
                    value: chroma,
                    modifier: "chroma",
                }
            }

            div { class: "metrics__hsv",
                p { class: "metric__label", {t!("label-hsv")} }
                div { class: "metrics__hsv-grid",
                    div { class: "metrics__tile",
                        span { class: "metrics__tile-label", {t!("label-hue")} }
                        strong { "{hue}°" }
                    }
                    div { class: "metrics__tile",
                        span { class: "metrics__tile-label", {t!("label-hsv-saturation")} }
                        strong { "{sat}%" }
                    }
                    div { class: "metrics__tile",
                        span { class: "metrics__tile-label", {t!("label-value")} }
                        strong { "{value}%" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;

    #[test]
    fn notes_come_from_the_active_bundle() {
        i18n::init();
        i18n::set_language("en-US").unwrap();
        assert_eq!(note_text(MetricNote::DarkAndMoody), "Dark & moody");
        assert_eq!(note_text(MetricNote::HighlyColorful), "Highly colorful");
        assert_ne!(note_text(MetricNote::Subtle), note_text(MetricNote::Vibrant));
    }
}
