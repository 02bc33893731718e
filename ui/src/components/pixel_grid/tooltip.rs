use dioxus::prelude::*;

use crate::core::grid::HoveredPixel;

/// Offset between the pointer and the tooltip's top-left corner.
const POINTER_OFFSET: f64 = 14.0;

/// Floating readout for the hovered cell. Fixed-positioned at the pointer and
/// transparent to pointer events so it never steals the next `mousemove`.
#[component]
pub fn PixelTooltip(pixel: HoveredPixel) -> Element {
    let color = pixel.color;
    let left = pixel.pointer_x + POINTER_OFFSET;
    let top = pixel.pointer_y + POINTER_OFFSET;
    let css = color.css();

    rsx! {
        div {
            class: "pixel-tooltip",
            role: "tooltip",
            style: "left: {left}px; top: {top}px; pointer-events: none;",
            span {
                class: "pixel-tooltip__swatch",
                style: "background-color: {css};",
            }
            div { class: "pixel-tooltip__body",
                span { class: "pixel-tooltip__rgb", "{color}" }
                span { class: "pixel-tooltip__hex", "{css}" }
                span { class: "pixel-tooltip__cell", "({pixel.column}, {pixel.row})" }
            }
        }
    }
}
