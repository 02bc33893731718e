use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "status status--loading", role: "status",
            span { class: "status__spinner", aria_hidden: "true" }
            p { {t!("loading-message")} }
        }
    }
}

#[component]
pub fn LoadError() -> Element {
    rsx! {
        div { class: "status status--error", role: "alert",
            strong { class: "status__title", {t!("error-title")} }
            p { {t!("error-detail")} }
        }
    }
}

#[component]
pub fn FooterNote() -> Element {
    rsx! {
        footer { class: "page__footer",
            p { {t!("footer-note")} }
        }
    }
}
