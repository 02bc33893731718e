use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::data::provide_sky_store;
use ui::views::{Archive, Dashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Now {},
    #[route("/archive")]
    Archive {},
}

#[component]
fn Now() -> Element {
    rsx! { Dashboard {} }
}

fn nav_now(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Now {},
        "{label}"
    })
}
fn nav_archive(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Archive {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        now: nav_now,
        archive: nav_archive,
    });

    // Shared by AppNavbar and the pages so a language switch re-renders both.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    provide_sky_store();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
