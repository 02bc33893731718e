//! Shared UI crate for Berliner Grau. Data access, rendering and every page
//! live here; the web and desktop crates only add routing and a window.

use dioxus::prelude::*;

pub mod core;
pub mod data;
pub mod export;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod pixel_grid;
    pub use pixel_grid::PixelGrid;

    pub mod history_timeline;
    pub use history_timeline::HistoryTimeline;

    mod color_distribution;
    pub use color_distribution::ColorDistribution;

    mod metrics;
    pub use metrics::{Meter, MetricsPanel};

    mod snapshot;
    pub use snapshot::{SnapshotCard, SnapshotDetails};
}

/// Dashboard theme, linked by the web shell and inlined by the desktop shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod locale_usage;
}
