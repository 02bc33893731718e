//! Where the published sky documents live.
//!
//! The capture pipeline commits `current.json` and `history.json` to the
//! repository's `public/data` folder; by default they are read straight from
//! the raw GitHub view of `main`. Set `BERLINER_GRAU_DATA_URL` to a different
//! base URL (a local static server, a fork) to point the dashboard elsewhere.
//! On native builds the variable is read at startup, on the web at build time.

use serde::{Deserialize, Serialize};

pub const DATA_URL_ENV: &str = "BERLINER_GRAU_DATA_URL";

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/01100100/BerlinerGrau/refs/heads/main/public/data";

/// Capture location shown under the grid.
pub const DEFAULT_LATITUDE: &str = "N52°29'12.547''";
pub const DEFAULT_LONGITUDE: &str = "E13°26'35.345''";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub current_url: String,
    pub history_url: String,
}

impl DataSource {
    pub fn from_base(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        Self {
            current_url: format!("{base}/current.json"),
            history_url: format!("{base}/history.json"),
        }
    }

    /// Resolve the data source from the environment, falling back to the default.
    pub fn resolve() -> Self {
        match configured_base() {
            Some(base) if !base.trim().is_empty() => {
                tracing::info!(%base, "using configured sky data source");
                Self::from_base(&base)
            }
            _ => Self::default(),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::from_base(DEFAULT_DATA_URL)
    }
}

#[cfg(target_arch = "wasm32")]
fn configured_base() -> Option<String> {
    option_env!("BERLINER_GRAU_DATA_URL").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_base() -> Option<String> {
    std::env::var(DATA_URL_ENV).ok()
}
