//! Published sky snapshots: model, timestamps and fetching.

mod model;
pub use model::{Greyness, SkyData, Stats};
#[cfg(test)]
pub(crate) use model::SAMPLE_JSON;

pub mod timestamp;

mod source;
pub use source::{fetch_current, fetch_history, DataError};

mod store;
pub use store::{provide_sky_store, use_sky_store, SkyStore};
