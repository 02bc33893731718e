//! Platform-agnostic building blocks: colors, the pixel grid model, the reveal
//! stepper, raster surfaces and small platform shims.

pub mod color;
pub mod config;
pub mod format;
pub mod grid;
pub mod platform;
pub mod raster;
pub mod reveal;
pub mod timing;
