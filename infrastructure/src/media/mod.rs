//! Image file loading
//!
//! Turns uploaded files into [`vqa_domain::ImageHandle`]s.

mod loader;

pub use loader::{ImageFileLoader, ImageLoadError};
