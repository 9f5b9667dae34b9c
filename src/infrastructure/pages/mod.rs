//! Page assets read from disk

mod file_source;

pub use file_source::{AssetsConfig, FilePageSource};
