//! Studio Gallery Common Library
//!
//! ネイティブとWeb(WASM)で共有される型とビュー計算

pub mod types;
pub mod catalog;
pub mod view;
pub mod error;

pub use types::CatalogEntry;
pub use catalog::{load_catalog, categories};
pub use view::{SortMode, compute_view, format_date, ALL_CATEGORIES};
pub use error::{Error, Result};
