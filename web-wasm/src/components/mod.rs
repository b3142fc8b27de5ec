//! UIコンポーネント

pub mod filter_bar;
pub mod footer;
pub mod gallery_grid;
pub mod header;
pub mod quick_jump;
