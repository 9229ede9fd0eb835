// Tue Aug 04 2026 - Alex

pub mod config;
pub mod editor;
pub mod store;
pub mod ui;

pub use config::{ConfigStore, Persistence};
pub use store::{AliasMap, AliasStore, StoreError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
