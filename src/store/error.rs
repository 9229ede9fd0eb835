// Tue Aug 04 2026 - Alex

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("'{0}' is not registered")]
    NotRegistered(String),
    #[error("'{alias}' is ambiguous, did you mean one of: {}?", .candidates.join(", "))]
    Ambiguous {
        alias: String,
        candidates: Vec<String>,
    },
    #[error("{0}")]
    Config(#[from] ConfigError),
}
