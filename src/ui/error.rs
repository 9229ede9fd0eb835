// Tue Aug 04 2026 - Alex

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("canceled")]
    Canceled,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
