// Tue Aug 04 2026 - Alex

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot create directory {}: {}", .path.display(), .source)]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("cannot serialize aliases: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("cannot write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
}
