// Wed Aug 05 2026 - Alex

use std::env;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;

pub const DEFAULT_EDITOR: &str = "vi";

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("cannot launch {editor}: {source}")]
    Launch { editor: String, source: io::Error },
    #[error("{editor} exited with {status}")]
    Failed { editor: String, status: ExitStatus },
}

pub fn selected_editor() -> String {
    env::var("EDITOR")
        .ok()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Open `path` in the user's editor and wait for it to exit.
pub fn edit_file(path: &Path) -> Result<(), EditorError> {
    let editor = selected_editor();
    log::debug!("launching {} on {}", editor, path.display());

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|source| EditorError::Launch {
            editor: editor.clone(),
            source,
        })?;

    if !status.success() {
        return Err(EditorError::Failed { editor, status });
    }

    Ok(())
}
