// Tue Aug 04 2026 - Alex

pub mod error;
pub mod input;
pub mod logging;

pub use error::InputError;
pub use input::{PromptInput, TerminalPrompt};
