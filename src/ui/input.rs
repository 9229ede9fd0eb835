// Tue Aug 04 2026 - Alex

use std::io::{self, BufRead, Write};

use super::error::InputError;

pub trait PromptInput {
    /// Print `message` without a newline, then block for one line of input.
    /// End-of-input before a line is produced signals cancellation.
    fn prompt_line(&mut self, message: &str) -> Result<String, InputError>;
}

pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptInput for TerminalPrompt {
    fn prompt_line(&mut self, message: &str) -> Result<String, InputError> {
        print!("{}", message);
        io::stdout().flush()?;

        read_line_from(&mut io::stdin().lock())
    }
}

pub fn read_line_from<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Canceled);
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_trims_newline() {
        let mut input = Cursor::new(&b"/home/alex/work\n"[..]);
        assert_eq!(read_line_from(&mut input).unwrap(), "/home/alex/work");
    }

    #[test]
    fn test_read_line_trims_crlf() {
        let mut input = Cursor::new(&b"/home/alex/work\r\n"[..]);
        assert_eq!(read_line_from(&mut input).unwrap(), "/home/alex/work");
    }

    #[test]
    fn test_empty_line_passes_through() {
        let mut input = Cursor::new(&b"\n"[..]);
        assert_eq!(read_line_from(&mut input).unwrap(), "");
    }

    #[test]
    fn test_end_of_input_is_canceled() {
        let mut input = Cursor::new(&b""[..]);
        assert!(matches!(
            read_line_from(&mut input),
            Err(InputError::Canceled)
        ));
    }
}
