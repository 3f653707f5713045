//! Where session answers come from.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Supplies one answer per prompt. `None` ends the session.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let line = readline_outcome(self.readline(prompt))?;
        if let Some(line) = &line {
            if !line.trim().is_empty() {
                self.add_history_entry(line.as_str())?;
            }
        }
        Ok(line)
    }
}

/// CTRL-D and CTRL-C both stop the session
fn readline_outcome(result: rustyline::Result<String>) -> Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Eof) => {
            debug!("End of input");
            Ok(None)
        }
        Err(ReadlineError::Interrupted) => {
            debug!("Interrupted");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Answers read line by line from any reader. Prompts are not echoed.
#[cfg(test)]
pub struct ReaderInput<R> {
    reader: R,
}

#[cfg(test)]
impl<R: std::io::BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

#[cfg(test)]
impl<R: std::io::BufRead> LineSource for ReaderInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_eof_and_interrupt_end_input() {
        assert_eq!(readline_outcome(Err(ReadlineError::Eof)).unwrap(), None);
        assert_eq!(readline_outcome(Err(ReadlineError::Interrupted)).unwrap(), None);
        assert_eq!(
            readline_outcome(Ok("drama".to_string())).unwrap(),
            Some("drama".to_string())
        );
    }

    #[test]
    fn test_other_readline_errors_propagate() {
        let err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(readline_outcome(Err(ReadlineError::Io(err))).is_err());
    }

    #[test]
    fn test_reader_input_strips_line_endings() {
        let mut input = ReaderInput::new(Cursor::new("Sam\r\n \nlast"));
        assert_eq!(input.read_line("? ").unwrap().as_deref(), Some("Sam"));
        assert_eq!(input.read_line("? ").unwrap().as_deref(), Some(" "));
        assert_eq!(input.read_line("? ").unwrap().as_deref(), Some("last"));
        assert_eq!(input.read_line("? ").unwrap(), None);
    }
}
