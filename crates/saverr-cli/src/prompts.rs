use saverr_core::safeguard::{ConfirmationProvider, FixedAnswer};
use std::io::{self, BufRead, Write};

/// Reads the answer as one line from stdin, prompting on stderr.
///
/// Only the line terminator is removed, so `yes ` or `Yes` never match.
/// A closed stdin answers with the empty string.
pub struct TerminalConfirmation;

impl ConfirmationProvider for TerminalConfirmation {
    fn ask(&self, prompt: &str) -> saverr_core::Result<String> {
        let mut stderr = io::stderr();
        write!(stderr, "{prompt} ")?;
        stderr.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(strip_line_ending(&line).to_string())
    }
}

pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

/// `--confirm PHRASE` when given, otherwise the terminal.
pub fn confirmation_from(answer: Option<String>) -> Box<dyn ConfirmationProvider> {
    match answer {
        Some(phrase) => Box::new(FixedAnswer::new(phrase)),
        None => Box::new(TerminalConfirmation),
    }
}
