//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts are only shown when stdin is a terminal. `--yes` answers every
//! prompt up front. In non-interactive mode without `--yes`, callers get
//! [`PromptError::NotInteractive`] and must pick a safe default.

use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// Source of yes/no answers.
pub trait Prompter: Send + Sync {
    /// Ask `message`, returning `default` on an empty answer.
    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError>;
}

/// Prompter reading answers from the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError> {
        if !io::stdin().is_terminal() {
            return Err(PromptError::NotInteractive);
        }
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stderr();
        confirm_with(message, default, &mut input, &mut output)
    }
}

/// Prompt for confirmation, honoring `--yes`.
///
/// Returns `Ok(true)` immediately when `assume_yes` is set.
pub fn confirm(
    prompter: &dyn Prompter,
    message: &str,
    default: bool,
    assume_yes: bool,
) -> Result<bool, PromptError> {
    if assume_yes {
        return Ok(true);
    }
    prompter.confirm(message, default)
}

/// Ask a yes/no question on arbitrary streams.
pub fn confirm_with<R: BufRead, W: Write>(
    message: &str,
    default: bool,
    input: &mut R,
    output: &mut W,
) -> Result<bool, PromptError> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    write!(output, "{} {} ", message, hint).map_err(|e| PromptError::IoError(e.to_string()))?;
    output
        .flush()
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    Ok(match answer.trim().to_ascii_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct Never;

    impl Prompter for Never {
        fn confirm(&self, _message: &str, _default: bool) -> Result<bool, PromptError> {
            panic!("prompter should not be consulted");
        }
    }

    #[test]
    fn assume_yes_skips_prompter() {
        assert!(confirm(&Never, "Overwrite?", false, true).unwrap());
    }

    #[test]
    fn yes_answer_confirms() {
        let mut input = Cursor::new("y\n");
        let mut output = Vec::new();
        assert!(confirm_with("Overwrite?", false, &mut input, &mut output).unwrap());
        assert_eq!(String::from_utf8(output).unwrap(), "Overwrite? [y/N] ");
    }

    #[test]
    fn empty_answer_uses_default() {
        let mut output = Vec::new();
        assert!(confirm_with("Go?", true, &mut Cursor::new("\n"), &mut output).unwrap());
        assert!(!confirm_with("Go?", false, &mut Cursor::new("\n"), &mut output).unwrap());
    }

    #[test]
    fn anything_else_declines() {
        let mut output = Vec::new();
        assert!(!confirm_with("Go?", true, &mut Cursor::new("nope\n"), &mut output).unwrap());
    }
}
