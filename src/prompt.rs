//! Yes/no confirmation for destructive actions.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Asks the user to confirm an action.
pub trait Prompt {
    /// Returns `true` only on an explicit yes.
    fn confirm(&self, question: &str) -> AppResult<bool>;
}

/// Prompts on the terminal: writes `question [y/N] ` to stderr and reads a
/// line from stdin. End of input counts as no.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, question: &str) -> AppResult<bool> {
        let mut stderr = io::stderr();
        write!(stderr, "{} [y/N] ", question)?;
        stderr.flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(is_yes(&input))
    }
}

/// Answers every question the same way. Backs `--yes`.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Prompt for FixedAnswer {
    fn confirm(&self, _question: &str) -> AppResult<bool> {
        Ok(self.0)
    }
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn confirm(&self, question: &str) -> AppResult<bool> {
        (**self).confirm(question)
    }
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
