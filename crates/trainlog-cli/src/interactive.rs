//! Console prompts.
//!
//! The session talks to the user only through [`Prompter`], so the whole prompt flow
//! can be driven by scripted answers in tests.

use anyhow::{bail, Context, Result};
use console::{style, Term};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal};

/// Line-oriented user interaction
pub trait Prompter {
    /// Show `prompt` and return the line the user typed, without the newline
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Show a message, typically why the previous answer was rejected
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Prompter for a real console.
///
/// Uses dialoguer line editing on a terminal and plain line reads when stdin is
/// piped, so the session can also be scripted from a file.
pub struct TerminalPrompter {
    term: Term,
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        let term = Term::stderr();
        let interactive = term.is_term() && io::stdin().is_terminal();
        Self { term, interactive }
    }

    fn read_piped_line(&mut self, prompt: &str) -> Result<String> {
        self.term.write_str(&format!("{}: ", prompt))?;
        self.term.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed before the session finished");
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        if !self.interactive {
            return self.read_piped_line(prompt);
        }

        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(answer)
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.term.write_line(&style(message).yellow().to_string())?;
        Ok(())
    }
}
