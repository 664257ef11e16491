//! Line input for the interactive session.
//!
//! A terminal gets dialoguer prompts; piped stdin is read line by line so a
//! session can be scripted.

use std::io::{self, BufRead, IsTerminal};

use anyhow::Result;
use dialoguer::{Confirm, Input, Password};

pub enum Prompter {
    Terminal,
    Piped(io::Lines<Box<dyn BufRead>>),
}

impl Prompter {
    /// Pick a prompter for the current stdin.
    pub fn detect() -> Self {
        if io::stdin().is_terminal() && console::user_attended() {
            Prompter::Terminal
        } else {
            Prompter::from_reader(io::stdin().lock())
        }
    }

    /// Read answers line by line from `reader`.
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        let reader: Box<dyn BufRead> = Box::new(reader);
        Prompter::Piped(reader.lines())
    }

    /// Read one line. `None` at end of input.
    pub fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self {
            Prompter::Terminal => {
                let line: String = Input::new()
                    .with_prompt(prompt)
                    .allow_empty(true)
                    .interact_text()?;
                Ok(Some(line))
            }
            Prompter::Piped(lines) => lines.next().transpose().map_err(Into::into),
        }
    }

    /// Read a field value; end of input reads as empty.
    pub fn field(&mut self, prompt: &str) -> Result<String> {
        Ok(self.line(prompt)?.unwrap_or_default())
    }

    /// Read a secret without echo.
    pub fn secret(&mut self, prompt: &str) -> Result<String> {
        match self {
            Prompter::Terminal => Ok(Password::new()
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()?),
            Prompter::Piped(_) => self.field(prompt),
        }
    }

    /// Ask a yes/no question.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        match self {
            Prompter::Terminal => Ok(Confirm::new().with_prompt(prompt).default(false).interact()?),
            Prompter::Piped(_) => {
                let answer = self.field(prompt)?;
                Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Prompter {
        Prompter::from_reader(Cursor::new(input.to_string()))
    }

    #[test]
    fn test_lines_then_end_of_input() {
        let mut prompter = scripted("add kebab\ncart\n");
        assert_eq!(prompter.line("> ").unwrap().as_deref(), Some("add kebab"));
        assert_eq!(prompter.line("> ").unwrap().as_deref(), Some("cart"));
        assert_eq!(prompter.line("> ").unwrap(), None);
    }

    #[test]
    fn test_form_answers() {
        let mut prompter = scripted("user@example.com\nsecret\nYes\n");
        assert_eq!(prompter.field("Email").unwrap(), "user@example.com");
        assert_eq!(prompter.secret("Password").unwrap(), "secret");
        assert!(prompter.confirm("Remember me").unwrap());

        // Missing answers read as empty and unconfirmed.
        assert_eq!(prompter.field("Phone").unwrap(), "");
        assert!(!prompter.confirm("Remember me").unwrap());
    }

    #[test]
    fn test_confirm_accepts_only_yes() {
        let mut prompter = scripted("y\nno\n\n");
        assert!(prompter.confirm("?").unwrap());
        assert!(!prompter.confirm("?").unwrap());
        assert!(!prompter.confirm("?").unwrap());
    }
}
