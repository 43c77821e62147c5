//! Terminal prompts: the run confirmation and the build platform menu.
//!
//! With the `interactive` feature and a real terminal, `dialoguer` widgets
//! are used. Otherwise a line is read from stdin, which keeps piped input
//! (`echo 5 | shiroha build`) working.

use std::io::{self, BufRead, Write};

use shiroha_core::{
    application::{ApplicationError, ports::Prompter},
    domain::PlatformCatalog,
    error::ShirohaResult,
};

/// [`Prompter`] backed by the user's terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Ask for a build platform and return the raw selector.
    ///
    /// The answer is not validated here; the catalog lookup rejects
    /// anything outside the menu.
    pub fn select_platform(&self, catalog: &PlatformCatalog) -> ShirohaResult<String> {
        #[cfg(feature = "interactive")]
        if self.interactive {
            let items: Vec<&str> = catalog.iter().map(|p| p.description).collect();
            let index = dialoguer::Select::new()
                .with_prompt("Select target platform")
                .items(&items)
                .default(0)
                .interact()
                .map_err(prompt_failed)?;
            return catalog
                .iter()
                .nth(index)
                .map(|p| p.selector.to_string())
                .ok_or_else(|| prompt_failed(format!("no platform at index {index}")));
        }

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "Select target platform:").map_err(prompt_failed)?;
        for platform in catalog.iter() {
            writeln!(stdout, "{}. {}", platform.selector, platform.description)
                .map_err(prompt_failed)?;
        }
        write!(stdout, "Enter your choice (1-{}): ", catalog.len()).map_err(prompt_failed)?;
        stdout.flush().map_err(prompt_failed)?;

        read_line(&mut io::stdin().lock())?
            .ok_or_else(|| prompt_failed("no selection on stdin"))
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str) -> ShirohaResult<bool> {
        #[cfg(feature = "interactive")]
        if self.interactive {
            return dialoguer::Confirm::new()
                .with_prompt(question)
                .default(false)
                .interact()
                .map_err(prompt_failed);
        }

        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "\n{question} (y/n): ").map_err(prompt_failed)?;
            stdout.flush().map_err(prompt_failed)?;
        }

        // a closed stdin counts as "no"
        Ok(read_line(&mut io::stdin().lock())?
            .as_deref()
            .is_some_and(is_affirmative))
    }
}

/// `y` or `yes` in any case; anything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// One trimmed line, or `None` at end of input.
fn read_line(reader: &mut impl BufRead) -> ShirohaResult<Option<String>> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(prompt_failed)?;
    Ok((read > 0).then(|| line.trim().to_string()))
}

fn prompt_failed(err: impl ToString) -> shiroha_core::error::ShirohaError {
    ApplicationError::PromptFailed {
        reason: err.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_answers() {
        for answer in ["y", "Y", "yes", " YES \n"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
        for answer in ["", "n", "no", "yep", "1"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn read_line_trims_and_detects_eof() {
        let mut input = io::Cursor::new(" 5 \nrest");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("5"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("rest"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
