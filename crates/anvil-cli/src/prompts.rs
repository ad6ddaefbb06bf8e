//! Question answering for `anvil new`.
//!
//! [`Prompter`] is the seam between the question flow and the terminal:
//! `--yes` swaps the dialoguer implementation for one that accepts every
//! default, so both paths run the same code.

use crate::error::{CliError, CliResult};

/// Rejects an answer with a message shown to the user.
pub type Validator = fn(&str) -> Result<(), String>;

#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn input(&self, question: &str, default: &str, validate: Validator) -> CliResult<String>;

    fn confirm(&self, question: &str, default: bool) -> CliResult<bool>;

    /// Returns the chosen index.
    fn select(&self, question: &str, items: &[String], default: usize) -> CliResult<usize>;

    /// Returns the chosen indices in item order.
    fn multi_select(
        &self,
        question: &str,
        items: &[String],
        defaults: &[bool],
    ) -> CliResult<Vec<usize>>;
}

/// Answers every question with its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn input(&self, question: &str, default: &str, validate: Validator) -> CliResult<String> {
        validate(default).map_err(|reason| CliError::InvalidInput {
            message: format!("{question}: '{default}' {reason}"),
        })?;
        Ok(default.to_string())
    }

    fn confirm(&self, _question: &str, default: bool) -> CliResult<bool> {
        Ok(default)
    }

    fn select(&self, _question: &str, _items: &[String], default: usize) -> CliResult<usize> {
        Ok(default)
    }

    fn multi_select(
        &self,
        _question: &str,
        _items: &[String],
        defaults: &[bool],
    ) -> CliResult<Vec<usize>> {
        Ok(defaults
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
            .collect())
    }
}

#[cfg(feature = "interactive")]
pub use terminal::TerminalPrompter;

#[cfg(feature = "interactive")]
mod terminal {
    use console::Term;
    use dialoguer::theme::ColorfulTheme;
    use dialoguer::{Confirm, Input, MultiSelect, Select};

    use super::{Prompter, Validator};
    use crate::error::{CliError, CliResult};

    /// Ctrl-C while a prompt is open cancels the run.
    fn map_dialoguer_err(e: dialoguer::Error) -> CliError {
        let io = std::io::Error::from(e);
        if io.kind() == std::io::ErrorKind::Interrupted {
            CliError::Cancelled
        } else {
            CliError::from(io)
        }
    }

    /// Asks on stderr so stdout stays clean for piping.
    pub struct TerminalPrompter {
        term: Term,
        theme: ColorfulTheme,
    }

    impl TerminalPrompter {
        pub fn new() -> Self {
            Self {
                term: Term::stderr(),
                theme: ColorfulTheme::default(),
            }
        }
    }

    impl Prompter for TerminalPrompter {
        fn input(&self, question: &str, default: &str, validate: Validator) -> CliResult<String> {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(question)
                .default(default.to_string())
                .validate_with(move |answer: &String| validate(answer))
                .interact_text_on(&self.term)
                .map(|answer| answer.trim().to_string())
                .map_err(map_dialoguer_err)
        }

        fn confirm(&self, question: &str, default: bool) -> CliResult<bool> {
            Confirm::with_theme(&self.theme)
                .with_prompt(question)
                .default(default)
                .interact_on(&self.term)
                .map_err(map_dialoguer_err)
        }

        fn select(&self, question: &str, items: &[String], default: usize) -> CliResult<usize> {
            Select::with_theme(&self.theme)
                .with_prompt(question)
                .items(items)
                .default(default)
                .interact_on(&self.term)
                .map_err(map_dialoguer_err)
        }

        fn multi_select(
            &self,
            question: &str,
            items: &[String],
            defaults: &[bool],
        ) -> CliResult<Vec<usize>> {
            MultiSelect::with_theme(&self.theme)
                .with_prompt(question)
                .items(items)
                .defaults(defaults)
                .interact_on(&self.term)
                .map_err(map_dialoguer_err)
        }
    }
}
