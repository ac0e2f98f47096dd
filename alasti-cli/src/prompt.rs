//! Interactive questions

use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::error::ScaffoldError;
use crate::project::ProjectType;

/// Label of the name question
pub const NAME_PROMPT: &str = "What is the name of your project?";

/// Label of the project type question
pub const TYPE_PROMPT: &str = "What type of project do you want to create?";

/// Source of answers to the two scaffolding questions
pub trait Prompter {
    /// Ask for the project name, offering `default`
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError>;

    /// Ask which of `choices` to create
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn project_type(&mut self, choices: &[ProjectType]) -> Result<ProjectType, ScaffoldError>;
}

/// Prompter reading answers from the terminal
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    /// Create a prompter with the colorful theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(NAME_PROMPT)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .inspect_err(|_| restore_cursor())?;
        Ok(answer)
    }

    fn project_type(&mut self, choices: &[ProjectType]) -> Result<ProjectType, ScaffoldError> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(TYPE_PROMPT)
            .items(choices)
            .default(0)
            .interact()
            .inspect_err(|_| restore_cursor())?;
        Ok(choices[index])
    }
}

/// Show the cursor again after a prompt failed to read an answer
fn restore_cursor() {
    let _ = Term::stdout().show_cursor();
    let _ = Term::stderr().show_cursor();
}
