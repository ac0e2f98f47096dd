//! Spinner-style progress reporting

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::banner;
use crate::error::ScaffoldError;

/// Progress indicator with started, success and error states
pub trait Reporter {
    /// Show `message` next to a running indicator
    fn start(&mut self, message: &str);

    /// Stop the indicator and report success
    fn success(&mut self, message: &str);

    /// Stop the indicator and report failure
    fn error(&mut self, message: &str);

    /// Print an extra line after the indicator has stopped
    fn note(&mut self, message: &str);

    /// Show the title banner
    fn banner(&mut self, title: &str);

    /// Show the instructions printed under the banner
    fn welcome(&mut self);

    /// Run `task` while another process owns the terminal
    ///
    /// # Errors
    ///
    /// Returns whatever error `task` returns.
    fn suspend(
        &mut self,
        task: &mut dyn FnMut() -> Result<(), ScaffoldError>,
    ) -> Result<(), ScaffoldError> {
        task()
    }
}

/// Reporter drawing an `indicatif` spinner on the terminal
#[derive(Default)]
pub struct TerminalReporter {
    spinner: Option<ProgressBar>,
}

impl TerminalReporter {
    /// Create a reporter with no active spinner
    #[must_use]
    pub const fn new() -> Self {
        Self { spinner: None }
    }

    fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Reporter for TerminalReporter {
    fn start(&mut self, message: &str) {
        self.clear();

        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) =
            ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
        {
            spinner.set_style(spinner_style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn success(&mut self, message: &str) {
        self.clear();
        println!("{} {}", style("✔").green().bold(), style(message).green());
    }

    fn error(&mut self, message: &str) {
        self.clear();
        eprintln!("{} {}", style("✖").red().bold(), style(message).red());
    }

    fn note(&mut self, message: &str) {
        println!();
        println!();
        println!("{}", style(message).yellow().bright());
    }

    fn banner(&mut self, title: &str) {
        self.clear();
        banner::show(title);
    }

    fn welcome(&mut self) {
        println!("{}", banner::welcome());
    }

    fn suspend(
        &mut self,
        task: &mut dyn FnMut() -> Result<(), ScaffoldError>,
    ) -> Result<(), ScaffoldError> {
        match &self.spinner {
            Some(spinner) => spinner.suspend(task),
            None => task(),
        }
    }
}

impl Drop for TerminalReporter {
    fn drop(&mut self) {
        self.clear();
    }
}
