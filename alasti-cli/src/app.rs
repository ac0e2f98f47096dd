//! The interactive run: banner, name, type, dispatch

use std::thread;

use tracing::debug;

use crate::config::Settings;
use crate::dispatch::{Dispatcher, Outcome};
use crate::error::ScaffoldError;
use crate::progress::Reporter;
use crate::project::{ProjectName, ProjectType};
use crate::prompt::Prompter;
use crate::runner::CommandRunner;

/// Answers supplied up front instead of through the prompts
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Project name; blank falls back to the configured default
    pub name: Option<String>,
    /// Raw project type tag
    pub project_type: Option<String>,
    /// Skip the banner even when it is enabled in the settings
    pub no_banner: bool,
}

/// One scaffolding session
///
/// The session moves through name, type and dispatch exactly once and never
/// goes back. The caller turns the returned [`Outcome`] into the exit code.
pub struct App<Q, R, P> {
    settings: Settings,
    prompter: Q,
    dispatcher: Dispatcher<R, P>,
}

impl<Q: Prompter, R: CommandRunner, P: Reporter> App<Q, R, P> {
    /// Create a session
    pub fn new(settings: Settings, prompter: Q, runner: R, reporter: P) -> Self {
        let dispatcher = Dispatcher::new(
            runner,
            reporter,
            settings.dispatch.invalid_selection_delay(),
        );
        Self {
            settings,
            prompter,
            dispatcher,
        }
    }

    /// Run the session to its outcome
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt cannot be answered or the generator
    /// fails.
    pub fn run(&mut self, request: Request) -> Result<Outcome, ScaffoldError> {
        if self.settings.banner.enabled && !request.no_banner {
            self.welcome();
        }

        let default_name = self.settings.project.default_name.clone();
        let raw_name = match request.name {
            Some(name) => name,
            None => self.prompter.project_name(&default_name)?,
        };
        let name = ProjectName::from_input(&raw_name, &default_name);
        debug!(project = %name, "project name chosen");

        match request.project_type {
            Some(choice) => self.dispatcher.select(&choice, &name),
            None => {
                let kind = self.prompter.project_type(&ProjectType::ALL)?;
                self.dispatcher.dispatch(kind, &name)
            }
        }
    }

    /// The source of answers
    pub const fn prompter(&self) -> &Q {
        &self.prompter
    }

    /// The dispatcher driving the generators
    pub const fn dispatcher(&self) -> &Dispatcher<R, P> {
        &self.dispatcher
    }

    fn welcome(&mut self) {
        let reporter = self.dispatcher.reporter_mut();
        reporter.banner(&self.settings.banner.title);
        thread::sleep(self.settings.banner.pause());
        reporter.welcome();
    }
}
