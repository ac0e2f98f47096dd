//! Maps a project type to its generator and runs it

use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::ScaffoldError;
use crate::progress::Reporter;
use crate::project::{ProjectName, ProjectType};
use crate::runner::CommandRunner;

/// Error text shown for an unknown project type
pub const INVALID_SELECTION_MESSAGE: &str = "Please choose a valid project type!";

/// How a dispatch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The generator for this project type succeeded
    Created(ProjectType),
    /// The requested project type is not one we know
    Rejected(String),
}

impl Outcome {
    /// Process exit code for this outcome
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Created(_) => 0,
            Self::Rejected(_) => 1,
        }
    }
}

/// Runs exactly one generator per dispatch and reports the result
pub struct Dispatcher<R, P> {
    runner: R,
    reporter: P,
    rejection_delay: Duration,
}

impl<R: CommandRunner, P: Reporter> Dispatcher<R, P> {
    /// Create a dispatcher
    ///
    /// `rejection_delay` is how long the spinner runs before an unknown
    /// project type is reported.
    pub const fn new(runner: R, reporter: P, rejection_delay: Duration) -> Self {
        Self {
            runner,
            reporter,
            rejection_delay,
        }
    }

    /// Resolve a raw type tag and dispatch it
    ///
    /// Unknown tags are rejected without running anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator cannot be started or fails.
    pub fn select(&mut self, choice: &str, name: &ProjectName) -> Result<Outcome, ScaffoldError> {
        match choice.parse::<ProjectType>() {
            Ok(kind) => self.dispatch(kind, name),
            Err(ScaffoldError::InvalidSelection(raw)) => Ok(self.reject(&raw)),
            Err(err) => Err(err),
        }
    }

    /// Run the generator for `kind`
    ///
    /// # Errors
    ///
    /// Returns an error if the generator cannot be started or fails. No
    /// success is reported in that case.
    pub fn dispatch(
        &mut self,
        kind: ProjectType,
        name: &ProjectName,
    ) -> Result<Outcome, ScaffoldError> {
        let invocation = kind.invocation(name);
        info!(project = %name, kind = %kind, command = %invocation, "dispatching");

        self.reporter.start(kind.wait_message());

        let runner = &self.runner;
        let result = self.reporter.suspend(&mut || runner.run(&invocation));
        if let Err(err) = result {
            debug!(kind = %kind, error = %err, "generator failed");
            self.reporter.error(&format!("{kind} generator failed"));
            return Err(err);
        }

        self.reporter.success(kind.success_message());
        if let Some(reminder) = kind.reminder(name) {
            self.reporter.note(&reminder);
        }

        Ok(Outcome::Created(kind))
    }

    /// Report `raw` as an unknown project type
    pub fn reject(&mut self, raw: &str) -> Outcome {
        info!(choice = raw, "unknown project type");

        self.reporter.start(&format!("Please wait while we run {raw}"));
        thread::sleep(self.rejection_delay);
        self.reporter.error(INVALID_SELECTION_MESSAGE);

        Outcome::Rejected(raw.to_string())
    }

    /// The command runner
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// The progress reporter
    pub const fn reporter(&self) -> &P {
        &self.reporter
    }

    /// The progress reporter, for output outside a dispatch
    pub fn reporter_mut(&mut self) -> &mut P {
        &mut self.reporter
    }
}
