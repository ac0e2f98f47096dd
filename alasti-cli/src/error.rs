//! Error types and error handling

use std::process::ExitStatus;

use thiserror::Error;

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project type tag is not one of the known choices
    #[error("Invalid project type: {0}")]
    InvalidSelection(String),

    /// The generator process could not be started
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        /// Rendered command line
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The generator process exited unsuccessfully
    #[error("`{command}` exited with {status}")]
    CommandFailed {
        /// Rendered command line
        command: String,
        /// Exit status reported by the child
        status: ExitStatus,
    },

    /// Reading an answer from the terminal failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl ScaffoldError {
    /// Whether this error came from the external generator
    #[must_use]
    pub const fn is_external_command_failure(&self) -> bool {
        matches!(self, Self::Spawn { .. } | Self::CommandFailed { .. })
    }
}
