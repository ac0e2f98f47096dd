//! alasti CLI library
//!
//! Asks for a project name and a project type, then hands off to the
//! matching third-party generator (`create-vite`, `create-react-app` or
//! `create-next-app`).

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod banner;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod observability;
pub mod progress;
pub mod project;
pub mod prompt;
pub mod runner;

pub use app::{App, Request};
pub use config::Settings;
pub use dispatch::{Dispatcher, Outcome};
pub use error::ScaffoldError;
pub use progress::{Reporter, TerminalReporter};
pub use project::{Invocation, ProjectName, ProjectType};
pub use prompt::{DialoguerPrompter, Prompter};
pub use runner::{CommandRunner, SystemRunner};
