//! alasti CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process::ExitCode;

use alasti_cli_lib::{
    observability, App, DialoguerPrompter, Request, Settings, SystemRunner, TerminalReporter,
};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "alasti")]
#[command(version)]
#[command(about = "Scaffold a React, Vite or Next.js project", long_about = None)]
struct Cli {
    /// Project name (skips the name prompt)
    #[arg(long)]
    name: Option<String>,

    /// Project type: react-vite, react or next (skips the type prompt)
    #[arg(long = "type", value_name = "TYPE")]
    project_type: Option<String>,

    /// Read settings from this file instead of the default locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not show the banner
    #[arg(long)]
    no_banner: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    observability::init(cli.verbose)?;

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load().context("Failed to load settings")?,
    };

    let request = Request {
        name: cli.name,
        project_type: cli.project_type,
        no_banner: cli.no_banner,
    };

    let mut app = App::new(
        settings,
        DialoguerPrompter::new(),
        SystemRunner,
        TerminalReporter::new(),
    );
    let outcome = app.run(request)?;

    Ok(ExitCode::from(outcome.exit_code()))
}
