//! add-to-project CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration** — read step inputs from flags or `INPUT_*`
//!    environment variables and build the domain configuration. A missing or
//!    malformed input is fatal like any other error.
//! 2. **Wire observability** — configure `tracing-subscriber` (text or JSON)
//!    and, when an OTLP endpoint is configured, an OpenTelemetry exporter.
//! 3. **Construct infrastructure** — create the GraphQL-backed project board
//!    and hand it to [`board::add_to_project`].
//! 4. **Map the outcome** — publish `itemId` on success, exit 0 on a skip, and
//!    exit 1 with an `::error::` workflow command on any failure.

mod config;
mod output;
mod telemetry;

use std::process::ExitCode;

use anyhow::Context;
use board::{add_to_project, AddOutcome, RunId};
use github::GraphQlProjectBoard;
use tracing::{error, info_span, Instrument};

use crate::config::{Cli, ParseFailure};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match config::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(ParseFailure::Informational(e)) => e.exit(),
        Err(ParseFailure::Invalid(message)) => {
            eprintln!("{message}");
            println!("{}", output::error_command(&message));
            return ExitCode::FAILURE;
        }
    };

    let _telemetry = match telemetry::init(cli.log_format) {
        Ok(guard) => guard,
        Err(e) => {
            println!("{}", output::error_command(&format!("{e:#}")));
            return ExitCode::FAILURE;
        }
    };

    let run_id = RunId::new_random();
    let span = info_span!("add_to_project_run", run_id = %run_id);

    match run(&cli).instrument(span).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(run_id = %run_id, "{e:#}");
            println!("{}", output::error_command(&format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.add_to_project_config()?;
    let event = config::load_event(&cli.event_path)?;
    let board = GraphQlProjectBoard::connect(&cli.github_token, &cli.api_url)
        .context("Failed to create GitHub GraphQL client")?;

    match add_to_project(&board, &config, &event).await? {
        AddOutcome::Added { item_id } => {
            output::set_output(cli.output_path.as_deref(), "itemId", item_id.as_str())?;
        }
        AddOutcome::Skipped { .. } => {}
    }

    Ok(())
}
