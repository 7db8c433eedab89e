//! Step inputs.
//!
//! GitHub Actions passes `with:` inputs as `INPUT_<NAME>` environment
//! variables (name upper-cased, hyphens kept). Every input is also accepted as
//! a command-line flag so the binary can be run by hand.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use board::{AddToProjectConfig, EventPayload, MatchOperator, PatternFilter};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing::warn;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Adds the triggering issue or pull request to a GitHub project board.
#[derive(Debug, Parser)]
#[command(name = "add-to-project", version, about)]
pub struct Cli {
    /// URL of the project board, e.g. https://github.com/orgs/my-org/projects/5
    #[arg(long, env = "INPUT_PROJECT-URL")]
    pub project_url: String,

    /// Token used to authenticate against the GraphQL API.
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Comma-separated label patterns (regular expressions).
    #[arg(long, env = "INPUT_LABELED", default_value = "")]
    pub labeled: String,

    /// How label patterns combine: `and` or `or`.
    #[arg(long, env = "INPUT_LABEL-OPERATOR", default_value = "or")]
    pub label_operator: String,

    /// Comma-separated assignee patterns (regular expressions).
    #[arg(long, env = "INPUT_ASSIGNED", default_value = "")]
    pub assigned: String,

    /// How assignee patterns combine: `and` or `or`.
    #[arg(long, env = "INPUT_ASSIGNEE-OPERATOR", default_value = "or")]
    pub assignee_operator: String,

    /// Path of the JSON webhook payload that triggered the workflow.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// GraphQL endpoint.
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = github::DEFAULT_GRAPHQL_URL)]
    pub api_url: String,

    /// Step output file. When unset, outputs are printed to stdout.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_path: Option<PathBuf>,

    #[arg(long, env = "ADD_TO_PROJECT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Why the command line did not yield a [`Cli`].
#[derive(Debug)]
pub enum ParseFailure {
    /// `--help` or `--version`: clap prints and exits successfully.
    Informational(clap::Error),
    /// Missing or malformed input. Fatal for the step.
    Invalid(String),
}

/// Parses `args`, separating help/version requests from input errors.
///
/// Input errors are reported like every other fatal error (status 1 with a
/// workflow error command) rather than with clap's own usage exit code.
pub fn parse_args<I, T>(args: I) -> Result<Cli, ParseFailure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParseFailure::Informational(e),
        _ => ParseFailure::Invalid(e.to_string().trim_end().to_string()),
    })
}

impl Cli {
    /// Builds the domain configuration from the raw inputs.
    ///
    /// Fails if any label or assignee pattern is not a valid regex.
    pub fn add_to_project_config(&self) -> anyhow::Result<AddToProjectConfig> {
        let label_filter = PatternFilter::parse_list(
            &self.labeled,
            parse_operator("label-operator", &self.label_operator),
        )
        .context("Invalid `labeled` input")?;

        let assignee_filter = PatternFilter::parse_list(
            &self.assigned,
            parse_operator("assignee-operator", &self.assignee_operator),
        )
        .context("Invalid `assigned` input")?;

        Ok(AddToProjectConfig {
            project_url: self.project_url.clone(),
            label_filter,
            assignee_filter,
        })
    }
}

/// Parses an operator input, falling back to `or` for unrecognised values.
fn parse_operator(input: &str, raw: &str) -> MatchOperator {
    MatchOperator::from_input(raw).unwrap_or_else(|| {
        warn!(input, value = raw, "Unrecognised operator, using 'or'");
        MatchOperator::Or
    })
}

/// Reads the webhook payload at `path`.
pub fn load_event(path: &Path) -> anyhow::Result<EventPayload> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event payload {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse event payload {}", path.display()))
}
