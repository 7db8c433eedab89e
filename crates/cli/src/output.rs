//! Step outputs and workflow commands.
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT` using the
//! heredoc-style delimiter form, which is safe for any value.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use uuid::Uuid;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Publishes `name=value` as a step output.
///
/// With no output file the pair is printed to stdout instead.
pub fn set_output(path: Option<&Path>, name: &str, value: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => append_to_file(path, name, value),
        None => write_plain(&mut std::io::stdout().lock(), name, value),
    }
}

/// Formats an `::error::` workflow command; the runner turns it into a
/// failure annotation on the step.
///
/// `%`, CR and LF are escaped so multi-line messages stay one command.
pub fn error_command(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}

fn append_to_file(path: &Path, name: &str, value: &str) -> anyhow::Result<()> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    let entry = format_entry(name, value, &delimiter);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file {}", path.display()))?;
    file.write_all(entry.as_bytes())
        .with_context(|| format!("Failed to write output '{name}' to {}", path.display()))
}

fn write_plain<W: Write>(out: &mut W, name: &str, value: &str) -> anyhow::Result<()> {
    writeln!(out, "{name}={value}").with_context(|| format!("Failed to write output '{name}'"))
}

fn format_entry(name: &str, value: &str, delimiter: &str) -> String {
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}
