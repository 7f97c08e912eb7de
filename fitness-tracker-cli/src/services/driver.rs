use anyhow::{Context, Result};
use std::io::Write;

use super::package_reader::read_package;
use crate::config::OutputFormat;
use crate::models::{InfoMessage, Package};

/// Render one report in the requested format
pub fn render(info: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => serde_json::to_string(info).context("Failed to serialize report"),
    }
}

/// Compute and write a report line for each package, in order.
///
/// Stops at the first package that cannot be read; lines for earlier
/// packages have already been written by then.
pub fn run_packages<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    for (index, package) in packages.iter().enumerate() {
        let training = read_package(&package.workout_type, &package.data)
            .with_context(|| format!("Failed to read package #{}", index + 1))?;

        let info = training.show_training_info();
        writeln!(out, "{}", render(&info, format)?).context("Failed to write report")?;

        tracing::debug!("Reported {} workout", info.training_type);
    }

    out.flush().context("Failed to flush output")?;

    tracing::info!("Reported {} packages", packages.len());
    Ok(packages.len())
}
