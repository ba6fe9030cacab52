//! Implementation of `udyam validate <file>`.
//!
//! Parses a JSON form record, runs every applicable rule, and writes the
//! defects plus a summary line to stderr.
//!
//! Exit codes:
//! - 0 = accepted
//! - 1 = rejected (at least one defect)
//! - 2 = the JSON does not have the shape of a form record
use std::io::Write;
use std::time::Instant;

use chrono::NaiveDate;
use udyam_core::{ValidationConfig, parse_form, validate};

use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, write_outcome, write_timing_human};

/// Runs the `validate` command, writing diagnostics to `out`.
///
/// # Errors
///
/// - [`CliError::ParseFailed`]: `content` is not a form record.
/// - [`CliError::Rejected`]: one or more rules failed.
pub fn run<W: Write>(
    out: &mut W,
    content: &str,
    config: &ValidationConfig,
    today: NaiveDate,
    mode: FormatMode,
    fmt_config: &FormatterConfig,
) -> Result<(), CliError> {
    let record = parse_form(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;

    let started = Instant::now();
    let outcome = validate(&record, config, today);
    let elapsed = started.elapsed();

    write_outcome(out, &outcome, mode, fmt_config).map_err(|e| CliError::output("stderr", &e))?;
    if mode == FormatMode::Human {
        write_timing_human(out, "validated", elapsed, fmt_config)
            .map_err(|e| CliError::output("stderr", &e))?;
    }

    if outcome.is_accepted() {
        Ok(())
    } else {
        Err(CliError::Rejected {
            defects: outcome.defects().len(),
        })
    }
}
