//! Implementation of `udyam validate-pan <file>`.
//!
//! Checks a PAN holder request (PAN, holder name, date of birth or
//! incorporation) on its own. Exit codes match `udyam validate`.
use std::io::Write;

use chrono::NaiveDate;
use udyam_core::{ValidationConfig, parse_pan_holder, validate_pan_holder};

use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, write_outcome};

/// Runs the `validate-pan` command, writing diagnostics to `out`.
///
/// # Errors
///
/// - [`CliError::ParseFailed`]: `content` is not a PAN holder request.
/// - [`CliError::Rejected`]: one or more PAN details are invalid.
pub fn run<W: Write>(
    out: &mut W,
    content: &str,
    config: &ValidationConfig,
    today: NaiveDate,
    mode: FormatMode,
    fmt_config: &FormatterConfig,
) -> Result<(), CliError> {
    let request = parse_pan_holder(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;

    let outcome = validate_pan_holder(&request, config, today);
    write_outcome(out, &outcome, mode, fmt_config).map_err(|e| CliError::output("stderr", &e))?;

    match outcome.defects().len() {
        0 => Ok(()),
        defects => Err(CliError::Rejected { defects }),
    }
}
