//! Implementation of `udyam checksum verify|generate <digits>`.
//!
//! Results go to stdout: `valid` / `invalid` for `verify`, the check digit
//! for `generate`. In JSON mode each prints a single object.
use std::io::Write;

use udyam_core::predicates::is_aadhaar_checksum_valid;
use udyam_core::verhoeff_generate;

use crate::error::CliError;
use crate::format::FormatMode;

/// Number of data digits preceding the Aadhaar check digit.
const DATA_DIGITS: usize = 11;

/// Runs `checksum verify`.
///
/// Anything other than 12 ASCII digits is reported as `invalid`.
///
/// # Errors
///
/// Returns [`CliError::ChecksumInvalid`] (exit 1) when the check fails.
pub fn verify<W: Write>(out: &mut W, digits: &str, mode: FormatMode) -> Result<(), CliError> {
    let valid = is_aadhaar_checksum_valid(digits);
    tracing::debug!(valid, "checksum verified");
    let written = match mode {
        FormatMode::Human => writeln!(out, "{}", if valid { "valid" } else { "invalid" }),
        FormatMode::Json => writeln!(out, "{}", serde_json::json!({ "valid": valid })),
    };
    written.map_err(|e| CliError::output("stdout", &e))?;

    if valid {
        Ok(())
    } else {
        Err(CliError::ChecksumInvalid)
    }
}

/// Runs `checksum generate`.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] (exit 2) unless `digits` is
/// exactly 11 ASCII digits.
pub fn generate<W: Write>(out: &mut W, digits: &str, mode: FormatMode) -> Result<(), CliError> {
    if digits.len() != DATA_DIGITS {
        return Err(CliError::InvalidArgument {
            detail: format!("expected {DATA_DIGITS} digits, got {}", digits.chars().count()),
        });
    }
    let check = verhoeff_generate(digits).ok_or_else(|| CliError::InvalidArgument {
        detail: "digits must be 0-9 only".to_owned(),
    })?;
    let written = match mode {
        FormatMode::Human => writeln!(out, "{check}"),
        FormatMode::Json => writeln!(
            out,
            "{}",
            serde_json::json!({ "check_digit": check, "number": format!("{digits}{check}") })
        ),
    };
    written.map_err(|e| CliError::output("stdout", &e))
}
