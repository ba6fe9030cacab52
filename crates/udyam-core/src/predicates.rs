//! Shared, pure format predicates.
//!
//! Every path that judges an Aadhaar number, a PAN, a holder name or a PAN
//! date goes through these functions: the validated newtypes, the full-form
//! rules, and the standalone PAN-holder check. Keeping one implementation
//! guarantees identical verdicts at every call site.
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::check_digits::verhoeff_verify;

/// Compiles a literal pattern. The patterns below are constants and always
/// compile; `a^` never matches and is only a type-correct fallback.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|_| Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken")))
}

/// Exactly 12 ASCII digits.
static AADHAAR_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{12}$"));

/// Five capitals, four digits, one capital.
static PAN_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{5}[0-9]{4}[A-Z]$"));

/// `DD/MM/YYYY`.
static FORM_DATE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$"));

/// Maximum length, in characters, of the owner and PAN-holder names.
pub const MAX_NAME_LEN: usize = 100;

// ---------------------------------------------------------------------------
// Aadhaar
// ---------------------------------------------------------------------------

/// Returns `true` if `s` is exactly 12 ASCII digits.
pub fn is_aadhaar_shape(s: &str) -> bool {
    AADHAAR_RE.is_match(s)
}

/// Returns `true` if the first digit of `s` is neither `0` nor `1`.
///
/// Only meaningful once [`is_aadhaar_shape`] holds.
pub fn has_valid_leading_digit(s: &str) -> bool {
    !matches!(s.as_bytes().first(), Some(b'0' | b'1'))
}

/// Returns `true` if `s` has the Aadhaar shape and passes the Verhoeff check.
pub fn is_aadhaar_checksum_valid(s: &str) -> bool {
    is_aadhaar_shape(s) && verhoeff_verify(s)
}

// ---------------------------------------------------------------------------
// PAN
// ---------------------------------------------------------------------------

/// Returns `true` if `s` matches the PAN shape `AAAAA9999A`.
pub fn is_pan_format(s: &str) -> bool {
    PAN_RE.is_match(s)
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Outcome of checking a free-text name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameDefect {
    /// Absent, empty, or only whitespace.
    Missing,
    /// Longer than the configured maximum.
    TooLong,
}

/// Checks a name against the presence rule and the `max_len` character limit.
pub fn check_name(name: Option<&str>, max_len: usize) -> Result<(), NameDefect> {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return Err(NameDefect::Missing);
    };
    if name.chars().count() > max_len {
        return Err(NameDefect::TooLong);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Reasons a `DD/MM/YYYY` date string is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDefect {
    /// Does not match `DD/MM/YYYY`.
    Format,
    /// Matches the shape but is not a real calendar date (e.g. `31/02/2020`).
    NotACalendarDate,
    /// A real date strictly after the evaluation date.
    InFuture,
}

/// Returns `true` if `s` matches `DD/MM/YYYY` (shape only).
pub fn is_form_date_format(s: &str) -> bool {
    FORM_DATE_RE.is_match(s)
}

/// Parses a `DD/MM/YYYY` string into a calendar date.
pub fn parse_form_date(s: &str) -> Result<NaiveDate, DateDefect> {
    if !is_form_date_format(s) {
        return Err(DateDefect::Format);
    }
    // The shape check guarantees ASCII digits at these offsets.
    let day = s[0..2].parse::<u32>().map_err(|_| DateDefect::Format)?;
    let month = s[3..5].parse::<u32>().map_err(|_| DateDefect::Format)?;
    let year = s[6..10].parse::<i32>().map_err(|_| DateDefect::Format)?;
    // chrono's proleptic calendar has a year 0; the Gregorian one does not.
    if year < 1 {
        return Err(DateDefect::NotACalendarDate);
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateDefect::NotACalendarDate)
}

/// Returns `true` if `date` is not later than `today`.
pub fn is_not_future(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

/// Parses `s` and rejects dates after `today`.
pub fn check_form_date(s: &str, today: NaiveDate) -> Result<NaiveDate, DateDefect> {
    let date = parse_form_date(s)?;
    if is_not_future(date, today) {
        Ok(date)
    } else {
        Err(DateDefect::InFuture)
    }
}
