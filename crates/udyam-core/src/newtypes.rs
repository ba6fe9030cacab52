/// Validated newtype wrappers for the identifiers on a registration form.
///
/// Each newtype enforces its format at construction time via
/// [`TryFrom<&str>`] using the shared predicates in [`crate::predicates`].
/// Once constructed the inner value is immutable (no `DerefMut`). Serde
/// `Deserialize` impls re-run validation so invalid data cannot enter the
/// type system from untrusted JSON.
use std::fmt;
use std::ops::Deref;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::check_digits::verhoeff_verify;
use crate::predicates::{
    DateDefect, has_valid_leading_digit, is_aadhaar_shape, is_pan_format, parse_form_date,
};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from an invalid string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewtypeError {
    /// The string did not match the expected shape.
    #[error("invalid {type_name}: expected {expected}, got {got:?}")]
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },
    /// An Aadhaar number starting with 0 or 1.
    #[error("invalid AadhaarNumber: cannot start with 0 or 1")]
    LeadingDigit,
    /// An Aadhaar number whose Verhoeff check digit does not match.
    #[error("invalid AadhaarNumber: checksum failed")]
    Checksum,
    /// A date with the right shape that does not exist on the calendar.
    #[error("invalid FormDate: {got:?} is not a calendar date")]
    NotACalendarDate {
        /// The input that was rejected.
        got: String,
    },
}

// ---------------------------------------------------------------------------
// AadhaarNumber
// ---------------------------------------------------------------------------

/// A 12-digit Aadhaar number that passed every structural rule.
///
/// Invariants: exactly 12 ASCII digits, the first digit is not `0` or `1`,
/// and the Verhoeff check over all 12 digits succeeds.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AadhaarNumber(String);

impl TryFrom<&str> for AadhaarNumber {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if !is_aadhaar_shape(s) {
            return Err(NewtypeError::InvalidFormat {
                type_name: "AadhaarNumber",
                expected: "12 digits",
                got: s.to_owned(),
            });
        }
        if !has_valid_leading_digit(s) {
            return Err(NewtypeError::LeadingDigit);
        }
        if !verhoeff_verify(s) {
            return Err(NewtypeError::Checksum);
        }
        Ok(Self(s.to_owned()))
    }
}

impl AadhaarNumber {
    /// Returns the number with all but the last four digits masked, the way
    /// it may appear in receipts and logs.
    pub fn masked(&self) -> String {
        format!("XXXXXXXX{}", &self.0[8..])
    }
}

/// Debug output is masked so the full number never reaches logs.
impl fmt::Debug for AadhaarNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AadhaarNumber({})", self.masked())
    }
}

impl Deref for AadhaarNumber {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AadhaarNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AadhaarNumber {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AadhaarNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Pan
// ---------------------------------------------------------------------------

/// Permanent Account Number: five capitals, four digits, one capital.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pan(String);

impl TryFrom<&str> for Pan {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if is_pan_format(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(NewtypeError::InvalidFormat {
                type_name: "Pan",
                expected: "AAAAA9999A (e.g. ABCDE1234F)",
                got: s.to_owned(),
            })
        }
    }
}

impl Deref for Pan {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Pan {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Pan {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// FormDate
// ---------------------------------------------------------------------------

/// A real calendar date written as `DD/MM/YYYY`.
///
/// Round-trip fidelity is preserved by storing the original string next to
/// the parsed date. Whether the date lies in the future depends on the
/// evaluation date and is checked by the validation engine, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormDate {
    raw: String,
    date: NaiveDate,
}

impl FormDate {
    /// Returns the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl TryFrom<&str> for FormDate {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match parse_form_date(s) {
            Ok(date) => Ok(Self {
                raw: s.to_owned(),
                date,
            }),
            Err(DateDefect::Format) => Err(NewtypeError::InvalidFormat {
                type_name: "FormDate",
                expected: "DD/MM/YYYY (e.g. 15/05/1980)",
                got: s.to_owned(),
            }),
            Err(DateDefect::NotACalendarDate | DateDefect::InFuture) => {
                Err(NewtypeError::NotACalendarDate { got: s.to_owned() })
            }
        }
    }
}

impl Deref for FormDate {
    type Target = str;
    fn deref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for FormDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for FormDate {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for FormDate {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}
