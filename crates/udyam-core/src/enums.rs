/// Enumerated fields of the Udyam registration form.
///
/// `YesNo` and `DateType` serialize as the exact strings the form submits.
/// [`OrganizationType`] is keyed by the numeric option codes of the "Type of
/// Organisation" drop-down; the form record keeps the raw code so that an
/// unknown code becomes a validation defect instead of a parse failure.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Answer to a yes/no radio group (`hasPan`, `hasGstin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    /// `"yes"`
    Yes,
    /// `"no"`
    No,
}

impl YesNo {
    /// Returns the wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the PAN date is a date of birth or a date of incorporation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateType {
    /// Date of birth, for individuals and HUF kartas.
    #[serde(rename = "DOB")]
    Dob,
    /// Date of incorporation, for companies and other bodies.
    #[serde(rename = "DOI")]
    Doi,
}

impl DateType {
    /// Returns the wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dob => "DOB",
            Self::Doi => "DOI",
        }
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of organisation, keyed by the form's option code.
///
/// Code `"0"` is the drop-down placeholder and has no variant. Note that the
/// display order on the form differs from the code order: "Others" is code 8
/// but listed last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationType {
    /// Code 1.
    Proprietary,
    /// Code 2.
    HinduUndividedFamily,
    /// Code 3.
    Partnership,
    /// Code 4.
    CoOperative,
    /// Code 5.
    PrivateLimitedCompany,
    /// Code 6.
    PublicLimitedCompany,
    /// Code 7.
    SelfHelpGroup,
    /// Code 8.
    Others,
    /// Code 9.
    LimitedLiabilityPartnership,
    /// Code 10.
    Society,
    /// Code 11.
    Trust,
}

/// Every organisation type, in code order.
pub const ALL_ORGANIZATION_TYPES: [OrganizationType; 11] = [
    OrganizationType::Proprietary,
    OrganizationType::HinduUndividedFamily,
    OrganizationType::Partnership,
    OrganizationType::CoOperative,
    OrganizationType::PrivateLimitedCompany,
    OrganizationType::PublicLimitedCompany,
    OrganizationType::SelfHelpGroup,
    OrganizationType::Others,
    OrganizationType::LimitedLiabilityPartnership,
    OrganizationType::Society,
    OrganizationType::Trust,
];

impl OrganizationType {
    /// Parses a drop-down option code. Returns `None` for the placeholder
    /// `"0"` and for any unrecognised code.
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_ORGANIZATION_TYPES
            .iter()
            .copied()
            .find(|t| t.code() == code)
    }

    /// Returns the drop-down option code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Proprietary => "1",
            Self::HinduUndividedFamily => "2",
            Self::Partnership => "3",
            Self::CoOperative => "4",
            Self::PrivateLimitedCompany => "5",
            Self::PublicLimitedCompany => "6",
            Self::SelfHelpGroup => "7",
            Self::Others => "8",
            Self::LimitedLiabilityPartnership => "9",
            Self::Society => "10",
            Self::Trust => "11",
        }
    }

    /// Returns the English label shown on the form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Proprietary => "Proprietary",
            Self::HinduUndividedFamily => "Hindu Undivided Family",
            Self::Partnership => "Partnership",
            Self::CoOperative => "Co-Operative",
            Self::PrivateLimitedCompany => "Private Limited Company",
            Self::PublicLimitedCompany => "Public Limited Company",
            Self::SelfHelpGroup => "Self Help Group",
            Self::Others => "Others",
            Self::LimitedLiabilityPartnership => "Limited Liability Partnership",
            Self::Society => "Society",
            Self::Trust => "Trust",
        }
    }

    /// Returns `true` if registering this type of organisation requires a PAN.
    ///
    /// Only a proprietorship may register on the Aadhaar of its owner alone.
    pub fn requires_pan(self) -> bool {
        !matches!(self, Self::Proprietary)
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
