//! Persistence boundary for accepted registrations.
//!
//! [`submit`] validates a record and, when it is accepted, hands a typed
//! [`Registration`] to a [`RegistrationStore`]. The store is an injected
//! dependency so that `udyam-core` stays free of database and network code;
//! [`InMemoryStore`] is the reference implementation.
use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::enums::{DateType, OrganizationType, YesNo};
use crate::form::{FormRecord, present};
use crate::newtypes::{AadhaarNumber, FormDate, NewtypeError, Pan};
use crate::validation::requirements::{organization_type, pan_details_required};
use crate::validation::{FieldDefect, ValidationConfig, ValidationOutcome, validate};

/// Message returned to the client after a successful submission.
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";

/// Identifier assigned by a store to a stored registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegistrationId(pub u64);

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An accepted form with its identifiers typed.
///
/// PAN details, including the PAN consent, are carried only when the
/// organisation type required them and the applicant declared a PAN; they
/// have been validated in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    /// Aadhaar number of the entrepreneur.
    pub aadhaar_number: AadhaarNumber,
    /// Name of the entrepreneur.
    pub owner_name: String,
    /// Consent to Aadhaar-based verification.
    pub aadhaar_declaration: bool,
    /// Type of organisation.
    pub organization_type: OrganizationType,
    /// Whether the applicant declared a PAN.
    pub has_pan: YesNo,
    /// PAN of the organisation.
    pub pan: Option<Pan>,
    /// Name of the PAN holder.
    pub pan_name: Option<String>,
    /// Date of birth or incorporation.
    pub dob: Option<FormDate>,
    /// Which kind of date `dob` is.
    pub dob_type: Option<DateType>,
    /// Consent to PAN-based verification.
    pub pan_declaration: Option<bool>,
    /// Whether the organisation has a GSTIN.
    pub has_gstin: Option<YesNo>,
    /// Total turnover (A), in rupees.
    pub total_turnover_a: Option<f64>,
    /// Total turnover (B), in rupees.
    pub total_turnover_b: Option<f64>,
}

impl Registration {
    /// Types the identifiers of a record that has already been accepted.
    ///
    /// # Errors
    ///
    /// Returns [`NewtypeError`] if a value fails its newtype check. For an
    /// accepted record this indicates a bug in the rules.
    pub fn from_accepted(record: &FormRecord) -> Result<Self, NewtypeError> {
        let aadhaar_number = AadhaarNumber::try_from(record.aadhaar_number.as_str())?;
        let organization_type =
            organization_type(record).ok_or_else(|| NewtypeError::InvalidFormat {
                type_name: "OrganizationType",
                expected: "an option code from 1 to 11",
                got: record.organization_type.clone(),
            })?;

        let (pan, pan_name, dob, dob_type, pan_declaration) = if pan_details_required(record) {
            (
                present(record.pan.as_ref()).map(Pan::try_from).transpose()?,
                record.pan_name.clone(),
                present(record.dob.as_ref())
                    .map(FormDate::try_from)
                    .transpose()?,
                record.dob_type,
                record.pan_declaration,
            )
        } else {
            (None, None, None, None, None)
        };

        Ok(Self {
            aadhaar_number,
            owner_name: record.owner_name.clone(),
            aadhaar_declaration: record.aadhaar_declaration,
            organization_type,
            has_pan: record.has_pan,
            pan,
            pan_name,
            dob,
            dob_type,
            pan_declaration,
            has_gstin: record.has_gstin,
            total_turnover_a: record.total_turnover_a,
            total_turnover_b: record.total_turnover_b,
        })
    }
}

/// Errors reported by a [`RegistrationStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A registration with the same Aadhaar number already exists.
    #[error("a registration with this Aadhaar number already exists")]
    DuplicateAadhaar,
    /// A registration with the same PAN already exists.
    #[error("a registration with this PAN already exists")]
    DuplicatePan,
    /// The backing store failed.
    #[error("store failure: {0}")]
    Backend(String),
}

/// Durable storage for accepted registrations.
///
/// Implementations enforce uniqueness of the Aadhaar number and, when
/// present, the PAN.
pub trait RegistrationStore {
    /// Stores `registration` and returns its new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a uniqueness violation or backend failure.
    fn insert(&mut self, registration: &Registration) -> Result<RegistrationId, StoreError>;
}

/// A [`RegistrationStore`] held in memory. Identifiers start at 1.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Vec<(RegistrationId, Registration)>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a stored registration.
    pub fn get(&self, id: RegistrationId) -> Option<&Registration> {
        self.rows.iter().find(|(i, _)| *i == id).map(|(_, r)| r)
    }

    /// Number of stored registrations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RegistrationStore for InMemoryStore {
    fn insert(&mut self, registration: &Registration) -> Result<RegistrationId, StoreError> {
        for (_, existing) in &self.rows {
            if existing.aadhaar_number == registration.aadhaar_number {
                return Err(StoreError::DuplicateAadhaar);
            }
            if registration.pan.is_some() && existing.pan == registration.pan {
                return Err(StoreError::DuplicatePan);
            }
        }
        let id = RegistrationId(self.rows.len() as u64 + 1);
        self.rows.push((id, registration.clone()));
        Ok(id)
    }
}

/// Receipt for a stored registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Identifier assigned by the store.
    pub id: RegistrationId,
    /// Client-facing confirmation text.
    pub message: &'static str,
}

/// Why a submission did not produce a receipt.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The record failed validation; the store was not touched.
    #[error("form rejected with {} defect(s)", .0.len())]
    Rejected(Vec<FieldDefect>),
    /// The store refused the registration.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// An accepted record could not be typed.
    #[error("accepted record failed type conversion: {0}")]
    Internal(#[from] NewtypeError),
}

/// Validates `record` and stores it when it is accepted.
///
/// # Errors
///
/// [`SubmitError::Rejected`] carries every defect when validation fails.
/// [`SubmitError::Store`] is returned when the store refuses the record.
pub fn submit<S: RegistrationStore + ?Sized>(
    store: &mut S,
    record: &FormRecord,
    config: &ValidationConfig,
    today: NaiveDate,
) -> Result<SubmitReceipt, SubmitError> {
    match validate(record, config, today) {
        ValidationOutcome::Rejected(defects) => Err(SubmitError::Rejected(defects)),
        ValidationOutcome::Accepted => {
            let registration = Registration::from_accepted(record)?;
            let id = store.insert(&registration).inspect_err(|e| {
                warn!(error = %e, "registration not stored");
            })?;
            info!(%id, "registration stored");
            Ok(SubmitReceipt {
                id,
                message: SUBMITTED_MESSAGE,
            })
        }
    }
}
