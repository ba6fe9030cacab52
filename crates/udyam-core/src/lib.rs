#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod check_digits;
pub mod enums;
pub mod form;
pub mod newtypes;
pub mod predicates;
pub mod submission;
pub mod validation;

pub use check_digits::{verhoeff_generate, verhoeff_verify};
pub use enums::{ALL_ORGANIZATION_TYPES, DateType, OrganizationType, YesNo};
pub use form::{Field, FormRecord, ParseError, parse_form};
pub use newtypes::{AadhaarNumber, FormDate, NewtypeError, Pan};
pub use submission::{
    InMemoryStore, Registration, RegistrationId, RegistrationStore, StoreError, SubmitError,
    SubmitReceipt, submit,
};
pub use validation::pan_holder::{PanHolderRequest, parse_pan_holder, validate_pan_holder};
pub use validation::requirements::required_fields;
pub use validation::{
    DefectKind, FieldDefect, FormRule, RuleContext, RuleId, ValidationConfig, ValidationOutcome,
    build_registry, validate, validate_form,
};

/// Returns the current version of the udyam-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
