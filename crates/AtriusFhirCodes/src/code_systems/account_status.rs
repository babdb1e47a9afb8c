// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: AccountStatus
/// Canonical URL: http://hl7.org/fhir/account-status
/// Title: AccountStatus
/// Indicates whether the account is available to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "AccountStatus", system = "http://hl7.org/fhir/account-status")]
pub enum AccountStatus {
    /// Display: Active
    /// Definition: This account is active and may be used.
    #[code("active")]
    Active,
    /// Display: Inactive
    /// Definition: This account is inactive and should not be used to track financial information.
    #[code("inactive")]
    Inactive,
    /// Display: Entered in error
    /// Definition: This instance should not have been part of this patient's medical record.
    #[code("entered-in-error")]
    EnteredInError,
    /// Display: On Hold
    /// Definition: This account is on hold.
    #[code("on-hold")]
    OnHold,
    /// Display: Unknown
    /// Definition: The account status is unknown.
    #[code("unknown")]
    Unknown,
}
/// [`BoundCode`] restricted to [`AccountStatus`].
pub type AccountStatusCode = BoundCode<AccountStatus>;
