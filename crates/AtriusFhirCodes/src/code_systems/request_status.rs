// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: RequestStatus
/// Canonical URL: http://hl7.org/fhir/request-status
/// Title: RequestStatus
/// Codes identifying the lifecycle stage of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "RequestStatus", system = "http://hl7.org/fhir/request-status")]
pub enum RequestStatus {
    /// Display: Draft
    /// Definition: The request has been created but is not yet complete or ready for action.
    #[code("draft")]
    Draft,
    /// Display: Active
    /// Definition: The request is in force and ready to be acted upon.
    #[code("active")]
    Active,
    /// Display: On Hold
    /// Definition: The request (and any implicit authorization to act) has been temporarily withdrawn but is expected to resume in the future.
    #[code("on-hold")]
    OnHold,
    /// Display: Revoked
    /// Definition: The request (and any implicit authorization to act) has been terminated prior to the known full completion of the intended actions.  No further activity should occur.
    #[code("revoked")]
    Revoked,
    /// Display: Completed
    /// Definition: The activity described by the request has been fully performed.  No further activity will occur.
    #[code("completed")]
    Completed,
    /// Display: Entered in Error
    /// Definition: This request should never have existed and should be considered 'void'.
    #[code("entered-in-error")]
    EnteredInError,
    /// Display: Unknown
    /// Definition: The authoring/source system does not know which of the status values currently applies for this request.
    #[code("unknown")]
    Unknown,
}
/// [`BoundCode`] restricted to [`RequestStatus`].
pub type RequestStatusCode = BoundCode<RequestStatus>;
