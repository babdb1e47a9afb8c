// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: ObservationStatus
/// Canonical URL: http://hl7.org/fhir/observation-status
/// Title: ObservationStatus
/// Codes providing the status of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "ObservationStatus", system = "http://hl7.org/fhir/observation-status")]
pub enum ObservationStatus {
    /// Display: Registered
    /// Definition: The existence of the observation is registered, but there is no result yet available.
    #[code("registered")]
    Registered,
    /// Display: Preliminary
    /// Definition: This is an initial or interim observation: data may be incomplete or unverified.
    #[code("preliminary")]
    Preliminary,
    /// Display: Final
    /// Definition: The observation is complete and there are no further actions needed.
    #[code("final")]
    Final,
    /// Display: Amended
    /// Definition: Subsequent to being Final, the observation has been modified subsequent.  This includes updates/new information and corrections.
    #[code("amended")]
    Amended,
    /// Display: Corrected
    /// Definition: Subsequent to being Final, the observation has been modified to correct an error in the test result.
    #[code("corrected")]
    Corrected,
    /// Display: Cancelled
    /// Definition: The observation is unavailable because the measurement was not started or not completed (also sometimes called "aborted").
    #[code("cancelled")]
    Cancelled,
    /// Display: Entered in Error
    /// Definition: The observation has been withdrawn following previous final release.  This electronic record should never have existed, though it is possible that real-world decisions were based on it.
    #[code("entered-in-error")]
    EnteredInError,
    /// Display: Unknown
    /// Definition: The authoring/source system does not know which of the status values currently applies for this observation.
    #[code("unknown")]
    Unknown,
}
/// [`BoundCode`] restricted to [`ObservationStatus`].
pub type ObservationStatusCode = BoundCode<ObservationStatus>;
