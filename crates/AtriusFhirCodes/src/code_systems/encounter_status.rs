// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: EncounterStatus
/// Canonical URL: http://hl7.org/fhir/encounter-status
/// Title: EncounterStatus
/// Current state of the encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "EncounterStatus", system = "http://hl7.org/fhir/encounter-status")]
pub enum EncounterStatus {
    /// Display: Planned
    /// Definition: The Encounter has not yet started.
    #[code("planned")]
    Planned,
    /// Display: Arrived
    /// Definition: The Patient is present for the encounter, however is not currently meeting with a practitioner.
    #[code("arrived")]
    Arrived,
    /// Display: Triaged
    /// Definition: The patient has been assessed for the priority of their treatment based on the severity of their condition.
    #[code("triaged")]
    Triaged,
    /// Display: In Progress
    /// Definition: The Encounter has begun and the patient is present / the practitioner and the patient are meeting.
    #[code("in-progress")]
    InProgress,
    /// Display: On Leave
    /// Definition: The Encounter has begun, but the patient is temporarily on leave.
    #[code("onleave")]
    Onleave,
    /// Display: Finished
    /// Definition: The Encounter has ended.
    #[code("finished")]
    Finished,
    /// Display: Cancelled
    /// Definition: The Encounter has ended before it has begun.
    #[code("cancelled")]
    Cancelled,
    /// Display: Entered in Error
    /// Definition: This instance should not have been part of this patient's medical record.
    #[code("entered-in-error")]
    EnteredInError,
    /// Display: Unknown
    /// Definition: The encounter status is unknown. Note that "unknown" is a value of last resort and every attempt should be made to provide a meaningful value other than "unknown".
    #[code("unknown")]
    Unknown,
}
/// [`BoundCode`] restricted to [`EncounterStatus`].
pub type EncounterStatusCode = BoundCode<EncounterStatus>;
