// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: PublicationStatus
/// Canonical URL: http://hl7.org/fhir/publication-status
/// Title: PublicationStatus
/// The lifecycle status of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "PublicationStatus", system = "http://hl7.org/fhir/publication-status")]
pub enum PublicationStatus {
    /// Display: Draft
    /// Definition: This resource is still under development and is not yet considered to be ready for normal use.
    #[code("draft")]
    Draft,
    /// Display: Active
    /// Definition: This resource is ready for normal use.
    #[code("active")]
    Active,
    /// Display: Retired
    /// Definition: This resource has been withdrawn or superseded and should no longer be used.
    #[code("retired")]
    Retired,
    /// Display: Unknown
    /// Definition: The authoring system does not know which of the status values currently applies for this resource.
    #[code("unknown")]
    Unknown,
}
/// [`BoundCode`] restricted to [`PublicationStatus`].
pub type PublicationStatusCode = BoundCode<PublicationStatus>;
