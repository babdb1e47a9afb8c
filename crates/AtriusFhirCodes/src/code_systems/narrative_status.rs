// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: NarrativeStatus
/// Canonical URL: http://hl7.org/fhir/narrative-status
/// Title: NarrativeStatus
/// The status of a resource narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "NarrativeStatus", system = "http://hl7.org/fhir/narrative-status")]
pub enum NarrativeStatus {
    /// Display: Generated
    /// Definition: The contents of the narrative are entirely generated from the core elements in the content.
    #[code("generated")]
    Generated,
    /// Display: Extensions
    /// Definition: The contents of the narrative are entirely generated from the core elements in the content and some of the content is generated from extensions. The narrative SHALL reflect the impact of all modifier extensions.
    #[code("extensions")]
    Extensions,
    /// Display: Additional
    /// Definition: The contents of the narrative may contain additional information not found in the structured data. Note that there is no computable way to determine what the extra information is, other than by human inspection.
    #[code("additional")]
    Additional,
    /// Display: Empty
    /// Definition: The contents of the narrative are some equivalent of "No human-readable text provided in this case".
    #[code("empty")]
    Empty,
}
/// [`BoundCode`] restricted to [`NarrativeStatus`].
pub type NarrativeStatusCode = BoundCode<NarrativeStatus>;
