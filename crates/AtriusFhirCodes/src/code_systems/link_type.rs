// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: LinkType
/// Canonical URL: http://hl7.org/fhir/link-type
/// Title: LinkType
/// The type of link between this patient resource and another patient resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "LinkType", system = "http://hl7.org/fhir/link-type")]
pub enum LinkType {
    /// Display: Replaced-by
    /// Definition: The patient resource containing this link must no longer be used. The link points forward to another patient resource that must be used in lieu of the patient resource that contains this link.
    #[code("replaced-by")]
    ReplacedBy,
    /// Display: Replaces
    /// Definition: The patient resource containing this link is the current active patient record. The link points back to an inactive patient resource that has been merged into this resource, and should be consulted to retrieve additional referenced information.
    #[code("replaces")]
    Replaces,
    /// Display: Refer
    /// Definition: The patient resource containing this link is in use and valid but not considered the main source of information about a patient. The link points forward to another patient resource that should be consulted to retrieve additional patient information.
    #[code("refer")]
    Refer,
    /// Display: See also
    /// Definition: The patient resource containing this link is in use and valid, but points to another patient resource that is known to contain data about the same person. Data in this resource might overlap or contradict information found in the other patient resource. This link does not indicate any relative importance of the resources concerned, and both should be regarded as equally valid.
    #[code("seealso")]
    Seealso,
}
/// [`BoundCode`] restricted to [`LinkType`].
pub type LinkTypeCode = BoundCode<LinkType>;
