// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: AdministrativeGender
/// Canonical URL: http://hl7.org/fhir/administrative-gender
/// Title: AdministrativeGender
/// The gender of a person used for administrative purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "AdministrativeGender", system = "http://hl7.org/fhir/administrative-gender")]
pub enum AdministrativeGender {
    /// Display: Male
    /// Definition: Male.
    #[code("male")]
    Male,
    /// Display: Female
    /// Definition: Female.
    #[code("female")]
    Female,
    /// Display: Other
    /// Definition: Other.
    #[code("other")]
    Other,
    /// Display: Unknown
    /// Definition: Unknown.
    #[code("unknown")]
    Unknown,
}
/// [`BoundCode`] restricted to [`AdministrativeGender`].
pub type AdministrativeGenderCode = BoundCode<AdministrativeGender>;
