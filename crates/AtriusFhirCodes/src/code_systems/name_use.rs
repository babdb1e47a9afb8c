// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: NameUse
/// Canonical URL: http://hl7.org/fhir/name-use
/// Title: NameUse
/// The use of a human name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "NameUse", system = "http://hl7.org/fhir/name-use")]
pub enum NameUse {
    /// Display: Usual
    /// Definition: Known as/conventional/the one you normally use.
    #[code("usual")]
    Usual,
    /// Display: Official
    /// Definition: The formal name as registered in an official (government) registry, but which name might not be commonly used. May be called "legal name".
    #[code("official")]
    Official,
    /// Display: Temp
    /// Definition: A temporary name. Name.period can provide more detailed information. This may also be used for temporary names assigned at birth or in emergency situations.
    #[code("temp")]
    Temp,
    /// Display: Nickname
    /// Definition: A name that is used to address the person in an informal manner, but is not part of their formal or usual name.
    #[code("nickname")]
    Nickname,
    /// Display: Anonymous
    /// Definition: Anonymous assigned name, alias, or pseudonym (used to protect a person's identity for privacy reasons).
    #[code("anonymous")]
    Anonymous,
    /// Display: Old
    /// Definition: This name is no longer in use (or was never correct, but retained for records).
    #[code("old")]
    Old,
    /// Display: Name changed for Marriage
    /// Definition: A name used prior to changing name because of marriage. This name use is for use by applications that collect and store names that were used prior to a marriage. Marriage naming customs vary greatly around the world, and are constantly changing. This term is not gender specific. The use of this term does not imply any particular history for a person's name.
    #[code("maiden")]
    Maiden,
}
/// [`BoundCode`] restricted to [`NameUse`].
pub type NameUseCode = BoundCode<NameUse>;
