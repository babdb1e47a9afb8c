// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: IdentifierUse
/// Canonical URL: http://hl7.org/fhir/identifier-use
/// Title: IdentifierUse
/// Identifies the purpose for this identifier, if known .
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "IdentifierUse", system = "http://hl7.org/fhir/identifier-use")]
pub enum IdentifierUse {
    /// Display: Usual
    /// Definition: The identifier recommended for display and use in real-world interactions.
    #[code("usual")]
    Usual,
    /// Display: Official
    /// Definition: The identifier considered to be most trusted for the identification of this item. Sometimes also known as "primary" and "main". The determination of "official" is subjective and implementation guides often provide additional guidelines for use.
    #[code("official")]
    Official,
    /// Display: Temp
    /// Definition: A temporary identifier.
    #[code("temp")]
    Temp,
    /// Display: Secondary
    /// Definition: An identifier that was assigned in secondary use - it serves to identify the object in a relative context, but cannot be consistently assigned to the same object again in a different context.
    #[code("secondary")]
    Secondary,
    /// Display: Old
    /// Definition: The identifier id no longer considered valid, but may be relevant for search purposes. E.g. Changes to identifier schemes, account merges, etc.
    #[code("old")]
    Old,
}
/// [`BoundCode`] restricted to [`IdentifierUse`].
pub type IdentifierUseCode = BoundCode<IdentifierUse>;
