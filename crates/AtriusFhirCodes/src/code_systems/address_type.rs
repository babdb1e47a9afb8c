// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: AddressType
/// Canonical URL: http://hl7.org/fhir/address-type
/// Title: AddressType
/// The type of an address (physical / postal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "AddressType", system = "http://hl7.org/fhir/address-type")]
pub enum AddressType {
    /// Display: Postal
    /// Definition: Mailing addresses - PO Boxes and care-of addresses.
    #[code("postal")]
    Postal,
    /// Display: Physical
    /// Definition: A physical address that can be visited.
    #[code("physical")]
    Physical,
    /// Display: Postal & Physical
    /// Definition: An address that is both physical and postal.
    #[code("both")]
    Both,
}
/// [`BoundCode`] restricted to [`AddressType`].
pub type AddressTypeCode = BoundCode<AddressType>;
