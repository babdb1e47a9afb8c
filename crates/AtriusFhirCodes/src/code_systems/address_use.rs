// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: AddressUse
/// Canonical URL: http://hl7.org/fhir/address-use
/// Title: AddressUse
/// The use of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "AddressUse", system = "http://hl7.org/fhir/address-use")]
pub enum AddressUse {
    /// Display: Home
    /// Definition: A communication address at a home.
    #[code("home")]
    Home,
    /// Display: Work
    /// Definition: An office address. First choice for business related contacts during business hours.
    #[code("work")]
    Work,
    /// Display: Temporary
    /// Definition: A temporary address. The period can provide more detailed information.
    #[code("temp")]
    Temp,
    /// Display: Old / Incorrect
    /// Definition: This address is no longer in use (or was never correct but retained for records).
    #[code("old")]
    Old,
    /// Display: Billing
    /// Definition: An address to be used to send bills, invoices, receipts etc.
    #[code("billing")]
    Billing,
}
/// [`BoundCode`] restricted to [`AddressUse`].
pub type AddressUseCode = BoundCode<AddressUse>;
