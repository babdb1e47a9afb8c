// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: ContactPointUse
/// Canonical URL: http://hl7.org/fhir/contact-point-use
/// Title: ContactPointUse
/// Use of contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "ContactPointUse", system = "http://hl7.org/fhir/contact-point-use")]
pub enum ContactPointUse {
    /// Display: Home
    /// Definition: A communication contact point at a home; attempted contacts for business purposes might intrude privacy and chances are one will contact family or other household members instead of the person one wishes to call. Typically used with urgent cases, or if no other contacts are available.
    #[code("home")]
    Home,
    /// Display: Work
    /// Definition: An office contact point. First choice for business related contacts during business hours.
    #[code("work")]
    Work,
    /// Display: Temp
    /// Definition: A temporary contact point. The period can provide more detailed information.
    #[code("temp")]
    Temp,
    /// Display: Old
    /// Definition: This contact point is no longer in use (or was never correct, but retained for records).
    #[code("old")]
    Old,
    /// Display: Mobile
    /// Definition: A telecommunication device that moves and stays with its owner. May have characteristics of all other use codes, suitable for urgent matters, not the first choice for routine business.
    #[code("mobile")]
    Mobile,
}
/// [`BoundCode`] restricted to [`ContactPointUse`].
pub type ContactPointUseCode = BoundCode<ContactPointUse>;
