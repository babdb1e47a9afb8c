// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: ContactPointSystem
/// Canonical URL: http://hl7.org/fhir/contact-point-system
/// Title: ContactPointSystem
/// Telecommunications form for contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "ContactPointSystem", system = "http://hl7.org/fhir/contact-point-system")]
pub enum ContactPointSystem {
    /// Display: Phone
    /// Definition: The value is a telephone number used for voice calls. Use of full international numbers starting with + is recommended to enable automatic dialing support but not required.
    #[code("phone")]
    Phone,
    /// Display: Fax
    /// Definition: The value is a fax machine. Use of full international numbers starting with + is recommended to enable automatic dialing support but not required.
    #[code("fax")]
    Fax,
    /// Display: Email
    /// Definition: The value is an email address.
    #[code("email")]
    Email,
    /// Display: Pager
    /// Definition: The value is a pager number. These may be local pager numbers that are only usable on a particular pager system.
    #[code("pager")]
    Pager,
    /// Display: URL
    /// Definition: A contact that is not a phone, fax, pager or email address and is expressed as a URL. This is intended for various institutional or personal contacts including web sites, blogs, Skype, Twitter, Facebook, etc. Do not use for email addresses.
    #[code("url")]
    Url,
    /// Display: SMS
    /// Definition: A contact that can be used for sending an sms message (e.g. mobile phones, some landlines).
    #[code("sms")]
    Sms,
    /// Display: Other
    /// Definition: A contact that is not a phone, fax, page or email address and is not expressible as a URL. E.g. Internal mail address. This SHOULD NOT be used for contacts that are expressible as a URL (e.g. Skype, Twitter, Facebook, etc.) Extensions may be used to distinguish "other" contact types.
    #[code("other")]
    Other,
}
/// [`BoundCode`] restricted to [`ContactPointSystem`].
pub type ContactPointSystemCode = BoundCode<ContactPointSystem>;
