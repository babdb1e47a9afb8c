// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: HTTPVerb
/// Canonical URL: http://hl7.org/fhir/http-verb
/// Title: HTTPVerb
/// HTTP verbs (in the HTTP command line). See [HTTP rfc](https://tools.ietf.org/html/rfc7231) for details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "HTTPVerb", system = "http://hl7.org/fhir/http-verb")]
pub enum HTTPVerb {
    /// Display: GET
    /// Definition: HTTP GET Command.
    #[code("GET")]
    Get,
    /// Display: HEAD
    /// Definition: HTTP HEAD Command.
    #[code("HEAD")]
    Head,
    /// Display: POST
    /// Definition: HTTP POST Command.
    #[code("POST")]
    Post,
    /// Display: PUT
    /// Definition: HTTP PUT Command.
    #[code("PUT")]
    Put,
    /// Display: DELETE
    /// Definition: HTTP DELETE Command.
    #[code("DELETE")]
    Delete,
    /// Display: PATCH
    /// Definition: HTTP PATCH Command.
    #[code("PATCH")]
    Patch,
}
/// [`BoundCode`] restricted to [`HTTPVerb`].
pub type HTTPVerbCode = BoundCode<HTTPVerb>;
