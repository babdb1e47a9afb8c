// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: RequestIntent
/// Canonical URL: http://hl7.org/fhir/request-intent
/// Title: RequestIntent
/// Codes indicating the degree of authority/intentionality associated with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "RequestIntent", system = "http://hl7.org/fhir/request-intent")]
pub enum RequestIntent {
    /// Display: Proposal
    /// Definition: The request is a suggestion made by someone/something that does not have an intention to ensure it occurs and without providing an authorization to act.
    #[code("proposal")]
    Proposal,
    /// Display: Plan
    /// Definition: The request represents an intention to ensure something occurs without providing an authorization for others to act.
    #[code("plan")]
    Plan,
    /// Display: Directive
    /// Definition: The request represents a legally binding instruction authored by a Patient or RelatedPerson.
    #[code("directive")]
    Directive,
    /// Display: Order
    /// Definition: The request represents a request/demand and authorization for action by a Practitioner.
    #[code("order")]
    Order,
    /// Display: Original Order
    /// Definition: The request represents an original authorization for action.
    #[code("original-order")]
    OriginalOrder,
    /// Display: Reflex Order
    /// Definition: The request represents an automatically generated supplemental authorization for action based on a parent authorization together with initial results of the action taken against that parent authorization.
    #[code("reflex-order")]
    ReflexOrder,
    /// Display: Filler Order
    /// Definition: The request represents the view of an authorization instantiated by a fulfilling system representing the details of the fulfiller's intention to act upon a submitted order.
    #[code("filler-order")]
    FillerOrder,
    /// Display: Instance Order
    /// Definition: An order created in fulfillment of a broader order that represents the authorization for a single activity occurrence.  E.g. The administration of a single dose of a drug.
    #[code("instance-order")]
    InstanceOrder,
    /// Display: Option
    /// Definition: The request represents a component or option for a RequestGroup that establishes timing, conditionality and/or other constraints among a set of requests.
    #[code("option")]
    Option,
}
/// [`BoundCode`] restricted to [`RequestIntent`].
pub type RequestIntentCode = BoundCode<RequestIntent>;
