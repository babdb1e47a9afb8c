// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: RequestPriority
/// Canonical URL: http://hl7.org/fhir/request-priority
/// Title: RequestPriority
/// The clinical priority of a diagnostic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "RequestPriority", system = "http://hl7.org/fhir/request-priority")]
pub enum RequestPriority {
    /// Display: Routine
    /// Definition: The request has normal priority.
    #[code("routine")]
    Routine,
    /// Display: Urgent
    /// Definition: The request should be actioned promptly - higher priority than routine.
    #[code("urgent")]
    Urgent,
    /// Display: ASAP
    /// Definition: The request should be actioned as soon as possible - higher priority than urgent.
    #[code("asap")]
    Asap,
    /// Display: STAT
    /// Definition: The request should be actioned immediately - highest possible priority.  E.g. an emergency.
    #[code("stat")]
    Stat,
}
/// [`BoundCode`] restricted to [`RequestPriority`].
pub type RequestPriorityCode = BoundCode<RequestPriority>;
