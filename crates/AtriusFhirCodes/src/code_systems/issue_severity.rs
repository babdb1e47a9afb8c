// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: IssueSeverity
/// Canonical URL: http://hl7.org/fhir/issue-severity
/// Title: IssueSeverity
/// How the issue affects the success of the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "IssueSeverity", system = "http://hl7.org/fhir/issue-severity")]
pub enum IssueSeverity {
    /// Display: Fatal
    /// Definition: The issue caused the action to fail and no further checking could be performed.
    #[code("fatal")]
    Fatal,
    /// Display: Error
    /// Definition: The issue is sufficiently important to cause the action to fail.
    #[code("error")]
    Error,
    /// Display: Warning
    /// Definition: The issue is not important enough to cause the action to fail but may cause it to be performed suboptimally or in a way that is not as desired.
    #[code("warning")]
    Warning,
    /// Display: Information
    /// Definition: The issue has no relation to the degree of success of the action.
    #[code("information")]
    Information,
}
/// [`BoundCode`] restricted to [`IssueSeverity`].
pub type IssueSeverityCode = BoundCode<IssueSeverity>;
