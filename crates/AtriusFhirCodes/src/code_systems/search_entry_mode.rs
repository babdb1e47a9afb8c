// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: SearchEntryMode
/// Canonical URL: http://hl7.org/fhir/search-entry-mode
/// Title: SearchEntryMode
/// Why an entry is in the result set - whether it's included as a match or because of an _include requirement, or to convey information or warning information about the search process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "SearchEntryMode", system = "http://hl7.org/fhir/search-entry-mode")]
pub enum SearchEntryMode {
    /// Display: Match
    /// Definition: This resource matched the search specification.
    #[code("match")]
    Match,
    /// Display: Include
    /// Definition: This resource is returned because it is referred to from another resource in the search set.
    #[code("include")]
    Include,
    /// Display: Outcome
    /// Definition: An OperationOutcome that provides additional information about the processing of a search.
    #[code("outcome")]
    Outcome,
}
/// [`BoundCode`] restricted to [`SearchEntryMode`].
pub type SearchEntryModeCode = BoundCode<SearchEntryMode>;
