// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: QuantityComparator
/// Canonical URL: http://hl7.org/fhir/quantity-comparator
/// Title: QuantityComparator
/// How the Quantity should be understood and represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "QuantityComparator", system = "http://hl7.org/fhir/quantity-comparator")]
pub enum QuantityComparator {
    /// Display: Less than
    /// Definition: The actual value is less than the given value.
    #[code("<")]
    Lt,
    /// Display: Less or Equal to
    /// Definition: The actual value is less than or equal to the given value.
    #[code("<=")]
    Le,
    /// Display: Greater or Equal to
    /// Definition: The actual value is greater than or equal to the given value.
    #[code(">=")]
    Ge,
    /// Display: Greater than
    /// Definition: The actual value is greater than the given value.
    #[code(">")]
    Gt,
}
/// [`BoundCode`] restricted to [`QuantityComparator`].
pub type QuantityComparatorCode = BoundCode<QuantityComparator>;
