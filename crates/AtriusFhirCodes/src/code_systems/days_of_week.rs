// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: DaysOfWeek
/// Canonical URL: http://hl7.org/fhir/days-of-week
/// Title: DaysOfWeek
/// The days of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "DaysOfWeek", system = "http://hl7.org/fhir/days-of-week")]
pub enum DaysOfWeek {
    /// Display: Monday
    /// Definition: Monday.
    #[code("mon")]
    Mon,
    /// Display: Tuesday
    /// Definition: Tuesday.
    #[code("tue")]
    Tue,
    /// Display: Wednesday
    /// Definition: Wednesday.
    #[code("wed")]
    Wed,
    /// Display: Thursday
    /// Definition: Thursday.
    #[code("thu")]
    Thu,
    /// Display: Friday
    /// Definition: Friday.
    #[code("fri")]
    Fri,
    /// Display: Saturday
    /// Definition: Saturday.
    #[code("sat")]
    Sat,
    /// Display: Sunday
    /// Definition: Sunday.
    #[code("sun")]
    Sun,
}
/// [`BoundCode`] restricted to [`DaysOfWeek`].
pub type DaysOfWeekCode = BoundCode<DaysOfWeek>;
