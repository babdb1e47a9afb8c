use std::fmt::Debug;
use std::hash::Hash;

use crate::bound_code::BoundCode;
use crate::error::UnknownCodeError;
use crate::value_table::ValueTable;

/// A closed set of codes drawn from one FHIR code system.
///
/// Implemented by `#[derive(Vocabulary)]` on a fieldless enum whose variants
/// each carry a `#[code("...")]` literal. The derive also emits one canonical
/// [`BoundCode`] static per variant, which [`canonical`](Vocabulary::canonical)
/// hands out.
///
/// ```rust
/// use atrius_fhir_codes::{BoundCode, Vocabulary};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
/// #[vocabulary(name = "TrafficLight", system = "http://example.org/traffic-light")]
/// pub enum TrafficLight {
///     #[code("red")]
///     Red,
///     #[code("green")]
///     Green,
/// }
///
/// assert_eq!(TrafficLight::Green.as_code(), "green");
/// assert!(std::ptr::eq(BoundCode::of(TrafficLight::Red), &RED));
/// ```
pub trait Vocabulary: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Name of the vocabulary, e.g. `"AddressUse"`.
    const NAME: &'static str;

    /// Canonical URL of the code system.
    const SYSTEM: &'static str;

    const TABLE: ValueTable<Self>;

    /// Position of this variant in declaration order.
    fn ordinal(self) -> usize;

    /// The interned, metadata-free instance for this variant.
    fn canonical(self) -> &'static BoundCode<Self>;

    /// Vocabulary-specific checks run by [`Builder::build`](crate::Builder::build)
    /// after the element rules pass. The message is wrapped into a
    /// [`ValidationError`](crate::ValidationError).
    fn validate(_code: &BoundCode<Self>) -> Result<(), String> {
        Ok(())
    }

    fn as_code(self) -> &'static str {
        Self::TABLE.literal_of(self)
    }

    fn from_code(code: &str) -> Result<Self, UnknownCodeError> {
        Self::TABLE.variant_of(code)
    }
}
