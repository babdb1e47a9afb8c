//! The variant ↔ literal table behind every vocabulary.

use crate::error::UnknownCodeError;
use crate::vocabulary::Vocabulary;

/// Fixed bijection between the variants of a vocabulary and their wire literals.
///
/// Tables are `const` data emitted by `#[derive(Vocabulary)]`: entries appear in
/// declaration order, so the entry for a variant sits at its
/// [`ordinal`](Vocabulary::ordinal). Uniqueness of literals and completeness of
/// the table are checked when the vocabulary is compiled, not at runtime.
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_codes::Vocabulary;
/// use atrius_fhir_codes::code_systems::AddressUse;
///
/// let table = &AddressUse::TABLE;
/// assert_eq!(table.literal_of(AddressUse::Home), "home");
/// assert_eq!(table.variant_of("work").unwrap(), AddressUse::Work);
/// assert!(table.variant_of("Work").is_err());
/// ```
#[derive(Debug)]
pub struct ValueTable<V: 'static> {
    name: &'static str,
    entries: &'static [(V, &'static str)],
}

impl<V: 'static> ValueTable<V> {
    pub const fn new(name: &'static str, entries: &'static [(V, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Name of the vocabulary this table belongs to.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(variant, literal)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static (V, &'static str)> + use<V> {
        self.entries.iter()
    }

    pub fn literals(&self) -> impl Iterator<Item = &'static str> + use<V> {
        self.entries.iter().map(|(_, literal)| *literal)
    }
}

impl<V: Vocabulary> ValueTable<V> {
    /// The literal for `variant`. Total over the declared variants.
    pub fn literal_of(&self, variant: V) -> &'static str {
        let (declared, literal) = self.entries[variant.ordinal()];
        debug_assert!(declared == variant, "{} table out of order", self.name);
        literal
    }

    /// The variant whose literal is exactly `literal`.
    ///
    /// No trimming or case folding is applied; a miss is an error rather than
    /// a fallback value.
    pub fn variant_of(&self, literal: &str) -> Result<V, UnknownCodeError> {
        self.get(literal)
            .ok_or_else(|| UnknownCodeError::new(self.name, literal))
    }

    pub fn get(&self, literal: &str) -> Option<V> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == literal)
            .map(|(variant, _)| *variant)
    }

    pub fn contains(&self, literal: &str) -> bool {
        self.get(literal).is_some()
    }

    pub fn variants(&self) -> impl Iterator<Item = V> + use<V> {
        self.entries.iter().map(|(variant, _)| *variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_systems::{QuantityComparator, RequestIntent};

    #[test]
    fn test_symbolic_literals() {
        let table = &QuantityComparator::TABLE;
        assert_eq!(table.variant_of("<=").unwrap(), QuantityComparator::Le);
        assert_eq!(table.literal_of(QuantityComparator::Gt), ">");
        assert!(table.variant_of("=<").is_err());
    }

    #[test]
    fn test_miss_carries_vocabulary_and_literal() {
        let err = RequestIntent::TABLE.variant_of("Order").unwrap_err();
        assert_eq!(err.vocabulary, "RequestIntent");
        assert_eq!(err.code, "Order");
    }

    #[test]
    fn test_iteration_is_declaration_order() {
        let literals: Vec<_> = QuantityComparator::TABLE.literals().collect();
        assert_eq!(literals, vec!["<", "<=", ">=", ">"]);
        assert_eq!(QuantityComparator::TABLE.len(), 4);
        assert!(!QuantityComparator::TABLE.is_empty());
    }
}
