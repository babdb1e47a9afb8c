//! Lookup of the generated vocabularies by canonical system URL or by name.
//!
//! Useful when a caller holds a raw `(system, code)` pair, e.g. from a
//! `Coding`, and needs a membership check without knowing the Rust type.
//!
//! ```rust
//! use atrius_fhir_codes::registry;
//!
//! let info = registry::by_system("http://hl7.org/fhir/administrative-gender").unwrap();
//! assert_eq!(info.name(), "AdministrativeGender");
//! assert!(info.contains("female"));
//! assert!(info.check("F").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::code_systems::VOCABULARIES;
use crate::error::UnknownCodeError;
use crate::vocabulary::Vocabulary;

/// Type-erased operations on one vocabulary.
#[derive(Clone, Copy)]
pub struct VocabularyInfo {
    name: &'static str,
    system: &'static str,
    contains: fn(&str) -> bool,
    literals: fn() -> Vec<&'static str>,
}

impl VocabularyInfo {
    /// The entry for vocabulary `V`.
    pub const fn of<V: Vocabulary>() -> Self {
        Self {
            name: V::NAME,
            system: V::SYSTEM,
            contains: contains_code::<V>,
            literals: all_literals::<V>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn system(&self) -> &'static str {
        self.system
    }

    pub fn contains(&self, code: &str) -> bool {
        (self.contains)(code)
    }

    /// Like [`contains`](Self::contains), with the miss as an error.
    pub fn check(&self, code: &str) -> Result<(), UnknownCodeError> {
        if self.contains(code) {
            Ok(())
        } else {
            Err(UnknownCodeError::new(self.name, code))
        }
    }

    /// Every literal of the vocabulary in declaration order.
    pub fn literals(&self) -> Vec<&'static str> {
        (self.literals)()
    }
}

impl fmt::Debug for VocabularyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabularyInfo")
            .field("name", &self.name)
            .field("system", &self.system)
            .finish()
    }
}

fn contains_code<V: Vocabulary>(code: &str) -> bool {
    V::TABLE.contains(code)
}

fn all_literals<V: Vocabulary>() -> Vec<&'static str> {
    V::TABLE.literals().collect()
}

static BY_SYSTEM: Lazy<HashMap<&'static str, &'static VocabularyInfo>> =
    Lazy::new(|| VOCABULARIES.iter().map(|info| (info.system, info)).collect());

static BY_NAME: Lazy<HashMap<&'static str, &'static VocabularyInfo>> =
    Lazy::new(|| VOCABULARIES.iter().map(|info| (info.name, info)).collect());

/// Looks a vocabulary up by canonical system URL.
///
/// URLs are matched exactly; a `|version` suffix is not stripped.
pub fn by_system(system: &str) -> Option<&'static VocabularyInfo> {
    BY_SYSTEM.get(system).copied()
}

pub fn by_name(name: &str) -> Option<&'static VocabularyInfo> {
    BY_NAME.get(name).copied()
}

/// Every generated vocabulary, ordered by module name.
pub fn all() -> &'static [VocabularyInfo] {
    VOCABULARIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_systems::HTTPVerb;

    #[test]
    fn test_lookup_by_name_and_system_agree() {
        for info in all() {
            let by_url = by_system(info.system()).unwrap();
            let by_nm = by_name(info.name()).unwrap();
            assert!(std::ptr::eq(by_url, by_nm), "{}", info.name());
        }
    }

    #[test]
    fn test_info_matches_table() {
        let info = VocabularyInfo::of::<HTTPVerb>();
        assert_eq!(info.literals(), HTTPVerb::TABLE.literals().collect::<Vec<_>>());
        assert!(info.contains("PATCH"));
        assert!(!info.contains("patch"));
    }

    #[test]
    fn test_unknown_system() {
        assert!(by_system("http://hl7.org/fhir/no-such-system").is_none());
        assert!(by_system("http://hl7.org/fhir/address-use|4.0.1").is_none());
    }
}
