use std::collections::HashSet;

use atrius_fhir_codes::code_systems::*;
use atrius_fhir_codes::{registry, BoundCode, Vocabulary};
use proptest::prelude::*;

/// Checks the table of `V` in both directions and against the interned statics.
fn assert_vocabulary<V: Vocabulary>() {
    let table = &V::TABLE;
    assert!(!table.is_empty(), "{} has no codes", V::NAME);
    assert_eq!(table.name(), V::NAME);

    let mut literals = HashSet::new();
    for (ordinal, &(variant, literal)) in table.iter().enumerate() {
        assert_eq!(variant.ordinal(), ordinal, "{}::{:?}", V::NAME, variant);
        assert_eq!(variant.as_code(), literal);
        assert_eq!(V::from_code(literal).unwrap(), variant);
        assert!(literals.insert(literal), "{} repeats '{}'", V::NAME, literal);

        let interned = BoundCode::<V>::from_code(literal).unwrap();
        assert!(std::ptr::eq(interned, BoundCode::of(variant)));
        assert_eq!(interned.literal(), Some(literal));
    }

    let info = registry::by_system(V::SYSTEM).unwrap();
    assert_eq!(info.name(), V::NAME);
    assert_eq!(info.literals(), table.literals().collect::<Vec<_>>());
}

#[test]
fn test_all_generated_vocabularies() {
    assert_vocabulary::<AccountStatus>();
    assert_vocabulary::<AddressType>();
    assert_vocabulary::<AddressUse>();
    assert_vocabulary::<AdministrativeGender>();
    assert_vocabulary::<BundleType>();
    assert_vocabulary::<ContactPointSystem>();
    assert_vocabulary::<ContactPointUse>();
    assert_vocabulary::<DaysOfWeek>();
    assert_vocabulary::<EncounterStatus>();
    assert_vocabulary::<HTTPVerb>();
    assert_vocabulary::<IdentifierUse>();
    assert_vocabulary::<IssueSeverity>();
    assert_vocabulary::<LinkType>();
    assert_vocabulary::<NameUse>();
    assert_vocabulary::<NarrativeStatus>();
    assert_vocabulary::<ObservationStatus>();
    assert_vocabulary::<PublicationStatus>();
    assert_vocabulary::<QuantityComparator>();
    assert_vocabulary::<RequestIntent>();
    assert_vocabulary::<RequestPriority>();
    assert_vocabulary::<RequestStatus>();
    assert_vocabulary::<SearchEntryMode>();
    assert_eq!(registry::all().len(), 22);
}

#[test]
fn test_declaration_order_is_preserved() {
    let days: Vec<_> = DaysOfWeek::TABLE.literals().collect();
    assert_eq!(days, ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]);

    let verbs: Vec<_> = HTTPVerb::TABLE.variants().collect();
    assert_eq!(
        verbs,
        [
            HTTPVerb::Get,
            HTTPVerb::Head,
            HTTPVerb::Post,
            HTTPVerb::Put,
            HTTPVerb::Delete,
            HTTPVerb::Patch
        ]
    );
}

#[test]
fn test_variant_conversions() {
    assert_eq!(EncounterStatus::InProgress.to_string(), "in-progress");
    assert_eq!("onleave".parse::<EncounterStatus>().unwrap(), EncounterStatus::Onleave);
    assert_eq!(EncounterStatus::try_from("triaged").unwrap(), EncounterStatus::Triaged);
    assert!(EncounterStatus::try_from("in_progress").is_err());
    assert_eq!(QuantityComparator::Ge.as_code(), ">=");
}

#[test]
fn test_same_literal_in_different_vocabularies() {
    let address = BoundCode::<AddressUse>::from_code("home").unwrap();
    let contact = BoundCode::<ContactPointUse>::from_code("home").unwrap();
    assert_eq!(address.system(), "http://hl7.org/fhir/address-use");
    assert_eq!(contact.system(), "http://hl7.org/fhir/contact-point-use");
    assert!(std::ptr::eq(address, &address_use::HOME));
    assert!(std::ptr::eq(contact, &contact_point_use::HOME));
}

proptest! {
    #[test]
    fn prop_lookup_accepts_only_declared_literals(s in "\\PC{0,24}") {
        let declared = BundleType::TABLE.literals().any(|l| l == s);
        prop_assert_eq!(BundleType::from_code(&s).is_ok(), declared);
    }

    #[test]
    fn prop_case_and_padding_variants_miss(index in 0usize..9, pad in "[ \\t]{1,3}") {
        let literal = BundleType::TABLE.literals().nth(index).unwrap();
        let upper = literal.to_uppercase();
        let padded_front = format!("{}{}", pad, literal);
        let padded_back = format!("{}{}", literal, pad);
        prop_assert!(BundleType::from_code(&upper).is_err());
        prop_assert!(BundleType::from_code(&padded_front).is_err());
        prop_assert!(BundleType::from_code(&padded_back).is_err());
    }
}
