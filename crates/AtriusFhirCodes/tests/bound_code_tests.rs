use std::collections::HashSet;

use atrius_fhir_codes::code_systems::{
    account_status, address_use, administrative_gender, contact_point_system, observation_status,
    request_status, AccountStatus, AddressUse, AdministrativeGender, ContactPointSystem,
    ObservationStatus, RequestStatus,
};
use atrius_fhir_codes::{
    AllowedCodes, BoundCode, CodeConfig, CodeError, Extension, RequiredExtension, Vocabulary,
};
use std::sync::Arc;

#[test]
fn test_lookup_returns_same_object_every_time() {
    let a = BoundCode::<ObservationStatus>::from_code("final").unwrap();
    let b = BoundCode::<ObservationStatus>::from_code("final").unwrap();
    let c = BoundCode::of(ObservationStatus::Final);
    assert!(std::ptr::eq(a, b));
    assert!(std::ptr::eq(a, c));
    assert!(std::ptr::eq(a, &observation_status::FINAL));
}

#[test]
fn test_address_use_lookups() {
    let home = BoundCode::<AddressUse>::from_code("home").unwrap();
    assert_eq!(home.variant(), Some(AddressUse::Home));
    assert!(std::ptr::eq(home, BoundCode::of(AddressUse::Home)));
    assert_eq!(AddressUse::TABLE.literal_of(AddressUse::Home), "home");

    let err = AddressUse::TABLE.variant_of("house").unwrap_err();
    assert_eq!(err.code, "house");
    assert_eq!(err.vocabulary, "AddressUse");
    assert!(std::ptr::eq(
        BoundCode::of(AddressUse::Home),
        &address_use::HOME
    ));
}

#[test]
fn test_modified_copy_of_a_constant() {
    let copy = BoundCode::of(AccountStatus::EnteredInError)
        .to_builder()
        .id("obs-1")
        .build()
        .unwrap();
    assert_eq!(copy.literal(), Some("entered-in-error"));
    assert_eq!(copy.id(), Some("obs-1"));
    assert_ne!(copy, account_status::ENTERED_IN_ERROR);
    assert_eq!(account_status::ENTERED_IN_ERROR.id(), None);
}

#[test]
fn test_lookup_is_exact() {
    for miss in ["Final", "FINAL", " final", "final ", "", "fin"] {
        let err = BoundCode::<ObservationStatus>::from_code(miss).unwrap_err();
        assert_eq!(err.vocabulary, "ObservationStatus");
        assert_eq!(err.code, miss);
    }
}

#[test]
fn test_every_constant_is_its_own_canonical() {
    for variant in ObservationStatus::TABLE.variants() {
        let interned = variant.canonical();
        assert!(interned.is_interned());
        assert_eq!(interned.variant(), Some(variant));
        assert_eq!(interned.id(), None);
        assert!(interned.extension().is_empty());
    }
}

#[test]
fn test_metadata_takes_part_in_equality() {
    let plain = BoundCode::<RequestStatus>::builder()
        .value(RequestStatus::OnHold)
        .build()
        .unwrap();
    let tagged = plain.to_builder().id("rs-1").build().unwrap();
    let extended = plain
        .to_builder()
        .extension(Extension::new("http://example.org/fhir/hold-reason"))
        .build()
        .unwrap();

    assert_eq!(plain, request_status::ON_HOLD);
    assert_ne!(plain, tagged);
    assert_ne!(plain, extended);
    assert_ne!(tagged, extended);
    assert_eq!(tagged.canonical_form(), Some(&request_status::ON_HOLD));
}

#[test]
fn test_equal_instances_hash_alike() {
    let build = || {
        BoundCode::<ContactPointSystem>::builder()
            .id("tel")
            .value(ContactPointSystem::Phone)
            .build()
            .unwrap()
    };
    let mut set = HashSet::new();
    set.insert(build());
    set.insert(build());
    set.insert(contact_point_system::PHONE.clone());
    set.insert(BoundCode::new_canonical(ContactPointSystem::Phone));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_to_builder_leaves_original_untouched() {
    let original = BoundCode::<AdministrativeGender>::builder()
        .id("g")
        .value(AdministrativeGender::Other)
        .build()
        .unwrap();
    let changed = original
        .to_builder()
        .clear_id()
        .value(AdministrativeGender::Unknown)
        .build()
        .unwrap();

    assert_eq!(original.id(), Some("g"));
    assert!(original.is(AdministrativeGender::Other));
    assert_eq!(changed, administrative_gender::UNKNOWN);
    assert!(!changed.is_interned());
}

#[test]
fn test_extension_only_element_is_valid() {
    let code = BoundCode::<AdministrativeGender>::builder()
        .extension(Extension::data_absent_reason("unknown"))
        .build()
        .unwrap();
    assert_eq!(code.value(), None);
    assert_eq!(code.literal(), None);
    assert_eq!(code.to_string(), "");
    assert!(code.has_only_data_absent_reason_extension());
    assert!(!code.is_canonical());
    assert_eq!(code.canonical_form(), None);
}

#[test]
fn test_id_only_element_fails_ele_1() {
    let err = BoundCode::<AdministrativeGender>::builder()
        .id("g")
        .build()
        .unwrap_err();
    assert!(err.message.contains("ele-1"));
    assert!(err.instance.contains("\"g\""));
}

#[test]
fn test_blank_element_id_is_rejected() {
    for blank in ["", "   ", "\t\n"] {
        let err = BoundCode::<AdministrativeGender>::builder()
            .id(blank)
            .value(AdministrativeGender::Female)
            .build()
            .unwrap_err();
        assert!(err.message.contains("less than minimum required length"), "{blank:?}");
    }
}

#[test]
fn test_invalid_element_id_is_rejected() {
    let err = BoundCode::<AdministrativeGender>::builder()
        .id("bad\u{1}id")
        .value(AdministrativeGender::Male)
        .build()
        .unwrap_err();
    assert!(err.message.starts_with("element id:"));

    let lenient = Arc::new(CodeConfig {
        check_control_chars: false,
        ..CodeConfig::default()
    });
    let code = atrius_fhir_codes::Builder::with_config(lenient)
        .id("bad\u{1}id")
        .value(AdministrativeGender::Male)
        .build()
        .unwrap();
    assert_eq!(code.id(), Some("bad\u{1}id"));
}

#[test]
fn test_value_code_fails_fast() {
    let result = BoundCode::<ContactPointSystem>::builder()
        .id("c1")
        .value_code("telephone");
    let err = result.unwrap_err();
    assert_eq!(err.code, "telephone");
}

#[test]
fn test_profiles_restrict_the_vocabulary() {
    let clinical = AllowedCodes::new(
        "final-results",
        [ObservationStatus::Final, ObservationStatus::Amended, ObservationStatus::Corrected],
    );

    let ok = BoundCode::builder()
        .value(ObservationStatus::Amended)
        .build_with(&clinical)
        .unwrap();
    assert!(ok.is(ObservationStatus::Amended));

    let err = BoundCode::builder()
        .value(ObservationStatus::Preliminary)
        .build_with(&clinical)
        .unwrap_err();
    assert!(err.message.contains("profile final-results"));
    assert!(err.message.contains("'preliminary'"));
}

#[test]
fn test_profiles_apply_even_without_validation() {
    let needs_source = RequiredExtension::new("http://example.org/fhir/source");
    let err = BoundCode::builder()
        .validating(false)
        .value(ObservationStatus::Final)
        .build_with(&needs_source)
        .unwrap_err();
    assert!(err.message.contains("missing required extension"));
}

#[test]
fn test_optional_code_errors() {
    let err = BoundCode::<RequestStatus>::from_optional_code(None).unwrap_err();
    assert!(matches!(err, CodeError::InvalidInput(_)));
    assert_eq!(err.vocabulary(), "RequestStatus");
}

#[test]
fn test_system_and_vocabulary_name() {
    let code = &request_status::ACTIVE;
    assert_eq!(code.system(), "http://hl7.org/fhir/request-status");
    assert_eq!(code.vocabulary(), "RequestStatus");
    assert_eq!(RequestStatus::SYSTEM, code.system());
}
