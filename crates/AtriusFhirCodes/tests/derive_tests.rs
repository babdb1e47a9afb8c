use atrius_fhir_codes::{BoundCode, Extension, Vocabulary};

const REASON_URL: &str = "http://example.org/fhir/triage-reason";

/// A site-local vocabulary built with the derive, outside the generated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(
    name = "TriageLevel",
    system = "http://example.org/fhir/triage-level",
    validate = "check_triage"
)]
pub enum TriageLevel {
    #[code("immediate")]
    Immediate,
    #[code("urgent")]
    Urgent,
    #[code("non urgent")]
    NonUrgent,
}

fn check_triage(code: &BoundCode<TriageLevel>) -> Result<(), String> {
    let has_reason = code.extension().iter().any(|e| e.url() == REASON_URL);
    if code.is(TriageLevel::Immediate) && !has_reason {
        return Err("immediate triage needs a reason extension".to_string());
    }
    Ok(())
}

/// No explicit name: the enum identifier is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(system = "urn:example:ward")]
enum Ward {
    #[code("ICU")]
    IntensiveCare,
    #[code("GEN")]
    General,
}

#[test]
fn test_derived_table_and_metadata() {
    assert_eq!(TriageLevel::NAME, "TriageLevel");
    assert_eq!(TriageLevel::SYSTEM, "http://example.org/fhir/triage-level");
    assert_eq!(TriageLevel::TABLE.len(), 3);
    assert_eq!(TriageLevel::NonUrgent.ordinal(), 2);
    assert_eq!(TriageLevel::NonUrgent.as_code(), "non urgent");
    assert_eq!(Ward::NAME, "Ward");
    assert_eq!(Ward::from_code("GEN").unwrap(), Ward::General);
}

#[test]
fn test_derived_statics_are_interned() {
    assert!(std::ptr::eq(BoundCode::of(TriageLevel::Urgent), &URGENT));
    assert!(std::ptr::eq(BoundCode::of(TriageLevel::NonUrgent), &NON_URGENT));
    assert!(std::ptr::eq(BoundCode::of(Ward::IntensiveCare), &INTENSIVE_CARE));
    assert!(IMMEDIATE.is_interned());
}

#[test]
fn test_derived_conversions() {
    assert_eq!(TriageLevel::NonUrgent.to_string(), "non urgent");
    assert_eq!("urgent".parse::<TriageLevel>().unwrap(), TriageLevel::Urgent);
    let err = TriageLevel::try_from("Urgent").unwrap_err();
    assert_eq!(err.vocabulary, "TriageLevel");
    assert_eq!(serde_json::to_string(&Ward::General).unwrap(), "\"GEN\"");
    assert_eq!(serde_json::from_str::<Ward>("\"ICU\"").unwrap(), Ward::IntensiveCare);
}

#[test]
fn test_validate_hook_runs_on_build() {
    let err = BoundCode::builder()
        .value(TriageLevel::Immediate)
        .build()
        .unwrap_err();
    assert_eq!(err.vocabulary, "TriageLevel");
    assert_eq!(err.message, "immediate triage needs a reason extension");

    let ok = BoundCode::builder()
        .value(TriageLevel::Immediate)
        .extension(Extension::new(REASON_URL).with("valueString", "chest pain".into()))
        .build()
        .unwrap();
    assert!(ok.is(TriageLevel::Immediate));

    // The hook runs after the element rules and only when validating.
    let skipped = BoundCode::builder()
        .value(TriageLevel::Immediate)
        .validating(false)
        .build()
        .unwrap();
    assert_eq!(skipped, IMMEDIATE);
}

/// Variant names that shadow the associated error types of the conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(system = "urn:example:outcome")]
enum Outcome {
    #[code("ok")]
    Ok,
    #[code("error")]
    Error,
    #[code("err")]
    Err,
}

#[test]
fn test_variants_named_like_error_types() {
    assert_eq!(Outcome::try_from("error").unwrap(), Outcome::Error);
    assert_eq!("err".parse::<Outcome>().unwrap(), Outcome::Err);
    assert_eq!(Outcome::try_from("warning").unwrap_err().code, "warning");
    assert_eq!(Outcome::Ok.to_string(), "ok");
    assert!(std::ptr::eq(BoundCode::of(Outcome::Error), &ERROR));
    assert!(std::ptr::eq(BoundCode::of(Outcome::Err), &ERR));
}

#[test]
fn test_issue_severity_error_converts() {
    use atrius_fhir_codes::code_systems::IssueSeverity;
    assert_eq!(IssueSeverity::try_from("error").unwrap(), IssueSeverity::Error);
    assert_eq!("fatal".parse::<IssueSeverity>().unwrap(), IssueSeverity::Fatal);
}
