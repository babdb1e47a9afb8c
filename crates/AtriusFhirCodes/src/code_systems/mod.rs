// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

//! FHIR R4 code systems, one module per `CodeSystem`.
//!
//! Each module holds the vocabulary enum, a `<Name>Code` alias and one interned
//! constant per code.
use crate::registry::VocabularyInfo;
pub mod account_status;
pub mod address_type;
pub mod address_use;
pub mod administrative_gender;
pub mod bundle_type;
pub mod contact_point_system;
pub mod contact_point_use;
pub mod days_of_week;
pub mod encounter_status;
pub mod http_verb;
pub mod identifier_use;
pub mod issue_severity;
pub mod link_type;
pub mod name_use;
pub mod narrative_status;
pub mod observation_status;
pub mod publication_status;
pub mod quantity_comparator;
pub mod request_intent;
pub mod request_priority;
pub mod request_status;
pub mod search_entry_mode;
pub use account_status::{AccountStatus, AccountStatusCode};
pub use address_type::{AddressType, AddressTypeCode};
pub use address_use::{AddressUse, AddressUseCode};
pub use administrative_gender::{AdministrativeGender, AdministrativeGenderCode};
pub use bundle_type::{BundleType, BundleTypeCode};
pub use contact_point_system::{ContactPointSystem, ContactPointSystemCode};
pub use contact_point_use::{ContactPointUse, ContactPointUseCode};
pub use days_of_week::{DaysOfWeek, DaysOfWeekCode};
pub use encounter_status::{EncounterStatus, EncounterStatusCode};
pub use http_verb::{HTTPVerb, HTTPVerbCode};
pub use identifier_use::{IdentifierUse, IdentifierUseCode};
pub use issue_severity::{IssueSeverity, IssueSeverityCode};
pub use link_type::{LinkType, LinkTypeCode};
pub use name_use::{NameUse, NameUseCode};
pub use narrative_status::{NarrativeStatus, NarrativeStatusCode};
pub use observation_status::{ObservationStatus, ObservationStatusCode};
pub use publication_status::{PublicationStatus, PublicationStatusCode};
pub use quantity_comparator::{QuantityComparator, QuantityComparatorCode};
pub use request_intent::{RequestIntent, RequestIntentCode};
pub use request_priority::{RequestPriority, RequestPriorityCode};
pub use request_status::{RequestStatus, RequestStatusCode};
pub use search_entry_mode::{SearchEntryMode, SearchEntryModeCode};
/// Registry entries for every generated vocabulary, ordered by module name.
pub(crate) static VOCABULARIES: &[VocabularyInfo] = &[
    VocabularyInfo::of::<AccountStatus>(),
    VocabularyInfo::of::<AddressType>(),
    VocabularyInfo::of::<AddressUse>(),
    VocabularyInfo::of::<AdministrativeGender>(),
    VocabularyInfo::of::<BundleType>(),
    VocabularyInfo::of::<ContactPointSystem>(),
    VocabularyInfo::of::<ContactPointUse>(),
    VocabularyInfo::of::<DaysOfWeek>(),
    VocabularyInfo::of::<EncounterStatus>(),
    VocabularyInfo::of::<HTTPVerb>(),
    VocabularyInfo::of::<IdentifierUse>(),
    VocabularyInfo::of::<IssueSeverity>(),
    VocabularyInfo::of::<LinkType>(),
    VocabularyInfo::of::<NameUse>(),
    VocabularyInfo::of::<NarrativeStatus>(),
    VocabularyInfo::of::<ObservationStatus>(),
    VocabularyInfo::of::<PublicationStatus>(),
    VocabularyInfo::of::<QuantityComparator>(),
    VocabularyInfo::of::<RequestIntent>(),
    VocabularyInfo::of::<RequestPriority>(),
    VocabularyInfo::of::<RequestStatus>(),
    VocabularyInfo::of::<SearchEntryMode>(),
];
