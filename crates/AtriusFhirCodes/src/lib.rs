//! Strongly typed FHIR `code` elements bound to closed vocabularies.
//!
//! A [`BoundCode<V>`] is a FHIR `code` element whose value is restricted to
//! the variants of a [`Vocabulary`] `V`, together with the element's optional
//! `id` and extensions. Vocabularies are plain fieldless enums annotated with
//! `#[derive(Vocabulary)]`; the derive emits the [`ValueTable`] mapping each
//! variant to its wire literal plus one interned, metadata-free [`BoundCode`]
//! static per variant.
//!
//! The FHIR R4 code systems most commonly bound with `required` strength are
//! generated into [`code_systems`] by `atrius-code-gen`.
//!
//! ```rust
//! use atrius_fhir_codes::{BoundCode, Extension};
//! use atrius_fhir_codes::code_systems::{administrative_gender, AdministrativeGender};
//!
//! // Interned instances come straight from the static table.
//! let female = BoundCode::<AdministrativeGender>::from_code("female")?;
//! assert!(std::ptr::eq(female, &administrative_gender::FEMALE));
//!
//! // Elements carrying metadata go through the builder.
//! let unknown = BoundCode::<AdministrativeGender>::builder()
//!     .extension(Extension::data_absent_reason("asked-declined"))
//!     .build()?;
//! assert_eq!(unknown.value(), None);
//! assert!(unknown.has_only_data_absent_reason_extension());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Logging goes through `tracing`; nothing here installs a subscriber.

extern crate self as atrius_fhir_codes;

pub mod bound_code;
pub mod builder;
pub mod code_systems;
pub mod config;
pub mod error;
pub mod extension;
pub mod registry;
mod serde_impl;
pub mod validation;
pub mod value_table;
pub mod vocabulary;

pub use bound_code::BoundCode;
pub use builder::Builder;
pub use config::CodeConfig;
pub use error::{
    CodeError, CodeResult, ConfigError, InvalidInputError, UnknownCodeError, ValidationError,
};
pub use extension::Extension;
pub use registry::VocabularyInfo;
pub use serde_impl::ElementMeta;
pub use validation::{AllowedCodes, Profile, RequiredExtension};
pub use value_table::ValueTable;
pub use vocabulary::Vocabulary;

/// Derives [`Vocabulary`] for a fieldless enum. See the trait docs.
pub use atrius_code_macros::Vocabulary;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
