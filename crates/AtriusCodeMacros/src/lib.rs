//! # Atrius Code Macros
//!
//! Procedural macros behind `atrius-fhir-codes`.
//!
//! ## `#[derive(Vocabulary)]`
//!
//! Turns a fieldless enum into a closed FHIR vocabulary. Each variant names
//! its wire literal with `#[code("...")]`; the enum names its code system
//! with `#[vocabulary(...)]`:
//!
//! ```rust,ignore
//! use atrius_fhir_codes::Vocabulary;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
//! #[vocabulary(name = "LinkType", system = "http://hl7.org/fhir/link-type")]
//! pub enum LinkType {
//!     #[code("replaced-by")]
//!     ReplacedBy,
//!     #[code("replaces")]
//!     Replaces,
//! }
//! ```
//!
//! The expansion, placed next to the enum, contains:
//!
//! - one `static` canonical `BoundCode` per variant, named after the variant in
//!   SCREAMING_SNAKE_CASE (`REPLACED_BY`, `REPLACES`)
//! - the `Vocabulary` impl with its `ValueTable` in declaration order
//! - `TryFrom<&str>`, `FromStr` and `Display` using the literal
//! - `Serialize` / `Deserialize` as the bare literal
//!
//! Duplicate literals, literals that break the FHIR `code` grammar, variants
//! with fields and a missing `system` are compile errors.
//!
//! `#[vocabulary(validate = "path::to::fn")]` plugs a
//! `fn(&BoundCode<Self>) -> Result<(), String>` into `Vocabulary::validate`.
//!
//! The generated code refers to the runtime crate as `::atrius_fhir_codes`.

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

pub(crate) mod attrs;
pub(crate) mod vocabulary_impl;

/// Derives `atrius_fhir_codes::Vocabulary` for a fieldless enum.
#[proc_macro_derive(Vocabulary, attributes(vocabulary, code))]
pub fn vocabulary_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    vocabulary_impl::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
