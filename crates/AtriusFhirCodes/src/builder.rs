use std::sync::Arc;

use tracing::trace;

use crate::bound_code::BoundCode;
use crate::config::{self, CodeConfig};
use crate::error::{UnknownCodeError, ValidationError};
use crate::extension::Extension;
use crate::validation::{self, Profile};
use crate::vocabulary::Vocabulary;

/// Staged construction of a [`BoundCode`] carrying metadata.
///
/// `build` consumes the builder, so a builder produces at most one instance.
/// To derive a modified copy of an existing instance, seed a new builder with
/// [`BoundCode::to_builder`].
///
/// A string value is resolved as soon as it is set: [`value_code`](Self::value_code)
/// fails on an unknown literal right away instead of deferring the error to
/// `build`.
///
/// ```rust
/// use atrius_fhir_codes::{BoundCode, Extension};
/// use atrius_fhir_codes::code_systems::AddressUse;
///
/// let code = BoundCode::<AddressUse>::builder()
///     .id("addr-use")
///     .extension(Extension::new("http://example.org/fhir/verified"))
///     .value_code("home")?
///     .build()?;
/// assert_eq!(code.literal(), Some("home"));
/// assert_eq!(code.extension().len(), 1);
///
/// assert!(BoundCode::<AddressUse>::builder().value_code("house").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Builder<V: Vocabulary> {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<V>,
    validating: bool,
    config: Arc<CodeConfig>,
}

impl<V: Vocabulary> Default for Builder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vocabulary> Builder<V> {
    /// An empty builder using the process-wide configuration.
    pub fn new() -> Self {
        Self::with_config(config::current())
    }

    /// An empty builder using `config` instead of the process-wide one.
    pub fn with_config(config: Arc<CodeConfig>) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: None,
            validating: config.validating,
            config,
        }
    }

    /// A builder seeded with the fields of `code`.
    pub fn from_existing(code: &BoundCode<V>) -> Self {
        let mut builder = Self::new();
        builder.id = code.id().map(str::to_string);
        builder.extension = code.extension().to_vec();
        builder.value = code.value();
        builder
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn clear_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Appends one extension.
    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    /// Appends every extension in `extensions`, keeping their order.
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extension.extend(extensions);
        self
    }

    pub fn clear_extensions(mut self) -> Self {
        self.extension.clear();
        self
    }

    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the value from its literal, failing immediately on an unknown code.
    pub fn value_code(mut self, code: &str) -> Result<Self, UnknownCodeError> {
        self.value = Some(V::from_code(code)?);
        Ok(self)
    }

    pub fn clear_value(mut self) -> Self {
        self.value = None;
        self
    }

    /// Drops every staged field; the validation setting is kept.
    pub fn reset(mut self) -> Self {
        self.id = None;
        self.extension.clear();
        self.value = None;
        self
    }

    /// Turns the validation pass of [`build`](Self::build) on or off.
    pub fn validating(mut self, validating: bool) -> Self {
        self.validating = validating;
        self
    }

    /// Builds the instance and, when validating, checks it.
    pub fn build(self) -> Result<BoundCode<V>, ValidationError> {
        let validating = self.validating;
        let config = Arc::clone(&self.config);
        let code = BoundCode::from_fields(self.id, self.extension, self.value);
        if validating {
            validation::validate(&code, &config)?;
        }
        trace!(vocabulary = V::NAME, value = code.literal(), "built code");
        Ok(code)
    }

    /// Builds the instance and then applies `profile`, whether or not the
    /// builder is validating.
    pub fn build_with<P: Profile<V> + ?Sized>(
        self,
        profile: &P,
    ) -> Result<BoundCode<V>, ValidationError> {
        let code = self.build()?;
        validation::apply_profile(&code, profile)?;
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_systems::{account_status, AccountStatus};

    fn lenient() -> Arc<CodeConfig> {
        Arc::new(CodeConfig {
            validating: false,
            ..CodeConfig::default()
        })
    }

    #[test]
    fn test_id_is_last_writer_wins() {
        let code = Builder::new()
            .value(AccountStatus::OnHold)
            .id("first")
            .id("second")
            .build()
            .unwrap();
        assert_eq!(code.id(), Some("second"));
    }

    #[test]
    fn test_extensions_append() {
        let code = Builder::new()
            .value(AccountStatus::Active)
            .extension(Extension::new("a"))
            .extensions([Extension::new("b"), Extension::new("c")])
            .build()
            .unwrap();
        let urls: Vec<_> = code.extension().iter().map(Extension::url).collect();
        assert_eq!(urls, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reset_clears_staged_fields() {
        let code = account_status::INACTIVE
            .to_builder()
            .id("x")
            .extension(Extension::new("a"))
            .reset()
            .value(AccountStatus::Unknown)
            .build()
            .unwrap();
        assert!(std::ptr::eq(code.canonical_form().unwrap(), &account_status::UNKNOWN));
        assert_eq!(code, account_status::UNKNOWN);
    }

    #[test]
    fn test_empty_builder_fails_ele_1() {
        let err = Builder::<AccountStatus>::new().build().unwrap_err();
        assert_eq!(err.vocabulary, "AccountStatus");
        assert!(err.message.starts_with("ele-1"));
    }

    #[test]
    fn test_config_without_validation_skips_checks() {
        let code = Builder::<AccountStatus>::with_config(lenient())
            .id("   ")
            .build()
            .unwrap();
        assert_eq!(code.id(), Some("   "));
        assert_eq!(code.value(), None);
    }

    #[test]
    fn test_validating_toggle_overrides_config() {
        let result = Builder::<AccountStatus>::with_config(lenient())
            .validating(true)
            .build();
        assert!(result.is_err());
    }
}
