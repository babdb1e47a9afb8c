// --- Bound code value type ---

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;

use crate::builder::Builder;
use crate::error::{CodeError, InvalidInputError, UnknownCodeError};
use crate::extension::Extension;
use crate::vocabulary::Vocabulary;

/// A FHIR `code` element bound to the closed vocabulary `V`.
///
/// Besides the coded value, a FHIR element may carry an `id` and a list of
/// extensions. Both take part in equality: two instances with the same value
/// but different extensions are different elements.
///
/// Every variant of `V` has one interned, metadata-free instance, a `static`
/// generated next to the vocabulary. [`of`](Self::of) and
/// [`from_code`](Self::from_code) return references to those statics, so the
/// common case allocates nothing. Instances with metadata come from a
/// [`Builder`].
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_codes::BoundCode;
/// use atrius_fhir_codes::code_systems::{account_status, AccountStatus};
///
/// let active = BoundCode::of(AccountStatus::Active);
/// assert!(std::ptr::eq(active, &account_status::ACTIVE));
/// assert_eq!(active.literal(), Some("active"));
///
/// let tagged = active.to_builder().id("acct-status").build().unwrap();
/// assert_ne!(&tagged, active);
/// assert_eq!(tagged.variant(), Some(AccountStatus::Active));
/// ```
///
/// # Serialization
///
/// Follows the FHIR primitive pattern: a metadata-free instance serializes as
/// the bare literal, otherwise as an object with `id`, `extension` and
/// `value` members. See [`ElementMeta`](crate::ElementMeta) for splitting the
/// metadata into a sibling `_field` object.
#[derive(Clone)]
pub struct BoundCode<V: Vocabulary> {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<V>,
    hash: OnceLock<u64>,
}

impl<V: Vocabulary> BoundCode<V> {
    /// A metadata-free instance of `value`.
    ///
    /// This is how the interned statics are built. Calling it directly yields
    /// an instance equal to, but not the same object as, [`of`](Self::of).
    pub const fn new_canonical(value: V) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: Some(value),
            hash: OnceLock::new(),
        }
    }

    pub(crate) fn from_fields(
        id: Option<String>,
        extension: Vec<Extension>,
        value: Option<V>,
    ) -> Self {
        Self {
            id,
            extension,
            value,
            hash: OnceLock::new(),
        }
    }

    /// The interned instance for `value`.
    pub fn of(value: V) -> &'static Self {
        value.canonical()
    }

    /// Resolves `code` against the vocabulary and returns the interned instance.
    pub fn from_code(code: &str) -> Result<&'static Self, UnknownCodeError> {
        match V::from_code(code) {
            Ok(value) => Ok(Self::of(value)),
            Err(err) => {
                debug!(vocabulary = V::NAME, code, "rejected unknown code");
                Err(err)
            }
        }
    }

    /// Like [`from_code`](Self::from_code), for callers holding an optional
    /// literal. An absent literal is an [`InvalidInputError`].
    pub fn from_optional_code(code: Option<&str>) -> Result<&'static Self, CodeError> {
        match code {
            Some(code) => Ok(Self::from_code(code)?),
            None => Err(InvalidInputError::new(V::NAME, "a code value is required").into()),
        }
    }

    pub fn builder() -> Builder<V> {
        Builder::new()
    }

    /// A builder seeded with this instance's id, extensions and value.
    pub fn to_builder(&self) -> Builder<V> {
        Builder::from_existing(self)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<V> {
        self.value
    }

    /// Same as [`value`](Self::value); reads better next to `literal`.
    pub fn variant(&self) -> Option<V> {
        self.value
    }

    /// The wire literal, or `None` for an extension-only element.
    pub fn literal(&self) -> Option<&'static str> {
        self.value.map(Vocabulary::as_code)
    }

    pub fn system(&self) -> &'static str {
        V::SYSTEM
    }

    pub fn vocabulary(&self) -> &'static str {
        V::NAME
    }

    pub fn is(&self, value: V) -> bool {
        self.value == Some(value)
    }

    pub fn has_metadata(&self) -> bool {
        self.id.is_some() || !self.extension.is_empty()
    }

    /// `true` when this instance is structurally a canonical one: a value and
    /// no metadata. Says nothing about object identity.
    pub fn is_canonical(&self) -> bool {
        self.value.is_some() && !self.has_metadata()
    }

    /// `true` when this is the interned static itself.
    pub fn is_interned(&self) -> bool {
        self.value
            .is_some_and(|value| std::ptr::eq(self, value.canonical()))
    }

    /// The interned instance for this value with the metadata dropped.
    pub fn canonical_form(&self) -> Option<&'static Self> {
        self.value.map(Vocabulary::canonical)
    }

    /// `true` when the element carries no value and its only extension is a
    /// data-absent-reason.
    pub fn has_only_data_absent_reason_extension(&self) -> bool {
        self.value.is_none()
            && self.extension.len() == 1
            && self.extension[0].is_data_absent_reason()
    }

    pub(crate) fn into_fields(self) -> (Option<String>, Vec<Extension>, Option<V>) {
        (self.id, self.extension, self.value)
    }

    fn fingerprint(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            self.id.hash(&mut hasher);
            self.extension.hash(&mut hasher);
            self.literal().hash(&mut hasher);
            hasher.finish()
        })
    }
}

impl<V: Vocabulary> PartialEq for BoundCode<V> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.value == other.value && self.id == other.id && self.extension == other.extension
    }
}

impl<V: Vocabulary> Eq for BoundCode<V> {}

impl<V: Vocabulary> Hash for BoundCode<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint());
    }
}

impl<V: Vocabulary> fmt::Debug for BoundCode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(V::NAME);
        if let Some(id) = &self.id {
            out.field("id", id);
        }
        if !self.extension.is_empty() {
            out.field("extension", &self.extension);
        }
        out.field("value", &self.literal()).finish()
    }
}

impl<V: Vocabulary> fmt::Display for BoundCode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal().unwrap_or_default())
    }
}

impl<V: Vocabulary> From<V> for BoundCode<V> {
    fn from(value: V) -> Self {
        Self::of(value).clone()
    }
}

impl<V: Vocabulary> FromStr for BoundCode<V> {
    type Err = UnknownCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).cloned()
    }
}
