// --- JSON surface for bound codes ---

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bound_code::BoundCode;
use crate::error::{CodeError, InvalidInputError};
use crate::extension::Extension;
use crate::vocabulary::Vocabulary;

/// The `id` and `extension` of a primitive element, without its value.
///
/// FHIR JSON puts a primitive's literal under `field` and its metadata under
/// the sibling `_field`. [`BoundCode::into_parts`] and
/// [`BoundCode::from_parts`] split and join the two halves.
///
/// ```rust
/// use atrius_fhir_codes::{BoundCode, Extension};
/// use atrius_fhir_codes::code_systems::NameUse;
///
/// let code = BoundCode::<NameUse>::builder()
///     .id("n1")
///     .value(NameUse::Maiden)
///     .build()?;
/// let (value, meta) = code.clone().into_parts();
/// assert_eq!(value, Some("maiden"));
/// assert_eq!(serde_json::to_string(&meta)?, r#"{"id":"n1"}"#);
///
/// let joined = BoundCode::<NameUse>::from_parts(value, meta)?;
/// assert_eq!(joined, code);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

impl ElementMeta {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.extension.is_empty()
    }
}

impl<V: Vocabulary> BoundCode<V> {
    /// Splits the element into its literal and its metadata. The metadata is
    /// `None` when the element carries neither an id nor extensions.
    pub fn into_parts(self) -> (Option<&'static str>, Option<ElementMeta>) {
        let (id, extension, value) = self.into_fields();
        let meta = ElementMeta { id, extension };
        let literal = value.map(Vocabulary::as_code);
        (literal, (!meta.is_empty()).then_some(meta))
    }

    /// Joins a literal and its sibling metadata back into one element.
    ///
    /// An unknown literal is an [`UnknownCodeError`](crate::UnknownCodeError).
    /// Without a literal the metadata must carry at least one extension
    /// (`ele-1`); otherwise the pair is an [`InvalidInputError`].
    pub fn from_parts(value: Option<&str>, meta: Option<ElementMeta>) -> Result<Self, CodeError> {
        let value = value.map(V::from_code).transpose()?;
        match (value, meta.filter(|m| !m.is_empty())) {
            (Some(value), None) => Ok(Self::of(value).clone()),
            (None, Some(meta)) if meta.extension.is_empty() => Err(InvalidInputError::new(
                V::NAME,
                "element metadata without a value must carry an extension",
            )
            .into()),
            (value, Some(meta)) => Ok(Self::from_fields(meta.id, meta.extension, value)),
            (None, None) => Err(InvalidInputError::new(
                V::NAME,
                "neither a value nor element metadata is present",
            )
            .into()),
        }
    }
}

impl<V: Vocabulary> Serialize for BoundCode<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.has_metadata() {
            return match self.literal() {
                Some(literal) => serializer.serialize_str(literal),
                None => serializer.serialize_none(),
            };
        }

        let len = usize::from(self.id().is_some())
            + usize::from(!self.extension().is_empty())
            + usize::from(self.value().is_some());
        let mut state = serializer.serialize_struct("Element", len)?;
        if let Some(id) = self.id() {
            state.serialize_field("id", id)?;
        }
        if !self.extension().is_empty() {
            state.serialize_field("extension", self.extension())?;
        }
        if let Some(literal) = self.literal() {
            state.serialize_field("value", literal)?;
        }
        state.end()
    }
}

impl<'de, V: Vocabulary> Deserialize<'de> for BoundCode<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BoundCodeVisitor(PhantomData))
    }
}

/// Accepts either a bare literal or an element object.
struct BoundCodeVisitor<V>(PhantomData<V>);

impl<V: Vocabulary> BoundCodeVisitor<V> {
    fn resolve<E: de::Error>(literal: &str) -> Result<V, E> {
        V::from_code(literal).map_err(de::Error::custom)
    }
}

impl<'de, V: Vocabulary> Visitor<'de> for BoundCodeVisitor<V> {
    type Value = BoundCode<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a {} code string or an element object", V::NAME)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Self::resolve(v).map(|value| BoundCode::of(value).clone())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(de::Error::invalid_type(de::Unexpected::Unit, &self))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(de::Error::invalid_type(de::Unexpected::Option, &self))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut id: Option<String> = None;
        let mut extension: Option<Vec<Extension>> = None;
        let mut value: Option<V> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "id" => {
                    if id.is_some() {
                        return Err(de::Error::duplicate_field("id"));
                    }
                    id = Some(map.next_value()?);
                }
                "extension" => {
                    if extension.is_some() {
                        return Err(de::Error::duplicate_field("extension"));
                    }
                    extension = Some(map.next_value()?);
                }
                "value" => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    let literal: String = map.next_value()?;
                    value = Some(Self::resolve(&literal)?);
                }
                other => {
                    return Err(de::Error::unknown_field(other, &["id", "extension", "value"]));
                }
            }
        }

        let extension = extension.unwrap_or_default();
        if value.is_none() && extension.is_empty() {
            return Err(de::Error::custom(format!(
                "{} element has neither a value nor extensions",
                V::NAME
            )));
        }
        Ok(BoundCode::from_fields(id, extension, value))
    }
}
