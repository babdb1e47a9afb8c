use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical URL of the FHIR data-absent-reason extension.
pub const DATA_ABSENT_REASON_URL: &str =
    "http://hl7.org/fhir/StructureDefinition/data-absent-reason";

/// An extension attached to a coded element.
///
/// Only `url` is interpreted. Every other member of the JSON object
/// (`valueCode`, `valueString`, nested `extension`, ...) is carried verbatim so
/// that it survives a round trip untouched.
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_codes::Extension;
/// use serde_json::json;
///
/// let ext = Extension::new("http://example.org/fhir/source")
///     .with("valueString", json!("registration desk"));
/// assert_eq!(ext.url(), "http://example.org/fhir/source");
/// assert_eq!(ext.get("valueString"), Some(&json!("registration desk")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    url: String,
    #[serde(flatten)]
    content: Map<String, Value>,
}

impl Extension {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: Map::new(),
        }
    }

    /// A data-absent-reason extension carrying `code` as its `valueCode`.
    pub fn data_absent_reason(code: impl Into<String>) -> Self {
        Self::new(DATA_ABSENT_REASON_URL).with("valueCode", Value::String(code.into()))
    }

    /// Adds (or replaces) one member of the extension body.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.content.insert(key.into(), value);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.content.get(key)
    }

    /// Every member other than `url`, in serialization order.
    pub fn content(&self) -> &Map<String, Value> {
        &self.content
    }

    pub fn is_data_absent_reason(&self) -> bool {
        self.url == DATA_ABSENT_REASON_URL
    }
}

// serde_json::Value has no Hash impl; members are hashed through their
// compact JSON rendering. Keys are sorted first because `Map` equality ignores
// order when serde_json's `preserve_order` feature is on.
impl Hash for Extension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
        self.content.len().hash(state);
        let mut members: Vec<(&String, &Value)> = self.content.iter().collect();
        members.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (key, value) in members {
            key.hash(state);
            hash_value(value, state);
        }
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Object(map) => {
            let mut members: Vec<(&String, &Value)> = map.iter().collect();
            members.sort_unstable_by(|a, b| a.0.cmp(b.0));
            members.len().hash(state);
            for (key, nested) in members {
                key.hash(state);
                hash_value(nested, state);
            }
        }
        Value::Array(items) => {
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        other => other.to_string().hash(state),
    }
}
