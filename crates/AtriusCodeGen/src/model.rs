// -------------------- JSON models --------------------

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Bundle {
    pub entry: Option<Vec<BundleEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct BundleEntry {
    #[serde(rename = "fullUrl")]
    pub _full_url: Option<String>,
    pub resource: Resource,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    CodeSystem(CodeSystem),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CodeSystem {
    pub id: Option<String>,
    pub url: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub concept: Option<Vec<Concept>>,
}

impl CodeSystem {
    /// All concepts, nested ones included, in document order.
    pub fn flattened_concepts(&self) -> Vec<&Concept> {
        let mut out = Vec::new();
        if let Some(concepts) = &self.concept {
            flatten_concepts(concepts, &mut out);
        }
        out
    }
}

fn flatten_concepts<'a>(nodes: &'a [Concept], out: &mut Vec<&'a Concept>) {
    for n in nodes {
        out.push(n);
        if let Some(children) = n.concept.as_ref() {
            flatten_concepts(children, out);
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Concept {
    pub code: String,
    pub display: Option<String>,
    pub definition: Option<String>,
    pub extension: Option<Vec<Extension>>,
    pub concept: Option<Vec<Concept>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Extension {
    pub url: String,
    #[serde(rename = "valueString")]
    pub value_string: Option<String>,
}

/// Every `CodeSystem` resource in `bundle`, in entry order.
pub fn code_systems(bundle: Bundle) -> Vec<CodeSystem> {
    bundle
        .entry
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| match e.resource {
            Resource::CodeSystem(cs) => Some(cs),
            Resource::Other => None,
        })
        .collect()
}
