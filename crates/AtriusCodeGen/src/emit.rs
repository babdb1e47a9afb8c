// -------------------- Rust source emission --------------------

use std::collections::{HashMap, HashSet};

use anyhow::{bail, Context, Result};
use atrius_fhir_codes::validation::check_code_literal;
use heck::ToShoutySnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::model::{CodeSystem, Concept};
use crate::naming::to_rust_ident_pascal;

pub const HEADER: &str = "// @generated by AtriusCodeGen\n// DO NOT EDIT MANUALLY\n\n";

const COMMENTS_URL: &str = "http://hl7.org/fhir/StructureDefinition/codesystem-concept-comments";

/// One vocabulary ready to be written: `<module>.rs` holding enum `enum_name`.
#[derive(Debug, Clone)]
pub struct VocabularyModule {
    pub module: String,
    pub enum_name: String,
    pub source: String,
}

fn concept_comments(c: &Concept) -> Vec<String> {
    c.extension
        .as_ref()
        .into_iter()
        .flat_map(|v| v.iter())
        .filter(|e| e.url == COMMENTS_URL)
        .filter_map(|e| e.value_string.clone())
        .collect()
}

fn doc_attrs(lines: &[String]) -> TokenStream {
    // CR or CRLF inside a doc string would split the generated line; emit one
    // #[doc] per line instead so paragraph breaks survive.
    let mut out: Vec<TokenStream> = Vec::new();

    for l in lines {
        let normalized = l.replace("\r\n", "\n").replace('\r', "\n");
        for part in normalized.split('\n') {
            if part.trim().is_empty() {
                out.push(quote!(#[doc = ""]));
            } else {
                let s = format!(" {}", part.trim());
                out.push(quote!(#[doc = #s]));
            }
        }
    }

    quote!(#(#out)*)
}

/// Tokens for the vocabulary enum and its `<Name>Code` alias.
///
/// Fails on literals the `#[derive(Vocabulary)]` expansion would reject, so a
/// bad bundle is reported against the code system rather than as a compile
/// error in generated code.
pub fn generate_codesystem_tokens(enum_name: &str, cs: &CodeSystem) -> Result<TokenStream> {
    let concepts = cs.flattened_concepts();
    if concepts.is_empty() {
        bail!("CodeSystem {} enumerates no concepts", cs.url);
    }

    let enum_ident = format_ident!("{}", enum_name);
    let alias_ident = format_ident!("{}Code", enum_name);
    let system = cs.url.as_str();

    let mut docs = vec![
        format!("FHIR CodeSystem: {}", enum_name),
        format!("Canonical URL: {}", cs.url),
    ];
    if let Some(t) = &cs.title {
        docs.push(format!("Title: {}", t));
    }
    if let Some(desc) = &cs.description {
        docs.push(desc.clone());
    }
    let enum_docs = doc_attrs(&docs);

    let mut variant_idents: Vec<proc_macro2::Ident> = Vec::new();
    let mut variant_codes: Vec<&str> = Vec::new();
    let mut variant_doc_attrs: Vec<TokenStream> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    // Each variant also becomes a SCREAMING_SNAKE static; those must be unique too.
    let mut statics: HashSet<String> = HashSet::new();

    for c in concepts {
        check_code_literal(&c.code)
            .map_err(|msg| anyhow::anyhow!("{}: {}", cs.url, msg))?;
        if seen.insert(c.code.as_str(), variant_codes.len()).is_some() {
            bail!("{}: code '{}' appears more than once", cs.url, c.code);
        }

        let base_name = to_rust_ident_pascal(&c.code);
        let mut name = base_name.clone();
        let mut suffix: usize = 2;
        while !statics.insert(name.to_shouty_snake_case()) {
            name = format!("{}{}", base_name, suffix);
            suffix += 1;
        }

        let mut vdocs = Vec::new();
        if let Some(d) = &c.display {
            vdocs.push(format!("Display: {}", d));
        }
        if let Some(defn) = &c.definition {
            vdocs.push(format!("Definition: {}", defn));
        }
        for cm in concept_comments(c) {
            vdocs.push(format!("Comment: {}", cm));
        }

        variant_idents.push(format_ident!("{}", name));
        variant_codes.push(c.code.as_str());
        variant_doc_attrs.push(doc_attrs(&vdocs));
    }

    let alias_doc = format!(" [`BoundCode`] restricted to [`{}`].", enum_name);

    Ok(quote! {
        #enum_docs
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
        #[vocabulary(name = #enum_name, system = #system)]
        pub enum #enum_ident {
            #(
                #variant_doc_attrs
                #[code(#variant_codes)]
                #variant_idents,
            )*
        }
        #[doc = #alias_doc]
        pub type #alias_ident = BoundCode<#enum_ident>;
    })
}

/// Full source of one vocabulary module.
pub fn render_vocabulary(module: &str, enum_name: &str, cs: &CodeSystem) -> Result<VocabularyModule> {
    let tokens = generate_codesystem_tokens(enum_name, cs)?;
    let file_ast: syn::File = syn::parse2(tokens)
        .with_context(|| format!("failed parsing tokens for {}", enum_name))?;

    let mut src = String::new();
    src.push_str(HEADER);
    src.push_str("#![allow(clippy::upper_case_acronyms)]\n\n");
    src.push_str("use crate::{BoundCode, Vocabulary};\n\n");
    src.push_str(&prettyplease::unparse(&file_ast));

    Ok(VocabularyModule {
        module: module.to_string(),
        enum_name: enum_name.to_string(),
        source: src,
    })
}

/// `code_systems/mod.rs`: module declarations, re-exports and the registry
/// table. `modules` must already be sorted by module name.
pub fn render_mod_rs(modules: &[VocabularyModule]) -> String {
    let mut src = String::new();
    src.push_str(HEADER);
    src.push_str("//! FHIR R4 code systems, one module per `CodeSystem`.\n");
    src.push_str("//!\n");
    src.push_str("//! Each module holds the vocabulary enum, a `<Name>Code` alias and one interned\n");
    src.push_str("//! constant per code.\n");
    src.push_str("use crate::registry::VocabularyInfo;\n");

    for m in modules {
        src.push_str(&format!("pub mod {};\n", m.module));
    }
    // Explicit re-exports only: every module defines constants such as
    // `ACTIVE` or `UNKNOWN`, which would collide under glob re-exports.
    for m in modules {
        src.push_str(&format!(
            "pub use {}::{{{}, {}Code}};\n",
            m.module, m.enum_name, m.enum_name
        ));
    }

    src.push_str("/// Registry entries for every generated vocabulary, ordered by module name.\n");
    src.push_str("pub(crate) static VOCABULARIES: &[VocabularyInfo] = &[\n");
    for m in modules {
        src.push_str(&format!("    VocabularyInfo::of::<{}>(),\n", m.enum_name));
    }
    src.push_str("];\n");
    src
}
