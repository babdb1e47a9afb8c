use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, LitStr, Meta, MetaList, MetaNameValue};

/// Contents of the enum-level `#[vocabulary(...)]` attribute.
pub(crate) struct VocabularyAttr {
    pub(crate) name: LitStr,
    pub(crate) system: LitStr,
    pub(crate) validate: Option<syn::Path>,
}

/// Parses `#[vocabulary(name = "..", system = "..", validate = "path")]`.
///
/// `name` defaults to the enum identifier; `system` is required.
pub(crate) fn parse_vocabulary_attr(attrs: &[Attribute], ident: &Ident) -> syn::Result<VocabularyAttr> {
    let mut found = attrs.iter().filter(|a| a.path().is_ident("vocabulary"));
    let Some(attr) = found.next() else {
        return Err(syn::Error::new(
            ident.span(),
            "missing #[vocabulary(system = \"...\")] attribute",
        ));
    };
    if let Some(dup) = found.next() {
        return Err(syn::Error::new(dup.span(), "duplicate #[vocabulary] attribute"));
    }

    let Meta::List(MetaList { tokens, .. }) = &attr.meta else {
        return Err(syn::Error::new(attr.span(), "expected #[vocabulary(...)]"));
    };

    let parser = Punctuated::<MetaNameValue, syn::Token![,]>::parse_terminated;
    let list = parser.parse2(tokens.clone())?;

    let mut name = None;
    let mut system = None;
    let mut validate = None;

    for nv in list {
        let span = nv.span();
        let key = nv.path.get_ident().map(|i| i.to_string()).unwrap_or_default();

        let lit = match nv.value {
            syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(s), .. }) => s,
            _ => return Err(syn::Error::new(span, "expected string literal")),
        };

        match key.as_str() {
            "name" => name = Some(lit),
            "system" => system = Some(lit),
            "validate" => validate = Some(lit.parse::<syn::Path>()?),
            other => {
                return Err(syn::Error::new(
                    span,
                    format!("unknown vocabulary key `{other}`; expected name, system or validate"),
                ));
            }
        }
    }

    let system = system.ok_or_else(|| {
        syn::Error::new(attr.span(), "missing required vocabulary field: system")
    })?;
    let name = name.unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));

    Ok(VocabularyAttr {
        name,
        system,
        validate,
    })
}

/// The literal from the single `#[code("...")]` attribute on a variant.
pub(crate) fn parse_code_attr(attrs: &[Attribute], variant: &Ident) -> syn::Result<LitStr> {
    let mut found = attrs.iter().filter(|a| a.path().is_ident("code"));
    let Some(attr) = found.next() else {
        return Err(syn::Error::new(
            variant.span(),
            format!("variant `{variant}` is missing its #[code(\"...\")] literal"),
        ));
    };
    if let Some(dup) = found.next() {
        return Err(syn::Error::new(dup.span(), "duplicate #[code] attribute"));
    }
    attr.parse_args::<LitStr>()
}

/// Mirrors the FHIR `code` pattern `[^\s]+( [^\s]+)*`, rejecting control
/// characters as well. Keep in step with
/// `atrius_fhir_codes::validation::check_code_literal`, which the generator uses.
pub(crate) fn check_code_literal(code: &str) -> Result<(), &'static str> {
    if code.is_empty() {
        return Err("code literal must not be empty");
    }
    if code.starts_with(char::is_whitespace) || code.ends_with(char::is_whitespace) {
        return Err("code literal must not begin or end with whitespace");
    }
    if code.contains("  ") {
        return Err("code literal must not contain consecutive spaces");
    }
    if code.chars().any(|c| c.is_whitespace() && c != ' ') {
        return Err("code literal may only contain single spaces as whitespace");
    }
    if code.chars().any(char::is_control) {
        return Err("code literal must not contain control characters");
    }
    Ok(())
}
