// -------------------- Naming helpers --------------------

use crate::model::CodeSystem;

const RESERVED: &[&str] = &["Self", "Type", "Super", "Crate", "Mod", "Move"];

pub fn rust_type_from_fhir_name(name: &str) -> String {
    // FHIR `name` is already PascalCase and often contains acronyms (HTTPVerb).
    // Keep the case of alphanumerics and treat everything else as a word break.
    let cleaned: String = name
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { ' ' })
        .collect();

    let mut out = String::new();
    for w in cleaned.split_whitespace() {
        if w.starts_with(|c: char| c.is_ascii_digit()) {
            out.push('N');
        }
        out.push_str(w);
    }

    if out.is_empty() {
        return "CodeSystem".to_string();
    }
    avoid_reserved(out)
}

pub fn rust_type_from_title(title: &str, fallback: &str) -> String {
    let out = pascal_words(title);
    if out.is_empty() { fallback.to_string() } else { out }
}

pub fn codesystem_enum_name(cs: &CodeSystem) -> Option<String> {
    if let Some(n) = cs.name.as_deref() {
        return Some(rust_type_from_fhir_name(n));
    }
    if let Some(t) = cs.title.as_deref() {
        return Some(rust_type_from_title(t, "CodeSystem"));
    }
    cs.id.as_deref().map(|id| rust_type_from_title(id, "CodeSystem"))
}

/// Module (and file) name from `CodeSystem.id`: kebab-case to snake_case.
pub fn codesystem_module_name(cs: &CodeSystem) -> Option<String> {
    let id = cs.id.as_deref()?;

    let mut s: String = id
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch.to_ascii_lowercase() } else { '_' })
        .collect();

    if s.starts_with(|c: char| c.is_ascii_digit()) {
        s = format!("cs_{}", s);
    }

    if s.is_empty() { None } else { Some(s) }
}

/// Variant identifier for a code literal.
pub fn to_rust_ident_pascal(code: &str) -> String {
    // QuantityComparator and friends use symbolic codes.
    match code {
        "<" => return "Lt".to_string(),
        "<=" => return "Le".to_string(),
        ">" => return "Gt".to_string(),
        ">=" => return "Ge".to_string(),
        "=" => return "Eq".to_string(),
        "!=" => return "Ne".to_string(),
        _ => {}
    }

    let mut out = pascal_words(code);

    if out.is_empty() {
        // Pure symbols: encode the bytes, e.g. "~" -> Sym_7e
        let mut s = String::from("Sym");
        for b in code.as_bytes() {
            s.push_str(&format!("_{:02x}", b));
        }
        out = s;
    }

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out = format!("N{}", out);
    }

    avoid_reserved(out)
}

fn pascal_words(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { ' ' })
        .collect();

    let mut out = String::new();
    for w in cleaned.split_whitespace() {
        let mut chars = w.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    out
}

fn avoid_reserved(ident: String) -> String {
    if RESERVED.contains(&ident.as_str()) {
        format!("{}__", ident)
    } else {
        ident
    }
}
