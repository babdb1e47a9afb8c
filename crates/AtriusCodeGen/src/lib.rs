//! AtriusCodeGen
//!
//! Generates the closed FHIR vocabularies of `atrius-fhir-codes` from a bundle
//! of `CodeSystem` resources.
//!
//! ## Inputs
//! - `resources/code-systems.json` by default: a FHIR bundle whose `CodeSystem`
//!   entries enumerate their concepts. Entries of other resource types and
//!   code systems without concepts are skipped.
//!
//! ## Outputs
//! Written into `crates/AtriusFhirCodes/src/code_systems` by default:
//! - `<id>.rs` : one module per CodeSystem, holding a `#[derive(Vocabulary)]`
//!   enum and its `<Name>Code` alias
//! - `mod.rs` : `pub mod` + `pub use` re-exports and the registry table
//!
//! ## Determinism
//! Modules are ordered by name (`BTreeMap`) and module names are deconflicted
//! with numeric suffixes, so rerunning on the same bundle gives identical files.
//! `--check` relies on that to detect stale output.

pub mod emit;
pub mod model;
pub mod naming;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::emit::{render_mod_rs, render_vocabulary, VocabularyModule};
use crate::model::{code_systems, Bundle};
use crate::naming::{codesystem_enum_name, codesystem_module_name};

/// What the generator run produced, or would produce in check mode.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Files whose content changed (written, or stale in check mode).
    pub changed: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: usize,
    /// Vocabularies generated.
    pub vocabularies: usize,
}

impl Outcome {
    pub fn is_up_to_date(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Parses the bundle at `input` and renders every output file in memory.
///
/// Returns `(file name, contents)` pairs with `mod.rs` last.
pub fn render(input: &Path) -> Result<Vec<(String, String)>> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("failed reading {}", input.display()))?;
    let bundle: Bundle = serde_json::from_str(&json)
        .with_context(|| format!("failed parsing JSON bundle {}", input.display()))?;

    let mut by_module: BTreeMap<String, VocabularyModule> = BTreeMap::new();

    for cs in code_systems(bundle) {
        if cs.concept.as_ref().is_none_or(|c| c.is_empty()) {
            warn!(url = %cs.url, "skipping CodeSystem without enumerated concepts");
            continue;
        }
        let (Some(enum_name), Some(base_module)) =
            (codesystem_enum_name(&cs), codesystem_module_name(&cs))
        else {
            warn!(url = %cs.url, "skipping CodeSystem without id or name");
            continue;
        };

        let mut module = base_module.clone();
        let mut suffix: usize = 2;
        while by_module.contains_key(&module) {
            module = format!("{}_{}", base_module, suffix);
            suffix += 1;
        }

        debug!(%module, %enum_name, url = %cs.url, "rendering vocabulary");
        let rendered = render_vocabulary(&module, &enum_name, &cs)?;
        by_module.insert(module, rendered);
    }

    let modules: Vec<VocabularyModule> = by_module.into_values().collect();
    let mut files: Vec<(String, String)> = modules
        .iter()
        .map(|m| (format!("{}.rs", m.module), m.source.clone()))
        .collect();
    files.push(("mod.rs".to_string(), render_mod_rs(&modules)));
    Ok(files)
}

/// Renders `input` into `output`. With `check` set nothing is written; the
/// outcome lists the files that would change.
pub fn run(input: &Path, output: &Path, check: bool) -> Result<Outcome> {
    let files = render(input)?;
    let mut outcome = Outcome {
        vocabularies: files.len().saturating_sub(1),
        ..Outcome::default()
    };

    if !check {
        fs::create_dir_all(output)
            .with_context(|| format!("failed to create output dir {}", output.display()))?;
    }

    for (name, contents) in files {
        let path = output.join(&name);
        let current = fs::read_to_string(&path).ok();
        if current.as_deref() == Some(contents.as_str()) {
            outcome.unchanged += 1;
            continue;
        }
        if check {
            warn!(path = %path.display(), "generated file is stale");
        } else {
            fs::write(&path, contents)
                .with_context(|| format!("failed writing {}", path.display()))?;
            debug!(path = %path.display(), "wrote generated file");
        }
        outcome.changed.push(path);
    }

    info!(
        vocabularies = outcome.vocabularies,
        changed = outcome.changed.len(),
        unchanged = outcome.unchanged,
        output = %output.display(),
        "code generation finished"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLE: &str = r#"{
        "resourceType": "Bundle",
        "entry": [
            { "resource": {
                "resourceType": "CodeSystem",
                "id": "request-priority",
                "url": "http://hl7.org/fhir/request-priority",
                "name": "RequestPriority",
                "concept": [
                    { "code": "routine", "display": "Routine" },
                    { "code": "stat", "display": "STAT" }
                ]
            } },
            { "resource": {
                "resourceType": "CodeSystem",
                "id": "not-present",
                "url": "http://example.org/not-present",
                "name": "NotPresent"
            } },
            { "resource": { "resourceType": "ValueSet", "url": "http://example.org/vs" } }
        ]
    }"#;

    fn write_bundle(dir: &Path) -> PathBuf {
        let path = dir.join("bundle.json");
        fs::write(&path, BUNDLE).unwrap();
        path
    }

    #[test]
    fn test_generate_then_check_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_bundle(dir.path());
        let output = dir.path().join("code_systems");

        let first = run(&input, &output, false).unwrap();
        assert_eq!(first.vocabularies, 1);
        assert_eq!(first.changed.len(), 2);
        assert!(output.join("request_priority.rs").exists());
        assert!(!output.join("not_present.rs").exists());

        let check = run(&input, &output, true).unwrap();
        assert!(check.is_up_to_date());
        assert_eq!(check.unchanged, 2);
    }

    #[test]
    fn test_check_reports_stale_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_bundle(dir.path());
        let output = dir.path().join("code_systems");
        run(&input, &output, false).unwrap();

        let module = output.join("request_priority.rs");
        fs::write(&module, "// edited by hand\n").unwrap();

        let check = run(&input, &output, true).unwrap();
        assert_eq!(check.changed, vec![module.clone()]);
        assert_eq!(fs::read_to_string(&module).unwrap(), "// edited by hand\n");
    }

    #[test]
    fn test_mod_rs_lists_generated_modules() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_bundle(dir.path());
        let files = render(&input).unwrap();
        let (name, mod_rs) = files.last().unwrap();
        assert_eq!(name, "mod.rs");
        assert!(mod_rs.contains("pub use request_priority::{RequestPriority, RequestPriorityCode};"));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = render(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed reading"));
    }
}
