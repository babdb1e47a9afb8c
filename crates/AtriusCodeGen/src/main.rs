//! # Atrius Code Generator CLI
//!
//! Regenerates the vocabulary modules of `atrius-fhir-codes`.
//!
//! ## Usage
//!
//! ```bash
//! # Regenerate from the bundled CodeSystems into crates/AtriusFhirCodes
//! atrius-code-gen
//!
//! # Use another bundle and output directory
//! atrius-code-gen --input r4-codesystems.json --output /tmp/code_systems
//!
//! # Fail (exit code 1) if the checked-in files are out of date
//! atrius-code-gen --check
//! ```
//!
//! Logging goes to stderr. `--log-level` sets the level for this tool; the
//! `ATRIUS_CODEGEN_LOG` environment variable, when set, replaces the whole
//! filter (e.g. `ATRIUS_CODEGEN_LOG=atrius_code_gen=debug`).

use std::path::PathBuf;

use anyhow::{bail, Result};
use atrius_code_gen::run;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ATRIUS_CODEGEN_LOG";

/// Command-line arguments for the vocabulary generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FHIR bundle containing CodeSystem resources.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Directory receiving the generated modules.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Compare instead of writing; fail if any generated file is stale.
    #[arg(long)]
    check: bool,

    /// Log level used when ATRIUS_CODEGEN_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = format!("atrius_code_gen={}", args.log_level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| filter.into()))
        .init();

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let input = args
        .input
        .unwrap_or_else(|| manifest_dir.join("resources").join("code-systems.json"));
    let output = match args.output {
        Some(dir) => dir,
        None => match manifest_dir.parent() {
            Some(crates) => crates
                .join("AtriusFhirCodes")
                .join("src")
                .join("code_systems"),
            None => bail!("expected crates/AtriusCodeGen to have a parent directory; pass --output"),
        },
    };

    let outcome = run(&input, &output, args.check)?;

    if args.check && !outcome.is_up_to_date() {
        for path in &outcome.changed {
            eprintln!("stale: {}", path.display());
        }
        bail!(
            "{} generated file(s) are out of date; rerun atrius-code-gen",
            outcome.changed.len()
        );
    }
    Ok(())
}
