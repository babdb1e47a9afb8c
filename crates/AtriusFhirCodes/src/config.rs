//! Process-wide configuration for code construction
//!
//! The configuration is read on every [`Builder`](crate::Builder) creation, so
//! it lives in an [`ArcSwap`] cell: reads are lock-free and an install replaces
//! the whole snapshot atomically. Builders keep the snapshot they were created
//! with, so an install never changes a builder that is already in flight.

use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;

/// Switches that control how strictly codes are checked when built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeConfig {
    /// Whether builders run the validation pass by default
    pub validating: bool,
    /// Whether element ids may not contain control characters below U+0020
    /// (TAB, CR and LF are always allowed)
    pub check_control_chars: bool,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            validating: true,
            check_control_chars: true,
        }
    }
}

impl CodeConfig {
    /// Parses a JSON configuration document. Missing fields take their defaults.
    ///
    /// ```rust
    /// use atrius_fhir_codes::CodeConfig;
    ///
    /// let config = CodeConfig::from_json_str(r#"{ "validating": false }"#).unwrap();
    /// assert!(!config.validating);
    /// assert!(config.check_control_chars);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

static CURRENT: Lazy<ArcSwap<CodeConfig>> =
    Lazy::new(|| ArcSwap::from_pointee(CodeConfig::default()));

/// Returns the configuration currently installed for the process.
pub fn current() -> Arc<CodeConfig> {
    CURRENT.load_full()
}

/// Replaces the process-wide configuration.
pub fn install(config: CodeConfig) {
    info!(
        validating = config.validating,
        check_control_chars = config.check_control_chars,
        "installing code configuration"
    );
    CURRENT.store(Arc::new(config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict() {
        let config = CodeConfig::default();
        assert!(config.validating);
        assert!(config.check_control_chars);
    }

    #[test]
    fn test_parse_camel_case_document() {
        let config =
            CodeConfig::from_json_str(r#"{ "validating": true, "checkControlChars": false }"#)
                .unwrap();
        assert!(config.validating);
        assert!(!config.check_control_chars);
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(CodeConfig::from_json_str(r#"{ "validating": "yes" }"#).is_err());
    }
}
