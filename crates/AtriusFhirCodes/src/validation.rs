//! Post-construction checks for bound codes
//!
//! [`Builder::build`](crate::Builder::build) runs, in order:
//!
//! 1. the element rule `ele-1`: a value or at least one extension must be present
//! 2. the FHIR `string` rules on the element id, when one is set
//! 3. the vocabulary's own [`Vocabulary::validate`] hook
//!
//! [`Profile`]s are extra constraints a caller applies on top with
//! [`Builder::build_with`](crate::Builder::build_with).
//!
//! [`check_code_literal`] is also the generator's authoring-time check. The
//! derive macro applies the same rule to `#[code]` literals.

use tracing::debug;

use crate::bound_code::BoundCode;
use crate::config::CodeConfig;
use crate::error::ValidationError;
use crate::vocabulary::Vocabulary;

const MIN_STRING_LENGTH: usize = 1;
const MAX_STRING_LENGTH: usize = 1024 * 1024;

/// An additional constraint applied to an instance at build time.
pub trait Profile<V: Vocabulary> {
    /// Short name used in error messages.
    fn name(&self) -> &str;

    fn check(&self, code: &BoundCode<V>) -> Result<(), String>;
}

/// Restricts a vocabulary to a subset of its codes, as a profile binding a
/// narrower value set would.
#[derive(Debug, Clone)]
pub struct AllowedCodes<V: Vocabulary> {
    name: String,
    allowed: Vec<V>,
}

impl<V: Vocabulary> AllowedCodes<V> {
    pub fn new(name: impl Into<String>, allowed: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: name.into(),
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl<V: Vocabulary> Profile<V> for AllowedCodes<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, code: &BoundCode<V>) -> Result<(), String> {
        match code.value() {
            Some(value) if !self.allowed.contains(&value) => Err(format!(
                "code '{}' is not allowed",
                value.as_code()
            )),
            _ => Ok(()),
        }
    }
}

/// Requires an extension with the given URL to be present.
#[derive(Debug, Clone)]
pub struct RequiredExtension {
    url: String,
}

impl RequiredExtension {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl<V: Vocabulary> Profile<V> for RequiredExtension {
    fn name(&self) -> &str {
        &self.url
    }

    fn check(&self, code: &BoundCode<V>) -> Result<(), String> {
        if code.extension().iter().any(|e| e.url() == self.url) {
            Ok(())
        } else {
            Err(format!("missing required extension {}", self.url))
        }
    }
}

/// Runs the element rules and the vocabulary hook against `code`.
pub fn validate<V: Vocabulary>(
    code: &BoundCode<V>,
    config: &CodeConfig,
) -> Result<(), ValidationError> {
    let outcome = check_element(code)
        .and_then(|()| match code.id() {
            Some(id) => check_string(id, config.check_control_chars)
                .map_err(|msg| format!("element id: {}", msg)),
            None => Ok(()),
        })
        .and_then(|()| V::validate(code));

    outcome.map_err(|message| failure(code, message))
}

/// Applies `profile` to `code`.
pub fn apply_profile<V: Vocabulary, P: Profile<V> + ?Sized>(
    code: &BoundCode<V>,
    profile: &P,
) -> Result<(), ValidationError> {
    profile
        .check(code)
        .map_err(|message| failure(code, format!("profile {}: {}", profile.name(), message)))
}

fn failure<V: Vocabulary>(code: &BoundCode<V>, message: String) -> ValidationError {
    debug!(vocabulary = V::NAME, %message, "code failed validation");
    ValidationError {
        vocabulary: V::NAME,
        instance: format!("{:?}", code),
        message,
    }
}

fn check_element<V: Vocabulary>(code: &BoundCode<V>) -> Result<(), String> {
    if code.value().is_none() && code.extension().is_empty() {
        return Err("ele-1: All FHIR elements must have a @value or children".to_string());
    }
    Ok(())
}

/// Checks `s` against the FHIR `string` rules: at least one non-whitespace
/// character, at most 1 MiB, no whitespace other than space, tab, CR and LF,
/// and (when `check_control_chars` is set) no other control characters.
pub fn check_string(s: &str, check_control_chars: bool) -> Result<(), String> {
    if s.chars().count() > MAX_STRING_LENGTH {
        return Err(format!(
            "String value length: {} is greater than maximum allowed length: {}",
            s.chars().count(),
            MAX_STRING_LENGTH
        ));
    }
    let mut count = 0;
    for ch in s.chars() {
        if !ch.is_whitespace() {
            if check_control_chars && is_unsupported_control_char(ch) {
                return Err(format!(
                    "String value contains unsupported control characters: value=[{}]",
                    s.escape_debug()
                ));
            }
            count += 1;
        } else if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
            return Err(format!(
                "String value: '{}' contains whitespace other than space, tab, CR or LF",
                s.escape_debug()
            ));
        }
    }
    if count < MIN_STRING_LENGTH {
        return Err(format!(
            "Trimmed String value length: {} is less than minimum required length: {}",
            count, MIN_STRING_LENGTH
        ));
    }
    Ok(())
}

/// Checks `s` against the FHIR `code` pattern `[^\s]+( [^\s]+)*`. Control
/// characters (`char::is_control`, including DEL and C1) are rejected too.
///
/// ```rust
/// use atrius_fhir_codes::validation::check_code_literal;
///
/// assert!(check_code_literal("entered-in-error").is_ok());
/// assert!(check_code_literal("two words").is_ok());
/// assert!(check_code_literal(" leading").is_err());
/// assert!(check_code_literal("double  space").is_err());
/// ```
pub fn check_code_literal(s: &str) -> Result<(), String> {
    let (Some(first), Some(last)) = (s.chars().next(), s.chars().last()) else {
        return Err("Code value: '' must begin with a non-whitespace character".to_string());
    };
    if first.is_whitespace() {
        return Err(format!(
            "Code value: '{}' must begin with a non-whitespace character",
            s
        ));
    }
    if last.is_whitespace() {
        return Err(format!(
            "Code value: '{}' must end with a non-whitespace character",
            s
        ));
    }
    let mut previous_is_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if ch != ' ' {
                return Err(format!(
                    "Code value: '{}' must not contain whitespace other than a single space",
                    s.escape_debug()
                ));
            }
            if previous_is_space {
                return Err(format!(
                    "Code value: '{}' must not contain consecutive spaces",
                    s
                ));
            }
            previous_is_space = true;
        } else {
            if ch.is_control() {
                return Err(format!(
                    "Code value: '{}' contains unsupported control characters",
                    s.escape_debug()
                ));
            }
            previous_is_space = false;
        }
    }
    Ok(())
}

fn is_unsupported_control_char(ch: char) -> bool {
    (ch as u32) < 32 && !matches!(ch, '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_string() {
        assert!(check_string("obs-1", true).is_ok());
        assert!(check_string("with inner\ttab", true).is_ok());
        assert!(check_string("", true).is_err());
        assert!(check_string(" \t ", true).is_err());
        assert!(check_string("bell\u{7}", true).is_err());
        assert!(check_string("bell\u{7}", false).is_ok());
        assert!(check_string("nbsp\u{a0}here", true).is_err());
    }

    #[test]
    fn test_check_code_literal() {
        assert!(check_code_literal("<=").is_ok());
        assert!(check_code_literal("").is_err());
        assert!(check_code_literal("trailing ").is_err());
        assert!(check_code_literal("tab\tinside").is_err());
        assert!(check_code_literal("nul\u{0}").is_err());
        assert!(check_code_literal("del\u{7f}").is_err());
        assert!(check_code_literal("c1\u{9b}x").is_err());
    }
}
