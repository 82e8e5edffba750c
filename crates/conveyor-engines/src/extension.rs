//! Extension normalization and validation.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Regex pattern for a well-formed extension spelling.
/// Format: optional leading dot, then a letter or digit, then letters, digits,
/// underscores, plus signs, hyphens, or further literal dots.
const EXTENSION_PATTERN: &str = r"^\.?[A-Za-z0-9][A-Za-z0-9_+.-]*$";

static EXTENSION_REGEX: OnceLock<Regex> = OnceLock::new();

fn extension_regex() -> &'static Regex {
    EXTENSION_REGEX.get_or_init(|| Regex::new(EXTENSION_PATTERN).expect("invalid regex pattern"))
}

/// A string that cannot be a filename extension (empty, a bare dot,
/// embedded whitespace or path separators).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid extension: {0:?}")]
pub struct InvalidExtensionError(pub String);

/// Canonicalizes an extension spelling so that equivalent inputs map to one
/// registry key.
///
/// `coffee` and `.coffee` both normalize to `.coffee`. Interior dots are
/// kept literally: `sass.special` becomes `.sass.special`, a key distinct
/// from `.sass`.
///
/// # Errors
///
/// Returns [`InvalidExtensionError`] for spellings no filename can carry.
/// Callers registering or looking up extensions receive this error
/// unchanged.
///
/// # Example
///
/// ```
/// use conveyor_engines::normalize_extension;
///
/// assert_eq!(normalize_extension("coffee").unwrap(), ".coffee");
/// assert_eq!(normalize_extension(".coffee").unwrap(), ".coffee");
/// assert!(normalize_extension("").is_err());
/// ```
pub fn normalize_extension(raw: &str) -> Result<String, InvalidExtensionError> {
    if !extension_regex().is_match(raw) {
        return Err(InvalidExtensionError(raw.to_string()));
    }
    if raw.starts_with('.') {
        Ok(raw.to_string())
    } else {
        Ok(format!(".{raw}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_adds_leading_dot() {
        assert_eq!(normalize_extension("coffee").unwrap(), ".coffee");
    }

    #[test]
    fn test_keeps_existing_dot() {
        assert_eq!(normalize_extension(".coffee").unwrap(), ".coffee");
    }

    #[test]
    fn test_interior_dots_are_literal() {
        assert_eq!(normalize_extension("sass.special").unwrap(), ".sass.special");
        assert_eq!(normalize_extension(".sass.special").unwrap(), ".sass.special");
    }

    #[test]
    fn test_idempotent_over_own_output() {
        let once = normalize_extension("tar.gz").unwrap();
        assert_eq!(normalize_extension(&once).unwrap(), once);
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(normalize_extension("C").unwrap(), ".C");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            normalize_extension(""),
            Err(InvalidExtensionError(String::new()))
        );
    }

    #[test]
    fn test_rejects_bare_dot() {
        assert!(normalize_extension(".").is_err());
    }

    #[test]
    fn test_rejects_double_leading_dot() {
        assert!(normalize_extension("..coffee").is_err());
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(normalize_extension("cof fee").is_err());
        assert!(normalize_extension(" coffee").is_err());
    }

    #[test]
    fn test_rejects_path_separators() {
        assert!(normalize_extension("a/b").is_err());
        assert!(normalize_extension("a\\b").is_err());
    }
}
