//! Name syntax helpers
//!
//! Splitting of short-form (`prefix:local`) and Clark-form (`{uri}local`)
//! names, plus the prefix checks used when registering namespaces.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static CLARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{([^}]*)\}(?s:.*)$").unwrap());

// Prefixes the serializer hands out for namespaces nobody registered
static GENERATED_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ns\d+$").unwrap());

/// Split a short-form name into `(prefix, local)`.
///
/// Exactly one colon is required; `officep` and `of:fice:p` both fail
/// with [`Error::MalformedName`].
pub fn split_prefix(name: &str) -> Result<(&str, &str)> {
    match name.split_once(':') {
        Some((prefix, local)) if !local.contains(':') => Ok((prefix, local)),
        _ => Err(Error::MalformedName(name.to_string())),
    }
}

/// Check if a name is already in Clark notation
pub fn is_clark(name: &str) -> bool {
    CLARK.is_match(name)
}

/// Split a Clark-notation name into `(uri, local)`
pub fn split_clark(name: &str) -> Option<(&str, &str)> {
    let caps = CLARK.captures(name)?;
    let uri = caps.get(1)?.as_str();
    let local = caps.get(2)?.as_str();
    Some((uri, local))
}

/// Build a Clark-notation name
pub fn clark(uri: &str, local: &str) -> String {
    format!("{{{}}}{}", uri, local)
}

/// Check if a prefix has the shape of a generated binding (`ns0`, `ns1`, ...)
pub fn is_generated_prefix(prefix: &str) -> bool {
    GENERATED_PREFIX.is_match(prefix)
}

/// Check if a string is a valid NCName (non-colonized name), simplified
pub fn is_valid_ncname(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
}
