//! Error types for odf-xmlns
//!
//! This module defines all error types used throughout the library.
//! Name and lookup errors are configuration mistakes on the caller side,
//! there is no recovery path for them.

use thiserror::Error;

/// Result type alias using odf-xmlns Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for namespace operations
#[derive(Error, Debug)]
pub enum Error {
    /// Short-form name without exactly one colon
    #[error("malformed name: '{0}' must contain exactly one ':'")]
    MalformedName(String),

    /// Prefix not present in the namespace map
    #[error("unknown prefix: '{0}'")]
    UnknownPrefix(String),

    /// Namespace URI not present in the namespace map
    #[error("unknown namespace: '{0}'")]
    UnknownNamespace(String),

    /// XML library exposes no way to register namespaces
    #[error("XML library does not support namespace registration: {0}")]
    AdapterUnsupported(String),

    /// Same prefix given twice while building a namespace map
    #[error("duplicate prefix: '{0}'")]
    DuplicatePrefix(String),

    /// Prefix is reserved for generated bindings
    #[error("prefix '{0}' is reserved for generated namespace bindings")]
    ReservedPrefix(String),

    /// XML parsing or writing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// Namespace map configuration error
    #[error("config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_name_display() {
        let err = Error::MalformedName("of:fice:p".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("of:fice:p"));
        assert!(msg.contains("exactly one"));
    }

    #[test]
    fn test_unknown_prefix_display() {
        let err = Error::UnknownPrefix("foo".to_string());
        assert_eq!(err.to_string(), "unknown prefix: 'foo'");
    }

    #[test]
    fn test_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
