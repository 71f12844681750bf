//! # odf-xmlns
//!
//! Namespace prefix translation for OpenDocument XML.
//!
//! OpenDocument files address elements and attributes through short
//! prefixes such as `office:p`, while XML libraries work with
//! fully-qualified Clark notation (`{urn:...:office:1.0}p`). This crate
//! converts between the two and registers the prefixes with the XML
//! library doing the writing, so output stays readable.
//!
//! ## Example
//!
//! ```rust
//! use odf_xmlns::{NamespaceMap, NamespaceRegistry, NamespaceTable};
//!
//! let map = NamespaceMap::from_pairs([
//!     ("office", "urn:oasis:names:tc:opendocument:xmlns:office:1.0"),
//! ])?;
//! let registry = NamespaceRegistry::new(map, NamespaceTable::new())?;
//!
//! assert_eq!(
//!     registry.call("office:p")?,
//!     "{urn:oasis:names:tc:opendocument:xmlns:office:1.0}p"
//! );
//! # Ok::<(), odf_xmlns::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod documents;
pub mod error;
pub mod limits;
pub mod names;
pub mod namespaces;
pub mod odf;
pub mod serialize;

// Re-exports for convenience
pub use adapters::{
    Capability, LibraryAdapter, NamespaceAdapter, NamespaceTable, RegisterNamespace, Registrar,
    XmlLibrary,
};
pub use documents::{Document, Element};
pub use error::{Error, Result};
pub use limits::Limits;
pub use namespaces::{NamespaceMap, NamespaceRegistry, QName};
pub use serialize::Serializer;

/// Version of the odf-xmlns library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
