//! Namespace registration adapters
//!
//! XML libraries expose one of two registration surfaces: a uri→prefix
//! table that callers write into directly, or an explicit
//! `register_namespace(prefix, uri)` call. [`NamespaceAdapter`] hides the
//! difference behind a single `register` operation.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Namespace URI
pub type NamespaceUri = String;

/// Namespace prefix
pub type Prefix = String;

/// Target of prefix registration
pub trait NamespaceAdapter {
    /// Bind `prefix` to `uri` so that serialized output uses the prefix
    fn register(&mut self, prefix: &str, uri: &str) -> Result<()>;
}

impl<A: NamespaceAdapter + ?Sized> NamespaceAdapter for &mut A {
    fn register(&mut self, prefix: &str, uri: &str) -> Result<()> {
        (**self).register(prefix, uri)
    }
}

impl<A: NamespaceAdapter + ?Sized> NamespaceAdapter for Box<A> {
    fn register(&mut self, prefix: &str, uri: &str) -> Result<()> {
        (**self).register(prefix, uri)
    }
}

/// Explicitly owned uri→prefix table, the direct-write registration surface.
///
/// The table stays bijective: binding a prefix already used by another
/// uri drops the older binding, and re-binding a uri replaces its prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTable {
    entries: IndexMap<NamespaceUri, Prefix>,
}

impl NamespaceTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `prefix` to `uri`, last binding wins
    pub fn insert(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        let prefix = prefix.into();
        let uri = uri.into();
        self.entries.retain(|u, p| *p != prefix || *u == uri);
        if let Some(old) = self.entries.insert(uri.clone(), prefix.clone()) {
            if old != prefix {
                trace!(uri = %uri, old = %old, new = %prefix, "rebinding namespace");
            }
        }
    }

    /// Get the prefix bound to a namespace URI
    pub fn prefix(&self, uri: &str) -> Option<&str> {
        self.entries.get(uri).map(|s| s.as_str())
    }

    /// Get the namespace URI bound to a prefix
    pub fn uri(&self, prefix: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, p)| p.as_str() == prefix)
            .map(|(u, _)| u.as_str())
    }

    /// Remove the binding for a namespace URI
    pub fn remove(&mut self, uri: &str) -> Option<Prefix> {
        self.entries.shift_remove(uri)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no bindings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(uri, prefix)` pairs in binding order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(u, p)| (u.as_str(), p.as_str()))
    }
}

impl NamespaceAdapter for NamespaceTable {
    fn register(&mut self, prefix: &str, uri: &str) -> Result<()> {
        self.insert(prefix, uri);
        Ok(())
    }
}

/// Library surface with an explicit `register_namespace` operation
pub trait RegisterNamespace {
    /// Register `prefix` for `uri`
    fn register_namespace(&mut self, prefix: &str, uri: &str) -> Result<()>;
}

/// Adapts a [`RegisterNamespace`] implementor to [`NamespaceAdapter`]
#[derive(Debug, Clone, Default)]
pub struct Registrar<L> {
    library: L,
}

impl<L: RegisterNamespace> Registrar<L> {
    /// Wrap a library exposing `register_namespace`
    pub fn new(library: L) -> Self {
        Self { library }
    }

    /// Get the wrapped library
    pub fn library(&self) -> &L {
        &self.library
    }

    /// Get the wrapped library mutably
    pub fn library_mut(&mut self) -> &mut L {
        &mut self.library
    }

    /// Unwrap the library
    pub fn into_inner(self) -> L {
        self.library
    }
}

impl<L: RegisterNamespace> NamespaceAdapter for Registrar<L> {
    fn register(&mut self, prefix: &str, uri: &str) -> Result<()> {
        self.library.register_namespace(prefix, uri)
    }
}

/// An XML library that may expose either registration surface.
///
/// Both capabilities default to absent; a library overrides the ones it has.
pub trait XmlLibrary {
    /// Direct-write namespace table, if the library has one
    fn namespace_map(&mut self) -> Option<&mut NamespaceTable> {
        None
    }

    /// Explicit registration operation, if the library has one
    fn registrar(&mut self) -> Option<&mut dyn RegisterNamespace> {
        None
    }
}

/// Registration surface picked for a library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// `register_namespace(prefix, uri)` call
    RegisterNamespace,
    /// Direct write into the uri→prefix table
    NamespaceMap,
}

/// Adapter over an [`XmlLibrary`] whose capability is detected once, at
/// construction.
#[derive(Debug)]
pub struct LibraryAdapter<L> {
    library: L,
    capability: Capability,
}

impl<L: XmlLibrary> LibraryAdapter<L> {
    /// Detect the library's registration surface.
    ///
    /// `register_namespace` is preferred when both are present.
    pub fn new(mut library: L) -> Result<Self> {
        let capability = if library.registrar().is_some() {
            Capability::RegisterNamespace
        } else if library.namespace_map().is_some() {
            Capability::NamespaceMap
        } else {
            return Err(Error::AdapterUnsupported(
                "neither register_namespace nor a namespace map is available".to_string(),
            ));
        };
        debug!(?capability, "selected namespace registration surface");
        Ok(Self {
            library,
            capability,
        })
    }

    /// Capability selected at construction
    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Get the wrapped library
    pub fn library(&self) -> &L {
        &self.library
    }

    /// Get the wrapped library mutably
    pub fn library_mut(&mut self) -> &mut L {
        &mut self.library
    }

    /// Unwrap the library
    pub fn into_inner(self) -> L {
        self.library
    }
}

impl<L: XmlLibrary> NamespaceAdapter for LibraryAdapter<L> {
    fn register(&mut self, prefix: &str, uri: &str) -> Result<()> {
        let capability = self.capability;
        let unsupported = move || Error::AdapterUnsupported(format!("{:?} went missing", capability));
        match capability {
            Capability::RegisterNamespace => self
                .library
                .registrar()
                .ok_or_else(unsupported)?
                .register_namespace(prefix, uri),
            Capability::NamespaceMap => {
                self.library
                    .namespace_map()
                    .ok_or_else(unsupported)?
                    .insert(prefix, uri);
                Ok(())
            }
        }
    }
}
