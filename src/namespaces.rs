//! XML namespace handling
//!
//! This module provides the prefix→URI [`NamespaceMap`], qualified names,
//! and the [`NamespaceRegistry`] translating between `prefix:local` and
//! Clark-notation `{uri}local` names.

use crate::adapters::{LibraryAdapter, NamespaceAdapter, NamespaceUri, Prefix, XmlLibrary};
use crate::error::{Error, Result};
use crate::names;
use crate::odf;
use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Qualified name (QName) - combination of namespace and local name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace URI (None for no namespace)
    pub namespace: Option<NamespaceUri>,
    /// Local name
    pub local_name: String,
}

impl QName {
    /// Create a new QName
    pub fn new(namespace: Option<impl Into<String>>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(|s| s.into()),
            local_name: local_name.into(),
        }
    }

    /// Create a QName without a namespace
    pub fn local(local_name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local_name: local_name.into(),
        }
    }

    /// Create a QName with a namespace
    pub fn namespaced(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local_name: local_name.into(),
        }
    }

    /// Parse a Clark-notation name; anything else is a local name
    pub fn from_clark(name: &str) -> Self {
        match names::split_clark(name) {
            Some((uri, local)) => Self::namespaced(uri, local),
            None => Self::local(name),
        }
    }

    /// Check whether this name matches a Clark-notation (or bare local) name
    pub fn matches(&self, clark: &str) -> bool {
        match (names::split_clark(clark), &self.namespace) {
            (Some((uri, local)), Some(ns)) => ns == uri && self.local_name == local,
            (None, None) => self.local_name == clark,
            _ => false,
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local_name),
            None => write!(f, "{}", self.local_name),
        }
    }
}

/// Ordered prefix→URI mapping with unique prefixes.
///
/// Serialized as a plain JSON object, e.g.
/// `{"office": "urn:oasis:names:tc:opendocument:xmlns:office:1.0"}`.
/// Deserializing goes through [`NamespaceMap::add_prefix`], so repeated
/// or malformed prefixes are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NamespaceMap {
    prefixes: IndexMap<Prefix, NamespaceUri>,
}

impl NamespaceMap {
    /// Create a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(prefix, uri)` pairs, rejecting duplicate prefixes
    pub fn from_pairs<I, P, U>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, U)>,
        P: Into<String>,
        U: Into<String>,
    {
        let mut map = Self::new();
        for (prefix, uri) in pairs {
            map.add_prefix(prefix, uri)?;
        }
        Ok(map)
    }

    /// All well-known OpenDocument prefixes
    pub fn opendocument() -> Self {
        Self {
            prefixes: odf::ALL
                .iter()
                .map(|(p, u)| (p.to_string(), u.to_string()))
                .collect(),
        }
    }

    /// Parse a map from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        let PrefixPairs(pairs) = serde_json::from_str(json)?;
        Self::from_pairs(pairs)
    }

    /// Load a map from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading namespace map");
        Self::from_json(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Render the map as a JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a namespace prefix mapping.
    ///
    /// The prefix must be an NCName and not already mapped.
    pub fn add_prefix(&mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Result<()> {
        let prefix = prefix.into();
        if !names::is_valid_ncname(&prefix) {
            return Err(Error::Config(format!("invalid prefix: '{}'", prefix)));
        }
        if self.prefixes.contains_key(&prefix) {
            return Err(Error::DuplicatePrefix(prefix));
        }
        self.prefixes.insert(prefix, uri.into());
        Ok(())
    }

    /// Get the namespace for a prefix
    pub fn get_namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(|s| s.as_str())
    }

    /// Get the first prefix mapped to a namespace
    pub fn get_prefix(&self, uri: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(_, u)| u.as_str() == uri)
            .map(|(p, _)| p.as_str())
    }

    /// Whether a prefix is mapped
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains_key(prefix)
    }

    /// Number of mappings
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Iterate `(prefix, uri)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }
}

/// JSON object entries in document order, repeated keys included
struct PrefixPairs(Vec<(Prefix, NamespaceUri)>);

impl<'de> Deserialize<'de> for PrefixPairs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = PrefixPairs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of namespace prefixes to URIs")
            }

            fn visit_map<M: MapAccess<'de>>(
                self,
                mut access: M,
            ) -> std::result::Result<PrefixPairs, M::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(pair) = access.next_entry()? {
                    pairs.push(pair);
                }
                Ok(PrefixPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

impl<'de> Deserialize<'de> for NamespaceMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let PrefixPairs(pairs) = PrefixPairs::deserialize(deserializer)?;
        NamespaceMap::from_pairs(pairs).map_err(de::Error::custom)
    }
}

/// Two-way translation between short prefixed names and Clark notation.
///
/// Construction registers every prefix of the map with the adapter, so
/// serialization through the adapter's library writes short prefixes.
#[derive(Debug)]
pub struct NamespaceRegistry<A> {
    map: NamespaceMap,
    adapter: A,
}

impl<A: NamespaceAdapter> NamespaceRegistry<A> {
    /// Create a registry and register all prefixes with the adapter
    pub fn new(map: NamespaceMap, mut adapter: A) -> Result<Self> {
        for (prefix, uri) in map.iter() {
            adapter.register(prefix, uri)?;
        }
        debug!(count = map.len(), "registered namespace prefixes");
        Ok(Self { map, adapter })
    }

    /// Split `prefix:local` into its parts
    pub fn split_prefix<'n>(&self, name: &'n str) -> Result<(&'n str, &'n str)> {
        names::split_prefix(name)
    }

    /// Convert `prefix:local` to `{uri}local`.
    ///
    /// Names already in Clark notation are returned unchanged without
    /// checking the URI against the map.
    pub fn to_clark(&self, name: &str) -> Result<String> {
        if names::is_clark(name) {
            return Ok(name.to_string());
        }
        let (prefix, local) = names::split_prefix(name)?;
        let uri = self
            .map
            .get_namespace(prefix)
            .ok_or_else(|| Error::UnknownPrefix(prefix.to_string()))?;
        Ok(names::clark(uri, local))
    }

    /// Primary conversion entry point, same as [`to_clark`](Self::to_clark)
    pub fn call(&self, name: &str) -> Result<String> {
        self.to_clark(name)
    }

    /// Convert `prefix:local` (or Clark notation) to a [`QName`]
    pub fn qname(&self, name: &str) -> Result<QName> {
        Ok(QName::from_clark(&self.to_clark(name)?))
    }

    /// Convert `{uri}local` back to `prefix:local`.
    ///
    /// Anything not in Clark notation is returned unchanged.
    pub fn to_prefixed(&self, name: &str) -> Result<String> {
        let Some((uri, local)) = names::split_clark(name) else {
            return Ok(name.to_string());
        };
        let prefix = self
            .map
            .get_prefix(uri)
            .ok_or_else(|| Error::UnknownNamespace(uri.to_string()))?;
        Ok(format!("{}:{}", prefix, local))
    }

    /// Register a prefix for a URI with the adapter
    pub fn register(&mut self, prefix: &str, uri: &str) -> Result<()> {
        debug!(prefix, uri, "registering namespace");
        self.adapter.register(prefix, uri)
    }

    /// Namespace URI for a prefix
    pub fn uri_for(&self, prefix: &str) -> Option<&str> {
        self.map.get_namespace(prefix)
    }

    /// Prefix for a namespace URI
    pub fn prefix_for(&self, uri: &str) -> Option<&str> {
        self.map.get_prefix(uri)
    }

    /// The configured namespace map
    pub fn map(&self) -> &NamespaceMap {
        &self.map
    }

    /// The registration adapter
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The registration adapter, mutably
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Give back the adapter
    pub fn into_adapter(self) -> A {
        self.adapter
    }
}

impl<L: XmlLibrary> NamespaceRegistry<LibraryAdapter<L>> {
    /// Create a registry for a library whose registration surface is
    /// detected here, once.
    pub fn for_library(map: NamespaceMap, library: L) -> Result<Self> {
        Self::new(map, LibraryAdapter::new(library)?)
    }
}
