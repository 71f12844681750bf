//! Namespace registry integration tests
//!
//! Conversion between prefixed and Clark names, and registration against
//! both library registration surfaces.

use odf_xmlns::{
    Error, LibraryAdapter, NamespaceMap, NamespaceRegistry, NamespaceTable, RegisterNamespace,
    Registrar, Result, XmlLibrary,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::io::Write;

const DRAWING: &str = "urn:oasis:names:tc:opendocument:xmlns:drawing:1.0";
const OFFICE: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";
const MANIFEST: &str = "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0";

fn libreoffice_map() -> NamespaceMap {
    NamespaceMap::from_pairs([
        ("drawing", DRAWING),
        ("office", OFFICE),
        ("manifest", MANIFEST),
    ])
    .unwrap()
}

fn registry() -> NamespaceRegistry<NamespaceTable> {
    NamespaceRegistry::new(libreoffice_map(), NamespaceTable::new()).unwrap()
}

/// Library exposing only a writable uri→prefix table
#[derive(Debug, Default)]
struct TableLibrary {
    namespace_map: NamespaceTable,
}

impl XmlLibrary for TableLibrary {
    fn namespace_map(&mut self) -> Option<&mut NamespaceTable> {
        Some(&mut self.namespace_map)
    }
}

/// Library exposing only `register_namespace`
#[derive(Debug, Default)]
struct RegisteringLibrary {
    result_map: NamespaceTable,
}

impl RegisterNamespace for RegisteringLibrary {
    fn register_namespace(&mut self, prefix: &str, uri: &str) -> Result<()> {
        self.result_map.insert(prefix, uri);
        Ok(())
    }
}

impl XmlLibrary for RegisteringLibrary {
    fn registrar(&mut self) -> Option<&mut dyn RegisterNamespace> {
        Some(self)
    }
}

#[derive(Debug)]
struct BareLibrary;

impl XmlLibrary for BareLibrary {}

#[test]
fn test_split_prefix() {
    let registry = registry();
    let (prefix, tag) = registry.split_prefix("office:p").unwrap();
    assert_eq!(prefix, "office");
    assert_eq!(tag, "p");
}

#[test]
fn test_split_prefix_error() {
    let registry = registry();
    assert!(matches!(
        registry.split_prefix("officep"),
        Err(Error::MalformedName(_))
    ));
    assert!(matches!(
        registry.split_prefix("of:fice:p"),
        Err(Error::MalformedName(_))
    ));
}

#[test]
fn test_to_clark() {
    assert_eq!(
        registry().to_clark("office:p").unwrap(),
        "{urn:oasis:names:tc:opendocument:xmlns:office:1.0}p"
    );
}

#[test]
fn test_call() {
    let registry = registry();
    assert_eq!(
        registry.call("drawing:p").unwrap(),
        "{urn:oasis:names:tc:opendocument:xmlns:drawing:1.0}p"
    );
    assert_eq!(
        registry.call("office:p").unwrap(),
        "{urn:oasis:names:tc:opendocument:xmlns:office:1.0}p"
    );
}

#[test]
fn test_clark_pass_through() {
    let tag = "{urn:oasis:names:tc:opendocument:xmlns:drawing:1.0}p";
    assert_eq!(registry().call(tag).unwrap(), tag);
}

#[test]
fn test_unknown_prefix() {
    assert!(matches!(
        registry().call("text:p"),
        Err(Error::UnknownPrefix(p)) if p == "text"
    ));
}

#[test]
fn test_register_direct_table() {
    let mut registry =
        NamespaceRegistry::for_library(libreoffice_map(), TableLibrary::default()).unwrap();
    registry.register("office", "test:ns:office").unwrap();

    let result = &registry.adapter().library().namespace_map;
    assert_eq!(result.prefix("test:ns:office"), Some("office"));
}

#[test]
fn test_register_namespace_call() {
    let mut registry =
        NamespaceRegistry::for_library(libreoffice_map(), RegisteringLibrary::default())
            .unwrap();
    registry.register("office", "test:ns:office").unwrap();

    let result = &registry.adapter().library().result_map;
    assert_eq!(result.prefix("test:ns:office"), Some("office"));
}

#[test]
fn test_register_through_registrar() {
    let mut registry =
        NamespaceRegistry::new(libreoffice_map(), Registrar::new(RegisteringLibrary::default()))
            .unwrap();
    registry.register("office", "test:ns:office").unwrap();

    let library = registry.into_adapter().into_inner();
    assert_eq!(library.result_map.prefix("test:ns:office"), Some("office"));
    assert_eq!(library.result_map.prefix(DRAWING), Some("drawing"));
}

#[test]
fn test_register_unsupported_library() {
    let err = NamespaceRegistry::for_library(libreoffice_map(), BareLibrary).unwrap_err();
    assert!(matches!(err, Error::AdapterUnsupported(_)));
    assert!(matches!(
        LibraryAdapter::new(BareLibrary),
        Err(Error::AdapterUnsupported(_))
    ));
}

#[test]
fn test_registries_do_not_share_tables() {
    let mut first = registry();
    let second = registry();
    first.register("o", OFFICE).unwrap();
    assert_eq!(first.adapter().prefix(OFFICE), Some("o"));
    assert_eq!(second.adapter().prefix(OFFICE), Some("office"));
}

#[test]
fn test_map_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"office": "{}", "manifest": "{}"}}"#,
        OFFICE, MANIFEST
    )
    .unwrap();

    let map = NamespaceMap::from_path(file.path()).unwrap();
    let registry = NamespaceRegistry::new(map, NamespaceTable::new()).unwrap();
    assert_eq!(
        registry.call("manifest:file-entry").unwrap(),
        format!("{{{}}}file-entry", MANIFEST)
    );
}

#[test]
fn test_map_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = NamespaceMap::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

proptest! {
    #[test]
    fn prop_to_clark_joins_uri_and_local(
        index in 0usize..3,
        local in "[a-z][a-z0-9-]{0,15}",
    ) {
        let registry = registry();
        let (prefix, uri) = registry.map().iter().nth(index).unwrap();
        let clark = registry.to_clark(&format!("{}:{}", prefix, local)).unwrap();
        prop_assert_eq!(clark, format!("{{{}}}{}", uri, local));
    }

    #[test]
    fn prop_clark_names_pass_through(
        uri in "[a-z:./0-9]{0,30}",
        local in "[a-zA-Z_][a-zA-Z0-9_.-]{0,15}",
    ) {
        let tag = format!("{{{}}}{}", uri, local);
        prop_assert_eq!(registry().to_clark(&tag).unwrap(), tag);
    }

    #[test]
    fn prop_prefixed_round_trip(index in 0usize..3, local in "[a-z]{1,10}") {
        let registry = registry();
        let (prefix, _) = registry.map().iter().nth(index).unwrap();
        let name = format!("{}:{}", prefix, local);
        let clark = registry.to_clark(&name).unwrap();
        prop_assert_eq!(registry.to_prefixed(&clark).unwrap(), name);
    }
}
