//! End-to-end tests against a LibreOffice `META-INF/manifest.xml`

use odf_xmlns::{
    Capability, Document, Element, NamespaceMap, NamespaceRegistry, Serializer,
};
use pretty_assertions::assert_eq;

const MANIFEST_XML: &str = include_str!("fixtures/manifest.xml");

fn registry() -> NamespaceRegistry<odf_xmlns::LibraryAdapter<Serializer>> {
    NamespaceRegistry::for_library(NamespaceMap::opendocument(), Serializer::new()).unwrap()
}

fn manifest() -> Document {
    Document::from_string(MANIFEST_XML).unwrap()
}

#[test]
fn test_serializer_prefers_register_namespace() {
    assert_eq!(
        registry().adapter().capability(),
        Capability::RegisterNamespace
    );
}

#[test]
fn test_parse_and_count_file_entry_elements() {
    let ns = registry();
    let doc = manifest();
    let file_entry = ns.call("manifest:file-entry").unwrap();
    assert_eq!(doc.root().find_all(&file_entry).len(), 20);
}

#[test]
fn test_parse_and_count_file_entry_attributes() {
    let ns = registry();
    let doc = manifest();
    let first_entry = &doc.root()[0];

    let media_type = ns.call("manifest:media-type").unwrap();
    assert_eq!(
        first_entry.get(&media_type),
        Some("application/vnd.oasis.opendocument.text")
    );
    let version = ns.call("manifest:version").unwrap();
    assert_eq!(first_entry.get(&version), Some("1.2"));
    let full_path = ns.call("manifest:full-path").unwrap();
    assert_eq!(first_entry.get(&full_path), Some("/"));
}

#[test]
fn test_prefixed_attribute_names_do_not_match() {
    let doc = manifest();
    assert_eq!(doc.root()[0].get("manifest:version"), None);
    assert_eq!(doc.root()[0].get("version"), None);
}

#[test]
fn test_tostring_elements() {
    let ns = registry();
    let doc = manifest();
    let result = ns
        .adapter()
        .library()
        .serialize(&doc.root()[0])
        .unwrap();

    assert!(result.contains("<manifest:file-entry"));
    assert!(result.contains(r#"manifest:media-type="application/vnd.oasis.opendocument.text""#));
    assert!(result.contains(r#"manifest:version="1.2""#));
    assert!(result.contains(r#"manifest:full-path="/""#));
    assert!(result.contains(
        r#"xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0""#
    ));
}

#[test]
fn test_unregistered_serializer_uses_generated_prefixes() {
    let doc = manifest();
    let result = Serializer::new().serialize(&doc.root()[0]).unwrap();
    assert!(result.starts_with("<ns0:file-entry"));
    assert!(result.contains(r#"ns0:version="1.2""#));
}

#[test]
fn test_reregistered_prefix_used_on_output() {
    let mut ns = registry();
    ns.register("mf", "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0")
        .unwrap();
    let doc = manifest();
    let result = ns
        .adapter()
        .library()
        .serialize(&doc.root()[0])
        .unwrap();
    assert!(result.starts_with("<mf:file-entry"));
}

#[test]
fn test_build_and_read_back() {
    let ns = registry();
    let mut root = Element::with_tag(&ns.call("manifest:manifest").unwrap());
    let mut entry = Element::with_tag(&ns.call("manifest:file-entry").unwrap());
    entry.set(&ns.call("manifest:full-path").unwrap(), "content.xml");
    entry.set(&ns.call("manifest:media-type").unwrap(), "text/xml");
    root.add_child(entry);

    let xml = ns.adapter().library().serialize(&root).unwrap();
    assert_eq!(
        xml,
        concat!(
            r#"<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0">"#,
            r#"<manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/>"#,
            r#"</manifest:manifest>"#,
        )
    );

    let doc = Document::from_string(&xml).unwrap();
    let entries = doc
        .root()
        .find_all(&ns.call("manifest:file-entry").unwrap());
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].get(&ns.call("manifest:full-path").unwrap()),
        Some("content.xml")
    );
}
