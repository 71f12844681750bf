//! XML serialization with registered prefixes
//!
//! The [`Serializer`] owns the uri→prefix table consulted when writing
//! namespaced names. Namespaces missing from the table are written with
//! generated `ns0`, `ns1`, ... prefixes.

use crate::adapters::{NamespaceTable, RegisterNamespace, XmlLibrary};
use crate::documents::{Element, XML_NAMESPACE};
use crate::error::{Error, Result};
use crate::names;
use crate::namespaces::QName;
use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fmt;
use std::iter;
use tracing::{debug, trace};

/// uri→prefix bindings in effect for one serialization
type Bindings = IndexMap<String, String>;

/// Element tree writer
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    namespaces: NamespaceTable,
    xml_declaration: bool,
}

impl Serializer {
    /// Create a serializer with an empty namespace table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a serializer with a prepared namespace table
    pub fn with_table(namespaces: NamespaceTable) -> Self {
        Self {
            namespaces,
            xml_declaration: false,
        }
    }

    /// Whether to start output with an XML declaration
    pub fn xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    /// The uri→prefix table
    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// The uri→prefix table, mutably
    pub fn namespaces_mut(&mut self) -> &mut NamespaceTable {
        &mut self.namespaces
    }

    /// Serialize an element and its subtree.
    ///
    /// Every namespace used in the subtree is declared on the outermost
    /// element.
    pub fn serialize(&self, element: &Element) -> Result<String> {
        let mut bindings = Bindings::new();
        let mut next = 0;
        self.collect_bindings(element, &mut bindings, &mut next);
        trace!(?bindings, "namespace bindings");

        let mut writer = Writer::new(Vec::new());
        if self.xml_declaration {
            writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                .map_err(xml_error)?;
        }
        write_element(&mut writer, element, &bindings, true)?;

        let xml = String::from_utf8(writer.into_inner()).map_err(xml_error)?;
        debug!(bytes = xml.len(), "serialized element");
        Ok(xml)
    }

    fn collect_bindings(&self, element: &Element, bindings: &mut Bindings, next: &mut usize) {
        for qname in iter::once(&element.qname).chain(element.attributes.keys()) {
            let Some(uri) = &qname.namespace else {
                continue;
            };
            if bindings.contains_key(uri) {
                continue;
            }
            let prefix = if uri == XML_NAMESPACE {
                "xml".to_string()
            } else {
                match self.namespaces.prefix(uri) {
                    Some(prefix) => prefix.to_string(),
                    None => self.generate_prefix(bindings, next),
                }
            };
            bindings.insert(uri.clone(), prefix);
        }
        for child in &element.children {
            self.collect_bindings(child, bindings, next);
        }
    }

    fn generate_prefix(&self, bindings: &Bindings, next: &mut usize) -> String {
        loop {
            let prefix = format!("ns{}", next);
            *next += 1;
            if self.namespaces.uri(&prefix).is_none() && !bindings.values().any(|p| *p == prefix)
            {
                return prefix;
            }
        }
    }
}

impl RegisterNamespace for Serializer {
    fn register_namespace(&mut self, prefix: &str, uri: &str) -> Result<()> {
        if names::is_generated_prefix(prefix) {
            return Err(Error::ReservedPrefix(prefix.to_string()));
        }
        self.namespaces.insert(prefix, uri);
        Ok(())
    }
}

impl XmlLibrary for Serializer {
    fn namespace_map(&mut self) -> Option<&mut NamespaceTable> {
        Some(&mut self.namespaces)
    }

    fn registrar(&mut self) -> Option<&mut dyn RegisterNamespace> {
        Some(self)
    }
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
    bindings: &Bindings,
    outermost: bool,
) -> Result<()> {
    let name = prefixed(&element.qname, bindings);
    let mut start = BytesStart::new(name.as_str());
    if outermost {
        for (uri, prefix) in bindings {
            if uri != XML_NAMESPACE {
                start.push_attribute((format!("xmlns:{}", prefix).as_str(), uri.as_str()));
            }
        }
    }
    for (qname, value) in &element.attributes {
        start.push_attribute((prefixed(qname, bindings).as_str(), value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(xml_error)?;
    } else {
        writer.write_event(Event::Start(start)).map_err(xml_error)?;
        if let Some(text) = &element.text {
            write_text(writer, text)?;
        }
        for child in &element.children {
            write_element(writer, child, bindings, false)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(name.as_str())))
            .map_err(xml_error)?;
    }

    if !outermost {
        if let Some(tail) = &element.tail {
            write_text(writer, tail)?;
        }
    }
    Ok(())
}

fn write_text(writer: &mut Writer<Vec<u8>>, text: &str) -> Result<()> {
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    Ok(())
}

fn prefixed(qname: &QName, bindings: &Bindings) -> String {
    match qname
        .namespace
        .as_ref()
        .and_then(|uri| bindings.get(uri))
    {
        Some(prefix) => format!("{}:{}", prefix, qname.local_name),
        None => qname.local_name.clone(),
    }
}

fn xml_error(err: impl fmt::Display) -> Error {
    Error::Xml(err.to_string())
}
