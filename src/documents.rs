//! XML document handling
//!
//! A small element tree with namespace-resolved names, enough to look up
//! OpenDocument parts by Clark-notation tags and attribute names.

use crate::error::Result;
use crate::limits::Limits;
use crate::namespaces::QName;
use indexmap::IndexMap;
use std::ops::Index;
use tracing::debug;

/// Namespace bound to the `xml` prefix, implicit in every document
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// XML Element in the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element qualified name
    pub qname: QName,
    /// Element attributes, in document order
    pub attributes: IndexMap<QName, String>,
    /// Text before the first child (if any)
    pub text: Option<String>,
    /// Text after this element's end tag (if any)
    pub tail: Option<String>,
    /// Child elements
    pub children: Vec<Element>,
    /// Namespaces declared on this element, prefix to URI ("" for the default)
    pub namespaces: IndexMap<String, String>,
}

impl Element {
    /// Create a new element
    pub fn new(qname: QName) -> Self {
        Self {
            qname,
            attributes: IndexMap::new(),
            text: None,
            tail: None,
            children: Vec::new(),
            namespaces: IndexMap::new(),
        }
    }

    /// Create an element from a Clark-notation tag
    pub fn with_tag(tag: &str) -> Self {
        Self::new(QName::from_clark(tag))
    }

    /// Element tag in Clark notation
    pub fn tag(&self) -> String {
        self.qname.to_string()
    }

    /// Get the local name of the element
    pub fn local_name(&self) -> &str {
        &self.qname.local_name
    }

    /// Get the namespace of the element
    pub fn namespace(&self) -> Option<&str> {
        self.qname.namespace.as_deref()
    }

    /// Get an attribute value by Clark-notation name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(qname, _)| qname.matches(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute by Clark-notation name
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(QName::from_clark(name), value.into());
    }

    /// Add a child element
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Set text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Number of child elements
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct children whose tag matches a Clark-notation name
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        self.children.iter().filter(|e| e.qname.matches(tag)).collect()
    }

    /// First direct child whose tag matches a Clark-notation name
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|e| e.qname.matches(tag))
    }

    /// All descendants (self excluded) whose tag matches, in document order
    pub fn descendants(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        let mut stack: Vec<&Element> = self.children.iter().rev().collect();
        while let Some(element) = stack.pop() {
            if element.qname.matches(tag) {
                found.push(element);
            }
            stack.extend(element.children.iter().rev());
        }
        found
    }
}

impl Index<usize> for Element {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.children[index]
    }
}

/// XML Document representation
#[derive(Debug, Clone)]
pub struct Document {
    /// Root element of the document
    pub root: Element,
}

impl Document {
    /// Parse an XML document from a string with default limits
    pub fn from_string(xml: &str) -> Result<Self> {
        Self::parse(xml, &Limits::default())
    }

    /// Parse an XML document from a string
    pub fn parse(xml: &str, limits: &Limits) -> Result<Self> {
        limits.check_xml_size(xml.len())?;
        let doc = roxmltree::Document::parse(xml)?;
        let root = Self::build_element(doc.root_element(), limits, 1)?;
        debug!(root = %root.qname, children = root.len(), "parsed document");
        Ok(Self { root })
    }

    fn build_element(node: roxmltree::Node, limits: &Limits, depth: usize) -> Result<Element> {
        limits.check_xml_depth(depth)?;

        let tag = node.tag_name();
        let mut element = Element::new(QName::new(tag.namespace(), tag.name()));

        let attributes: Vec<_> = node.attributes().collect();
        limits.check_attributes(attributes.len())?;
        for attr in attributes {
            element.attributes.insert(
                QName::new(attr.namespace(), attr.name()),
                attr.value().to_string(),
            );
        }

        // roxmltree reports every namespace in scope; keep only new bindings
        let inherited: Vec<(Option<&str>, &str)> = node
            .parent_element()
            .map(|p| p.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
            .unwrap_or_default();
        for ns in node.namespaces() {
            if ns.uri() == XML_NAMESPACE || inherited.contains(&(ns.name(), ns.uri())) {
                continue;
            }
            element
                .namespaces
                .insert(ns.name().unwrap_or_default().to_string(), ns.uri().to_string());
        }

        element.text = node.text().map(str::to_string);
        element.tail = node.tail().map(str::to_string);

        for child in node.children().filter(|n| n.is_element()) {
            element.add_child(Self::build_element(child, limits, depth + 1)?);
        }

        Ok(element)
    }

    /// Get the root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Get the root element mutably
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}
