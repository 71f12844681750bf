//! Well-known OpenDocument namespaces
//!
//! Prefixes and URIs as written by office suites producing ODF 1.2 files.

/// Office namespace
pub const OFFICE: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";
/// Style namespace
pub const STYLE: &str = "urn:oasis:names:tc:opendocument:xmlns:style:1.0";
/// Text namespace
pub const TEXT: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";
/// Table namespace
pub const TABLE: &str = "urn:oasis:names:tc:opendocument:xmlns:table:1.0";
/// Drawing namespace
pub const DRAWING: &str = "urn:oasis:names:tc:opendocument:xmlns:drawing:1.0";
/// XSL-FO compatible namespace
pub const FO: &str = "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0";
/// Metadata namespace
pub const META: &str = "urn:oasis:names:tc:opendocument:xmlns:meta:1.0";
/// Data style namespace
pub const NUMBER: &str = "urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0";
/// Presentation namespace
pub const PRESENTATION: &str = "urn:oasis:names:tc:opendocument:xmlns:presentation:1.0";
/// SVG compatible namespace
pub const SVG: &str = "urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0";
/// Chart namespace
pub const CHART: &str = "urn:oasis:names:tc:opendocument:xmlns:chart:1.0";
/// 3D namespace
pub const DR3D: &str = "urn:oasis:names:tc:opendocument:xmlns:dr3d:1.0";
/// Animation namespace
pub const ANIM: &str = "urn:oasis:names:tc:opendocument:xmlns:animation:1.0";
/// SMIL compatible namespace
pub const SMIL: &str = "urn:oasis:names:tc:opendocument:xmlns:smil-compatible:1.0";
/// Form namespace
pub const FORM: &str = "urn:oasis:names:tc:opendocument:xmlns:form:1.0";
/// Script namespace
pub const SCRIPT: &str = "urn:oasis:names:tc:opendocument:xmlns:script:1.0";
/// Config namespace
pub const CONFIG: &str = "urn:oasis:names:tc:opendocument:xmlns:config:1.0";
/// Database namespace
pub const DB: &str = "urn:oasis:names:tc:opendocument:xmlns:database:1.0";
/// Manifest namespace (META-INF/manifest.xml)
pub const MANIFEST: &str = "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0";
/// Package metadata namespace
pub const PKG: &str = "http://docs.oasis-open.org/ns/office/1.2/meta/pkg#";
/// Dublin Core namespace
pub const DC: &str = "http://purl.org/dc/elements/1.1/";
/// XLink namespace
pub const XLINK: &str = "http://www.w3.org/1999/xlink";
/// MathML namespace
pub const MATH: &str = "http://www.w3.org/1998/Math/MathML";
/// XML events namespace
pub const DOM: &str = "http://www.w3.org/2001/xml-events";
/// XForms namespace
pub const XFORMS: &str = "http://www.w3.org/2002/xforms";
/// XML Schema namespace
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema";
/// XML Schema instance namespace
pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// GRDDL namespace
pub const GRDDL: &str = "http://www.w3.org/2003/g/data-view#";
/// XHTML namespace
pub const XHTML: &str = "http://www.w3.org/1999/xhtml";

/// Prefix/URI pairs for every namespace above, in declaration order
pub const ALL: &[(&str, &str)] = &[
    ("office", OFFICE),
    ("style", STYLE),
    ("text", TEXT),
    ("table", TABLE),
    ("draw", DRAWING),
    ("fo", FO),
    ("meta", META),
    ("number", NUMBER),
    ("presentation", PRESENTATION),
    ("svg", SVG),
    ("chart", CHART),
    ("dr3d", DR3D),
    ("anim", ANIM),
    ("smil", SMIL),
    ("form", FORM),
    ("script", SCRIPT),
    ("config", CONFIG),
    ("db", DB),
    ("manifest", MANIFEST),
    ("pkg", PKG),
    ("dc", DC),
    ("xlink", XLINK),
    ("math", MATH),
    ("dom", DOM),
    ("xforms", XFORMS),
    ("xsd", XSD),
    ("xsi", XSI),
    ("grddl", GRDDL),
    ("xhtml", XHTML),
];
