//! Limits for document parsing
//!
//! Guards against oversized or pathologically nested input when reading
//! XML parts (`content.xml`, `styles.xml`, `META-INF/manifest.xml`, ...)
//! of an OpenDocument package.

use crate::error::{Error, Result};

/// Parsing limits configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum element nesting depth, the root element being depth 1
    pub max_xml_depth: usize,

    /// Maximum size in bytes of one XML part
    pub max_xml_size: usize,

    /// Maximum number of attributes on a single element
    pub max_attributes: usize,
}

impl Default for Limits {
    /// Generous enough for large office documents: deeply nested lists
    /// and tables rarely pass a few hundred levels.
    fn default() -> Self {
        Self {
            max_xml_depth: 1000,
            max_xml_size: 100 * 1024 * 1024,
            max_attributes: 1000,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits for untrusted packages
    pub fn strict() -> Self {
        Self {
            max_xml_depth: 100,
            max_xml_size: 10 * 1024 * 1024,
            max_attributes: 100,
        }
    }

    /// Fail once elements nest deeper than allowed
    pub fn check_xml_depth(&self, depth: usize) -> Result<()> {
        within("element nesting depth", depth, self.max_xml_depth)
    }

    /// Fail when an XML part is larger than allowed
    pub fn check_xml_size(&self, size: usize) -> Result<()> {
        within("XML part size in bytes", size, self.max_xml_size)
    }

    /// Fail when one element carries too many attributes
    pub fn check_attributes(&self, count: usize) -> Result<()> {
        within("attributes on one element", count, self.max_attributes)
    }
}

fn within(what: &str, value: usize, max: usize) -> Result<()> {
    if value <= max {
        return Ok(());
    }
    Err(Error::LimitExceeded(format!("{} is {}, limit is {}", what, value, max)))
}
