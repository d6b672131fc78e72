//! Serialization options for result documents.
//!
//! The engine owns serialization; the adapter only selects formatting
//! through these key/value options.

use std::collections::BTreeMap;

/// Option key: pretty-print the output
pub const INDENT: &str = "indent";

/// Option key: omit the XML declaration
pub const OMIT_XML_DECLARATION: &str = "omit-xml-declaration";

/// Key/value serialization settings
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SerializerOptions {
    options: BTreeMap<String, String>,
}

impl SerializerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, returning `self` for chaining
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.options.insert(key.to_string(), value.to_string());
        self
    }

    /// Set an option in place
    pub fn set(&mut self, key: &str, value: &str) {
        self.options.insert(key.to_string(), value.to_string());
    }

    /// The raw value of an option, if set
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Whether a boolean option is enabled
    pub fn is_enabled(&self, key: &str) -> bool {
        matches!(self.get(key), Some("true") | Some("yes") | Some("1"))
    }
}
