//! Input bindings handed to a pipeline run.
//!
//! `PipelineInput` is a transient bag of bindings: document sources per input
//! port, option values by qualified name, and parameter values per parameter
//! port. The adapter populates it, the engine consumes it.

use std::collections::HashMap;
use std::fmt;

use crate::resolver::PipelineSource;

/// A qualified name with an optional namespace URI
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct QName {
    pub namespace_uri: Option<String>,
    pub local_name: String,
}

impl QName {
    /// A name in no namespace
    pub fn new<S: Into<String>>(local_name: S) -> Self {
        Self {
            namespace_uri: None,
            local_name: local_name.into(),
        }
    }

    /// A name in the given namespace
    pub fn namespaced<N: Into<String>, S: Into<String>>(namespace_uri: N, local_name: S) -> Self {
        Self {
            namespace_uri: Some(namespace_uri.into()),
            local_name: local_name.into(),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace_uri {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local_name),
            None => write!(f, "{}", self.local_name),
        }
    }
}

/// A single parameter value bound to a parameter port
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParameterValue {
    pub namespace_uri: Option<String>,
    pub local_name: String,
    pub value: String,
}

/// Bindings for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineInput {
    inputs: HashMap<String, Vec<PipelineSource>>,
    options: HashMap<QName, String>,
    parameters: HashMap<String, Vec<ParameterValue>>,
}

impl PipelineInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document source to an input port
    pub fn add_input(&mut self, port: &str, source: PipelineSource) {
        self.inputs.entry(port.to_string()).or_default().push(source);
    }

    /// Set an option value, replacing any earlier binding of the same name
    pub fn set_option(&mut self, name: QName, value: &str) {
        self.options.insert(name, value.to_string());
    }

    /// Append a parameter value to a parameter port
    pub fn set_parameter(
        &mut self,
        port: &str,
        local_name: &str,
        namespace_uri: Option<&str>,
        value: &str,
    ) {
        self.parameters
            .entry(port.to_string())
            .or_default()
            .push(ParameterValue {
                namespace_uri: namespace_uri.map(str::to_string),
                local_name: local_name.to_string(),
                value: value.to_string(),
            });
    }

    /// Sources bound to an input port, if any
    pub fn inputs(&self, port: &str) -> Option<&[PipelineSource]> {
        self.inputs.get(port).map(Vec::as_slice)
    }

    /// The bound value of an option, if any
    pub fn option(&self, name: &QName) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Parameter values bound to a parameter port, if any
    pub fn parameters(&self, port: &str) -> Option<&[ParameterValue]> {
        self.parameters.get(port).map(Vec::as_slice)
    }

    /// Names of all input ports with at least one binding
    pub fn bound_input_ports(&self) -> impl Iterator<Item = &str> {
        self.inputs.keys().map(String::as_str)
    }

    /// All bound option names
    pub fn bound_options(&self) -> impl Iterator<Item = &QName> {
        self.options.keys()
    }
}
