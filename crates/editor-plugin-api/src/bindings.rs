//! Binding shapes of a transformation scenario.
//!
//! These are the values the host editor collects in its scenario dialog and
//! hands to the transformer on every run. They have no lifecycle of their
//! own.

use serde::{Deserialize, Serialize};

/// Documents bound to one of the pipeline's input ports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPortBinding {
    pub port: String,
    /// Document URLs; blank entries are ignored
    #[serde(default)]
    pub urls: Vec<String>,
}

impl InputPortBinding {
    pub fn new<S: Into<String>>(port: S, urls: Vec<String>) -> Self {
        Self {
            port: port.into(),
            urls,
        }
    }
}

/// Where the documents of an output port should go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPortMapping {
    pub port: String,
    /// File URL to save the port's last document to, if any
    #[serde(default)]
    pub url: Option<String>,
    /// Whether the port's documents appear in the editor's sequence view
    #[serde(default)]
    pub show_in_sequence_view: bool,
}

impl OutputPortMapping {
    pub fn new<S: Into<String>>(port: S) -> Self {
        Self {
            port: port.into(),
            url: None,
            show_in_sequence_view: true,
        }
    }

    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.show_in_sequence_view = false;
        self
    }
}

/// A scalar option value for the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionBinding {
    #[serde(default)]
    pub namespace_uri: Option<String>,
    pub local_name: String,
    pub value: String,
}

impl OptionBinding {
    pub fn new<N: Into<String>, V: Into<String>>(local_name: N, value: V) -> Self {
        Self {
            namespace_uri: None,
            local_name: local_name.into(),
            value: value.into(),
        }
    }

    pub fn namespaced<U: Into<String>>(mut self, namespace_uri: U) -> Self {
        self.namespace_uri = Some(namespace_uri.into());
        self
    }
}

/// A single parameter within a parameter-port binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBinding {
    #[serde(default)]
    pub namespace_uri: Option<String>,
    pub local_name: String,
    /// `None` means the parameter is listed in the scenario but carries no
    /// value and must not be forwarded
    #[serde(default)]
    pub value: Option<String>,
}

impl ParameterBinding {
    pub fn new<N: Into<String>, V: Into<String>>(local_name: N, value: V) -> Self {
        Self {
            namespace_uri: None,
            local_name: local_name.into(),
            value: Some(value.into()),
        }
    }
}

/// Parameters bound to one of the pipeline's parameter ports.
///
/// The port name `"*"` addresses the pipeline's primary parameter port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterPortBinding {
    pub port: String,
    #[serde(default)]
    pub parameters: Vec<ParameterBinding>,
}

impl ParameterPortBinding {
    pub fn new<S: Into<String>>(port: S, parameters: Vec<ParameterBinding>) -> Self {
        Self {
            port: port.into(),
            parameters,
        }
    }
}
