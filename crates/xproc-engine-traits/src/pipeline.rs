//! Pipeline engine abstraction traits.
//!
//! These traits abstract over XProc engine implementations, allowing the
//! editor adapter to drive any engine that can compile a pipeline source,
//! describe the pipeline's declared ports and options, run it against a
//! `PipelineInput`, and hand back serialized results or an error document.

use std::collections::HashSet;

use crate::error::Result;
use crate::input::{PipelineInput, QName};
use crate::resolver::PipelineSource;
use crate::serializer::SerializerOptions;

/// Declared interface of a compiled pipeline
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipelineInfo {
    input_ports: HashSet<String>,
    output_ports: HashSet<String>,
    options: HashSet<QName>,
    parameter_ports: HashSet<String>,
    primary_parameter_port: Option<String>,
}

impl PipelineInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an input port
    pub fn with_input_port<S: Into<String>>(mut self, port: S) -> Self {
        self.input_ports.insert(port.into());
        self
    }

    /// Declare an output port
    pub fn with_output_port<S: Into<String>>(mut self, port: S) -> Self {
        self.output_ports.insert(port.into());
        self
    }

    /// Declare an option
    pub fn with_option(mut self, name: QName) -> Self {
        self.options.insert(name);
        self
    }

    /// Declare a parameter port; at most one port can be primary
    pub fn with_parameter_port<S: Into<String>>(mut self, port: S, primary: bool) -> Self {
        let port = port.into();
        if primary {
            self.primary_parameter_port = Some(port.clone());
        }
        self.parameter_ports.insert(port);
        self
    }

    pub fn has_input_port(&self, port: &str) -> bool {
        self.input_ports.contains(port)
    }

    pub fn has_output_port(&self, port: &str) -> bool {
        self.output_ports.contains(port)
    }

    pub fn has_option(&self, name: &QName) -> bool {
        self.options.contains(name)
    }

    pub fn has_parameter_port(&self, port: &str) -> bool {
        self.parameter_ports.contains(port)
    }

    /// The primary parameter port, if the pipeline declares one
    pub fn primary_parameter_port(&self) -> Option<&str> {
        self.primary_parameter_port.as_deref()
    }
}

/// Trait for XProc engine implementations
pub trait PipelineEngine: Send {
    /// The compiled pipeline type produced by this engine
    type Pipeline: Pipeline;

    /// Compile a pipeline source into a runnable pipeline.
    ///
    /// Compilation failures carry a structured error document in
    /// [`EngineError::Compile`](crate::EngineError::Compile).
    fn compile(&mut self, source: &PipelineSource) -> Result<Self::Pipeline>;

    fn engine_name(&self) -> &'static str;
    fn engine_version(&self) -> &'static str;
}

/// A compiled, runnable pipeline
pub trait Pipeline: Send {
    /// The output type produced by a run of this pipeline
    type Output: PipelineOutput;

    /// The pipeline's declared ports, options and parameter ports
    fn info(&self) -> &PipelineInfo;

    /// Execute the pipeline against the given bindings
    fn run(&mut self, input: PipelineInput) -> Result<Self::Output>;
}

/// Outcome of a pipeline run.
///
/// A run that completes is still "unsuccessful" when a step failed; the
/// details are then carried in the structured error document rather than in
/// an `EngineError`.
pub trait PipelineOutput: Send {
    fn was_successful(&self) -> bool;

    /// Names of all output ports that produced results
    fn port_names(&self) -> Vec<String>;

    /// Serialize the documents of an output port using the given options
    fn serialize_port(&self, port: &str, options: &SerializerOptions) -> Result<Vec<String>>;

    /// The structured XML error document of a failed run, if one exists
    fn error_document(&self) -> Option<&str>;

    /// A plain-text rendition of the error state, used when the error
    /// document cannot be interpreted
    fn error_document_serialized(&self) -> String {
        self.error_document().unwrap_or_default().to_string()
    }
}
