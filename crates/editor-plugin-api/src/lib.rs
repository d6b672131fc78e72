//! Editor-side plugin contract for XProc transformation scenarios.
//!
//! This crate defines the shapes the host editor exchanges with a pipeline
//! transformer plugin: the port/option/parameter bindings of a transformation
//! scenario, the result items shown in the editor's result views, and the
//! positioned diagnostics surfaced in its problems pane.

pub mod bindings;
pub mod diagnostics;
pub mod results;
pub mod transformer;

pub use bindings::{
    InputPortBinding, OptionBinding, OutputPortMapping, ParameterBinding, ParameterPortBinding,
};
pub use diagnostics::{ErrorList, PositionedInfo, Severity};
pub use results::{ResultItem, ResultItemKind};
pub use transformer::{PipelineTransformer, TransformResults};

/// Parameter-port name that designates the pipeline's primary parameter port
pub const PRIMARY_PARAMETER_PORT: &str = "*";
