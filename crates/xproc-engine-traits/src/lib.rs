//! Contract traits for external XProc pipeline engines.
//!
//! This crate defines the traits and transient value types an XProc engine
//! must expose to be driven by the editor adapter: compiling a pipeline
//! source into a runnable pipeline, populating its input bindings, and
//! reading back its outputs or structured error documents. No engine is
//! implemented here.

pub mod diagnostics;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod resolver;
pub mod serializer;

pub use error::{EngineError, Result};
pub use input::{ParameterValue, PipelineInput, QName};
pub use pipeline::{Pipeline, PipelineEngine, PipelineInfo, PipelineOutput};
pub use resolver::{
    EntityResolver, IdentityResolver, PipelineSource, ResolverRegistry, UriResolver,
};
pub use serializer::SerializerOptions;
