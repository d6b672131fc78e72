//! The transformer contract a pipeline plugin implements for the host.

use std::collections::HashMap;

use crate::bindings::{
    InputPortBinding, OptionBinding, OutputPortMapping, ParameterPortBinding,
};
use crate::diagnostics::{ErrorList, PositionedInfo};
use crate::results::ResultItem;

/// Results of a successful run: the serialized documents of each output port
pub type TransformResults = HashMap<String, Vec<ResultItem>>;

/// Contract between the host editor and a pipeline transformer plugin.
///
/// The host calls `initialize` once with the scenario's pipeline location and
/// resolver names, then `transform` per run. `initialize` never fails
/// directly; configuration problems surface as diagnostics on the next
/// `transform` or through `last_messages`.
pub trait PipelineTransformer {
    /// Configure the transformer for a scenario. Blank arguments mean
    /// "unset".
    fn initialize(
        &mut self,
        pipeline_uri: &str,
        uri_resolver_name: &str,
        entity_resolver_name: &str,
    );

    /// Whether `validate` does anything useful for this transformer
    fn supports_validation(&self) -> bool;

    /// Run the pipeline against the scenario's bindings.
    ///
    /// On failure, every diagnostic collected during the run is returned as
    /// one ordered [`ErrorList`].
    fn transform(
        &mut self,
        input_ports: &[InputPortBinding],
        output_ports: &[OutputPortMapping],
        options: &[OptionBinding],
        parameter_ports: &[ParameterPortBinding],
    ) -> Result<TransformResults, ErrorList>;

    /// Compile the pipeline without running it and report any problems
    fn validate(&mut self) -> Vec<PositionedInfo>;

    /// Diagnostics collected by the most recent operation
    fn last_messages(&self) -> &[PositionedInfo];
}
