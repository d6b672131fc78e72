//! The transformer adapter itself.
//!
//! `Adapter` implements the host editor's [`PipelineTransformer`] contract on
//! top of any [`PipelineEngine`]. Per run it compiles the configured
//! pipeline, forwards the scenario's bindings to every declared port and
//! option, runs the pipeline, and maps outputs back to result items. All
//! failures of a run are aggregated into one ordered [`ErrorList`].

use std::fs;
use std::path::PathBuf;

use editor_plugin_api::{
    ErrorList, InputPortBinding, OptionBinding, OutputPortMapping, ParameterPortBinding,
    PipelineTransformer, PositionedInfo, ResultItem, TransformResults, PRIMARY_PARAMETER_PORT,
};
use url::Url;
use xproc_engine_traits::serializer::{INDENT, OMIT_XML_DECLARATION};
use xproc_engine_traits::{
    EngineError, EntityResolver, Pipeline, PipelineEngine, PipelineInfo, PipelineInput,
    PipelineOutput, PipelineSource, QName, ResolverRegistry, SerializerOptions, UriResolver,
};

use crate::crash::CrashDump;
use crate::report;

const NO_PIPELINE: &str = "Internal error: The pipeline was not specified.";

/// A transformation failure on the way to the aggregated error list
enum Failure {
    /// The engine reported an error that still needs translation
    Engine(EngineError),
    /// Diagnostics were already recorded in the message list
    Reported,
}

impl From<EngineError> for Failure {
    fn from(err: EngineError) -> Self {
        Failure::Engine(err)
    }
}

/// Editor plugin adapter driving an external XProc engine
pub struct Adapter<E: PipelineEngine> {
    engine: E,
    resolvers: ResolverRegistry,
    pipeline_uri: Option<String>,
    uri_resolver: Option<Box<dyn UriResolver>>,
    entity_resolver: Option<Box<dyn EntityResolver>>,
    messages: Vec<PositionedInfo>,
    crash_dump: CrashDump,
}

impl<E: PipelineEngine> Adapter<E> {
    pub fn new(engine: E, resolvers: ResolverRegistry) -> Self {
        Self {
            engine,
            resolvers,
            pipeline_uri: None,
            uri_resolver: None,
            entity_resolver: None,
            messages: Vec::new(),
            crash_dump: CrashDump::standard(),
        }
    }

    /// Redirect the crash dump, mainly for tests
    pub fn with_crash_dump(mut self, crash_dump: CrashDump) -> Self {
        self.crash_dump = crash_dump;
        self
    }

    /// The entity resolver configured by `initialize`, for engines that
    /// consume external entities
    pub fn entity_resolver(&self) -> Option<&dyn EntityResolver> {
        self.entity_resolver.as_deref()
    }

    fn configure(
        &mut self,
        pipeline_uri: &str,
        uri_resolver_name: &str,
        entity_resolver_name: &str,
    ) -> Result<(), EngineError> {
        self.uri_resolver = match non_blank(uri_resolver_name) {
            Some(name) => Some(self.resolvers.uri_resolver(name)?),
            None => None,
        };
        self.entity_resolver = match non_blank(entity_resolver_name) {
            Some(name) => Some(self.resolvers.entity_resolver(name)?),
            None => None,
        };
        self.pipeline_uri = non_blank(pipeline_uri).map(str::to_string);
        Ok(())
    }

    fn error_list(&self) -> ErrorList {
        ErrorList::new(self.messages.clone())
    }

    /// Resolve a URI through the configured resolver into an engine source
    fn resolve_source(&self, uri: &str) -> Result<PipelineSource, EngineError> {
        let resolver = self
            .uri_resolver
            .as_deref()
            .ok_or_else(|| EngineError::interface("No URI resolver configured."))?;
        let resolved = resolver.resolve(uri, None)?;
        Ok(PipelineSource::new(resolved))
    }

    fn run_scenario(
        &mut self,
        pipeline_uri: &str,
        input_ports: &[InputPortBinding],
        output_ports: &[OutputPortMapping],
        options: &[OptionBinding],
        parameter_ports: &[ParameterPortBinding],
    ) -> Result<TransformResults, Failure> {
        let source = self.resolve_source(pipeline_uri)?;
        let mut pipeline = self.engine.compile(&source)?;
        let info = pipeline.info().clone();

        let mut input = PipelineInput::new();
        self.bind_input_ports(&mut input, &info, input_ports)?;
        bind_parameter_ports(&mut input, &info, parameter_ports)?;
        bind_options(&mut input, &info, options);

        let output = pipeline.run(input)?;
        if output.was_successful() {
            self.collect_results(&output, output_ports)
        } else {
            self.messages.extend(report::runtime_errors(
                output.error_document(),
                &output.error_document_serialized(),
                pipeline_uri,
            ));
            Err(Failure::Reported)
        }
    }

    /// Forward each declared input port's non-blank URLs, resolved through
    /// the URI resolver
    fn bind_input_ports(
        &self,
        input: &mut PipelineInput,
        info: &PipelineInfo,
        bindings: &[InputPortBinding],
    ) -> Result<(), Failure> {
        for binding in bindings {
            if !info.has_input_port(&binding.port) {
                tracing::debug!(port = %binding.port, "skipping binding for undeclared input port");
                continue;
            }
            for url in &binding.urls {
                if let Some(url) = non_blank(url) {
                    input.add_input(&binding.port, self.resolve_source(url)?);
                }
            }
        }
        Ok(())
    }

    /// Translate the engine's outputs into per-port result items.
    ///
    /// Mapped ports may additionally be saved to a file URL; a write failure
    /// is downgraded to an informational message. Ports not consumed by any
    /// mapping are still handed back to the host.
    fn collect_results<O: PipelineOutput>(
        &mut self,
        output: &O,
        mappings: &[OutputPortMapping],
    ) -> Result<TransformResults, Failure> {
        let serializer_options = SerializerOptions::new()
            .with(INDENT, "true")
            .with(OMIT_XML_DECLARATION, "true");
        let mut results = TransformResults::new();
        let mut remaining = output.port_names();

        for mapping in mappings {
            let Some(index) = remaining.iter().position(|port| port == &mapping.port) else {
                continue;
            };
            remaining.remove(index);
            let documents = output.serialize_port(&mapping.port, &serializer_options)?;

            if let Some(url) = mapping.url.as_deref().and_then(non_blank) {
                if let Err(err) = write_last_document(url, &documents) {
                    tracing::warn!(port = %mapping.port, url, %err, "could not save output port");
                    self.messages.push(PositionedInfo::info(format!(
                        "Unable to write port '{}' to '{}': {}",
                        mapping.port, url, err
                    )));
                }
            }
            if mapping.show_in_sequence_view {
                results.insert(
                    mapping.port.clone(),
                    documents.into_iter().map(ResultItem::common).collect(),
                );
            }
        }

        for port in remaining {
            let documents = output.serialize_port(&port, &serializer_options)?;
            results.insert(
                port,
                documents.into_iter().map(ResultItem::common).collect(),
            );
        }
        Ok(results)
    }
}

impl<E: PipelineEngine> PipelineTransformer for Adapter<E> {
    fn initialize(
        &mut self,
        pipeline_uri: &str,
        uri_resolver_name: &str,
        entity_resolver_name: &str,
    ) {
        if let Err(err) = self.configure(pipeline_uri, uri_resolver_name, entity_resolver_name) {
            self.messages.clear();
            self.messages.push(PositionedInfo::error(format!(
                "Error initializing adapter: {err}"
            )));
            self.crash_dump.record("initialize", &err);
        }
    }

    fn supports_validation(&self) -> bool {
        true
    }

    fn transform(
        &mut self,
        input_ports: &[InputPortBinding],
        output_ports: &[OutputPortMapping],
        options: &[OptionBinding],
        parameter_ports: &[ParameterPortBinding],
    ) -> Result<TransformResults, ErrorList> {
        self.messages.clear();

        let Some(pipeline_uri) = self.pipeline_uri.clone() else {
            self.messages.push(PositionedInfo::error(NO_PIPELINE));
            return Err(self.error_list());
        };
        tracing::debug!(pipeline = %pipeline_uri, engine = self.engine.engine_name(),
            version = self.engine.engine_version(), "running transformation scenario");

        match self.run_scenario(
            &pipeline_uri,
            input_ports,
            output_ports,
            options,
            parameter_ports,
        ) {
            Ok(results) => Ok(results),
            Err(Failure::Reported) => Err(self.error_list()),
            Err(Failure::Engine(EngineError::Compile { error_document })) => {
                self.messages
                    .extend(report::compile_errors(&error_document, &pipeline_uri));
                Err(self.error_list())
            }
            Err(Failure::Engine(EngineError::Interface(message))) => {
                self.messages
                    .push(PositionedInfo::error(format!("Interface error: {message}")));
                Err(self.error_list())
            }
            Err(Failure::Engine(err)) => {
                self.messages
                    .push(PositionedInfo::error(format!("Internal error: {err}")));
                self.crash_dump.record("transform", &err);
                Err(self.error_list())
            }
        }
    }

    fn validate(&mut self) -> Vec<PositionedInfo> {
        let mut found = Vec::new();
        let Some(pipeline_uri) = self.pipeline_uri.clone() else {
            found.push(PositionedInfo::error(NO_PIPELINE));
            return found;
        };

        match self.resolve_source(&pipeline_uri) {
            Err(err) => found.push(PositionedInfo::error(err.to_string())),
            Ok(source) => match self.engine.compile(&source) {
                Ok(_) => {}
                Err(EngineError::Compile { error_document }) => {
                    found.extend(report::compile_errors(&error_document, &pipeline_uri));
                }
                Err(err) => found.push(PositionedInfo::error(err.to_string())),
            },
        }
        found
    }

    fn last_messages(&self) -> &[PositionedInfo] {
        &self.messages
    }
}

/// Forward parameters to declared parameter ports; `"*"` addresses the
/// primary parameter port and fails when the pipeline declares none
fn bind_parameter_ports(
    input: &mut PipelineInput,
    info: &PipelineInfo,
    bindings: &[ParameterPortBinding],
) -> Result<(), Failure> {
    for binding in bindings {
        let port = if binding.port == PRIMARY_PARAMETER_PORT {
            match info.primary_parameter_port() {
                Some(primary) => primary.to_string(),
                None => {
                    return Err(EngineError::interface(
                        "No primary parameter port declared in pipeline. \
                         Please check the transformation scenario.",
                    )
                    .into())
                }
            }
        } else {
            if !info.has_parameter_port(&binding.port) {
                tracing::debug!(port = %binding.port,
                    "skipping binding for undeclared parameter port");
                continue;
            }
            binding.port.clone()
        };

        for parameter in &binding.parameters {
            let Some(value) = &parameter.value else {
                continue;
            };
            let namespace = parameter.namespace_uri.as_deref().and_then(non_blank);
            input.set_parameter(&port, &parameter.local_name, namespace, value);
        }
    }
    Ok(())
}

/// Forward options the pipeline declares; others are dropped
fn bind_options(input: &mut PipelineInput, info: &PipelineInfo, options: &[OptionBinding]) {
    for option in options {
        let name = match option.namespace_uri.as_deref() {
            Some(ns) => QName::namespaced(ns, option.local_name.as_str()),
            None => QName::new(option.local_name.as_str()),
        };
        if info.has_option(&name) {
            input.set_option(name, &option.value);
        } else {
            tracing::debug!(option = %name, "skipping undeclared option");
        }
    }
}

/// Save the last document of a port to a file URL
fn write_last_document(url: &str, documents: &[String]) -> std::io::Result<()> {
    let Some(document) = documents.last() else {
        return Ok(());
    };
    fs::write(file_url_to_path(url), format!("{document}\n"))
}

fn file_url_to_path(url: &str) -> PathBuf {
    match Url::parse(url) {
        Ok(parsed) if parsed.scheme() == "file" => parsed
            .to_file_path()
            .unwrap_or_else(|_| PathBuf::from(url)),
        _ => PathBuf::from(url),
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
