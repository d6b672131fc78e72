//! Scripted mock engine used by the adapter integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use xproc_adapter::{Adapter, CrashDump, PipelineTransformer};
use xproc_engine_traits::{
    EngineError, IdentityResolver, Pipeline, PipelineEngine, PipelineInfo, PipelineInput,
    PipelineOutput, PipelineSource, ResolverRegistry, Result, SerializerOptions,
};

pub const PIPELINE_URI: &str = "file:///project/pipeline.xpl";

/// Shared handle for inspecting the input a pipeline run received
pub type CapturedInput = Arc<Mutex<Option<PipelineInput>>>;

pub struct MockEngine {
    pipeline: Option<MockPipeline>,
    compile_error: Option<EngineError>,
}

impl MockEngine {
    pub fn with_pipeline(pipeline: MockPipeline) -> Self {
        Self {
            pipeline: Some(pipeline),
            compile_error: None,
        }
    }

    pub fn failing_with(error: EngineError) -> Self {
        Self {
            pipeline: None,
            compile_error: Some(error),
        }
    }
}

impl PipelineEngine for MockEngine {
    type Pipeline = MockPipeline;

    fn compile(&mut self, _source: &PipelineSource) -> Result<MockPipeline> {
        if let Some(error) = self.compile_error.take() {
            return Err(error);
        }
        self.pipeline
            .take()
            .ok_or_else(|| EngineError::Other("mock engine has no pipeline".to_string()))
    }

    fn engine_name(&self) -> &'static str {
        "mock-engine"
    }

    fn engine_version(&self) -> &'static str {
        "0.0"
    }
}

pub struct MockPipeline {
    info: PipelineInfo,
    output: Option<MockOutput>,
    run_error: Option<EngineError>,
    captured: CapturedInput,
}

impl MockPipeline {
    /// A pipeline that runs to the given output; the returned handle
    /// captures the `PipelineInput` the run received
    pub fn new(info: PipelineInfo, output: MockOutput) -> (Self, CapturedInput) {
        let captured: CapturedInput = Arc::new(Mutex::new(None));
        let pipeline = Self {
            info,
            output: Some(output),
            run_error: None,
            captured: captured.clone(),
        };
        (pipeline, captured)
    }

    /// A pipeline whose run fails with the given engine error
    pub fn failing(info: PipelineInfo, error: EngineError) -> Self {
        Self {
            info,
            output: None,
            run_error: Some(error),
            captured: Arc::new(Mutex::new(None)),
        }
    }
}

impl Pipeline for MockPipeline {
    type Output = MockOutput;

    fn info(&self) -> &PipelineInfo {
        &self.info
    }

    fn run(&mut self, input: PipelineInput) -> Result<MockOutput> {
        *self.captured.lock().unwrap() = Some(input);
        if let Some(error) = self.run_error.take() {
            return Err(error);
        }
        Ok(self.output.take().expect("mock pipeline already ran"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockOutput {
    successful: bool,
    ports: Vec<(String, Vec<String>)>,
    error_document: Option<String>,
}

impl MockOutput {
    pub fn success() -> Self {
        Self {
            successful: true,
            ..Self::default()
        }
    }

    pub fn failed(error_document: &str) -> Self {
        Self {
            successful: false,
            error_document: Some(error_document.to_string()),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: &str, documents: &[&str]) -> Self {
        self.ports.push((
            port.to_string(),
            documents.iter().map(|d| d.to_string()).collect(),
        ));
        self
    }
}

impl PipelineOutput for MockOutput {
    fn was_successful(&self) -> bool {
        self.successful
    }

    fn port_names(&self) -> Vec<String> {
        self.ports.iter().map(|(port, _)| port.clone()).collect()
    }

    fn serialize_port(&self, port: &str, _options: &SerializerOptions) -> Result<Vec<String>> {
        self.ports
            .iter()
            .find(|(name, _)| name == port)
            .map(|(_, documents)| documents.clone())
            .ok_or_else(|| EngineError::UnknownPort(port.to_string()))
    }

    fn error_document(&self) -> Option<&str> {
        self.error_document.as_deref()
    }
}

/// Registry with identity resolvers registered under "identity"
pub fn registry() -> ResolverRegistry {
    let mut registry = ResolverRegistry::new();
    registry.register_uri_resolver("identity", || Box::new(IdentityResolver));
    registry.register_entity_resolver("identity", || Box::new(IdentityResolver));
    registry
}

/// Adapter around the given engine, initialized for `PIPELINE_URI` with
/// identity resolvers and a crash dump in the temp directory
pub fn adapter(engine: MockEngine) -> Adapter<MockEngine> {
    let mut adapter = Adapter::new(engine, registry())
        .with_crash_dump(CrashDump::at(std::env::temp_dir().join("xproc-adapter-tests.txt")));
    adapter.initialize(PIPELINE_URI, "identity", "identity");
    adapter
}
