//! Tests of the compile-only validation entry point.

mod common;

use common::{adapter, registry, MockEngine, MockOutput, MockPipeline, PIPELINE_URI};
use editor_plugin_api::PipelineTransformer;
use xproc_adapter::Adapter;
use xproc_engine_traits::{EngineError, PipelineInfo};

#[test]
fn validation_is_supported() {
    let (pipeline, _) = MockPipeline::new(PipelineInfo::new(), MockOutput::success());
    let adapter = adapter(MockEngine::with_pipeline(pipeline));
    assert!(adapter.supports_validation());
}

#[test]
fn valid_pipeline_yields_no_records() {
    let (pipeline, _) = MockPipeline::new(PipelineInfo::new(), MockOutput::success());
    let mut adapter = adapter(MockEngine::with_pipeline(pipeline));
    assert!(adapter.validate().is_empty());
}

#[test]
fn validate_without_pipeline_reports_single_record() {
    let (pipeline, _) = MockPipeline::new(PipelineInfo::new(), MockOutput::success());
    let mut adapter = Adapter::new(MockEngine::with_pipeline(pipeline), registry());
    adapter.initialize("", "identity", "identity");

    let found = adapter.validate();
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].message,
        "Internal error: The pipeline was not specified."
    );
}

#[test]
fn validate_translates_compile_errors() {
    let document = r#"<errors>
        <error code="XS0063">
            <position line="8" column="1"/>
            <description>Duplicate port name</description>
            <message>port 'result' declared twice</message>
        </error>
    </errors>"#;
    let mut adapter = adapter(MockEngine::failing_with(EngineError::compile(document)));

    let found = adapter.validate();
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].message,
        "err:XS0063: Duplicate port name (port 'result' declared twice)"
    );
    assert_eq!(found[0].system_id.as_deref(), Some(PIPELINE_URI));
    assert_eq!(found[0].line, Some(8));
}

#[test]
fn validate_reports_other_failures_as_plain_records() {
    let mut adapter = adapter(MockEngine::failing_with(EngineError::runtime(
        "could not read pipeline",
    )));

    let found = adapter.validate();
    assert_eq!(found.len(), 1);
    assert!(found[0].message.contains("could not read pipeline"));
}

#[test]
fn validate_without_resolver_reports_the_problem() {
    let (pipeline, _) = MockPipeline::new(PipelineInfo::new(), MockOutput::success());
    let mut adapter = Adapter::new(MockEngine::with_pipeline(pipeline), registry());
    adapter.initialize(PIPELINE_URI, "", "");

    let found = adapter.validate();
    assert_eq!(found.len(), 1);
    assert!(found[0].message.contains("No URI resolver configured."));
}
