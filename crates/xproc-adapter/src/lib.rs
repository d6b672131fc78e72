//! Editor plugin adapter for external XProc pipeline engines.
//!
//! This adapter implements the host editor's [`PipelineTransformer`] contract
//! on top of any engine implementing the `xproc-engine-traits` interfaces. It
//! translates the scenario's port/option/parameter bindings into the engine's
//! input model, runs the pipeline, and translates the engine's outputs and
//! structured error documents back into the host's result items and
//! positioned diagnostics. All XProc semantics stay inside the engine.

pub mod adapter;
pub mod crash;
pub mod report;

pub use adapter::Adapter;
pub use crash::CrashDump;

pub use editor_plugin_api::PipelineTransformer;
