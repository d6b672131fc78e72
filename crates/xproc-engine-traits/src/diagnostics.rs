//! Vocabulary of the engine's structured error documents.
//!
//! Compile errors arrive as an `<errors>` document whose `<error>` children
//! carry a `<position>`, a `<description>` and a `<message>`. Runtime errors
//! arrive either as a `c:errors` list in the XProc step namespace, or as an
//! engine-namespace document whose `<type>` element marks the failure class.

/// Namespace of `c:errors`/`c:error` lists produced by failing steps
pub const XPROC_STEP_NS: &str = "http://www.w3.org/ns/xproc-step";

/// Namespace of the engine's own diagnostic elements (`type`, `message`)
pub const ENGINE_NS: &str = "http://xproc-rs.org/ns/engine";

/// `<type>` marker: the pipeline was stopped by the engine's security policy
pub const SECURITY_EXCEPTION_TYPE: &str = "security-exception";

/// `<type>` marker: the pipeline failed with a generic runtime exception
pub const RUNTIME_EXCEPTION_TYPE: &str = "runtime-exception";
