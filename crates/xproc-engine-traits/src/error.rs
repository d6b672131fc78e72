//! Error types for engine operations

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Unified error type for all engine-side operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Pipeline compilation failed; the engine reports the details as a
    /// structured XML error document
    #[error("pipeline compilation failed")]
    Compile { error_document: String },

    /// The engine API was driven in an unsupported way
    #[error("interface error: {0}")]
    Interface(String),

    /// Pipeline execution failed outside the structured error channel
    #[error("runtime error: {0}")]
    Runtime(String),

    /// A port was requested that the pipeline does not expose
    #[error("unknown port: {0}")]
    UnknownPort(String),

    /// URI or entity resolution failed
    #[error("resolver error: {0}")]
    Resolver(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl EngineError {
    /// Create a new compile error carrying a structured error document
    pub fn compile<S: Into<String>>(error_document: S) -> Self {
        EngineError::Compile {
            error_document: error_document.into(),
        }
    }

    /// Create a new interface error
    pub fn interface<S: Into<String>>(msg: S) -> Self {
        EngineError::Interface(msg.into())
    }

    /// Create a new runtime error
    pub fn runtime<S: Into<String>>(msg: S) -> Self {
        EngineError::Runtime(msg.into())
    }

    /// Create a new resolver error
    pub fn resolver<S: Into<String>>(msg: S) -> Self {
        EngineError::Resolver(msg.into())
    }
}
