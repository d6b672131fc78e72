//! Result items shown in the editor's result views.

use serde::{Deserialize, Serialize};

/// Kind of a result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultItemKind {
    /// A plain serialized document
    Common,
}

/// One serialized result document of an output port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub kind: ResultItemKind,
    pub text: String,
}

impl ResultItem {
    pub fn common<S: Into<String>>(text: S) -> Self {
        Self {
            kind: ResultItemKind::Common,
            text: text.into(),
        }
    }
}
