//! Error types for tagsmith-codegen

use thiserror::Error;

/// Result type alias using tagsmith-codegen's error type
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Hard generator failures
///
/// Any of these aborts the whole batch: a definition that violates a hard
/// invariant must never be partially deployed. Recognized-but-unsupported
/// shapes are not errors; generators signal those by returning `Ok(None)`.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Condition operator with no emission template
    #[error("Unsupported condition operator: {operator}")]
    UnsupportedOperator { operator: String },

    /// Scope the generator cannot target
    #[error("Unsupported scope for extension {id}: '{scope}'")]
    UnsupportedScope { id: u64, scope: String },

    /// Join-Data-Values with a load-rule restriction
    #[error("Load-rule restrictions are not supported (extension {id})")]
    LoadRuleRestricted { id: u64 },

    /// Join-Data-Values leading-delimiter mode
    #[error("Leading delimiter mode is not implemented (extension {id})")]
    LeadingDelimiter { id: u64 },
}

impl CodegenError {
    /// Create an unsupported operator error
    pub fn unsupported_operator(operator: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            operator: operator.into(),
        }
    }

    /// Create an unsupported scope error
    pub fn unsupported_scope(id: u64, scope: impl Into<String>) -> Self {
        Self::UnsupportedScope {
            id,
            scope: scope.into(),
        }
    }
}
