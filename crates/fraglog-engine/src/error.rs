//! Engine-specific error types.
//!
//! Errors only exist at the rule-compilation boundary. Classification and
//! aggregation are total: an unrecognized line is noise, never an error.

use thiserror::Error;

/// Errors that can occur while compiling a rule table.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A rule's regex source failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule's regex has fewer capture groups than its kind requires.
    #[error("pattern '{pattern}' has {found} capture group(s), needs {required}")]
    MissingCaptures {
        pattern: String,
        required: usize,
        found: usize,
    },
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, EngineError>;
