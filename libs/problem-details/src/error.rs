//! Errors raised while constructing problems, statuses and URI references.

/// Failures of the problem construction API.
///
/// Every variant is raised synchronously by the call that received the bad
/// input; no partially-built value is ever left behind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("invalid URI reference ({reason} at index {index}): {input}")]
    InvalidUri {
        input: String,
        index: usize,
        reason: &'static str,
    },

    #[error("\"{0}\" is a reserved problem field and cannot be used as an extension parameter")]
    ReservedParameterName(String),

    #[error("There is no known status for this code ({0}).")]
    UnknownStatusCode(u16),
}

pub type Result<T> = std::result::Result<T, ProblemError>;
