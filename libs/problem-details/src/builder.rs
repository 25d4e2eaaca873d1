//! Incremental construction of [`Problem`] values.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ProblemError, Result};
use crate::parameters::{Parameters, is_reserved};
use crate::problem::Problem;
use crate::status::Status;
use crate::throwable::ThrowableProblem;
use crate::uri::UriRef;

/// Accumulates the members of a problem until [`build`](Self::build) is
/// called.
///
/// Setters take `&mut self`, so a builder survives a rejected
/// [`with`](Self::with) call with everything set so far, and can keep
/// producing problems after `build`.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ProblemBuilder {
    type_uri: Option<UriRef>,
    title: Option<String>,
    status: Option<Status>,
    detail: Option<String>,
    instance: Option<UriRef>,
    parameters: IndexMap<String, Value>,
    cause: Option<Arc<ThrowableProblem>>,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder for the generic problem of `status`: status set, title set
    /// to the reason phrase.
    pub fn for_status(status: Status) -> Self {
        let mut builder = Self::new();
        builder.with_title(status.reason_phrase()).with_status(status);
        builder
    }

    pub fn with_type(&mut self, type_uri: UriRef) -> &mut Self {
        self.type_uri = Some(type_uri);
        self
    }

    /// Reset the type to `about:blank`.
    pub fn without_type(&mut self) -> &mut Self {
        self.type_uri = None;
        self
    }

    pub fn with_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn without_title(&mut self) -> &mut Self {
        self.title = None;
        self
    }

    pub fn with_status(&mut self, status: Status) -> &mut Self {
        self.status = Some(status);
        self
    }

    pub fn without_status(&mut self) -> &mut Self {
        self.status = None;
        self
    }

    pub fn with_detail(&mut self, detail: impl Into<String>) -> &mut Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn without_detail(&mut self) -> &mut Self {
        self.detail = None;
        self
    }

    pub fn with_instance(&mut self, instance: UriRef) -> &mut Self {
        self.instance = Some(instance);
        self
    }

    pub fn without_instance(&mut self) -> &mut Self {
        self.instance = None;
        self
    }

    pub fn with_cause(&mut self, cause: impl Into<Arc<ThrowableProblem>>) -> &mut Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn without_cause(&mut self) -> &mut Self {
        self.cause = None;
        self
    }

    /// Add an extension parameter.
    ///
    /// Setting a key again replaces its value and keeps its original
    /// position. `Value::Null` is stored as an explicit entry.
    ///
    /// # Errors
    /// Returns [`ProblemError::ReservedParameterName`] when `key` is one of
    /// [`RESERVED_PARAMETER_NAMES`](crate::RESERVED_PARAMETER_NAMES); the
    /// builder is left unchanged.
    pub fn with(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<&mut Self> {
        let key = key.into();
        if is_reserved(&key) {
            tracing::debug!(key = %key, "rejected reserved problem member as extension parameter");
            return Err(ProblemError::ReservedParameterName(key));
        }
        self.parameters.insert(key, value.into());
        Ok(self)
    }

    pub fn build(&self) -> Problem {
        Problem {
            type_uri: self.type_uri.clone().unwrap_or_default(),
            title: self.title.clone(),
            status: self.status,
            detail: self.detail.clone(),
            instance: self.instance.clone(),
            parameters: Parameters::from_map(self.parameters.clone()),
            cause: self.cause.clone(),
        }
    }
}
