//! RFC 7807 Problem Details for HTTP APIs (pure data model, no wire format)

use std::fmt;
use std::sync::Arc;

use crate::builder::ProblemBuilder;
use crate::format;
use crate::parameters::Parameters;
use crate::status::Status;
use crate::throwable::ThrowableProblem;
use crate::uri::UriRef;

/// RFC 7807 Problem Details.
///
/// A `Problem` is immutable once built. Build one with [`Problem::builder`]
/// for full control, or with the `from_status*` constructors for a problem
/// whose title is taken from the status reason phrase.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Problem {
    pub(crate) type_uri: UriRef,
    pub(crate) title: Option<String>,
    pub(crate) status: Option<Status>,
    pub(crate) detail: Option<String>,
    pub(crate) instance: Option<UriRef>,
    pub(crate) parameters: Parameters,
    pub(crate) cause: Option<Arc<ThrowableProblem>>,
}

impl Problem {
    pub fn builder() -> ProblemBuilder {
        ProblemBuilder::new()
    }

    /// A problem for `status`, titled with its reason phrase.
    pub fn from_status(status: Status) -> Self {
        ProblemBuilder::for_status(status).build()
    }

    pub fn from_status_with_detail(status: Status, detail: impl Into<String>) -> Self {
        Self::from_status_with(status, Some(detail.into()), None)
    }

    pub fn from_status_with_instance(status: Status, instance: UriRef) -> Self {
        Self::from_status_with(status, None, Some(instance))
    }

    /// A problem for `status`, titled with its reason phrase, with `detail`
    /// and `instance` applied verbatim when given.
    pub fn from_status_with(
        status: Status,
        detail: Option<String>,
        instance: Option<UriRef>,
    ) -> Self {
        let mut builder = ProblemBuilder::for_status(status);
        if let Some(detail) = detail {
            builder.with_detail(detail);
        }
        if let Some(instance) = instance {
            builder.with_instance(instance);
        }
        builder.build()
    }

    /// The problem type; `about:blank` unless one was given.
    #[must_use]
    pub fn type_uri(&self) -> &UriRef {
        &self.type_uri
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[must_use]
    pub fn instance(&self) -> Option<&UriRef> {
        self.instance.as_ref()
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[must_use]
    pub fn cause(&self) -> Option<&ThrowableProblem> {
        self.cause.as_deref()
    }

    /// `"title: detail"`, or whichever of the two is present, or an empty
    /// string.
    #[must_use]
    pub fn message(&self) -> String {
        match (self.title(), self.detail()) {
            (Some(title), Some(detail)) => format!("{title}: {detail}"),
            (Some(only), None) | (None, Some(only)) => only.to_owned(),
            (None, None) => String::new(),
        }
    }

    /// Turn this problem into an error, recording the caller as its origin.
    #[track_caller]
    #[must_use]
    pub fn raise(self) -> ThrowableProblem {
        ThrowableProblem::new(self)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::render(self))
    }
}
