//! Problems raised as errors.

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use crate::format;
use crate::problem::Problem;

/// Where a [`ThrowableProblem`] was raised.
#[derive(Debug)]
pub struct Origin {
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl Origin {
    #[track_caller]
    fn capture() -> Self {
        Self {
            location: Location::caller(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Source location of the raising call. Always available.
    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Stack captured at the raising call, subject to `RUST_BACKTRACE` /
    /// `RUST_LIB_BACKTRACE`.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.location, f)
    }
}

/// A [`Problem`] carried as an [`Error`].
///
/// The causal chain lives in the problem's `cause`, which is exposed both
/// through [`cause`](Self::cause) and [`Error::source`]. `Display` is the
/// canonical problem rendering; the human-readable summary is
/// [`message`](Self::message).
#[derive(Debug)]
pub struct ThrowableProblem {
    problem: Problem,
    origin: Origin,
}

impl ThrowableProblem {
    #[track_caller]
    pub fn new(problem: Problem) -> Self {
        let origin = Origin::capture();
        tracing::trace!(location = %origin, problem = %problem, "problem raised");
        Self { problem, origin }
    }

    /// Raise `problem` with `cause` as its cause, replacing any cause the
    /// problem already carried.
    #[track_caller]
    #[must_use]
    pub fn with_cause(mut problem: Problem, cause: Option<Arc<ThrowableProblem>>) -> Self {
        problem.cause = cause;
        Self::new(problem)
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn into_problem(self) -> Problem {
        self.problem
    }

    #[must_use]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.problem.message()
    }

    #[must_use]
    pub fn cause(&self) -> Option<&ThrowableProblem> {
        self.problem.cause()
    }

    /// The causal chain, nearest cause first.
    pub fn causes(&self) -> impl Iterator<Item = &ThrowableProblem> {
        std::iter::successors(self.cause(), |&p| ThrowableProblem::cause(p))
    }
}

impl From<Problem> for ThrowableProblem {
    #[track_caller]
    fn from(problem: Problem) -> Self {
        Self::new(problem)
    }
}

impl AsRef<Problem> for ThrowableProblem {
    fn as_ref(&self) -> &Problem {
        &self.problem
    }
}

/// Equality of the carried problems; origins are not compared.
impl PartialEq for ThrowableProblem {
    fn eq(&self, other: &Self) -> bool {
        self.problem == other.problem
    }
}

impl fmt::Display for ThrowableProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::render(&self.problem))
    }
}

impl Error for ThrowableProblem {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn Error + 'static))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::status::Status;
    use crate::uri::UriRef;

    fn root() -> Arc<ThrowableProblem> {
        Arc::new(Problem::from_status(Status::BAD_REQUEST).raise())
    }

    #[test]
    fn message_follows_title_and_detail() {
        let problem = Problem::builder()
            .with_title("Unauthorized")
            .with_detail("Missing API key")
            .build()
            .raise();
        assert_eq!(problem.message(), "Unauthorized: Missing API key");
        assert_eq!(Problem::builder().build().raise().message(), "");
    }

    #[test]
    fn cause_is_returned_as_given() {
        let root = root();
        let problem =
            ThrowableProblem::with_cause(Problem::builder().build(), Some(Arc::clone(&root)));

        let cause = problem.cause().unwrap();
        assert!(std::ptr::eq(cause, Arc::as_ptr(&root)));
        assert_eq!(cause, &*root);
    }

    #[test]
    fn missing_cause_is_tolerated() {
        let problem = ThrowableProblem::with_cause(Problem::builder().build(), None);
        assert!(problem.cause().is_none());
        assert!(problem.source().is_none());
        assert_eq!(problem.causes().count(), 0);
    }

    #[test]
    fn builder_cause_stays_a_problem() {
        let cause = Problem::from_status(Status::INTERNAL_SERVER_ERROR).raise();
        let problem = Problem::builder().with_cause(cause).build().raise();

        let source = problem.source().unwrap();
        let cause = source.downcast_ref::<ThrowableProblem>().unwrap();
        assert_eq!(cause.problem().status(), Some(Status::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn with_cause_replaces_existing_cause() {
        let built_with = Problem::builder()
            .with_cause(Problem::from_status(Status::GONE).raise())
            .build();
        let problem = ThrowableProblem::with_cause(built_with, Some(root()));
        assert_eq!(problem.cause().and_then(|c| c.problem().status()), Some(Status::BAD_REQUEST));
    }

    #[test]
    fn causes_walks_the_whole_chain() {
        let innermost = Problem::from_status(Status::SERVICE_UNAVAILABLE).raise();
        let middle = Problem::builder()
            .with_status(Status::BAD_GATEWAY)
            .with_cause(innermost)
            .build()
            .raise();
        let outer = Problem::builder()
            .with_status(Status::INTERNAL_SERVER_ERROR)
            .with_cause(middle)
            .build()
            .raise();

        let codes: Vec<u16> = outer
            .causes()
            .filter_map(|p| p.problem().status())
            .map(|s| s.code())
            .collect();
        assert_eq!(codes, [502, 503]);
    }

    #[test]
    fn display_is_the_canonical_rendering() {
        let problem = Problem::builder()
            .with_type(UriRef::parse("https://example.org/error").unwrap())
            .with_status(Status::NOT_FOUND)
            .with_detail("User 123 not found")
            .build()
            .raise();

        assert_eq!(problem.to_string(), format::render(problem.problem()));
        assert_eq!(problem.to_string(), "https://example.org/error{404, User 123 not found}");
    }

    #[test]
    fn origin_points_at_the_raising_call() {
        let line = line!() + 1;
        let problem = ThrowableProblem::with_cause(Problem::builder().build(), None);

        let location = problem.origin().location();
        assert!(location.file().ends_with("throwable.rs"));
        assert_eq!(location.line(), line);
        assert!(!problem.origin().to_string().is_empty());
    }

    #[test]
    fn conversion_records_the_converting_call() {
        let line = line!() + 1;
        let problem = ThrowableProblem::from(Problem::from_status(Status::CONFLICT));
        assert_eq!(problem.origin().location().line(), line);
        assert_eq!(problem.into_problem(), Problem::from_status(Status::CONFLICT));
    }

    #[tracing_test::traced_test]
    #[test]
    fn raising_is_traced() {
        let _problem = Problem::from_status(Status::NOT_FOUND).raise();
        assert!(logs_contain("problem raised"));
        assert!(logs_contain("about:blank{404, Not Found}"));
    }

    #[test]
    fn raised_problems_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<ThrowableProblem>();
    }
}
