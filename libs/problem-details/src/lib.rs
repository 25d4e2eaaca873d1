//! RFC 7807 Problem Details for HTTP APIs
//!
//! This crate provides the in-memory model only, with no wire format and no
//! HTTP framework integration. It includes:
//! - the immutable [`Problem`] value and its [`ProblemBuilder`]
//! - the HTTP [`Status`] registry
//! - validated URI references ([`UriRef`])
//! - the canonical rendering ([`render`])
//! - [`ThrowableProblem`], a problem raised as an [`std::error::Error`]
//!
//! ```
//! use problem_details::{Problem, Status, UriRef};
//!
//! # fn main() -> Result<(), problem_details::ProblemError> {
//! let problem = Problem::builder()
//!     .with_type(UriRef::parse("https://example.org/error")?)
//!     .with_status(Status::UNPROCESSABLE_ENTITY)
//!     .with_title("Validation Error")
//!     .with("field", "name")?
//!     .build();
//!
//! assert_eq!(
//!     problem.to_string(),
//!     "https://example.org/error{422, Validation Error, field=name}"
//! );
//! # Ok(())
//! # }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod error;
pub mod format;
pub mod parameters;
pub mod problem;
pub mod status;
pub mod throwable;
pub mod uri;

// Re-export commonly used types
pub use builder::ProblemBuilder;
pub use error::{ProblemError, Result};
pub use format::render;
pub use parameters::{Parameters, RESERVED_PARAMETER_NAMES};
pub use problem::Problem;
pub use status::Status;
pub use throwable::{Origin, ThrowableProblem};
pub use uri::{ABOUT_BLANK, UriRef};

/// Re-exported so callers can build parameter values without a direct
/// `serde_json` dependency.
pub use serde_json::{Value, json};
