//! HTTP status codes paired with their canonical reason phrases.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{ProblemError, Result};

/// An HTTP status code together with its reason phrase.
///
/// Values only come from the associated constants or from a registry lookup,
/// so every `Status` in circulation is a registered one:
///
/// ```compile_fail
/// let teapot = problem_details::Status { code: 418, reason_phrase: "I'm a teapot" };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Status {
    code: u16,
    reason_phrase: &'static str,
}

impl Status {
    pub const CONTINUE: Status = Status::new(100, "Continue");
    pub const SWITCHING_PROTOCOLS: Status = Status::new(101, "Switching Protocols");
    pub const PROCESSING: Status = Status::new(102, "Processing");
    pub const CHECKPOINT: Status = Status::new(103, "Checkpoint");
    pub const OK: Status = Status::new(200, "OK");
    pub const CREATED: Status = Status::new(201, "Created");
    pub const ACCEPTED: Status = Status::new(202, "Accepted");
    pub const NON_AUTHORITATIVE_INFORMATION: Status =
        Status::new(203, "Non-Authoritative Information");
    pub const NO_CONTENT: Status = Status::new(204, "No Content");
    pub const RESET_CONTENT: Status = Status::new(205, "Reset Content");
    pub const PARTIAL_CONTENT: Status = Status::new(206, "Partial Content");
    pub const MULTI_STATUS: Status = Status::new(207, "Multi-Status");
    pub const ALREADY_REPORTED: Status = Status::new(208, "Already Reported");
    pub const IM_USED: Status = Status::new(226, "IM Used");
    pub const MULTIPLE_CHOICES: Status = Status::new(300, "Multiple Choices");
    pub const MOVED_PERMANENTLY: Status = Status::new(301, "Moved Permanently");
    pub const FOUND: Status = Status::new(302, "Found");
    pub const SEE_OTHER: Status = Status::new(303, "See Other");
    pub const NOT_MODIFIED: Status = Status::new(304, "Not Modified");
    pub const USE_PROXY: Status = Status::new(305, "Use Proxy");
    pub const TEMPORARY_REDIRECT: Status = Status::new(307, "Temporary Redirect");
    pub const PERMANENT_REDIRECT: Status = Status::new(308, "Permanent Redirect");
    pub const BAD_REQUEST: Status = Status::new(400, "Bad Request");
    pub const UNAUTHORIZED: Status = Status::new(401, "Unauthorized");
    pub const PAYMENT_REQUIRED: Status = Status::new(402, "Payment Required");
    pub const FORBIDDEN: Status = Status::new(403, "Forbidden");
    pub const NOT_FOUND: Status = Status::new(404, "Not Found");
    pub const METHOD_NOT_ALLOWED: Status = Status::new(405, "Method Not Allowed");
    pub const NOT_ACCEPTABLE: Status = Status::new(406, "Not Acceptable");
    pub const PROXY_AUTHENTICATION_REQUIRED: Status =
        Status::new(407, "Proxy Authentication Required");
    pub const REQUEST_TIMEOUT: Status = Status::new(408, "Request Timeout");
    pub const CONFLICT: Status = Status::new(409, "Conflict");
    pub const GONE: Status = Status::new(410, "Gone");
    pub const LENGTH_REQUIRED: Status = Status::new(411, "Length Required");
    pub const PRECONDITION_FAILED: Status = Status::new(412, "Precondition Failed");
    pub const REQUEST_ENTITY_TOO_LARGE: Status = Status::new(413, "Request Entity Too Large");
    pub const REQUEST_URI_TOO_LONG: Status = Status::new(414, "Request-URI Too Long");
    pub const UNSUPPORTED_MEDIA_TYPE: Status = Status::new(415, "Unsupported Media Type");
    pub const REQUESTED_RANGE_NOT_SATISFIABLE: Status =
        Status::new(416, "Requested Range Not Satisfiable");
    pub const EXPECTATION_FAILED: Status = Status::new(417, "Expectation Failed");
    pub const I_AM_A_TEAPOT: Status = Status::new(418, "I'm a teapot");
    pub const MISDIRECTED_REQUEST: Status = Status::new(421, "Misdirected Request");
    pub const UNPROCESSABLE_ENTITY: Status = Status::new(422, "Unprocessable Entity");
    pub const LOCKED: Status = Status::new(423, "Locked");
    pub const FAILED_DEPENDENCY: Status = Status::new(424, "Failed Dependency");
    pub const UPGRADE_REQUIRED: Status = Status::new(426, "Upgrade Required");
    pub const PRECONDITION_REQUIRED: Status = Status::new(428, "Precondition Required");
    pub const TOO_MANY_REQUESTS: Status = Status::new(429, "Too Many Requests");
    pub const REQUEST_HEADER_FIELDS_TOO_LARGE: Status =
        Status::new(431, "Request Header Fields Too Large");
    pub const UNAVAILABLE_FOR_LEGAL_REASONS: Status =
        Status::new(451, "Unavailable For Legal Reasons");
    pub const INTERNAL_SERVER_ERROR: Status = Status::new(500, "Internal Server Error");
    pub const NOT_IMPLEMENTED: Status = Status::new(501, "Not Implemented");
    pub const BAD_GATEWAY: Status = Status::new(502, "Bad Gateway");
    pub const SERVICE_UNAVAILABLE: Status = Status::new(503, "Service Unavailable");
    pub const GATEWAY_TIMEOUT: Status = Status::new(504, "Gateway Timeout");
    pub const HTTP_VERSION_NOT_SUPPORTED: Status = Status::new(505, "HTTP Version Not Supported");
    pub const VARIANT_ALSO_NEGOTIATES: Status = Status::new(506, "Variant Also Negotiates");
    pub const INSUFFICIENT_STORAGE: Status = Status::new(507, "Insufficient Storage");
    pub const LOOP_DETECTED: Status = Status::new(508, "Loop Detected");
    pub const BANDWIDTH_LIMIT_EXCEEDED: Status = Status::new(509, "Bandwidth Limit Exceeded");
    pub const NOT_EXTENDED: Status = Status::new(510, "Not Extended");
    pub const NETWORK_AUTHENTICATION_REQUIRED: Status =
        Status::new(511, "Network Authentication Required");

    const fn new(code: u16, reason_phrase: &'static str) -> Self {
        Self {
            code,
            reason_phrase,
        }
    }

    /// Look up the registered status for `code`.
    ///
    /// # Errors
    /// Returns [`ProblemError::UnknownStatusCode`] when `code` is not registered.
    pub fn from_code(code: u16) -> Result<Self> {
        if let Some(status) = BY_CODE.get(&code) {
            return Ok(*status);
        }
        tracing::debug!(code, "no registered status for code");
        Err(ProblemError::UnknownStatusCode(code))
    }

    /// Every registered status, in ascending code order.
    #[must_use]
    pub fn all() -> impl ExactSizeIterator<Item = Status> {
        REGISTRY.iter().copied()
    }

    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        self.reason_phrase
    }

    /// 1xx
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        matches!(self.code, 100..=199)
    }

    /// 2xx
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.code, 200..=299)
    }

    /// 3xx
    #[must_use]
    pub const fn is_redirection(&self) -> bool {
        matches!(self.code, 300..=399)
    }

    /// 4xx
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.code, 400..=499)
    }

    /// 5xx
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.code, 500..=599)
    }
}

const REGISTRY: &[Status] = &[
    Status::CONTINUE,
    Status::SWITCHING_PROTOCOLS,
    Status::PROCESSING,
    Status::CHECKPOINT,
    Status::OK,
    Status::CREATED,
    Status::ACCEPTED,
    Status::NON_AUTHORITATIVE_INFORMATION,
    Status::NO_CONTENT,
    Status::RESET_CONTENT,
    Status::PARTIAL_CONTENT,
    Status::MULTI_STATUS,
    Status::ALREADY_REPORTED,
    Status::IM_USED,
    Status::MULTIPLE_CHOICES,
    Status::MOVED_PERMANENTLY,
    Status::FOUND,
    Status::SEE_OTHER,
    Status::NOT_MODIFIED,
    Status::USE_PROXY,
    Status::TEMPORARY_REDIRECT,
    Status::PERMANENT_REDIRECT,
    Status::BAD_REQUEST,
    Status::UNAUTHORIZED,
    Status::PAYMENT_REQUIRED,
    Status::FORBIDDEN,
    Status::NOT_FOUND,
    Status::METHOD_NOT_ALLOWED,
    Status::NOT_ACCEPTABLE,
    Status::PROXY_AUTHENTICATION_REQUIRED,
    Status::REQUEST_TIMEOUT,
    Status::CONFLICT,
    Status::GONE,
    Status::LENGTH_REQUIRED,
    Status::PRECONDITION_FAILED,
    Status::REQUEST_ENTITY_TOO_LARGE,
    Status::REQUEST_URI_TOO_LONG,
    Status::UNSUPPORTED_MEDIA_TYPE,
    Status::REQUESTED_RANGE_NOT_SATISFIABLE,
    Status::EXPECTATION_FAILED,
    Status::I_AM_A_TEAPOT,
    Status::MISDIRECTED_REQUEST,
    Status::UNPROCESSABLE_ENTITY,
    Status::LOCKED,
    Status::FAILED_DEPENDENCY,
    Status::UPGRADE_REQUIRED,
    Status::PRECONDITION_REQUIRED,
    Status::TOO_MANY_REQUESTS,
    Status::REQUEST_HEADER_FIELDS_TOO_LARGE,
    Status::UNAVAILABLE_FOR_LEGAL_REASONS,
    Status::INTERNAL_SERVER_ERROR,
    Status::NOT_IMPLEMENTED,
    Status::BAD_GATEWAY,
    Status::SERVICE_UNAVAILABLE,
    Status::GATEWAY_TIMEOUT,
    Status::HTTP_VERSION_NOT_SUPPORTED,
    Status::VARIANT_ALSO_NEGOTIATES,
    Status::INSUFFICIENT_STORAGE,
    Status::LOOP_DETECTED,
    Status::BANDWIDTH_LIMIT_EXCEEDED,
    Status::NOT_EXTENDED,
    Status::NETWORK_AUTHENTICATION_REQUIRED,
];

static BY_CODE: LazyLock<HashMap<u16, Status>> =
    LazyLock::new(|| REGISTRY.iter().map(|s| (s.code, *s)).collect());

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.reason_phrase)
    }
}

impl TryFrom<u16> for Status {
    type Error = ProblemError;

    fn try_from(code: u16) -> Result<Self> {
        Self::from_code(code)
    }
}

impl TryFrom<http::StatusCode> for Status {
    type Error = ProblemError;

    fn try_from(code: http::StatusCode) -> Result<Self> {
        Self::from_code(code.as_u16())
    }
}

impl TryFrom<Status> for http::StatusCode {
    type Error = http::status::InvalidStatusCode;

    fn try_from(status: Status) -> std::result::Result<Self, Self::Error> {
        http::StatusCode::from_u16(status.code)
    }
}
