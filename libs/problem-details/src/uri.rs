//! Validated RFC 3986 URI references for the `type` and `instance` members.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{ProblemError, Result};

/// The problem type assumed when none is given (RFC 7807 §4.2).
pub const ABOUT_BLANK: UriRef = UriRef(Cow::Borrowed("about:blank"));

/// An absolute URI or a relative reference that passed syntax validation.
///
/// Validation happens once, when the value is parsed, so holding a `UriRef`
/// is proof that the text is a well-formed URI reference. Non-ASCII
/// characters outside the control and whitespace classes are accepted as-is,
/// which makes IRIs usable without prior percent-encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UriRef(Cow<'static, str>);

impl UriRef {
    /// Parse and validate a URI reference.
    ///
    /// # Errors
    /// Returns [`ProblemError::InvalidUri`] naming the first offending byte
    /// index when `input` is not a syntactically valid URI reference.
    pub fn parse(input: impl Into<String>) -> Result<Self> {
        let input = input.into();
        validate(&input)?;
        Ok(Self(Cow::Owned(input)))
    }

    #[must_use]
    pub const fn about_blank() -> Self {
        ABOUT_BLANK
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scheme component, if this is an absolute URI.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        scheme_end(&self.0).and_then(|end| self.0.get(..end))
    }

    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme().is_some()
    }
}

impl Default for UriRef {
    fn default() -> Self {
        ABOUT_BLANK
    }
}

impl FromStr for UriRef {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UriRef {
    type Error = ProblemError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for UriRef {
    type Error = ProblemError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl AsRef<str> for UriRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for UriRef {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for UriRef {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Byte index of the `:` ending the scheme, if the reference has one.
fn scheme_end(s: &str) -> Option<usize> {
    s.find([':', '/', '?', '#'])
        .filter(|&i| s.as_bytes().get(i) == Some(&b':'))
}

fn invalid(input: &str, index: usize, reason: &'static str) -> ProblemError {
    ProblemError::InvalidUri {
        input: input.to_owned(),
        index,
        reason,
    }
}

fn validate(input: &str) -> Result<()> {
    let (rest, fragment) = match input.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (input, None),
    };
    if let Some(fragment) = fragment {
        check_component(
            input,
            fragment,
            rest.len() + 1,
            is_query_char,
            "illegal character in fragment",
        )?;
    }

    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query)),
        None => (rest, None),
    };
    if let Some(query) = query {
        check_component(
            input,
            query,
            rest.len() + 1,
            is_query_char,
            "illegal character in query",
        )?;
    }

    let (hier, offset) = match scheme_end(rest) {
        Some(0) => return Err(invalid(input, 0, "expected scheme name")),
        Some(end) => {
            check_scheme(input, &rest[..end])?;
            let hier = &rest[end + 1..];
            if hier.is_empty() {
                return Err(invalid(input, end + 1, "expected scheme-specific part"));
            }
            (hier, end + 1)
        }
        None => (rest, 0),
    };

    let (path, offset) = match hier.strip_prefix("//") {
        Some(after) => {
            let authority_len = after.find('/').unwrap_or(after.len());
            let authority = &after[..authority_len];
            check_component(
                input,
                authority,
                offset + 2,
                is_authority_char,
                "illegal character in authority",
            )?;
            (&after[authority_len..], offset + 2 + authority_len)
        }
        None => (hier, offset),
    };

    check_component(
        input,
        path,
        offset,
        is_path_char,
        "illegal character in path",
    )
}

fn check_scheme(input: &str, scheme: &str) -> Result<()> {
    for (i, c) in scheme.char_indices() {
        let valid = if i == 0 {
            c.is_ascii_alphabetic()
        } else {
            c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
        };
        if !valid {
            return Err(invalid(input, i, "illegal character in scheme name"));
        }
    }
    Ok(())
}

fn check_component(
    input: &str,
    component: &str,
    offset: usize,
    allowed: fn(char) -> bool,
    reason: &'static str,
) -> Result<()> {
    let bytes = component.as_bytes();
    for (i, c) in component.char_indices() {
        if c == '%' {
            let escaped = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !escaped {
                return Err(invalid(input, offset + i, "malformed escape pair"));
            }
        } else if !allowed(c) {
            return Err(invalid(input, offset + i, reason));
        }
    }
    Ok(())
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

fn is_sub_delim(c: char) -> bool {
    matches!(c, '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=')
}

fn is_other(c: char) -> bool {
    !c.is_ascii() && !c.is_control() && !c.is_whitespace()
}

fn is_pchar(c: char) -> bool {
    is_unreserved(c) || is_sub_delim(c) || is_other(c) || matches!(c, ':' | '@')
}

fn is_path_char(c: char) -> bool {
    is_pchar(c) || c == '/'
}

fn is_query_char(c: char) -> bool {
    is_pchar(c) || matches!(c, '/' | '?')
}

fn is_authority_char(c: char) -> bool {
    is_unreserved(c) || is_sub_delim(c) || is_other(c) || matches!(c, ':' | '@' | '[' | ']')
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn reason_of(input: &str) -> (usize, &'static str) {
        match UriRef::parse(input) {
            Err(ProblemError::InvalidUri { index, reason, .. }) => (index, reason),
            other => panic!("expected InvalidUri for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn accepts_absolute_and_relative_references() {
        for ok in [
            "https://example.org/error",
            "https://example.com/",
            "http://mock.type",
            "about:blank",
            "/users/123",
            "/",
            "",
            "orders/123?page=2#top",
            "urn:problem:out-of-credit",
            "http://[::1]:8080/x",
            "https://example.org/%E2%82%AC",
            "/\u{95ee}\u{9898}",
        ] {
            assert!(UriRef::parse(ok).is_ok(), "{ok:?} should parse");
        }
    }

    #[test]
    fn rejects_whitespace_in_path() {
        assert_eq!(reason_of("invalid uri"), (7, "illegal character in path"));
    }

    #[test]
    fn rejects_braces_in_path() {
        assert_eq!(reason_of("http://example.org/{invalid}"), (19, "illegal character in path"));
    }

    #[test]
    fn rejects_bad_scheme_and_escapes() {
        assert_eq!(reason_of(":nothing").1, "expected scheme name");
        assert_eq!(reason_of("1http://x").1, "illegal character in scheme name");
        assert_eq!(reason_of("mailto:").1, "expected scheme-specific part");
        assert_eq!(reason_of("/a%zz").1, "malformed escape pair");
        assert_eq!(reason_of("/a%4").1, "malformed escape pair");
        assert_eq!(reason_of("/a#b#c").1, "illegal character in fragment");
        assert_eq!(reason_of("/a?b c").1, "illegal character in query");
        assert_eq!(reason_of("http://exa mple.org/").1, "illegal character in authority");
    }

    #[test]
    fn scheme_is_reported_for_absolute_uris_only() {
        let abs = UriRef::parse("https://example.org/x").unwrap();
        assert_eq!(abs.scheme(), Some("https"));
        assert!(abs.is_absolute());

        let rel = UriRef::parse("/users/123").unwrap();
        assert_eq!(rel.scheme(), None);
        assert!(!rel.is_absolute());
    }

    #[test]
    fn about_blank_is_the_default() {
        assert_eq!(UriRef::default(), ABOUT_BLANK);
        assert_eq!(UriRef::about_blank().as_str(), "about:blank");
        assert_eq!(UriRef::parse("about:blank").unwrap(), ABOUT_BLANK);
        assert_eq!(ABOUT_BLANK.scheme(), Some("about"));
    }

    #[test]
    fn display_round_trips_the_input() {
        let uri: UriRef = "https://example.org/orders/123".parse().unwrap();
        assert_eq!(uri.to_string(), "https://example.org/orders/123");
        assert_eq!(uri, "https://example.org/orders/123");
    }
}
