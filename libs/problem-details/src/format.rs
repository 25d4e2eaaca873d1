//! Canonical single-line rendering of a problem.
//!
//! ```text
//! <type>{<code>, <title>, <detail>, instance=<instance>, <key>=<value>, ...}
//! ```
//!
//! Absent members are skipped together with their separator.

use std::borrow::Cow;

use serde_json::Value;

use crate::problem::Problem;

/// Render `problem` in its canonical form.
#[must_use]
pub fn render(problem: &Problem) -> String {
    let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(4 + problem.parameters().len());

    if let Some(status) = problem.status() {
        parts.push(Cow::Owned(status.code().to_string()));
    }
    if let Some(title) = problem.title() {
        parts.push(Cow::Borrowed(title));
    }
    if let Some(detail) = problem.detail() {
        parts.push(Cow::Borrowed(detail));
    }
    if let Some(instance) = problem.instance() {
        parts.push(Cow::Owned(format!("instance={instance}")));
    }
    for (key, value) in problem.parameters() {
        parts.push(Cow::Owned(format!("{key}={}", render_value(value))));
    }

    format!("{}{{{}}}", problem.type_uri(), parts.join(", "))
}

fn render_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::status::Status;
    use crate::uri::UriRef;
    use serde_json::json;

    #[test]
    fn renders_empty_braces_when_nothing_is_set() {
        assert_eq!(render(&Problem::builder().build()), "about:blank{}");
    }

    #[test]
    fn renders_title_without_status() {
        let problem = Problem::builder().with_title("Oops").build();
        assert_eq!(render(&problem), "about:blank{Oops}");
    }

    #[test]
    fn renders_values_by_json_kind() {
        let problem = Problem::builder()
            .with_status(Status::BAD_REQUEST)
            .with("text", "plain")
            .unwrap()
            .with("number", 20)
            .unwrap()
            .with("flag", true)
            .unwrap()
            .with("list", json!([1, "two"]))
            .unwrap()
            .with("nothing", Value::Null)
            .unwrap()
            .build();

        assert_eq!(
            render(&problem),
            r#"about:blank{400, text=plain, number=20, flag=true, list=[1,"two"], nothing=}"#
        );
    }

    #[test]
    fn renders_every_member_in_order() {
        let problem = Problem::builder()
            .with_type(UriRef::parse("https://example.org/out-of-credit").unwrap())
            .with_status(Status::FORBIDDEN)
            .with_title("You do not have enough credit.")
            .with_detail("Your current balance is 30, but that costs 50.")
            .with_instance(UriRef::parse("/account/12345/msgs/abc").unwrap())
            .with("balance", 30)
            .unwrap()
            .build();

        assert_eq!(
            render(&problem),
            "https://example.org/out-of-credit{403, You do not have enough credit., \
             Your current balance is 30, but that costs 50., \
             instance=/account/12345/msgs/abc, balance=30}"
        );
    }

    #[test]
    fn rendering_is_repeatable() {
        let problem = Problem::from_status_with_detail(Status::NOT_FOUND, "Order 123");
        assert_eq!(render(&problem), render(&problem));
        assert_eq!(problem.to_string(), render(&problem));
    }
}
