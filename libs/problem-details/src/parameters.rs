//! Read-only, insertion-ordered extension members of a problem.

use std::iter::Map;

use indexmap::IndexMap;
use indexmap::map::Iter;
use serde_json::Value;

/// Member names that belong to the problem itself and can never be used as
/// extension parameters. Matching is case-sensitive.
pub const RESERVED_PARAMETER_NAMES: [&str; 5] = ["type", "title", "status", "detail", "instance"];

/// Whether `key` collides with one of [`RESERVED_PARAMETER_NAMES`].
#[must_use]
pub fn is_reserved(key: &str) -> bool {
    RESERVED_PARAMETER_NAMES.contains(&key)
}

/// Extension parameters of a built [`Problem`](crate::Problem).
///
/// Iteration follows insertion order. A key mapped to [`Value::Null`] is
/// present; it is not the same as a key that was never set.
///
/// There is no way to change the parameters of a built problem:
///
/// ```compile_fail
/// use problem_details::{Problem, Status};
///
/// let problem = Problem::builder().with_status(Status::BAD_REQUEST).build();
/// problem.parameters().insert("test".to_owned(), "value".into());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters(IndexMap<String, Value>);

impl Parameters {
    pub(crate) fn from_map(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.into_iter()
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a str, &'a Value);
    type IntoIter = Map<Iter<'a, String, Value>, fn((&'a String, &'a Value)) -> Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        fn entry<'e>((key, value): (&'e String, &'e Value)) -> (&'e str, &'e Value) {
            (key.as_str(), value)
        }
        self.0.iter().map(entry as fn(_) -> _)
    }
}
