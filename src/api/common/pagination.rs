//
//  sentry-api
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pagination Types for Sentry API Responses
//!
//! Sentry paginates list endpoints with an RFC-5988-style `Link` response
//! header. Each relation (`next`, `previous`) carries the URL of the
//! adjacent page plus two Sentry extension parameters:
//!
//! - `results` - whether following the link yields further data
//! - `cursor` - the opaque position token embedded in the URL
//!
//! # Header Format
//!
//! ```text
//! <https://host/api/0/.../?cursor=100:0:1>; rel="previous"; results="false"; cursor="100:0:1",
//! <https://host/api/0/.../?cursor=100:1:0>; rel="next"; results="true"; cursor="100:1:0"
//! ```
//!
//! # Termination Policy
//!
//! A `next` relation is only followed when its `results` parameter is
//! literally `"true"`. Sentry emits a syntactically valid `next` link on
//! the last page too, flagged `results="false"`; honoring the flag rather
//! than the link's presence is what terminates pagination.
//!
//! # Example
//!
//! ```rust
//! use sentry_api::api::common::PageCursor;
//!
//! let cursor = PageCursor::parse(
//!     r#"<https://host/api/0/projects/?cursor=100:1:0>; rel="next"; results="true"; cursor="100:1:0""#,
//! );
//! assert!(cursor.has_next());
//! assert_eq!(
//!     cursor.next_url(),
//!     Some("https://host/api/0/projects/?cursor=100:1:0")
//! );
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::ApiError;

/// Matches one `key="value"` parameter of a `Link` header entry.
static LINK_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\w+)="([^"]*)""#).expect("link parameter pattern is valid"));

/// One relation of a parsed `Link` header.
///
/// # Fields
///
/// * `url` - Absolute URL of the related page
/// * `results` - The Sentry `results` flag, when it was literally
///   `"true"` or `"false"`
/// * `cursor` - The opaque `cursor` token, when present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Absolute URL of the related page.
    pub url: String,

    /// The `results` extension flag. `None` when absent or not a literal
    /// `"true"`/`"false"`.
    pub results: Option<bool>,

    /// The opaque `cursor` extension token, when present.
    pub cursor: Option<String>,
}

/// A parsed pagination `Link` header.
///
/// Constructed fresh from each response that carries a `Link` header;
/// parsing is a pure function of the header text, so parsing the same
/// header twice yields identical relations.
#[derive(Debug, Clone, Default)]
pub struct PageCursor {
    relations: HashMap<String, Relation>,
}

impl PageCursor {
    /// Parses a `Link` header into named relations.
    ///
    /// Entries are comma-separated `<url>; key="value"; ...` groups; an
    /// entry without a `rel` parameter or without a `<url>` target is
    /// skipped. Unrecognized parameters are ignored.
    pub fn parse(header: &str) -> Self {
        let mut relations = HashMap::new();

        for entry in header.split(',') {
            let mut segments = entry.split(';');
            let target = match segments.next() {
                Some(target) => target.trim(),
                None => continue,
            };
            if !(target.starts_with('<') && target.ends_with('>')) {
                continue;
            }
            let url = target[1..target.len() - 1].to_string();

            let mut rel = None;
            let mut results = None;
            let mut cursor = None;
            for segment in segments {
                let captures = match LINK_PARAM.captures(segment) {
                    Some(captures) => captures,
                    None => continue,
                };
                match &captures[1] {
                    "rel" => rel = Some(captures[2].to_string()),
                    "results" => {
                        results = match &captures[2] {
                            "true" => Some(true),
                            "false" => Some(false),
                            _ => None,
                        }
                    }
                    "cursor" => cursor = Some(captures[2].to_string()),
                    _ => {}
                }
            }

            if let Some(rel) = rel {
                relations.insert(rel, Relation { url, results, cursor });
            }
        }

        Self { relations }
    }

    /// Returns the relation registered under `name`, if any.
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    /// Returns the `next` relation, if any.
    pub fn next(&self) -> Option<&Relation> {
        self.relation("next")
    }

    /// Returns the `previous` relation, if any.
    pub fn previous(&self) -> Option<&Relation> {
        self.relation("previous")
    }

    /// Checks whether following the `next` link yields further data.
    ///
    /// True only when a `next` relation exists AND its `results` flag was
    /// literally `"true"`. A well-formed `next` link flagged
    /// `results="false"` is the last-page marker and must not be followed.
    pub fn has_next(&self) -> bool {
        self.next()
            .is_some_and(|relation| relation.results == Some(true))
    }

    /// Checks whether following the `previous` link yields further data.
    pub fn has_previous(&self) -> bool {
        self.previous()
            .is_some_and(|relation| relation.results == Some(true))
    }

    /// Returns the URL of the `next` relation, regardless of its
    /// `results` flag. Use [`has_next()`](Self::has_next) to decide
    /// whether it should be followed.
    pub fn next_url(&self) -> Option<&str> {
        self.next().map(|relation| relation.url.as_str())
    }

    /// Returns the URL of the `previous` relation, regardless of its
    /// `results` flag.
    pub fn previous_url(&self) -> Option<&str> {
        self.previous().map(|relation| relation.url.as_str())
    }
}

/// Returns a short label for the JSON shape of `value`, for error
/// messages.
fn shape(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
    }
}

/// Accumulator for the pages of one paginated call.
///
/// The merge strategy is fixed by the shape of the FIRST page's body and
/// held for the rest of the call: list pages append elements in page
/// order, map pages merge keys with the last page winning on collision.
/// A follow-up page of a different shape is an error, never a silent
/// partial merge.
#[derive(Debug)]
pub(crate) enum PageBuffer {
    /// First page was an array; follow-up elements are appended.
    List(Vec<Value>),

    /// First page was an object; follow-up keys are merged, last wins.
    Map(Map<String, Value>),

    /// First page was a scalar; no merge is defined.
    Scalar(Value),
}

impl PageBuffer {
    /// Fixes the merge strategy from the first page's body.
    pub(crate) fn new(first: Value) -> Self {
        match first {
            Value::Array(items) => Self::List(items),
            Value::Object(map) => Self::Map(map),
            other => Self::Scalar(other),
        }
    }

    /// Merges a follow-up page into the buffer per the fixed strategy.
    pub(crate) fn merge(&mut self, page: Value) -> Result<(), ApiError> {
        match (&mut *self, page) {
            (Self::List(items), Value::Array(more)) => {
                items.extend(more);
                Ok(())
            }
            (Self::Map(map), Value::Object(more)) => {
                for (key, value) in more {
                    map.insert(key, value);
                }
                Ok(())
            }
            (buffer, page) => Err(ApiError::UnexpectedResponse(format!(
                "paginated response changed shape: follow-up page is {} but the first page was {}",
                shape(&page),
                match buffer {
                    Self::List(_) => "a list",
                    Self::Map(_) => "a map",
                    Self::Scalar(value) => shape(value),
                },
            ))),
        }
    }

    /// Unwraps the accumulated value.
    pub(crate) fn into_value(self) -> Value {
        match self {
            Self::List(items) => Value::Array(items),
            Self::Map(map) => Value::Object(map),
            Self::Scalar(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const HEADER: &str = concat!(
        r#"<https://host/api/0/projects/?cursor=100:0:1>; rel="previous"; results="false"; cursor="100:0:1", "#,
        r#"<https://host/api/0/projects/?cursor=100:1:0>; rel="next"; results="true"; cursor="100:1:0""#,
    );

    #[test]
    fn test_parse_relations() {
        let cursor = PageCursor::parse(HEADER);

        let next = cursor.next().unwrap();
        assert_eq!(next.url, "https://host/api/0/projects/?cursor=100:1:0");
        assert_eq!(next.results, Some(true));
        assert_eq!(next.cursor.as_deref(), Some("100:1:0"));

        let previous = cursor.previous().unwrap();
        assert_eq!(previous.results, Some(false));
    }

    #[test]
    fn test_has_next_respects_results_flag() {
        let cursor = PageCursor::parse(HEADER);
        assert!(cursor.has_next());
        assert!(!cursor.has_previous());

        // A well-formed next link flagged results="false" must not be
        // followed.
        let last_page =
            PageCursor::parse(r#"<https://host/page2>; rel="next"; results="false""#);
        assert!(!last_page.has_next());
        assert_eq!(last_page.next_url(), Some("https://host/page2"));
    }

    #[test]
    fn test_next_without_results_flag_is_not_followed() {
        let cursor = PageCursor::parse(r#"<https://host/page2>; rel="next""#);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = PageCursor::parse(HEADER);
        let second = PageCursor::parse(HEADER);
        assert_eq!(first.next(), second.next());
        assert_eq!(first.previous(), second.previous());
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let cursor = PageCursor::parse(r#"garbage, <https://host/ok>; rel="next"; results="true""#);
        assert_eq!(cursor.next_url(), Some("https://host/ok"));
        assert!(cursor.previous().is_none());
    }

    #[test]
    fn test_parse_empty_header() {
        let cursor = PageCursor::parse("");
        assert!(!cursor.has_next());
        assert!(cursor.next().is_none());
    }

    #[test]
    fn test_buffer_appends_list_pages() {
        let mut buffer = PageBuffer::new(json!([1, 2]));
        buffer.merge(json!([3])).unwrap();
        buffer.merge(json!([4, 5])).unwrap();
        assert_eq!(buffer.into_value(), json!([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_buffer_merges_map_pages_last_wins() {
        let mut buffer = PageBuffer::new(json!({"foo": "FOO", "shared": 1}));
        buffer.merge(json!({"bar": "BAR", "shared": 2})).unwrap();
        assert_eq!(
            buffer.into_value(),
            json!({"foo": "FOO", "bar": "BAR", "shared": 2})
        );
    }

    #[test]
    fn test_buffer_rejects_shape_change() {
        let mut buffer = PageBuffer::new(json!([1]));
        let error = buffer.merge(json!({"foo": "FOO"})).unwrap_err();
        assert!(matches!(error, ApiError::UnexpectedResponse(_)));
    }
}
