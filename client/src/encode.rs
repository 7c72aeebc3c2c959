//! Query-string and request-body encoding.

use crate::error::ApiError;
use serde::Serialize;

/// One query parameter value.
///
/// Lists emit one `key=value` pair per element with the key repeated;
/// everything else emits a single pair. `Null` encodes as the empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Encoded as an empty string.
    Null,
    /// Percent-encoded text.
    Text(String),
    /// Integer, encoded in decimal.
    Int(i64),
    /// Boolean, encoded as `true`/`false`.
    Bool(bool),
    /// One pair per element, element order preserved.
    List(Vec<QueryValue>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<V: Into<QueryValue>> From<Vec<V>> for QueryValue {
    fn from(values: Vec<V>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Encode parameters as a URL query string.
///
/// Pairs are joined with `&` in slice order, values percent-encoded per
/// URL component rules (space becomes `%20`). Returns the empty string for
/// an empty slice; callers prepend `?` only when non-empty.
///
/// # Examples
///
/// ```
/// use itemdeck_client::encode::{encode_query, QueryValue};
///
/// let query = encode_query(&[
///     ("a", QueryValue::Int(1)),
///     ("b", QueryValue::from(vec![2_i64, 3])),
/// ]);
/// assert_eq!(query, "a=1&b=2&b=3");
/// ```
#[must_use]
pub fn encode_query(params: &[(&str, QueryValue)]) -> String {
    let mut pairs: Vec<String> = Vec::new();
    for (key, value) in params {
        match value {
            QueryValue::List(items) => {
                for item in items {
                    pairs.push(format!("{key}={}", encode_component(item)));
                }
            }
            value => pairs.push(format!("{key}={}", encode_component(value))),
        }
    }
    pairs.join("&")
}

fn encode_component(value: &QueryValue) -> String {
    match value {
        QueryValue::Null => String::new(),
        QueryValue::Text(text) => urlencoding::encode(text).into_owned(),
        QueryValue::Int(n) => n.to_string(),
        QueryValue::Bool(b) => b.to_string(),
        // Lists never nest in the query model; treat like null.
        QueryValue::List(_) => String::new(),
    }
}

/// A request body, resolved explicitly at the call site.
///
/// No runtime type inspection happens anywhere: a body is either JSON or a
/// multipart form, decided by whoever builds it.
#[derive(Debug)]
pub enum RequestBody {
    /// JSON-serialized map, sent as `application/json`.
    Json(serde_json::Value),
    /// Binary multipart form, passed through to the transport unchanged.
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    /// Serialize any `Serialize` value into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestEncodeFailed`] when the value does not
    /// serialize (e.g. a map with non-string keys).
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| ApiError::RequestEncodeFailed(e.to_string()))
    }
}

impl Default for RequestBody {
    /// An empty JSON object, matching what callers send when a non-GET
    /// operation has no parameters.
    fn default() -> Self {
        Self::Json(serde_json::Value::Object(serde_json::Map::new()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code
mod tests {
    use super::*;

    #[test]
    fn test_scalars_and_lists_in_insertion_order() {
        let query = encode_query(&[
            ("a", QueryValue::Int(1)),
            ("b", QueryValue::from(vec![2_i64, 3])),
        ]);
        assert_eq!(query, "a=1&b=2&b=3");
    }

    #[test]
    fn test_empty_params_is_empty_string() {
        assert_eq!(encode_query(&[]), "");
    }

    #[test]
    fn test_null_encodes_as_empty_value() {
        assert_eq!(encode_query(&[("q", QueryValue::Null)]), "q=");
    }

    #[test]
    fn test_text_is_percent_encoded() {
        assert_eq!(encode_query(&[("q", QueryValue::from("x y"))]), "q=x%20y");
        assert_eq!(
            encode_query(&[("q", QueryValue::from("a&b=c"))]),
            "q=a%26b%3Dc"
        );
    }

    #[test]
    fn test_bool_values() {
        let query = encode_query(&[("active", QueryValue::Bool(true))]);
        assert_eq!(query, "active=true");
    }

    #[test]
    fn test_empty_list_emits_no_pairs() {
        let query = encode_query(&[
            ("a", QueryValue::List(vec![])),
            ("b", QueryValue::Int(1)),
        ]);
        assert_eq!(query, "b=1");
    }

    #[test]
    fn test_json_body_from_serialize() {
        #[derive(serde::Serialize)]
        struct Payload {
            title: String,
        }

        let body = RequestBody::from_serialize(&Payload {
            title: "hello".to_string(),
        })
        .unwrap();
        match body {
            RequestBody::Json(value) => assert_eq!(value["title"], "hello"),
            RequestBody::Multipart(_) => panic!("expected JSON body"),
        }
    }

    #[test]
    fn test_default_body_is_empty_object() {
        match RequestBody::default() {
            RequestBody::Json(value) => assert_eq!(value, serde_json::json!({})),
            RequestBody::Multipart(_) => panic!("expected JSON body"),
        }
    }
}
