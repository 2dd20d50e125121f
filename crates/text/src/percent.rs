//! Query-string encoding
//!
//! Values are converted through `serde_json`, so anything `Serialize` can be
//! encoded. Containers become compact JSON text; scalars are written as-is.
//! Escaping follows RFC 3986 §3.4: every reserved character except `?` and
//! `/` is percent-encoded.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;

use crate::{Result, TextError};

/// Characters escaped in query keys and values.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b'?');

/// Percent-encode `s` for use as a query key or value.
///
/// ```
/// assert_eq!(gn_text::percent::escape("a b&c=d/e?"), "a%20b%26c%3Dd/e?");
/// ```
pub fn escape(s: &str) -> String {
    utf8_percent_encode(s, QUERY_COMPONENT).to_string()
}

/// Text form of a JSON value, optionally escaped.
pub fn encode_value(value: &Value, use_percent_encoding: bool) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    };

    if use_percent_encoding {
        escape(&text)
    } else {
        text
    }
}

/// Encode any serialisable value with [`encode_value`].
pub fn percent_encode<T: Serialize + ?Sized>(value: &T, use_percent_encoding: bool) -> Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(encode_value(&value, use_percent_encoding))
}

/// Build `k1=v1&k2=v2` from a value that serialises to a JSON object.
///
/// Keys are sorted; keys and values are both escaped.
pub fn percent_query<T: Serialize + ?Sized>(params: &T) -> Result<String> {
    let value = serde_json::to_value(params)?;
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(TextError::NotAnObject {
                kind: json_kind(&other),
            });
        }
    };

    let mut pairs: Vec<(&String, &Value)> = map.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let query = pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", escape(key), encode_value(value, true)))
        .collect::<Vec<_>>()
        .join("&");

    tracing::debug!(params = map.len(), "Built query string");
    Ok(query)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape(":#[]@"), "%3A%23%5B%5D%40");
        assert_eq!(escape("!$&'()*+,;="), "%21%24%26%27%28%29%2A%2B%2C%3B%3D");
        assert_eq!(escape("path/to?x"), "path/to?x");
        assert_eq!(escape("a-b.c_d~e"), "a-b.c_d~e");
    }

    #[test]
    fn test_escape_unicode() {
        assert_eq!(escape("中"), "%E4%B8%AD");
    }

    #[test]
    fn test_encode_value_kinds() {
        assert_eq!(encode_value(&json!(true), true), "true");
        assert_eq!(encode_value(&json!(42), true), "42");
        assert_eq!(encode_value(&json!(1.5), false), "1.5");
        assert_eq!(encode_value(&json!(null), false), "null");
        assert_eq!(encode_value(&json!("a b"), false), "a b");
        assert_eq!(encode_value(&json!("a b"), true), "a%20b");
        assert_eq!(encode_value(&json!(["x", 1]), false), r#"["x",1]"#);
        assert_eq!(encode_value(&json!({"B": ["ccc", "ddd"]}), false), r#"{"B":["ccc","ddd"]}"#);
    }

    #[test]
    fn test_slashes_are_not_escaped_in_json() {
        assert_eq!(encode_value(&json!({"url": "a/b"}), false), r#"{"url":"a/b"}"#);
    }

    #[test]
    fn test_percent_encode_serializable() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }
        assert_eq!(percent_encode(&Point { x: 1, y: 2 }, false).unwrap(), r#"{"x":1,"y":2}"#);
        assert_eq!(percent_encode("hi there", true).unwrap(), "hi%20there");
    }

    #[test]
    fn test_percent_query_sorted() {
        let mut params = HashMap::new();
        params.insert("B", json!("bbb"));
        params.insert("A", json!("aaa"));
        params.insert("C", json!({"D": [1, 2]}));
        assert_eq!(
            percent_query(&params).unwrap(),
            "A=aaa&B=bbb&C=%7B%22D%22%3A%5B1%2C2%5D%7D"
        );
    }

    #[test]
    fn test_percent_query_escapes_keys_and_flags() {
        let params = json!({"a key": "x&y", "flag": false});
        assert_eq!(percent_query(&params).unwrap(), "a%20key=x%26y&flag=false");
    }

    #[test]
    fn test_percent_query_empty() {
        assert_eq!(percent_query(&json!({})).unwrap(), "");
    }

    #[test]
    fn test_percent_query_rejects_non_object() {
        let err = percent_query(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, TextError::NotAnObject { kind: "array" }));
    }

    #[test]
    fn test_unserializable_value_is_an_error() {
        let mut params: BTreeMap<Vec<u8>, i32> = BTreeMap::new();
        params.insert(vec![1, 2], 3);
        let err = percent_query(&params).unwrap_err();
        assert!(matches!(err, TextError::Serialize(_)));
        assert!(percent_encode(&params, true).is_err());
    }
}
