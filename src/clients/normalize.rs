//! Key normalization for decoded API responses.
//!
//! Every response body is passed through [`normalize_keys`] before it reaches
//! callers. Object keys become owned `String`s with their text unchanged, so
//! resource code looks fields up by exactly the name the server sent.

use serde_json::{Map, Value};

/// Recursively normalizes every object key in `value`.
///
/// Arrays keep their order and length, objects keep every entry under the
/// same key text, and scalars are returned unchanged. Distinct keys stay
/// distinct, and applying it twice gives the same result as applying it once.
///
/// # Example
///
/// ```rust
/// use gumroad_api::clients::normalize_keys;
/// use serde_json::json;
///
/// let raw = json!({
///     "success": true,
///     "links": [{"short_url": "https://gum.co/abc", "Custom Field": "x"}]
/// });
///
/// assert_eq!(normalize_keys(raw.clone()), raw);
/// ```
#[must_use]
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, normalize_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        scalar => scalar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "success": true,
            "link": {
                "id": "abc",
                "short_url": "https://gum.co/abc",
                "nested": {"Deeper Still": [1, {"x-y": null}]}
            },
            "links": [{"name": "one"}, {"name": "two"}, "scalar", 3.5],
            "message": "ok"
        })
    }

    #[test]
    fn test_normalize_keys_keeps_key_text() {
        let normalized = normalize_keys(sample());

        assert_eq!(normalized, sample());
        assert_eq!(normalized["link"]["short_url"], json!("https://gum.co/abc"));
        assert_eq!(
            normalized["link"]["nested"]["Deeper Still"],
            json!([1, {"x-y": null}])
        );
    }

    #[test]
    fn test_distinct_keys_stay_distinct() {
        let normalized = normalize_keys(json!({"a-b": 1, "a_b": 2, "Custom Field": "x"}));
        let object = normalized.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(object["a-b"], json!(1));
        assert_eq!(object["a_b"], json!(2));
        assert_eq!(object["Custom Field"], json!("x"));
    }

    #[test]
    fn test_normalize_keys_is_idempotent() {
        let once = normalize_keys(sample());
        let twice = normalize_keys(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_keys_preserves_structure() {
        let original = sample();
        let normalized = normalize_keys(original.clone());

        assert_eq!(
            original["links"].as_array().unwrap().len(),
            normalized["links"].as_array().unwrap().len()
        );
        assert_eq!(
            original.as_object().unwrap().len(),
            normalized.as_object().unwrap().len()
        );
        assert_eq!(normalized["links"][2], json!("scalar"));
        assert_eq!(normalized["links"][3], json!(3.5));
    }

    #[test]
    fn test_normalize_keys_returns_scalars_unchanged() {
        for scalar in [json!(null), json!(false), json!(42), json!("Text-Value")] {
            assert_eq!(normalize_keys(scalar.clone()), scalar);
        }
    }

    #[test]
    fn test_normalize_keys_handles_deep_nesting() {
        let mut value = json!({"leaf": 1});
        for _ in 0..64 {
            value = json!([{"wrapper": value}]);
        }

        let mut cursor = &normalize_keys(value);
        for _ in 0..64 {
            cursor = &cursor[0]["wrapper"];
        }
        assert_eq!(cursor, &json!({"leaf": 1}));
    }
}
