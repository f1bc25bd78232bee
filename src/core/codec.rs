//! Codec for flexible JSON fields.
//!
//! Flexible fields (drawing/component/toolpath `data`, material/library
//! `properties`, machine `config`, library `tags`) hold arbitrary structured
//! documents but are persisted as opaque text. `decode(encode(v)) == v` for
//! every JSON-serializable `v`; the absent case deliberately does NOT round
//! trip (see [`decode`]).

use crate::core::error::VaultError;
use serde_json::{Map, Value as JsonValue};

/// Serialize a structured value to its stored text form.
///
/// Callers must not hand this a null for a required flexible field; the
/// partial-update builder rejects that case before encoding is reached.
pub fn encode(value: &JsonValue) -> Result<String, VaultError> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialize stored text back to a structured value.
///
/// A missing or empty stored representation decodes to `{}`, not null.
/// Callers depend on receiving an empty object here, so the fallback must
/// stay as-is even though it can mask an upstream write that never happened.
pub fn decode(stored: Option<&str>) -> Result<JsonValue, VaultError> {
    match stored {
        None => Ok(JsonValue::Object(Map::new())),
        Some(text) if text.is_empty() => Ok(JsonValue::Object(Map::new())),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_arbitrary_documents() {
        let values = [
            json!({}),
            json!({"circle": true}),
            json!({"layers": [{"id": 1, "shapes": ["line", "arc"]}], "unit": "mm"}),
            json!({"nested": {"deeply": {"x": 1.5, "y": null, "z": [true, false]}}}),
            json!(["bare", "array", 3]),
            json!("bare string"),
            json!(42),
        ];
        for v in values {
            let text = encode(&v).unwrap();
            assert_eq!(decode(Some(&text)).unwrap(), v);
        }
    }

    #[test]
    fn absent_decodes_to_empty_object_not_null() {
        // Pinned on purpose: the fallback may mask data-loss bugs upstream,
        // but callers rely on `{}` here. Do not "fix" this.
        assert_eq!(decode(None).unwrap(), json!({}));
        assert_eq!(decode(Some("")).unwrap(), json!({}));
    }

    #[test]
    fn garbage_text_is_an_error_not_a_fallback() {
        assert!(decode(Some("{not json")).is_err());
    }
}
