//! Schema registry: Create/Update validation of raw tool arguments.
//!
//! Validation is synchronous and happens before any I/O. Create mode checks
//! required fields, applies defaults, and type-checks every value. Update
//! mode passes through only declared-updatable fields (unknown and
//! create-only keys are dropped, mirroring the strip semantics of the wire
//! schemas); explicit nulls survive validation untouched because the
//! null/clear ruling belongs to the partial-update builder.

use crate::core::error::VaultError;
use crate::core::meta::{EntityMeta, FieldDefault, FieldSpec, FieldType};
use serde_json::{Map, Value as JsonValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update,
}

pub fn validate(
    meta: &EntityMeta,
    mode: Mode,
    raw: &JsonValue,
) -> Result<Map<String, JsonValue>, VaultError> {
    let obj = raw.as_object().ok_or_else(|| {
        VaultError::Validation(format!("{}: expected a JSON object", meta.name))
    })?;
    match mode {
        Mode::Create => validate_create(meta, obj),
        Mode::Update => validate_update(meta, obj),
    }
}

fn validate_create(
    meta: &EntityMeta,
    obj: &Map<String, JsonValue>,
) -> Result<Map<String, JsonValue>, VaultError> {
    let mut out = Map::new();
    for f in meta.fields {
        match obj.get(f.name) {
            None => {
                if f.required {
                    return Err(VaultError::Validation(format!(
                        "{}.{}: required field missing",
                        meta.name, f.name
                    )));
                }
                if let Some(default) = &f.default {
                    out.insert(f.name.to_string(), default_value(default));
                }
                // Absent optional fields without a default are stored NULL.
            }
            Some(JsonValue::Null) => {
                if f.required || !f.nullable {
                    return Err(VaultError::Validation(format!(
                        "{}.{}: must not be null",
                        meta.name, f.name
                    )));
                }
                out.insert(f.name.to_string(), JsonValue::Null);
            }
            Some(v) => {
                check_type(meta, f, v)?;
                out.insert(f.name.to_string(), v.clone());
            }
        }
    }
    Ok(out)
}

fn validate_update(
    meta: &EntityMeta,
    obj: &Map<String, JsonValue>,
) -> Result<Map<String, JsonValue>, VaultError> {
    let mut out = Map::new();
    for f in meta.fields.iter().filter(|f| f.updatable) {
        if let Some(v) = obj.get(f.name) {
            if !v.is_null() {
                check_type(meta, f, v)?;
            }
            out.insert(f.name.to_string(), v.clone());
        }
    }
    Ok(out)
}

fn default_value(default: &FieldDefault) -> JsonValue {
    match default {
        FieldDefault::Bool(b) => JsonValue::Bool(*b),
        FieldDefault::Text(s) => JsonValue::String((*s).to_string()),
        FieldDefault::EmptyList => JsonValue::Array(Vec::new()),
    }
}

fn check_type(meta: &EntityMeta, f: &FieldSpec, v: &JsonValue) -> Result<(), VaultError> {
    let ok = match f.ty {
        FieldType::Text => v.is_string(),
        FieldType::Number => v.is_number(),
        FieldType::Bool => v.is_boolean(),
        FieldType::Json => v.is_object(),
        FieldType::TextList => {
            v.as_array().is_some_and(|items| items.iter().all(JsonValue::is_string))
        }
    };
    if ok {
        Ok(())
    } else {
        Err(VaultError::Validation(format!(
            "{}.{}: expected {}",
            meta.name,
            f.name,
            f.ty.expected()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::meta::{DRAWING, LIBRARY_ITEM, SUBSCRIPTION, TOOLPATH, USER};
    use serde_json::json;

    #[test]
    fn create_rejects_missing_required_fields() {
        let err = validate(&DRAWING, Mode::Create, &json!({"name": "A"})).unwrap_err();
        assert!(err.to_string().contains("Drawing.data: required field missing"));
    }

    #[test]
    fn create_rejects_null_required_fields() {
        let raw = json!({"name": "A", "data": null, "projectId": "p1"});
        let err = validate(&DRAWING, Mode::Create, &raw).unwrap_err();
        assert!(err.to_string().contains("Drawing.data: must not be null"));
    }

    #[test]
    fn create_applies_defaults() {
        let out = validate(&SUBSCRIPTION, Mode::Create, &json!({"userId": "u1"})).unwrap();
        assert_eq!(out["plan"], json!("FREE"));
        assert_eq!(out["status"], json!("inactive"));
        assert_eq!(out["cancelAtPeriodEnd"], json!(false));
    }

    #[test]
    fn create_checks_field_types() {
        let raw = json!({"name": "A", "data": "not an object", "projectId": "p1"});
        let err = validate(&DRAWING, Mode::Create, &raw).unwrap_err();
        assert!(err.to_string().contains("Drawing.data: expected a JSON object"));

        let raw = json!({
            "name": "n", "category": "c", "type": "t", "data": {},
            "tags": ["ok", 3]
        });
        let err = validate(&LIBRARY_ITEM, Mode::Create, &raw).unwrap_err();
        assert!(err.to_string().contains("LibraryItem.tags: expected an array of strings"));
    }

    #[test]
    fn create_accepts_omitted_optional_flexible_field() {
        let raw = json!({"name": "rough pass", "projectId": "p1", "createdBy": "u1"});
        let out = validate(&TOOLPATH, Mode::Create, &raw).unwrap();
        assert!(!out.contains_key("data"));
    }

    #[test]
    fn update_drops_unknown_and_create_only_keys() {
        let raw = json!({"name": "B", "projectId": "sneaky", "bogus": 1});
        let out = validate(&DRAWING, Mode::Update, &raw).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out["name"], json!("B"));
    }

    #[test]
    fn update_passes_null_through_for_the_builder() {
        let out = validate(&USER, Mode::Update, &json!({"image": null})).unwrap();
        assert!(out["image"].is_null());
    }

    #[test]
    fn non_object_input_is_a_validation_error() {
        let err = validate(&USER, Mode::Update, &json!("nope")).unwrap_err();
        assert!(matches!(err, VaultError::Validation(_)));
    }
}
