//! Partial-update payload construction.
//!
//! One rule table, applied to every entity:
//! - key absent            -> field is left untouched (never enters the payload)
//! - key present, null     -> clear marker if the field is nullable, else
//!                            `InvalidField` (covers required flexible fields)
//! - key present, value    -> flexible fields are encoded, scalars set verbatim

use crate::core::codec;
use crate::core::error::VaultError;
use crate::core::meta::{EntityMeta, FieldSpec, FieldType};
use rusqlite::types::Value as SqlValue;
use serde_json::{Map, Value as JsonValue};

/// Columns and values destined for a single UPDATE statement, in field order.
#[derive(Debug, Default)]
pub struct UpdatePayload {
    pub columns: Vec<&'static str>,
    pub values: Vec<SqlValue>,
}

impl UpdatePayload {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Build the persistence payload from a validated update map.
pub fn build(
    meta: &EntityMeta,
    validated: &Map<String, JsonValue>,
) -> Result<UpdatePayload, VaultError> {
    let mut payload = UpdatePayload::default();
    for f in meta.fields.iter().filter(|f| f.updatable) {
        let Some(v) = validated.get(f.name) else { continue };
        if v.is_null() {
            if !f.nullable {
                return Err(VaultError::InvalidField(format!(
                    "Field '{}' cannot be null for {}.",
                    f.name, meta.name
                )));
            }
            payload.columns.push(f.name);
            payload.values.push(SqlValue::Null);
        } else {
            payload.columns.push(f.name);
            payload.values.push(to_sql_value(meta, f, v)?);
        }
    }
    Ok(payload)
}

/// Convert one non-null field value to its stored form. Shared with the
/// create path so flexible fields are encoded identically everywhere.
pub fn to_sql_value(
    meta: &EntityMeta,
    f: &FieldSpec,
    v: &JsonValue,
) -> Result<SqlValue, VaultError> {
    let type_err = || {
        VaultError::Validation(format!(
            "{}.{}: expected {}",
            meta.name,
            f.name,
            f.ty.expected()
        ))
    };
    match f.ty {
        FieldType::Json | FieldType::TextList => Ok(SqlValue::Text(codec::encode(v)?)),
        FieldType::Text => v
            .as_str()
            .map(|s| SqlValue::Text(s.to_string()))
            .ok_or_else(type_err),
        FieldType::Number => v.as_f64().map(SqlValue::Real).ok_or_else(type_err),
        FieldType::Bool => v.as_bool().map(|b| SqlValue::Integer(b as i64)).ok_or_else(type_err),
    }
}
