//! Generic repository facade: the five store operations for every entity
//! kind, driven entirely by the metadata table.
//!
//! The facade owns no entity-level state; side effects are confined to the
//! injected connection. Flexible fields are decoded on every read path and
//! any failure is translated before it reaches the caller.

use crate::core::codec;
use crate::core::error::{OpFailure, VaultError};
use crate::core::meta::{EntityKind, EntityMeta, FieldType};
use crate::core::schema::{self, Mode};
use crate::core::time;
use crate::core::update;
use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, Row, params, params_from_iter};
use serde_json::{Map, Value as JsonValue, json};

pub struct Repository {
    conn: Connection,
}

impl Repository {
    pub fn new(conn: Connection) -> Self {
        Repository { conn }
    }

    /// List all rows of a kind, optionally narrowed by its scoping key.
    /// Order is whatever the store returns; no ordering is guaranteed.
    pub fn list(&self, kind: EntityKind, scope: Option<&str>) -> Result<Vec<JsonValue>, OpFailure> {
        let meta = kind.meta();
        self.run(kind, "list", |conn| {
            let mut sql = format!("SELECT {} FROM {}", select_columns(meta), meta.table);
            let mut values: Vec<SqlValue> = Vec::new();
            if let (Some(key), Some(filter)) = (meta.scope, scope) {
                sql.push_str(&format!(" WHERE {} = ?1", key.column));
                values.push(SqlValue::Text(filter.to_string()));
            }
            let mut stmt = conn.prepare(&sql)?;
            let mut rows = stmt.query(params_from_iter(values))?;
            let mut out = Vec::new();
            while let Some(row) = rows.next()? {
                out.push(row_to_json(meta, row)?);
            }
            Ok(out)
        })
    }

    pub fn get(&self, kind: EntityKind, id: &str) -> Result<JsonValue, OpFailure> {
        self.run(kind, "get", |conn| fetch_row(conn, kind.meta(), id))
    }

    /// Insert a new row from a raw create payload. The store assigns the id
    /// and both timestamps; the result comes back with flexible fields
    /// decoded to structured form.
    pub fn create(&self, kind: EntityKind, raw: &JsonValue) -> Result<JsonValue, OpFailure> {
        let meta = kind.meta();
        self.run(kind, "create", |conn| {
            let validated = schema::validate(meta, Mode::Create, raw)?;
            let id = time::new_id();
            let ts = time::now_iso();

            let mut columns: Vec<&str> = vec!["id"];
            let mut values: Vec<SqlValue> = vec![SqlValue::Text(id.clone())];
            for f in meta.fields {
                let Some(v) = validated.get(f.name) else { continue };
                columns.push(f.name);
                if v.is_null() {
                    values.push(SqlValue::Null);
                } else {
                    values.push(update::to_sql_value(meta, f, v)?);
                }
            }
            columns.push("createdAt");
            values.push(SqlValue::Text(ts.clone()));
            columns.push("updatedAt");
            values.push(SqlValue::Text(ts));

            let placeholders: Vec<String> = (1..=values.len()).map(|i| format!("?{i}")).collect();
            conn.execute(
                &format!(
                    "INSERT INTO {}({}) VALUES({})",
                    meta.table,
                    columns.join(", "),
                    placeholders.join(", ")
                ),
                params_from_iter(values),
            )?;

            fetch_row(conn, meta, &id)
        })
    }

    /// Apply a partial update. Absent fields are never part of the store
    /// payload; an empty payload leaves the row (and `updatedAt`) untouched.
    pub fn update(
        &self,
        kind: EntityKind,
        id: &str,
        raw: &JsonValue,
    ) -> Result<JsonValue, OpFailure> {
        let meta = kind.meta();
        self.run(kind, "update", |conn| {
            let validated = schema::validate(meta, Mode::Update, raw)?;
            let payload = update::build(meta, &validated)?;
            if payload.is_empty() {
                return fetch_row(conn, meta, id);
            }

            let mut sets: Vec<String> =
                payload.columns.iter().map(|c| format!("{c} = ?")).collect();
            sets.push("updatedAt = ?".to_string());
            let mut values = payload.values;
            values.push(SqlValue::Text(time::now_iso()));
            values.push(SqlValue::Text(id.to_string()));

            let changed = conn.execute(
                &format!("UPDATE {} SET {} WHERE id = ?", meta.table, sets.join(", ")),
                params_from_iter(values),
            )?;
            if changed == 0 {
                return Err(not_found(meta, id));
            }
            fetch_row(conn, meta, id)
        })
    }

    pub fn delete(&self, kind: EntityKind, id: &str) -> Result<JsonValue, OpFailure> {
        let meta = kind.meta();
        self.run(kind, "delete", |conn| {
            let changed =
                conn.execute(&format!("DELETE FROM {} WHERE id = ?1", meta.table), params![id])?;
            if changed == 0 {
                return Err(not_found(meta, id));
            }
            Ok(json!({
                "success": true,
                "message": format!("{} deleted successfully", meta.name),
            }))
        })
    }

    /// Run one operation and translate any failure at the boundary.
    fn run<T>(
        &self,
        kind: EntityKind,
        op: &'static str,
        f: impl FnOnce(&Connection) -> Result<T, VaultError>,
    ) -> Result<T, OpFailure> {
        f(&self.conn).map_err(|e| OpFailure::translate(kind, op, e))
    }
}

fn not_found(meta: &EntityMeta, id: &str) -> VaultError {
    VaultError::NotFound(format!("{} with ID {} not found", meta.name, id))
}

fn select_columns(meta: &EntityMeta) -> String {
    let mut cols = vec!["id"];
    cols.extend(meta.fields.iter().map(|f| f.name));
    cols.push("createdAt");
    cols.push("updatedAt");
    cols.join(", ")
}

fn fetch_row(conn: &Connection, meta: &EntityMeta, id: &str) -> Result<JsonValue, VaultError> {
    let sql = format!("SELECT {} FROM {} WHERE id = ?1", select_columns(meta), meta.table);
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params![id])?;
    match rows.next()? {
        Some(row) => row_to_json(meta, row),
        None => Err(not_found(meta, id)),
    }
}

/// Decode one row into its wire shape. Column order matches
/// [`select_columns`]: id, declared fields, createdAt, updatedAt.
fn row_to_json(meta: &EntityMeta, row: &Row<'_>) -> Result<JsonValue, VaultError> {
    let mut obj = Map::new();
    obj.insert("id".to_string(), JsonValue::String(row.get(0)?));
    for (i, f) in meta.fields.iter().enumerate() {
        let idx = i + 1;
        let value = match f.ty {
            FieldType::Json => {
                let stored: Option<String> = row.get(idx)?;
                match stored {
                    // A cleared/never-set optional flexible field reads as
                    // null; the `{}` decode fallback is for required ones.
                    None if f.nullable => JsonValue::Null,
                    other => codec::decode(other.as_deref())?,
                }
            }
            FieldType::TextList => {
                let stored: Option<String> = row.get(idx)?;
                match stored {
                    Some(text) => codec::decode(Some(&text))?,
                    None => JsonValue::Array(Vec::new()),
                }
            }
            FieldType::Text => {
                let stored: Option<String> = row.get(idx)?;
                stored.map(JsonValue::String).unwrap_or(JsonValue::Null)
            }
            FieldType::Number => {
                let stored: Option<f64> = row.get(idx)?;
                stored.map(|n| json!(n)).unwrap_or(JsonValue::Null)
            }
            FieldType::Bool => {
                let stored: Option<bool> = row.get(idx)?;
                stored.map(JsonValue::Bool).unwrap_or(JsonValue::Null)
            }
        };
        obj.insert(f.name.to_string(), value);
    }
    let fields = meta.fields.len();
    obj.insert("createdAt".to_string(), JsonValue::String(row.get(fields + 1)?));
    obj.insert("updatedAt".to_string(), JsonValue::String(row.get(fields + 2)?));
    Ok(JsonValue::Object(obj))
}
