//! Mutating operations ("tools"): `create_<entity>`, `update_<entity>`,
//! `delete_<entity>` for every entity kind, resolved through the metadata
//! table rather than registered one by one.

use crate::core::error::{OpFailure, VaultError};
use crate::core::meta::{EntityKind, EntityMeta};
use crate::core::repo::Repository;
use serde_json::{Value as JsonValue, json};

/// Dispatch a tool call by name. `None` means the name is not a known tool.
pub fn dispatch(
    repo: &Repository,
    name: &str,
    params: &JsonValue,
) -> Option<Result<JsonValue, OpFailure>> {
    let (verb, suffix) = name.split_once('_')?;
    let meta = EntityMeta::by_tool(suffix)?;
    match verb {
        "create" => Some(repo.create(meta.kind, params)),
        "update" => Some(update(repo, meta, params)),
        "delete" => Some(delete(repo, meta, params)),
        _ => None,
    }
}

fn update(repo: &Repository, meta: &EntityMeta, params: &JsonValue) -> Result<JsonValue, OpFailure> {
    let id = require_arg(meta, "update", params, meta.id_arg)?;
    let data = params.get("data").ok_or_else(|| {
        missing_arg(meta, "update", "data")
    })?;
    repo.update(meta.kind, &id, data)
}

fn delete(repo: &Repository, meta: &EntityMeta, params: &JsonValue) -> Result<JsonValue, OpFailure> {
    let id = require_arg(meta, "delete", params, meta.id_arg)?;
    repo.delete(meta.kind, &id)
}

fn require_arg(
    meta: &EntityMeta,
    op: &'static str,
    params: &JsonValue,
    arg: &str,
) -> Result<String, OpFailure> {
    params
        .get(arg)
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .ok_or_else(|| missing_arg(meta, op, arg))
}

fn missing_arg(meta: &EntityMeta, op: &'static str, arg: &str) -> OpFailure {
    OpFailure::translate(
        meta.kind,
        op,
        VaultError::Validation(format!("missing required argument '{arg}'")),
    )
}

/// The tool catalog, for capability listings.
pub fn catalog() -> Vec<JsonValue> {
    let mut out = Vec::new();
    for kind in EntityKind::ALL {
        let meta = kind.meta();
        out.push(json!({
            "name": format!("create_{}", meta.tool),
            "description": format!("Creates a new {}", meta.label),
        }));
        out.push(json!({
            "name": format!("update_{}", meta.tool),
            "description": format!("Updates an existing {}", meta.label),
        }));
        out.push(json!({
            "name": format!("delete_{}", meta.tool),
            "description": format!("Deletes a {}", meta.label),
        }));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_kinds_with_three_verbs() {
        let names: Vec<String> = catalog()
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names.len(), 33);
        assert!(names.contains(&"create_drawing".to_string()));
        assert!(names.contains(&"update_machine_config".to_string()));
        assert!(names.contains(&"delete_library_item".to_string()));
    }
}
