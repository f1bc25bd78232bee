//! Read-only operations ("resources"): addressable templates
//! `resource://<entities>` and `resource://<entities>/{id}`, with an
//! optional scoping-key argument on collection templates.

use crate::core::error::OpFailure;
use crate::core::meta::{EntityKind, EntityMeta};
use crate::core::repo::Repository;
use serde_json::{Value as JsonValue, json};

const URI_PREFIX: &str = "resource://";

/// Resolve and read a resource URI. `None` means the URI matches no template.
pub fn read(
    repo: &Repository,
    uri: &str,
    params: &JsonValue,
) -> Option<Result<JsonValue, OpFailure>> {
    let rest = uri.strip_prefix(URI_PREFIX)?;
    let (slug, id) = match rest.split_once('/') {
        Some((slug, id)) if !id.is_empty() => (slug, Some(id)),
        Some((slug, _)) => (slug, None),
        None => (rest, None),
    };
    let meta = EntityMeta::by_slug(slug)?;
    match id {
        Some(id) => Some(repo.get(meta.kind, id)),
        None => {
            let scope = meta
                .scope
                .and_then(|key| params.get(key.arg))
                .and_then(JsonValue::as_str);
            Some(repo.list(meta.kind, scope).map(JsonValue::Array))
        }
    }
}

/// The resource-template catalog, for capability listings.
pub fn catalog() -> Vec<JsonValue> {
    let mut out = Vec::new();
    for kind in EntityKind::ALL {
        let meta = kind.meta();
        let collection_args: Vec<JsonValue> = meta
            .scope
            .iter()
            .map(|key| {
                json!({
                    "name": key.arg,
                    "description": format!("Filter by {}", key.column),
                    "required": false,
                })
            })
            .collect();
        out.push(json!({
            "uriTemplate": format!("{URI_PREFIX}{}", meta.slug),
            "entity": meta.name,
            "mimeType": "application/json",
            "arguments": collection_args,
        }));
        out.push(json!({
            "uriTemplate": format!("{URI_PREFIX}{}/{{{}}}", meta.slug, meta.id_arg),
            "entity": meta.name,
            "mimeType": "application/json",
            "arguments": [{
                "name": meta.id_arg,
                "description": format!("ID of the {}", meta.label),
                "required": true,
            }],
        }));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_collection_and_item_templates_per_kind() {
        let templates = catalog();
        assert_eq!(templates.len(), 22);
        let uris: Vec<&str> =
            templates.iter().map(|t| t["uriTemplate"].as_str().unwrap()).collect();
        assert!(uris.contains(&"resource://machine-configs"));
        assert!(uris.contains(&"resource://drawings/{drawing_id}"));
    }
}
