//! Repository facade integration tests against a real on-disk database.

use cadvault::core::db;
use cadvault::core::error::FaultCode;
use cadvault::core::meta::EntityKind;
use cadvault::core::repo::Repository;
use serde_json::json;
use tempfile::tempdir;

fn repo(dir: &tempfile::TempDir) -> Repository {
    let path = dir.path().join("cadvault.db");
    let conn = db::open(&path.to_string_lossy()).expect("db open");
    Repository::new(conn)
}

#[test]
fn create_then_get_returns_structured_flexible_data() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    let created = repo
        .create(
            EntityKind::Drawing,
            &json!({"name": "A", "data": {"circle": true}, "projectId": "p1"}),
        )
        .unwrap();
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["data"], json!({"circle": true}));

    let fetched = repo.get(EntityKind::Drawing, id).unwrap();
    // A structured object, not a string.
    assert_eq!(fetched["data"], json!({"circle": true}));
    assert_eq!(fetched["name"], json!("A"));
    assert_eq!(fetched["projectId"], json!("p1"));
    assert!(fetched["createdAt"].is_string());
    assert_eq!(fetched["createdAt"], fetched["updatedAt"]);
}

#[test]
fn null_on_required_flexible_field_fails_invalid_field() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    let created = repo
        .create(
            EntityKind::Material,
            &json!({"name": "aluminum", "properties": {"density": 2.7}}),
        )
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let failure = repo
        .update(EntityKind::Material, id, &json!({"properties": null}))
        .unwrap_err();
    assert_eq!(failure.code, FaultCode::InvalidField);
    assert_eq!(
        failure.to_string(),
        "Failed to update material: Field 'properties' cannot be null for Material."
    );

    // The row is untouched.
    let fetched = repo.get(EntityKind::Material, id).unwrap();
    assert_eq!(fetched["properties"], json!({"density": 2.7}));
}

#[test]
fn delete_of_missing_id_fails_not_found() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    let failure = repo.delete(EntityKind::Organization, "org-404").unwrap_err();
    assert_eq!(failure.code, FaultCode::NotFound);
    assert_eq!(failure.to_string(), "Organization with ID org-404 not found");
}

#[test]
fn optional_flexible_field_omitted_reads_as_null() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    let created = repo
        .create(
            EntityKind::Toolpath,
            &json!({"name": "rough pass", "projectId": "p1", "createdBy": "u1"}),
        )
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let fetched = repo.get(EntityKind::Toolpath, id).unwrap();
    assert!(fetched["data"].is_null());
}

#[test]
fn optional_flexible_field_can_be_set_and_cleared() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    let created = repo
        .create(
            EntityKind::Toolpath,
            &json!({
                "name": "finish pass",
                "data": {"passes": 3},
                "projectId": "p1",
                "createdBy": "u1"
            }),
        )
        .unwrap();
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["data"], json!({"passes": 3}));

    let updated = repo
        .update(EntityKind::Toolpath, id, &json!({"data": null}))
        .unwrap();
    assert!(updated["data"].is_null());
}

#[test]
fn list_filters_by_scoping_key() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    for org in ["org1", "org1", "org2"] {
        repo.create(
            EntityKind::Tool,
            &json!({
                "name": format!("endmill for {org}"),
                "type": "endmill",
                "diameter": 6.0,
                "material": "carbide",
                "organizationId": org
            }),
        )
        .unwrap();
    }

    let org1 = repo.list(EntityKind::Tool, Some("org1")).unwrap();
    assert_eq!(org1.len(), 2);
    assert!(org1.iter().all(|t| t["organizationId"] == json!("org1")));

    let all = repo.list(EntityKind::Tool, None).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn empty_update_leaves_updated_at_alone() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    let created = repo
        .create(EntityKind::Organization, &json!({"name": "Acme"}))
        .unwrap();
    let id = created["id"].as_str().unwrap();
    let before = created["updatedAt"].clone();

    let after = repo.update(EntityKind::Organization, id, &json!({})).unwrap();
    assert_eq!(after["updatedAt"], before);
    assert_eq!(after["name"], json!("Acme"));
}

#[test]
fn update_refreshes_updated_at_and_applies_partial_payload() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    let created = repo
        .create(
            EntityKind::Component,
            &json!({
                "name": "bracket",
                "description": "v1",
                "data": {"mesh": "stub"},
                "projectId": "p1"
            }),
        )
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let updated = repo
        .update(EntityKind::Component, id, &json!({"description": null, "name": "bracket-2"}))
        .unwrap();
    assert_eq!(updated["name"], json!("bracket-2"));
    assert!(updated["description"].is_null());
    // Untouched fields survive.
    assert_eq!(updated["data"], json!({"mesh": "stub"}));
    assert_eq!(updated["projectId"], json!("p1"));
}

#[test]
fn update_of_missing_id_fails_not_found() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    let failure = repo
        .update(EntityKind::Drawing, "nope", &json!({"name": "B"}))
        .unwrap_err();
    assert_eq!(failure.code, FaultCode::NotFound);
    assert_eq!(failure.to_string(), "Drawing with ID nope not found");
}

#[test]
fn delete_then_get_fails_not_found() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    let created = repo
        .create(EntityKind::Project, &json!({"name": "P", "ownerId": "u1"}))
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let deleted = repo.delete(EntityKind::Project, &id).unwrap();
    assert_eq!(deleted["success"], json!(true));
    assert_eq!(deleted["message"], json!("Project deleted successfully"));

    let failure = repo.get(EntityKind::Project, &id).unwrap_err();
    assert_eq!(failure.code, FaultCode::NotFound);
}

#[test]
fn duplicate_email_is_a_conflict() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    repo.create(EntityKind::User, &json!({"email": "a@b.c"})).unwrap();
    let failure = repo
        .create(EntityKind::User, &json!({"email": "a@b.c"}))
        .unwrap_err();
    assert_eq!(failure.code, FaultCode::Conflict);
    assert!(failure.to_string().starts_with("Failed to create user:"));
}

#[test]
fn create_applies_defaults_and_validation_precedes_io() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    let created = repo
        .create(
            EntityKind::LibraryItem,
            &json!({
                "name": "fixture plate",
                "category": "fixturing",
                "type": "plate",
                "data": {"slots": 12}
            }),
        )
        .unwrap();
    assert_eq!(created["tags"], json!([]));
    assert_eq!(created["isPublic"], json!(false));
    assert!(created["properties"].is_null());

    let failure = repo
        .create(EntityKind::LibraryItem, &json!({"name": "incomplete"}))
        .unwrap_err();
    assert_eq!(failure.code, FaultCode::Validation);
    assert!(failure.to_string().contains("LibraryItem.category"));
    // Nothing was written.
    assert_eq!(repo.list(EntityKind::LibraryItem, None).unwrap().len(), 1);
}

#[test]
fn subscription_listing_scopes_by_user() {
    let tmp = tempdir().unwrap();
    let repo = repo(&tmp);

    repo.create(EntityKind::Subscription, &json!({"userId": "u1"})).unwrap();
    repo.create(EntityKind::Subscription, &json!({"userId": "u2", "plan": "PRO"})).unwrap();

    let u1 = repo.list(EntityKind::Subscription, Some("u1")).unwrap();
    assert_eq!(u1.len(), 1);
    assert_eq!(u1[0]["plan"], json!("FREE"));
    assert_eq!(u1[0]["status"], json!("inactive"));
    assert_eq!(u1[0]["cancelAtPeriodEnd"], json!(false));
}
