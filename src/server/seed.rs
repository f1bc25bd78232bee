//! Sample-data seed: an admin user with an active subscription, a sample
//! organization, and a sample project wired to both.

use crate::core::error::{FaultCode, OpFailure};
use crate::core::meta::EntityKind;
use crate::core::repo::Repository;
use serde_json::{Value as JsonValue, json};

const ADMIN_EMAIL: &str = "admin@cadvault.local";

/// Populate the sample rows. Re-running against a seeded database reports
/// success without touching anything (the admin email is unique).
pub fn seed(repo: &Repository) -> Result<JsonValue, OpFailure> {
    let admin = match repo.create(
        EntityKind::User,
        &json!({
            "name": "Admin User",
            "email": ADMIN_EMAIL,
            "password": "change-me",
        }),
    ) {
        Ok(user) => user,
        Err(failure) if failure.code == FaultCode::Conflict => {
            return Ok(json!({
                "success": true,
                "message": "sample data already present",
            }));
        }
        Err(failure) => return Err(failure),
    };
    let admin_id = admin["id"].as_str().unwrap_or_default().to_string();

    repo.create(
        EntityKind::Subscription,
        &json!({
            "userId": admin_id,
            "plan": "PREMIUM",
            "status": "active",
        }),
    )?;

    let organization = repo.create(
        EntityKind::Organization,
        &json!({
            "name": "Sample Organization",
            "description": "A sample organization for testing",
        }),
    )?;

    let project = repo.create(
        EntityKind::Project,
        &json!({
            "name": "Sample Project",
            "description": "A sample project for testing",
            "ownerId": admin_id,
            "organizationId": organization["id"],
        }),
    )?;

    Ok(json!({
        "success": true,
        "message": "sample data created",
        "adminUserId": admin_id,
        "organizationId": organization["id"],
        "projectId": project["id"],
    }))
}
