//! Entity metadata for the cadvault data model.
//!
//! Every entity kind is described by one static [`EntityMeta`] record: its
//! table, tool/resource naming, scoping key, and the ordered list of
//! [`FieldSpec`]s. The generic repository, the schema registry, and the
//! partial-update builder are all driven by this table; there is no
//! per-entity code anywhere else.

/// The eleven persisted record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Subscription,
    Organization,
    Project,
    Drawing,
    Component,
    Material,
    Tool,
    MachineConfig,
    Toolpath,
    LibraryItem,
}

impl EntityKind {
    pub const ALL: [EntityKind; 11] = [
        EntityKind::User,
        EntityKind::Subscription,
        EntityKind::Organization,
        EntityKind::Project,
        EntityKind::Drawing,
        EntityKind::Component,
        EntityKind::Material,
        EntityKind::Tool,
        EntityKind::MachineConfig,
        EntityKind::Toolpath,
        EntityKind::LibraryItem,
    ];

    pub fn meta(self) -> &'static EntityMeta {
        match self {
            EntityKind::User => &USER,
            EntityKind::Subscription => &SUBSCRIPTION,
            EntityKind::Organization => &ORGANIZATION,
            EntityKind::Project => &PROJECT,
            EntityKind::Drawing => &DRAWING,
            EntityKind::Component => &COMPONENT,
            EntityKind::Material => &MATERIAL,
            EntityKind::Tool => &TOOL,
            EntityKind::MachineConfig => &MACHINE_CONFIG,
            EntityKind::Toolpath => &TOOLPATH,
            EntityKind::LibraryItem => &LIBRARY_ITEM,
        }
    }

    /// PascalCase name used in error messages ("Drawing", "MachineConfig").
    pub fn name(self) -> &'static str {
        self.meta().name
    }

    /// Human label used in failure envelopes ("drawing", "machine config").
    pub fn label(self) -> &'static str {
        self.meta().label
    }
}

/// Storage/wire type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    Bool,
    /// Flexible JSON document, persisted as encoded text.
    Json,
    /// List of strings, persisted as encoded text.
    TextList,
}

impl FieldType {
    pub fn expected(self) -> &'static str {
        match self {
            FieldType::Text => "a string",
            FieldType::Number => "a number",
            FieldType::Bool => "a boolean",
            FieldType::Json => "a JSON object",
            FieldType::TextList => "an array of strings",
        }
    }
}

/// Default applied when a field is absent from a create payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Bool(bool),
    Text(&'static str),
    EmptyList,
}

/// One column of an entity, shared by Create and Update validation.
///
/// `required` means the create payload must carry a non-null value.
/// `nullable` means an update may clear the field with an explicit null.
/// `updatable` is false for relation/identity fields fixed at creation.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    pub nullable: bool,
    pub updatable: bool,
    pub default: Option<FieldDefault>,
}

impl FieldSpec {
    const fn required(name: &'static str, ty: FieldType) -> Self {
        FieldSpec { name, ty, required: true, nullable: false, updatable: true, default: None }
    }

    const fn optional(name: &'static str, ty: FieldType) -> Self {
        FieldSpec { name, ty, required: false, nullable: true, updatable: true, default: None }
    }

    const fn with_default(name: &'static str, ty: FieldType, default: FieldDefault) -> Self {
        FieldSpec { name, ty, required: false, nullable: false, updatable: true, default: Some(default) }
    }

    /// Field is settable at creation only (relations, identity references).
    const fn create_only(mut self) -> Self {
        self.updatable = false;
        self
    }

    /// True for fields persisted as encoded text via the JSON codec.
    pub fn is_flexible(&self) -> bool {
        matches!(self.ty, FieldType::Json | FieldType::TextList)
    }
}

/// The single foreign-key-like column a collection listing filters by.
#[derive(Debug, Clone, Copy)]
pub struct ScopeKey {
    /// Column name, camelCase to match the wire field ("organizationId").
    pub column: &'static str,
    /// Resource-template argument name ("organization_id").
    pub arg: &'static str,
}

#[derive(Debug)]
pub struct EntityMeta {
    pub kind: EntityKind,
    pub name: &'static str,
    pub label: &'static str,
    pub table: &'static str,
    /// Suffix of the tool names: `create_<tool>` / `update_<tool>` / `delete_<tool>`.
    pub tool: &'static str,
    /// Identifier argument on update/delete tools and item resources.
    pub id_arg: &'static str,
    /// Path segment of the collection resource: `resource://<slug>`.
    pub slug: &'static str,
    pub scope: Option<ScopeKey>,
    pub fields: &'static [FieldSpec],
}

impl EntityMeta {
    /// Resolve a tool-name suffix ("drawing", "machine_config").
    pub fn by_tool(tool: &str) -> Option<&'static EntityMeta> {
        EntityKind::ALL.iter().map(|k| k.meta()).find(|m| m.tool == tool)
    }

    /// Resolve a resource path segment ("drawings", "machine-configs").
    pub fn by_slug(slug: &str) -> Option<&'static EntityMeta> {
        EntityKind::ALL.iter().map(|k| k.meta()).find(|m| m.slug == slug)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

use FieldType::{Bool, Json, Number, Text, TextList};

pub static USER: EntityMeta = EntityMeta {
    kind: EntityKind::User,
    name: "User",
    label: "user",
    table: "users",
    tool: "user",
    id_arg: "user_id",
    slug: "users",
    scope: None,
    fields: &[
        FieldSpec::optional("name", Text),
        FieldSpec::optional("email", Text),
        FieldSpec::optional("emailVerified", Text).create_only(),
        FieldSpec::optional("image", Text),
        FieldSpec::optional("password", Text),
    ],
};

pub static SUBSCRIPTION: EntityMeta = EntityMeta {
    kind: EntityKind::Subscription,
    name: "Subscription",
    label: "subscription",
    table: "subscriptions",
    tool: "subscription",
    id_arg: "subscription_id",
    slug: "subscriptions",
    scope: Some(ScopeKey { column: "userId", arg: "user_id" }),
    fields: &[
        FieldSpec::required("userId", Text).create_only(),
        FieldSpec::with_default("plan", Text, FieldDefault::Text("FREE")),
        FieldSpec::with_default("status", Text, FieldDefault::Text("inactive")),
        FieldSpec::optional("stripeCustomerId", Text),
        FieldSpec::optional("stripeSubscriptionId", Text),
        FieldSpec::optional("stripePriceId", Text),
        FieldSpec::optional("stripeCurrentPeriodEnd", Text),
        FieldSpec::optional("lsCustomerId", Text),
        FieldSpec::optional("lsSubscriptionId", Text),
        FieldSpec::optional("lsVariantId", Text),
        FieldSpec::optional("lsCurrentPeriodEnd", Text),
        FieldSpec::with_default("cancelAtPeriodEnd", Bool, FieldDefault::Bool(false)),
    ],
};

pub static ORGANIZATION: EntityMeta = EntityMeta {
    kind: EntityKind::Organization,
    name: "Organization",
    label: "organization",
    table: "organizations",
    tool: "organization",
    id_arg: "organization_id",
    slug: "organizations",
    scope: None,
    fields: &[
        FieldSpec::required("name", Text),
        FieldSpec::optional("description", Text),
    ],
};

pub static PROJECT: EntityMeta = EntityMeta {
    kind: EntityKind::Project,
    name: "Project",
    label: "project",
    table: "projects",
    tool: "project",
    id_arg: "project_id",
    slug: "projects",
    scope: Some(ScopeKey { column: "organizationId", arg: "organization_id" }),
    fields: &[
        FieldSpec::required("name", Text),
        FieldSpec::optional("description", Text),
        FieldSpec::with_default("isPublic", Bool, FieldDefault::Bool(false)),
        FieldSpec::required("ownerId", Text).create_only(),
        FieldSpec::optional("organizationId", Text),
    ],
};

pub static DRAWING: EntityMeta = EntityMeta {
    kind: EntityKind::Drawing,
    name: "Drawing",
    label: "drawing",
    table: "drawings",
    tool: "drawing",
    id_arg: "drawing_id",
    slug: "drawings",
    scope: Some(ScopeKey { column: "projectId", arg: "project_id" }),
    fields: &[
        FieldSpec::required("name", Text),
        FieldSpec::optional("description", Text),
        FieldSpec::required("data", Json),
        FieldSpec::optional("thumbnail", Text),
        FieldSpec::required("projectId", Text).create_only(),
    ],
};

pub static COMPONENT: EntityMeta = EntityMeta {
    kind: EntityKind::Component,
    name: "Component",
    label: "component",
    table: "components",
    tool: "component",
    id_arg: "component_id",
    slug: "components",
    scope: Some(ScopeKey { column: "projectId", arg: "project_id" }),
    fields: &[
        FieldSpec::required("name", Text),
        FieldSpec::optional("description", Text),
        FieldSpec::required("data", Json),
        FieldSpec::optional("thumbnail", Text),
        FieldSpec::optional("type", Text),
        FieldSpec::with_default("isPublic", Bool, FieldDefault::Bool(false)),
        FieldSpec::required("projectId", Text).create_only(),
    ],
};

pub static MATERIAL: EntityMeta = EntityMeta {
    kind: EntityKind::Material,
    name: "Material",
    label: "material",
    table: "materials",
    tool: "material",
    id_arg: "material_id",
    slug: "materials",
    scope: Some(ScopeKey { column: "organizationId", arg: "organization_id" }),
    fields: &[
        FieldSpec::required("name", Text),
        FieldSpec::optional("description", Text),
        FieldSpec::required("properties", Json),
        FieldSpec::with_default("isPublic", Bool, FieldDefault::Bool(false)),
        FieldSpec::optional("ownerId", Text).create_only(),
        FieldSpec::optional("organizationId", Text).create_only(),
    ],
};

pub static TOOL: EntityMeta = EntityMeta {
    kind: EntityKind::Tool,
    name: "Tool",
    label: "tool",
    table: "tools",
    tool: "tool",
    id_arg: "tool_id",
    slug: "tools",
    scope: Some(ScopeKey { column: "organizationId", arg: "organization_id" }),
    fields: &[
        FieldSpec::required("name", Text),
        FieldSpec::required("type", Text),
        FieldSpec::required("diameter", Number),
        FieldSpec::required("material", Text),
        FieldSpec::optional("numberOfFlutes", Number),
        FieldSpec::optional("maxRPM", Number),
        FieldSpec::optional("coolantType", Text),
        FieldSpec::optional("cuttingLength", Number),
        FieldSpec::optional("totalLength", Number),
        FieldSpec::optional("shankDiameter", Number),
        FieldSpec::optional("notes", Text),
        FieldSpec::with_default("isPublic", Bool, FieldDefault::Bool(false)),
        FieldSpec::optional("ownerId", Text).create_only(),
        FieldSpec::optional("organizationId", Text).create_only(),
    ],
};

pub static MACHINE_CONFIG: EntityMeta = EntityMeta {
    kind: EntityKind::MachineConfig,
    name: "MachineConfig",
    label: "machine config",
    table: "machine_configs",
    tool: "machine_config",
    id_arg: "machine_config_id",
    slug: "machine-configs",
    scope: Some(ScopeKey { column: "ownerId", arg: "owner_id" }),
    fields: &[
        FieldSpec::required("name", Text),
        FieldSpec::required("type", Text),
        FieldSpec::optional("description", Text),
        FieldSpec::required("config", Json),
        FieldSpec::with_default("isPublic", Bool, FieldDefault::Bool(false)),
        FieldSpec::required("ownerId", Text).create_only(),
    ],
};

pub static TOOLPATH: EntityMeta = EntityMeta {
    kind: EntityKind::Toolpath,
    name: "Toolpath",
    label: "toolpath",
    table: "toolpaths",
    tool: "toolpath",
    id_arg: "toolpath_id",
    slug: "toolpaths",
    scope: Some(ScopeKey { column: "projectId", arg: "project_id" }),
    fields: &[
        FieldSpec::required("name", Text),
        FieldSpec::optional("description", Text),
        // The one optional flexible field in the model.
        FieldSpec::optional("data", Json),
        FieldSpec::optional("type", Text),
        FieldSpec::optional("operationType", Text),
        FieldSpec::optional("gcode", Text),
        FieldSpec::optional("thumbnail", Text),
        FieldSpec::with_default("isPublic", Bool, FieldDefault::Bool(false)),
        FieldSpec::required("projectId", Text).create_only(),
        FieldSpec::required("createdBy", Text).create_only(),
        FieldSpec::optional("drawingId", Text).create_only(),
        FieldSpec::optional("materialId", Text).create_only(),
        FieldSpec::optional("toolId", Text).create_only(),
        FieldSpec::optional("machineConfigId", Text).create_only(),
    ],
};

pub static LIBRARY_ITEM: EntityMeta = EntityMeta {
    kind: EntityKind::LibraryItem,
    name: "LibraryItem",
    label: "library item",
    table: "library_items",
    tool: "library_item",
    id_arg: "library_item_id",
    slug: "library-items",
    scope: Some(ScopeKey { column: "organizationId", arg: "organization_id" }),
    fields: &[
        FieldSpec::required("name", Text),
        FieldSpec::optional("description", Text),
        FieldSpec::required("category", Text),
        FieldSpec::required("type", Text),
        FieldSpec::required("data", Json),
        FieldSpec::optional("properties", Json),
        FieldSpec::with_default("tags", TextList, FieldDefault::EmptyList),
        FieldSpec::optional("thumbnail", Text),
        FieldSpec::with_default("isPublic", Bool, FieldDefault::Bool(false)),
        FieldSpec::optional("ownerId", Text).create_only(),
        FieldSpec::optional("organizationId", Text).create_only(),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_resolves_by_tool_and_slug() {
        for kind in EntityKind::ALL {
            let meta = kind.meta();
            assert_eq!(EntityMeta::by_tool(meta.tool).unwrap().kind, kind);
            assert_eq!(EntityMeta::by_slug(meta.slug).unwrap().kind, kind);
        }
    }

    #[test]
    fn required_flexible_fields_are_never_nullable() {
        for kind in EntityKind::ALL {
            for f in kind.meta().fields {
                if f.is_flexible() && f.required {
                    assert!(!f.nullable, "{}.{}", kind.name(), f.name);
                }
            }
        }
    }

    #[test]
    fn scoping_keys_match_the_model() {
        assert_eq!(DRAWING.scope.unwrap().column, "projectId");
        assert_eq!(MATERIAL.scope.unwrap().column, "organizationId");
        assert_eq!(MACHINE_CONFIG.scope.unwrap().column, "ownerId");
        assert!(USER.scope.is_none());
        assert!(ORGANIZATION.scope.is_none());
    }
}
