//! SQL schema definitions for the cadvault database.
//!
//! One table per entity kind. Columns carry the wire field names (camelCase)
//! so the metadata table in `core::meta` needs exactly one name per field.
//! Reference columns (`projectId`, `ownerId`, ...) are plain TEXT: cascade
//! and referential integrity belong to the surrounding store schema, not to
//! this layer. The two UNIQUE constraints below are the model's only
//! uniqueness rules and the only sources of `Conflict`.

pub const DB_NAME: &str = "cadvault.db";

pub const USERS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT,
        email TEXT UNIQUE,
        emailVerified TEXT,
        image TEXT,
        password TEXT,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

pub const SUBSCRIPTIONS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS subscriptions (
        id TEXT PRIMARY KEY,
        userId TEXT NOT NULL UNIQUE,
        plan TEXT NOT NULL DEFAULT 'FREE',
        status TEXT NOT NULL DEFAULT 'inactive',
        stripeCustomerId TEXT,
        stripeSubscriptionId TEXT,
        stripePriceId TEXT,
        stripeCurrentPeriodEnd TEXT,
        lsCustomerId TEXT,
        lsSubscriptionId TEXT,
        lsVariantId TEXT,
        lsCurrentPeriodEnd TEXT,
        cancelAtPeriodEnd INTEGER NOT NULL DEFAULT 0,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

pub const ORGANIZATIONS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS organizations (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

pub const PROJECTS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS projects (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        isPublic INTEGER NOT NULL DEFAULT 0,
        ownerId TEXT NOT NULL,
        organizationId TEXT,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

pub const DRAWINGS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS drawings (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        data TEXT NOT NULL, -- encoded flexible JSON, never NULL
        thumbnail TEXT,
        projectId TEXT NOT NULL,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

pub const COMPONENTS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS components (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        data TEXT NOT NULL, -- encoded flexible JSON, never NULL
        thumbnail TEXT,
        type TEXT,
        isPublic INTEGER NOT NULL DEFAULT 0,
        projectId TEXT NOT NULL,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

pub const MATERIALS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS materials (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        properties TEXT NOT NULL, -- encoded flexible JSON, never NULL
        isPublic INTEGER NOT NULL DEFAULT 0,
        ownerId TEXT,
        organizationId TEXT,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

pub const TOOLS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS tools (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        diameter REAL NOT NULL,
        material TEXT NOT NULL,
        numberOfFlutes REAL,
        maxRPM REAL,
        coolantType TEXT,
        cuttingLength REAL,
        totalLength REAL,
        shankDiameter REAL,
        notes TEXT,
        isPublic INTEGER NOT NULL DEFAULT 0,
        ownerId TEXT,
        organizationId TEXT,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

pub const MACHINE_CONFIGS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS machine_configs (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        description TEXT,
        config TEXT NOT NULL, -- encoded flexible JSON, never NULL
        isPublic INTEGER NOT NULL DEFAULT 0,
        ownerId TEXT NOT NULL,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

pub const TOOLPATHS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS toolpaths (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        data TEXT, -- encoded flexible JSON, NULL when never set or cleared
        type TEXT,
        operationType TEXT,
        gcode TEXT,
        thumbnail TEXT,
        isPublic INTEGER NOT NULL DEFAULT 0,
        projectId TEXT NOT NULL,
        createdBy TEXT NOT NULL,
        drawingId TEXT,
        materialId TEXT,
        toolId TEXT,
        machineConfigId TEXT,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

pub const LIBRARY_ITEMS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS library_items (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        category TEXT NOT NULL,
        type TEXT NOT NULL,
        data TEXT NOT NULL, -- encoded flexible JSON, never NULL
        properties TEXT, -- encoded flexible JSON, nullable
        tags TEXT NOT NULL DEFAULT '[]', -- encoded string list
        thumbnail TEXT,
        isPublic INTEGER NOT NULL DEFAULT 0,
        ownerId TEXT,
        organizationId TEXT,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
";

/// All table definitions, applied in order at initialization.
pub const ALL_SCHEMAS: [&str; 11] = [
    USERS_SCHEMA,
    SUBSCRIPTIONS_SCHEMA,
    ORGANIZATIONS_SCHEMA,
    PROJECTS_SCHEMA,
    DRAWINGS_SCHEMA,
    COMPONENTS_SCHEMA,
    MATERIALS_SCHEMA,
    TOOLS_SCHEMA,
    MACHINE_CONFIGS_SCHEMA,
    TOOLPATHS_SCHEMA,
    LIBRARY_ITEMS_SCHEMA,
];
