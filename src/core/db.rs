//! Database bootstrap: connection settings and schema initialization.
//!
//! The connection is opened once by the process entrypoint and handed to the
//! repository facade as an explicit dependency; nothing in the core reaches
//! for a global handle.

use crate::core::error::VaultError;
use crate::core::schemas;
use rusqlite::Connection;
use std::env;
use std::path::PathBuf;

pub fn db_connect(db_path: &str) -> Result<Connection, VaultError> {
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))?;
    conn.execute("PRAGMA foreign_keys=ON;", [])?;
    Ok(conn)
}

/// Create all entity tables. Idempotent.
pub fn initialize(conn: &Connection) -> Result<(), VaultError> {
    for ddl in schemas::ALL_SCHEMAS {
        conn.execute(ddl, [])?;
    }
    Ok(())
}

/// Open and initialize in one step; what the CLI entrypoints use.
pub fn open(db_path: &str) -> Result<Connection, VaultError> {
    let conn = db_connect(db_path)?;
    initialize(&conn)?;
    Ok(conn)
}

/// `CADVAULT_DB` when set, otherwise `./cadvault.db`.
pub fn default_db_path() -> PathBuf {
    env::var_os("CADVAULT_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(schemas::DB_NAME))
}
