//! Error taxonomy and boundary translation.
//!
//! Internally every fallible path returns [`VaultError`]. Before a failure
//! leaves the repository facade it is translated into an [`OpFailure`]
//! carrying the entity kind, the operation name, a fixed [`FaultCode`], and
//! the original cause. Raw rusqlite errors never cross the facade boundary.

use crate::core::meta::EntityKind;
use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    InvalidField(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The closed set of caller-facing failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    /// Schema/shape violation, detected before any I/O.
    Validation,
    /// Business-rule violation (e.g. null on a required flexible field).
    InvalidField,
    /// Target id absent for get/update/delete.
    NotFound,
    /// Uniqueness violation surfaced by the store.
    Conflict,
    /// Any other store failure, original cause preserved.
    Unknown,
}

impl FaultCode {
    pub fn as_str(self) -> &'static str {
        match self {
            FaultCode::Validation => "validation_error",
            FaultCode::InvalidField => "invalid_field",
            FaultCode::NotFound => "not_found",
            FaultCode::Conflict => "conflict",
            FaultCode::Unknown => "unknown",
        }
    }
}

/// A translated operation failure as seen by callers of the facade.
#[derive(Debug)]
pub struct OpFailure {
    pub kind: EntityKind,
    pub op: &'static str,
    pub code: FaultCode,
    pub cause: String,
    source: Option<VaultError>,
}

impl OpFailure {
    /// Map an internal error onto the fixed taxonomy.
    ///
    /// Constraint violations become `Conflict`; a no-row result becomes
    /// `NotFound` (the facade normally raises that itself with a proper
    /// message); everything else store-originated is `Unknown`.
    pub fn translate(kind: EntityKind, op: &'static str, err: VaultError) -> Self {
        let code = match &err {
            VaultError::Validation(_) => FaultCode::Validation,
            VaultError::InvalidField(_) => FaultCode::InvalidField,
            VaultError::NotFound(_) => FaultCode::NotFound,
            VaultError::Conflict(_) => FaultCode::Conflict,
            VaultError::Sqlite(rusqlite::Error::QueryReturnedNoRows) => FaultCode::NotFound,
            VaultError::Sqlite(rusqlite::Error::SqliteFailure(c, _))
                if c.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                FaultCode::Conflict
            }
            _ => FaultCode::Unknown,
        };
        OpFailure { kind, op, code, cause: err.to_string(), source: Some(err) }
    }
}

impl fmt::Display for OpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Missing targets read as "<Entity> with ID <id> not found"; every
        // other failure is prefixed with the operation context.
        if self.code == FaultCode::NotFound {
            write!(f, "{}", self.cause)
        } else {
            write!(f, "Failed to {} {}: {}", self.op, self.kind.label(), self.cause)
        }
    }
}

impl std::error::Error for OpFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}
