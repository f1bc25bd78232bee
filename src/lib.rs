//! cadvault: a local-first CAD/CAM datastore for AI agents.
//!
//! cadvault exposes a multi-entity shop-floor model (users, organizations,
//! projects, drawings, components, materials, tools, machine configurations,
//! toolpaths, library items, subscriptions) through a uniform set of
//! operations: mutating "tools" (`create_<entity>`, `update_<entity>`,
//! `delete_<entity>`) and read-only "resources"
//! (`resource://<entities>`, `resource://<entities>/{id}`).
//!
//! # Architecture
//!
//! - One static metadata table ([`core::meta`]) describes every entity kind:
//!   fields, nullability, flexible-JSON flags, scoping key, naming.
//! - One generic repository ([`core::repo`]) implements
//!   list/get/create/update/delete for all eleven kinds against an injected
//!   SQLite connection.
//! - Flexible JSON fields are persisted as opaque text and decoded back to
//!   structured form on every read path ([`core::codec`]).
//! - Partial updates honor explicit absent/null/value semantics
//!   ([`core::update`]): absence means "no change", null means "clear" where
//!   permitted, and null on a required flexible field is rejected.
//! - Every failure reaching a caller is translated into a fixed taxonomy
//!   ([`core::error`]): validation, invalid field, not found, conflict,
//!   unknown.
//!
//! The [`server`] module carries the agent-facing surface: tool/resource
//! dispatch, a newline-delimited JSON-RPC stdio loop, and the sample-data
//! seed. Process bootstrap lives in the binary.

pub mod core;
pub mod server;
