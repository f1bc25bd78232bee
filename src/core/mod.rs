//! Entity model and persistence mapping: metadata, validation, the JSON
//! field codec, partial updates, the generic repository, and the error
//! taxonomy.

pub mod codec;
pub mod db;
pub mod error;
pub mod meta;
pub mod repo;
pub mod schema;
pub mod schemas;
pub mod time;
pub mod update;
