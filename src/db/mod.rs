//! Database module: row models, schema DDL and the SQLite storage layer.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for installing/uninstalling the tables (SQLite-first)
//! - `sqlite.rs`: `ProfileStorage`, the raw data-access layer

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{NewProfile, Profile, ProfileExtra};
pub use schema::{SQLITE_INSTALL, SQLITE_UNINSTALL};
pub use sqlite::{ProfileStorage, SqlitePool};
