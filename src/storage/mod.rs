//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - contact(id, name, phone)

pub mod schema;
pub mod sqlite;

pub use sqlite::ContactStore;
