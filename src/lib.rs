//! # Contactbook - contact book backend
//!
//! A small JSON API over a single SQLite table of contacts.
//!
//! Contactbook provides:
//! - The `Contact` record and its write-side validation
//! - SQLite-backed storage that owns the `contact` table
//! - An axum HTTP layer exposing create, list, update and delete
//! - TOML configuration and terminal helpers for the CLI

pub mod contact;
pub mod storage;
pub mod server;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use contact::{Contact, ContactInput};
pub use storage::ContactStore;
pub use config::ContactbookConfig;

/// Result type alias for Contactbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Contactbook operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Contact not found: {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
