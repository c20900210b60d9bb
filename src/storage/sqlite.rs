//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::{Result, Error};
use crate::contact::{Contact, ContactInput};
use super::schema;

/// SQLite-backed store owning the contact table
pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    /// Open a database file (creates the file, its directory and the table if missing)
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Contact Operations ==========

    /// Validate and insert a new contact, returning it with its assigned id
    pub fn create(&self, input: &ContactInput) -> Result<Contact> {
        let (name, phone) = input.validate()?;
        self.conn.execute(
            "INSERT INTO contact (name, phone) VALUES (?1, ?2)",
            params![name, phone],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, "created contact");

        Ok(Contact {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
        })
    }

    /// All contacts, in the order SQLite yields them
    pub fn list_all(&self) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare("SELECT id, name, phone FROM contact")?;

        let contacts = stmt
            .query_map([], |row| self.row_to_contact(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    /// Get a contact by id
    pub fn get(&self, id: i64) -> Result<Contact> {
        self.find(id)?.ok_or(Error::NotFound(id))
    }

    /// Overwrite name and phone of an existing contact.
    ///
    /// Existence is checked before validation, so an unknown id reports
    /// `NotFound` even when the input is also invalid.
    pub fn update(&self, id: i64, input: &ContactInput) -> Result<Contact> {
        if self.find(id)?.is_none() {
            return Err(Error::NotFound(id));
        }
        let (name, phone) = input.validate()?;

        self.conn.execute(
            "UPDATE contact SET name = ?1, phone = ?2 WHERE id = ?3",
            params![name, phone, id],
        )?;
        tracing::debug!(id, "updated contact");

        Ok(Contact {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
        })
    }

    /// Remove a contact permanently
    pub fn delete(&self, id: i64) -> Result<()> {
        let removed = self.conn.execute("DELETE FROM contact WHERE id = ?1", [id])?;
        if removed == 0 {
            return Err(Error::NotFound(id));
        }
        tracing::debug!(id, "deleted contact");
        Ok(())
    }

    /// Count all contacts
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM contact", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn find(&self, id: i64) -> Result<Option<Contact>> {
        self.conn
            .query_row(
                "SELECT id, name, phone FROM contact WHERE id = ?1",
                [id],
                |row| self.row_to_contact(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Helper to convert a row to a Contact
    fn row_to_contact(&self, row: &rusqlite::Row) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get(0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
        })
    }
}
