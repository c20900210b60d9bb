//! Database schema definitions

/// SQL to create the contact table
///
/// `AUTOINCREMENT` keeps ids from being reused after the highest row is deleted.
pub const CREATE_CONTACT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS contact (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL,
    phone VARCHAR(100) NOT NULL
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_CONTACT_TABLE]
}
