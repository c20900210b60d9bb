use tabled::{settings::Style, Table, Tabled};
use crate::contact::Contact;

#[derive(Tabled)]
pub struct ContactRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Phone")]
    pub phone: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            phone: contact.phone.clone(),
        }
    }
}

/// Render contacts as a rounded table; empty input renders as an empty string
pub fn contacts_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return String::new();
    }

    let rows: Vec<ContactRow> = contacts.iter().map(ContactRow::from).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}
