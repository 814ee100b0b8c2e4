//! Contact display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Contact;

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Categories")]
    categories: String,
    #[tabled(rename = "Since")]
    since: String,
}

/// Format a list of contacts as a table
pub fn format_contact_list(contacts: &[Contact], settings: &Settings) -> String {
    if contacts.is_empty() {
        return "No contacts found.\n".to_string();
    }

    let rows = contacts.iter().map(|c| ContactRow {
        name: c.name.clone(),
        categories: c.categories.join(", "),
        since: c.created_on.format(&settings.date_format).to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
