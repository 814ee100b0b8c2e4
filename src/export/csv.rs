//! CSV export of a query result
//!
//! One row per expense, in query order. Categories are joined with `;` so
//! the column stays a single field.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

const HEADER: [&str; 7] = [
    "ID",
    "Date",
    "Description",
    "Contact",
    "Categories",
    "Note",
    "Amount",
];

/// Write expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        let id = expense.id.as_uuid().to_string();
        let date = expense.date.format("%Y-%m-%d").to_string();
        let categories = expense.categories.join(";");
        let amount = expense.amount.to_decimal_string();

        csv_writer
            .write_record([
                id.as_str(),
                date.as_str(),
                expense.description.as_str(),
                expense.contact_name.as_str(),
                categories.as_str(),
                expense.note.as_deref().unwrap_or(""),
                amount.as_str(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_header_and_rows() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let cafe = Contact::new("Cafe, Main St", day);
        let expenses = vec![
            Expense::new("Coffee", Money::from_cents(450), day, &cafe)
                .with_categories(["food", "treats"])
                .with_note("said \"hi\""),
            Expense::new("Bagel", Money::from_cents(300), day, &cafe),
        ];

        let mut out = Vec::new();
        export_expenses_csv(&expenses, &mut out).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, HEADER);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "2024-02-15");
        assert_eq!(&rows[0][2], "Coffee");
        assert_eq!(&rows[0][3], "Cafe, Main St");
        assert_eq!(&rows[0][4], "food;treats");
        assert_eq!(&rows[0][5], "said \"hi\"");
        assert_eq!(&rows[0][6], "4.50");
        assert_eq!(&rows[1][2], "Bagel");
        assert_eq!(&rows[1][5], "");
    }
}
