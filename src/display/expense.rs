//! Expense display formatting
//!
//! Renders a query result as a terminal table, and single expenses as a
//! detail block.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::models::{Expense, Money};

use super::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Categories")]
    categories: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            date: expense.date.format(&settings.date_format).to_string(),
            description: truncate(&expense.description, 30),
            contact: truncate(&expense.contact_name, 20),
            categories: expense.categories.join(", "),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
        }
    }
}

/// Format a list of expenses as a table followed by a total line
///
/// Fails if the amounts cannot be totalled.
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> ExpenseResult<String> {
    if expenses.is_empty() {
        return Ok("No expenses found.\n".to_string());
    }

    let rows = expenses.iter().map(|e| ExpenseRow::new(e, settings));
    let mut table = Table::new(rows);
    table.with(Style::psql());

    let total = Money::total(expenses.iter().map(|e| e.amount))?;
    Ok(format!(
        "{}\n{} expense(s), total {}\n",
        table,
        expenses.len(),
        total.format_with_symbol(&settings.currency_symbol)
    ))
}

/// Format one expense in full
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.format(&settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "Contact:     {} ({})\n",
        expense.contact_name, expense.contact_id
    ));

    if expense.categories.is_empty() {
        output.push_str("Categories:  (none)\n");
    } else {
        output.push_str(&format!("Categories:  {}\n", expense.categories.join(", ")));
    }

    if let Some(note) = &expense.note {
        output.push_str(&format!("Note:        {}\n", note));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;
    use chrono::NaiveDate;

    fn coffee() -> Expense {
        let day = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        Expense::new("Coffee", Money::from_cents(450), day, &Contact::new("Cafe", day))
            .with_categories(["food"])
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_expense_list(&[], &Settings::default()).unwrap(),
            "No expenses found.\n"
        );
    }

    #[test]
    fn test_list_contains_rows_and_total() {
        let out = format_expense_list(&[coffee(), coffee()], &Settings::default()).unwrap();
        assert!(out.contains("Description"));
        assert!(out.contains("2024-02-15"));
        assert!(out.contains("Cafe"));
        assert!(out.contains("$4.50"));
        assert!(out.contains("2 expense(s), total $9.00"));
    }

    #[test]
    fn test_list_uses_settings() {
        let settings = Settings {
            currency_symbol: "€".into(),
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let out = format_expense_list(&[coffee()], &settings).unwrap();
        assert!(out.contains("15/02/2024"));
        assert!(out.contains("€4.50"));
    }

    #[test]
    fn test_list_total_overflow_is_an_error() {
        let mut huge = coffee();
        huge.amount = Money::from_cents(u64::MAX);

        let err = format_expense_list(&[huge, coffee()], &Settings::default()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_details() {
        let out = format_expense_details(&coffee().with_note("flat white"), &Settings::default());
        assert!(out.contains("Description: Coffee"));
        assert!(out.contains("Categories:  food"));
        assert!(out.contains("Note:        flat white"));
    }
}
