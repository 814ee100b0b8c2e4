//! YAML export of a query result

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::QueryExport;
use crate::filters::FilterState;
use crate::models::Expense;

/// Write a query result as YAML with a short comment header
pub fn export_expenses_yaml<W: Write>(
    expenses: &[Expense],
    filters: &FilterState,
    writer: &mut W,
) -> ExpenseResult<()> {
    let export = QueryExport::new(expenses, filters)?;

    let header = format!(
        "# Expense query export\n# Generated: {}\n\n",
        export.exported_at
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> ExpenseResult<QueryExport> {
    serde_yaml::from_str(yaml_str).map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, Money, SortMode};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_round_trip_keeps_order() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let shop = Contact::new("Shop", day);
        let expenses = vec![
            Expense::new("b", Money::from_cents(2), day, &shop),
            Expense::new("a", Money::from_cents(1), day, &shop).with_note("second"),
        ];
        let filters = FilterState::new().set_sort_by(SortMode::ByAmountDescending);

        let mut out = Vec::new();
        export_expenses_yaml(&expenses, &filters, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# Expense query export"));

        let back = import_from_yaml(&text).unwrap();
        assert_eq!(back.expenses, expenses);
        assert_eq!(back.filters.sort_by, SortMode::ByAmountDescending);
    }
}
