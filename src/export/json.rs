//! JSON export of a query result
//!
//! Writes the derived expense list together with the filters that produced
//! it, so the file explains itself.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::filters::FilterState;
use crate::models::{Expense, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Query result export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    /// Filters that produced `expenses`
    pub filters: FilterState,
    pub metadata: ExportMetadata,
    /// Expenses in query order
    pub expenses: Vec<Expense>,
}

/// Summary of the exported expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub total: Money,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}

impl ExportMetadata {
    pub fn summarize(expenses: &[Expense]) -> ExpenseResult<Self> {
        Ok(Self {
            expense_count: expenses.len(),
            total: Money::total(expenses.iter().map(|e| e.amount))?,
            earliest: expenses.iter().map(|e| e.date).min(),
            latest: expenses.iter().map(|e| e.date).max(),
        })
    }
}

impl QueryExport {
    pub fn new(expenses: &[Expense], filters: &FilterState) -> ExpenseResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            filters: filters.clone(),
            metadata: ExportMetadata::summarize(expenses)?,
            expenses: expenses.to_vec(),
        })
    }
}

/// Write a query result as pretty-printed JSON
pub fn export_expenses_json<W: Write>(
    expenses: &[Expense],
    filters: &FilterState,
    writer: &mut W,
) -> ExpenseResult<()> {
    let export = QueryExport::new(expenses, filters)?;
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))
}
