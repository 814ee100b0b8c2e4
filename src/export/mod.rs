//! Document input and query-result export
//!
//! - Document: JSON input of contacts and expenses
//! - CSV: spreadsheet-friendly rows of a query result
//! - JSON / YAML: a query result with its filters and a summary

pub mod csv;
pub mod document;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use document::{load_document, ExpenseDocument, ExpenseRecord, LoadedDocument};
pub use json::{export_expenses_json, ExportMetadata, QueryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_expenses_yaml, import_from_yaml};
