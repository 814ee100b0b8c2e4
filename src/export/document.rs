//! Expense document input
//!
//! The CLI reads its expenses from a JSON document. Expenses in the document
//! may name their contact without an ID; those are resolved against the
//! document's contacts (creating new ones as needed) while loading, so every
//! [`Expense`] handed to the query engine carries a resolved contact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Contact, ContactRef, Expense, ExpenseId, Money};
use crate::services::ContactBook;

/// Schema version this build reads
pub const DOCUMENT_SCHEMA_VERSION: u32 = 1;

/// Expense as written in a document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Generated if absent
    #[serde(default)]
    pub id: Option<ExpenseId>,
    pub description: String,
    #[serde(default)]
    pub note: Option<String>,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default)]
    pub categories: Vec<String>,
    pub contact: ContactRef,
}

/// On-disk document layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDocument {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
}

fn default_schema_version() -> u32 {
    DOCUMENT_SCHEMA_VERSION
}

/// A document with all contacts resolved
#[derive(Debug)]
pub struct LoadedDocument {
    pub contacts: ContactBook,
    pub expenses: Vec<Expense>,
}

impl ExpenseDocument {
    /// Parse a document from a reader
    pub fn from_reader<R: Read>(reader: R) -> ExpenseResult<Self> {
        let document: ExpenseDocument = serde_json::from_reader(reader)?;
        if document.schema_version > DOCUMENT_SCHEMA_VERSION {
            return Err(ExpenseError::Config(format!(
                "Unsupported document schema version {} (newest supported is {})",
                document.schema_version, DOCUMENT_SCHEMA_VERSION
            )));
        }
        Ok(document)
    }

    /// Resolve every expense's contact and build the expense list
    ///
    /// A contact created here is dated with the first expense that names it.
    pub fn resolve(self) -> ExpenseResult<LoadedDocument> {
        let book = ContactBook::with_contacts(self.contacts);

        let expenses = self
            .expenses
            .into_iter()
            .map(|record| {
                let contact = book.resolve_or_create_on(&record.contact, record.date)?;
                let mut expense =
                    Expense::new(record.description, record.amount, record.date, &contact)
                        .with_categories(record.categories);
                expense.note = record.note;
                if let Some(id) = record.id {
                    expense.id = id;
                }
                Ok(expense)
            })
            .collect::<ExpenseResult<Vec<_>>>()?;

        Ok(LoadedDocument {
            contacts: book,
            expenses,
        })
    }
}

/// Read and resolve a document from a file
pub fn load_document(path: &Path) -> ExpenseResult<LoadedDocument> {
    let file = std::fs::File::open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let loaded = ExpenseDocument::from_reader(std::io::BufReader::new(file))?.resolve()?;

    tracing::info!(
        path = %path.display(),
        expenses = loaded.expenses.len(),
        "loaded expense document"
    );
    Ok(loaded)
}
