//! Expense model
//!
//! An expense is a single outgoing payment: what it was for, how much, when,
//! how it is tagged, and who was paid. The contact is always resolved; an
//! expense cannot be built from a name that has no contact behind it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::contact::{Contact, ContactRef};
use super::ids::{ContactId, ExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Short description ("Rent", "Coffee")
    pub description: String,

    /// Optional longer note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub amount: Money,

    /// Calendar day of the expense
    pub date: NaiveDate,

    /// Category tags, in the order they were entered
    #[serde(default)]
    pub categories: Vec<String>,

    pub contact_id: ContactId,

    /// Contact name copied in for display
    pub contact_name: String,
}

impl Expense {
    /// Create a new expense paid to a known contact
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        contact: &Contact,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            note: None,
            amount,
            date,
            categories: Vec::new(),
            contact_id: contact.id,
            contact_name: contact.name.clone(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// The contact as a reference, e.g. to prefill an edit form
    pub fn contact_ref(&self) -> ContactRef {
        ContactRef::resolved(self.contact_id, self.contact_name.clone())
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}
