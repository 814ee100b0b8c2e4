//! Expense drafts
//!
//! A draft holds the raw values of an expense form. Submission happens in
//! two phases:
//!
//! 1. [`ContactBook::resolve_or_create`] turns the draft's contact into the
//!    stored [`Contact`].
//! 2. [`ExpenseDraft::submit`] builds the [`Expense`] from the draft plus
//!    that resolved contact. The expense takes the contact's ID and stored
//!    name, never the text typed into the draft.
//!
//! [`ExpenseDraft::submit_to`] runs both, validating first so an invalid
//! draft never creates a contact.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Contact, ContactRef, Expense, ExpenseId, Money};

use super::contact::ContactBook;

const MISSING_FIELDS: &str = "you need to fill out all non-optional fields";

/// Raw form values for creating or editing an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// Set when editing an existing expense
    pub id: Option<ExpenseId>,
    pub description: String,
    /// Amount text as typed, e.g. "12.50"
    pub amount: String,
    pub date: Option<NaiveDate>,
    pub contact: ContactRef,
    /// Comma-separated categories
    pub categories: String,
    pub note: String,
}

impl ExpenseDraft {
    /// Blank draft dated `date`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: None,
            description: String::new(),
            amount: String::new(),
            date: Some(date),
            contact: ContactRef::unresolved(""),
            categories: String::new(),
            note: String::new(),
        }
    }

    /// Draft prefilled from an existing expense, for editing
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            id: Some(expense.id),
            description: expense.description.clone(),
            amount: expense.amount.to_decimal_string(),
            date: Some(expense.date),
            contact: expense.contact_ref(),
            categories: expense.categories.join(","),
            note: expense.note.clone().unwrap_or_default(),
        }
    }

    /// Update the amount text if it is a valid (possibly empty) amount
    ///
    /// Returns `false` and leaves the draft unchanged otherwise, the way a
    /// form field ignores a keystroke that would make it invalid.
    pub fn set_amount(&mut self, text: &str) -> bool {
        if text.is_empty() || Money::parse(text).is_ok() {
            self.amount = text.to_string();
            true
        } else {
            false
        }
    }

    /// Check that every required field is filled and the amount parses
    pub fn validate(&self) -> ExpenseResult<Money> {
        let missing = self.description.trim().is_empty()
            || self.amount.trim().is_empty()
            || self.contact.name.trim().is_empty()
            || self.date.is_none();

        if missing {
            return Err(ExpenseError::Validation(MISSING_FIELDS.into()));
        }

        Money::parse(&self.amount)
    }

    /// Categories split on commas, trimmed, blanks dropped
    pub fn category_list(&self) -> Vec<String> {
        self.categories
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect()
    }

    /// Build the expense once its contact has been resolved
    pub fn submit(self, contact: &Contact) -> ExpenseResult<Expense> {
        let amount = self.validate()?;
        let categories = self.category_list();
        let date = self
            .date
            .ok_or_else(|| ExpenseError::Validation(MISSING_FIELDS.into()))?;

        let mut expense = Expense::new(self.description.trim(), amount, date, contact)
            .with_categories(categories);

        if let Some(id) = self.id {
            expense.id = id;
        }
        if !self.note.trim().is_empty() {
            expense.note = Some(self.note);
        }

        Ok(expense)
    }

    /// Validate, resolve the contact against `book`, then submit
    pub fn submit_to(self, book: &ContactBook) -> ExpenseResult<Expense> {
        self.validate()?;
        let contact = book.resolve_or_create(&self.contact)?;
        self.submit(&contact)
    }
}
