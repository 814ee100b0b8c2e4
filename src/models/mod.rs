//! Core data models for the expense tracker
//!
//! This module contains the data structures the query engine works on:
//! expenses, contacts, amounts, identifiers and sort selectors.

pub mod contact;
pub mod expense;
pub mod ids;
pub mod money;
pub mod sort;

pub use contact::{Contact, ContactRef};
pub use expense::Expense;
pub use ids::{ContactId, ExpenseId};
pub use money::Money;
pub use sort::{ContactSortMode, SortMode};
