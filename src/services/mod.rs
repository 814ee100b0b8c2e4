//! Service layer for the expense tracker
//!
//! Stateful collaborators around the pure query engine: the contact book
//! and the expense draft submission protocol.

pub mod contact;
pub mod expense;

pub use contact::ContactBook;
pub use expense::ExpenseDraft;
