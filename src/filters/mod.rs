//! Filter state store
//!
//! Holds the user-selected criteria for the expense and contact lists.
//! State values are owned and passed explicitly to whoever needs them;
//! transitions are pure functions of the previous state and one intent.

pub mod contact;
pub mod expense;

pub use contact::{reduce_contacts, ContactFilterAction, ContactFilterState};
pub use expense::{reduce, FilterAction, FilterState};
