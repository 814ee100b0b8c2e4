//! Query engine
//!
//! Pure functions that derive a filtered, ordered view of expenses or
//! contacts from a filter-state snapshot. No I/O, no caching, no shared
//! state: every call is a function of its inputs.

pub mod contact;
pub mod expense;
pub mod matcher;

pub use contact::query_contacts;
pub use expense::{
    comparator, query, query_with, query_with_sort_name, DateBounds, ExpenseComparator,
};
pub use matcher::{SearchMode, TermMatcher};
