//! Expense tracker core
//!
//! The interesting part of a personal finance tracker's view layer: given a
//! collection of expenses and the user's current filter criteria, derive the
//! filtered, ordered list to show.
//!
//! # Architecture
//!
//! - `models`: expenses, contacts, amounts, IDs and sort selectors
//! - `filters`: filter state values and their pure transitions
//! - `query`: the query engine deriving expense and contact views
//! - `services`: contact book and two-phase expense submission
//! - `config`: path resolution and user settings
//! - `export`: document input and query-result export (CSV, JSON, YAML)
//! - `display`: terminal formatting
//! - `logging`: tracing subscriber setup for the binary
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_tracker::filters::{reduce, FilterAction, FilterState};
//! use expense_tracker::models::{Contact, Expense, Money, SortMode};
//! use expense_tracker::query::query;
//!
//! let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
//! let landlord = Contact::new("Landlord", day(1, 1));
//! let expenses = vec![
//!     Expense::new("Rent", Money::from_cents(150000), day(1, 1), &landlord),
//!     Expense::new("Coffee", Money::from_cents(450), day(2, 15), &landlord),
//! ];
//!
//! let filters = reduce(
//!     FilterState::default(),
//!     FilterAction::SetSortBy(SortMode::ByAmountDescending),
//! );
//! let view = query(&expenses, &filters)?;
//! assert_eq!(view[0].description, "Rent");
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod filters;
pub mod logging;
pub mod models;
pub mod query;
pub mod services;

pub use error::{ExpenseError, ExpenseResult};
