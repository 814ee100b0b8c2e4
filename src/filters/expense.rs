//! Expense list filter state
//!
//! Every transition takes the previous state by value and returns the next
//! one. Nothing here reorders or inspects expenses; the state is only read by
//! the query engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ExpenseResult;
use crate::models::SortMode;

/// Search, sort and date-range criteria for the expense list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Matched case-insensitively against description and note
    pub term: String,

    pub sort_by: SortMode,

    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// One user intent on the expense filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetSearchTerm(String),
    SetSortBy(SortMode),
    SetStartDate(Option<NaiveDate>),
    SetEndDate(Option<NaiveDate>),
    /// Back to the session defaults
    Reset,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search term verbatim (no trimming or case folding)
    pub fn set_search_term(self, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..self
        }
    }

    pub fn set_sort_by(self, sort_by: SortMode) -> Self {
        Self { sort_by, ..self }
    }

    /// Replace the sort mode from its wire name
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExpenseError::InvalidSortMode`] for an unknown name;
    /// the state is consumed either way, so callers keep their copy if they
    /// need to fall back.
    pub fn set_sort_by_name(self, name: &str) -> ExpenseResult<Self> {
        Ok(self.set_sort_by(name.parse()?))
    }

    /// Replace the lower bound; `None` clears it
    pub fn set_start_date(self, start_date: Option<NaiveDate>) -> Self {
        Self { start_date, ..self }
    }

    /// Replace the upper bound; `None` clears it
    pub fn set_end_date(self, end_date: Option<NaiveDate>) -> Self {
        Self { end_date, ..self }
    }

    /// True when neither a term nor a date bound narrows the list
    pub fn is_unfiltered(&self) -> bool {
        self.term.is_empty() && self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Apply an action to the filter state
pub fn reduce(state: FilterState, action: FilterAction) -> FilterState {
    match action {
        FilterAction::SetSearchTerm(term) => state.set_search_term(term),
        FilterAction::SetSortBy(mode) => state.set_sort_by(mode),
        FilterAction::SetStartDate(date) => state.set_start_date(date),
        FilterAction::SetEndDate(date) => state.set_end_date(date),
        FilterAction::Reset => FilterState::default(),
    }
}
