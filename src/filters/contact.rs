//! Contact list filter state

use serde::{Deserialize, Serialize};

use crate::models::ContactSortMode;

/// Category, search and sort criteria for the contact list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFilterState {
    /// A contact passes if it carries any of these; empty lets every contact through
    pub categories: Vec<String>,
    pub term: String,
    pub sort_by: ContactSortMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFilterAction {
    SetCategories(Vec<String>),
    SetSearchTerm(String),
    SortByNewest,
    SortByOldest,
    SortByNameAscending,
    SortByNameDescending,
}

impl ContactFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_categories(self, categories: &[String]) -> Self {
        Self {
            categories: categories.to_vec(),
            ..self
        }
    }

    pub fn set_search_term(self, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..self
        }
    }

    pub fn set_sort_by(self, sort_by: ContactSortMode) -> Self {
        Self { sort_by, ..self }
    }
}

/// Apply an action to the contact filter state
pub fn reduce_contacts(
    state: ContactFilterState,
    action: ContactFilterAction,
) -> ContactFilterState {
    match action {
        ContactFilterAction::SetCategories(categories) => state.set_categories(&categories),
        ContactFilterAction::SetSearchTerm(term) => state.set_search_term(term),
        ContactFilterAction::SortByNewest => state.set_sort_by(ContactSortMode::ByNewest),
        ContactFilterAction::SortByOldest => state.set_sort_by(ContactSortMode::ByOldest),
        ContactFilterAction::SortByNameAscending => {
            state.set_sort_by(ContactSortMode::ByNameAscending)
        }
        ContactFilterAction::SortByNameDescending => {
            state.set_sort_by(ContactSortMode::ByNameDescending)
        }
    }
}
