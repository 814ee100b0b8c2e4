//! Derived contact view

use std::cmp::Ordering;

use crate::error::ExpenseResult;
use crate::filters::ContactFilterState;
use crate::models::{Contact, ContactSortMode};

use super::matcher::{SearchMode, TermMatcher};

fn by_newest(a: &Contact, b: &Contact) -> Ordering {
    b.created_on.cmp(&a.created_on)
}

fn by_oldest(a: &Contact, b: &Contact) -> Ordering {
    a.created_on.cmp(&b.created_on)
}

fn by_name_ascending(a: &Contact, b: &Contact) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn by_name_descending(a: &Contact, b: &Contact) -> Ordering {
    by_name_ascending(b, a)
}

fn comparator(mode: ContactSortMode) -> fn(&Contact, &Contact) -> Ordering {
    match mode {
        ContactSortMode::ByNewest => by_newest,
        ContactSortMode::ByOldest => by_oldest,
        ContactSortMode::ByNameAscending => by_name_ascending,
        ContactSortMode::ByNameDescending => by_name_descending,
    }
}

fn in_categories(contact: &Contact, wanted: &[String]) -> bool {
    wanted.is_empty()
        || wanted.iter().any(|w| {
            contact
                .categories
                .iter()
                .any(|c| c.to_lowercase() == w.to_lowercase())
        })
}

/// Filter contacts by name and category, then sort
///
/// The term is matched literally against the name. Category matching is
/// any-of and ignores case.
pub fn query_contacts(
    contacts: &[Contact],
    filters: &ContactFilterState,
) -> ExpenseResult<Vec<Contact>> {
    let matcher = TermMatcher::new(&filters.term, SearchMode::Literal)?;

    let mut result: Vec<Contact> = contacts
        .iter()
        .filter(|c| matcher.matches(&c.name))
        .filter(|c| in_categories(c, &filters.categories))
        .cloned()
        .collect();

    result.sort_by(comparator(filters.sort_by));

    tracing::debug!(
        sort_by = %filters.sort_by,
        input = contacts.len(),
        output = result.len(),
        "contact query"
    );

    Ok(result)
}
