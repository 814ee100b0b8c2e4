//! Contact book
//!
//! In-memory registry of contacts with a case-insensitive name index. This
//! is the first half of expense submission: turn whatever the contact field
//! holds into a stored [`Contact`] with a stable [`ContactId`] before an
//! [`crate::models::Expense`] is built.

use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Contact, ContactId, ContactRef};

#[derive(Debug, Default)]
struct ContactIndex {
    by_id: HashMap<ContactId, Contact>,
    /// normalized name -> contact id
    by_name: HashMap<String, ContactId>,
}

impl ContactIndex {
    fn insert(&mut self, contact: Contact) {
        if let Some(old) = self.by_id.get(&contact.id) {
            self.by_name.remove(&Contact::normalize_name(&old.name));
        }
        self.by_name
            .insert(Contact::normalize_name(&contact.name), contact.id);
        self.by_id.insert(contact.id, contact);
    }
}

/// Shared registry of contacts
#[derive(Debug, Default)]
pub struct ContactBook {
    index: RwLock<ContactIndex>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from already known contacts
    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let mut index = ContactIndex::default();
        for contact in contacts {
            index.insert(contact);
        }
        Self {
            index: RwLock::new(index),
        }
    }

    fn read(&self) -> ExpenseResult<RwLockReadGuard<'_, ContactIndex>> {
        self.index
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> ExpenseResult<RwLockWriteGuard<'_, ContactIndex>> {
        self.index
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    pub fn get(&self, id: ContactId) -> ExpenseResult<Option<Contact>> {
        Ok(self.read()?.by_id.get(&id).cloned())
    }

    /// Get a contact by name (case-insensitive, trimmed)
    pub fn get_by_name(&self, name: &str) -> ExpenseResult<Option<Contact>> {
        let index = self.read()?;
        Ok(index
            .by_name
            .get(&Contact::normalize_name(name))
            .and_then(|id| index.by_id.get(id))
            .cloned())
    }

    /// All contacts, ordered by name
    pub fn list(&self) -> ExpenseResult<Vec<Contact>> {
        let mut contacts: Vec<_> = self.read()?.by_id.values().cloned().collect();
        contacts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(contacts)
    }

    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.read()?.by_id.len())
    }

    /// Add a new contact, refusing a name that is already taken
    pub fn create(&self, name: &str, created_on: NaiveDate) -> ExpenseResult<Contact> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ExpenseError::Validation(
                "Contact name cannot be empty".into(),
            ));
        }

        let mut index = self.write()?;
        if index.by_name.contains_key(&Contact::normalize_name(name)) {
            return Err(ExpenseError::Duplicate {
                entity_type: "Contact",
                identifier: name.to_string(),
            });
        }

        let contact = Contact::new(name, created_on);
        index.insert(contact.clone());
        tracing::info!(contact = %contact.id, name = %contact.name, "created contact");
        Ok(contact)
    }

    /// Resolve a contact reference to a stored contact, creating it if needed
    ///
    /// Uses today's local date for a newly created contact.
    pub fn resolve_or_create(&self, contact: &ContactRef) -> ExpenseResult<Contact> {
        self.resolve_or_create_on(contact, Local::now().date_naive())
    }

    /// Resolve a contact reference to a stored contact, creating it if needed
    ///
    /// The returned contact is the book's record, so its name is the stored
    /// spelling rather than the text in the reference.
    ///
    /// - A reference with an ID must name a known contact.
    /// - A reference without one is matched by name; if nothing matches, a
    ///   new contact dated `created_on` is added.
    ///
    /// # Errors
    ///
    /// [`ExpenseError::NotFound`] for an unknown ID, [`ExpenseError::Validation`]
    /// for a blank name.
    pub fn resolve_or_create_on(
        &self,
        contact: &ContactRef,
        created_on: NaiveDate,
    ) -> ExpenseResult<Contact> {
        if let Some(id) = contact.id {
            return self
                .get(id)?
                .ok_or_else(|| ExpenseError::contact_not_found(id.to_string()));
        }

        let name = contact.name.trim();
        if name.is_empty() {
            return Err(ExpenseError::Validation(
                "Contact name cannot be empty".into(),
            ));
        }

        // Check and insert under one write lock so two callers with the
        // same new name end up with one contact.
        let mut index = self.write()?;
        let existing = index
            .by_name
            .get(&Contact::normalize_name(name))
            .and_then(|id| index.by_id.get(id));
        if let Some(found) = existing {
            return Ok(found.clone());
        }

        let created = Contact::new(name, created_on);
        tracing::info!(
            contact = %created.id,
            name = %created.name,
            "created contact while resolving"
        );
        index.insert(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    #[test]
    fn test_resolve_creates_once_by_name() {
        let book = ContactBook::new();

        let first = book
            .resolve_or_create_on(&ContactRef::unresolved("Corner Shop"), day())
            .unwrap();
        let second = book
            .resolve_or_create_on(&ContactRef::unresolved("  corner shop"), day())
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.name, "Corner Shop");
        assert_eq!(book.count().unwrap(), 1);

        let contact = book.get(first.id).unwrap().unwrap();
        assert_eq!(contact, first);
        assert_eq!(contact.created_on, day());
    }

    #[test]
    fn test_resolve_known_id() {
        let known = Contact::new("Landlord", day());
        let book = ContactBook::with_contacts([known.clone()]);

        let resolved = book.resolve_or_create(&known.to_ref()).unwrap();
        assert_eq!(resolved, known);
        assert_eq!(book.count().unwrap(), 1);
    }

    #[test]
    fn test_resolve_known_id_uses_stored_name() {
        let known = Contact::new("Landlord", day());
        let book = ContactBook::with_contacts([known.clone()]);

        let stale = ContactRef::resolved(known.id, "old landlord name");
        let resolved = book.resolve_or_create(&stale).unwrap();
        assert_eq!(resolved.name, "Landlord");
    }

    #[test]
    fn test_resolve_unknown_id_fails() {
        let book = ContactBook::new();
        let stranger = ContactRef::resolved(ContactId::new(), "Stranger");

        let err = book.resolve_or_create(&stranger).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(book.count().unwrap(), 0);
    }

    #[test]
    fn test_resolve_blank_name_fails() {
        let book = ContactBook::new();
        let err = book
            .resolve_or_create(&ContactRef::unresolved("   "))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_rejects_duplicate() {
        let book = ContactBook::new();
        book.create("Gym", day()).unwrap();

        let err = book.create("GYM", day()).unwrap_err();
        assert!(matches!(err, ExpenseError::Duplicate { .. }));
    }

    #[test]
    fn test_list_is_sorted_by_name() {
        let book = ContactBook::new();
        book.create("zoo", day()).unwrap();
        book.create("Apple", day()).unwrap();
        book.create("mango", day()).unwrap();

        let names: Vec<_> = book.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Apple", "mango", "zoo"]);
        assert!(book.get_by_name("MANGO").unwrap().is_some());
    }
}
