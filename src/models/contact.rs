//! Contact model
//!
//! A contact is the other party of an expense. Expenses carry a
//! [`ContactRef`] with the contact's name copied in for display; a ref
//! without an ID has not been resolved against the contact book yet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ContactId;

/// A known contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,

    pub name: String,

    /// Free-form tags used by the contact list filter
    #[serde(default)]
    pub categories: Vec<String>,

    /// Day the contact was first recorded
    pub created_on: NaiveDate,
}

impl Contact {
    /// Create a new contact with a fresh ID
    pub fn new(name: impl Into<String>, created_on: NaiveDate) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            categories: Vec::new(),
            created_on,
        }
    }

    /// Attach categories to the contact
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Normalize a contact name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this contact carries a name (case-insensitive, trimmed)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// Reference to this contact suitable for an expense
    pub fn to_ref(&self) -> ContactRef {
        ContactRef::resolved(self.id, self.name.clone())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Contact as seen from an expense: an optional ID plus the display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,

    pub name: String,
}

impl ContactRef {
    pub fn resolved(id: ContactId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// A name typed into the form that has no contact behind it yet
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.id.is_some()
    }
}
