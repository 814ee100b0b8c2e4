//! Sort mode selectors for expense and contact lists
//!
//! Both enums are closed. Free text coming from a UI control or the command
//! line is turned into a mode with [`FromStr`], which is the single place an
//! unknown name can be rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// Ordering applied to a filtered expense list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Later dates first
    #[default]
    ByNewest,
    /// Earlier dates first
    ByOldest,
    /// Largest amounts first
    ByAmountDescending,
    /// Smallest amounts first
    ByAmountAscending,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::ByNewest,
        SortMode::ByOldest,
        SortMode::ByAmountDescending,
        SortMode::ByAmountAscending,
    ];

    /// Name used on the wire and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ByNewest => "byNewest",
            Self::ByOldest => "byOldest",
            Self::ByAmountDescending => "byAmountDescending",
            Self::ByAmountAscending => "byAmountAscending",
        }
    }

    /// Human-readable label for a sort drop-down
    pub fn title(&self) -> &'static str {
        match self {
            Self::ByNewest => "By Newest",
            Self::ByOldest => "By Oldest",
            Self::ByAmountDescending => "Amount Descending",
            Self::ByAmountAscending => "Amount Ascending",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ExpenseError::InvalidSortMode(s.to_string()))
    }
}

/// Ordering applied to a filtered contact list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactSortMode {
    #[default]
    ByNewest,
    ByOldest,
    ByNameAscending,
    ByNameDescending,
}

impl ContactSortMode {
    pub const ALL: [ContactSortMode; 4] = [
        ContactSortMode::ByNewest,
        ContactSortMode::ByOldest,
        ContactSortMode::ByNameAscending,
        ContactSortMode::ByNameDescending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ByNewest => "byNewest",
            Self::ByOldest => "byOldest",
            Self::ByNameAscending => "byNameAscending",
            Self::ByNameDescending => "byNameDescending",
        }
    }
}

impl fmt::Display for ContactSortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactSortMode {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ExpenseError::InvalidSortMode(s.to_string()))
    }
}
