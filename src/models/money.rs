//! Money type for expense amounts
//!
//! Amounts are stored as a non-negative count of minor currency units
//! (cents) so that sorting and summing never suffer floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// A non-negative monetary amount in minor units
///
/// Serialized as a bare integer. Negative JSON values fail to deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Create an amount from minor units
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create an amount from a signed count, rejecting negatives
    pub fn try_from_cents(cents: i64) -> ExpenseResult<Self> {
        u64::try_from(cents).map(Self).map_err(|_| {
            ExpenseError::Validation(format!("Amount cannot be negative: {}", cents))
        })
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Whole major units (truncated)
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Minor-unit remainder (0-99)
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse amount text as typed into an expense form
    ///
    /// Accepts `0` or an integer without leading zeros, optionally followed
    /// by `.` or `,` and at most two decimal digits: "12", "12.", "12.5",
    /// "12,50", "0.05". Anything else is rejected, including surrounding
    /// whitespace.
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let invalid = || ExpenseError::Validation(format!("Invalid amount: {}", s));

        let (whole, fraction) = match s.find(['.', ',']) {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if whole.len() > 1 && whole.starts_with('0') {
            return Err(invalid());
        }

        let fraction = fraction.unwrap_or("");
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let dollars: u64 = whole.parse().map_err(|_| invalid())?;
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Add two amounts, or `None` if the result does not fit
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts, failing instead of wrapping on overflow
    pub fn total<I>(amounts: I) -> ExpenseResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts.into_iter().try_fold(Self::zero(), |acc, m| {
            acc.checked_add(m).ok_or_else(|| {
                ExpenseError::Validation("Total amount is too large to represent".into())
            })
        })
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
    }

    /// Format as plain decimal text, as an expense form would show it
    pub fn to_decimal_string(&self) -> String {
        self.format_with_symbol("")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}
